//! zdeflate
//!
//! Streaming DEFLATE/zlib compression harness. Pipes a byte stream through
//! the zlib stream API in fixed-size chunks, in either direction, with
//! optional preset-dictionary support. The compression algorithm itself
//! lives entirely in the wrapped library.

// Shared and top level
pub mod constants;
pub mod types;

// Harness modules
pub mod cli;
pub mod dict;
pub mod logger;
pub mod stream;
pub mod zlib;
