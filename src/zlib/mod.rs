//! zlib/mod.rs
//! Safe, streaming-safe wrappers over the wrapped library's `z_stream` API.
//!
//! The harness never touches the library's pointer plumbing outside this
//! module: slices go in, consumed/produced counts come out, and stream
//! state is released on drop.

pub mod deflate;
pub mod inflate;
pub mod types;

pub use deflate::DeflateStream;
pub use inflate::InflateStream;
pub use types::*;
