//! zlib/types.rs
//! Status, flush, strategy, and framing vocabulary plus the fatal error
//! mapping for the wrapped library's return codes.

use std::ffi::c_int;

use libz_rs_sys as ffi;
use thiserror::Error;

use crate::constants::exit_codes;

/// Non-fatal returns from a single `deflate`/`inflate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// The end of the compressed stream was produced or consumed.
    StreamEnd,
    /// The stream declares a preset dictionary that must be installed
    /// before inflate can continue.
    NeedDict,
    /// No progress was possible; feed more input or drain more output.
    BufError,
}

impl Status {
    pub(crate) fn from_raw(code: c_int) -> Result<Self, ZlibError> {
        match code {
            ffi::Z_OK => Ok(Status::Ok),
            ffi::Z_STREAM_END => Ok(Status::StreamEnd),
            ffi::Z_NEED_DICT => Ok(Status::NeedDict),
            ffi::Z_BUF_ERROR => Ok(Status::BufError),
            other => Err(ZlibError::from_raw(other)),
        }
    }
}

/// Flush modes the harness uses. zlib has more; the pump loops only ever
/// run freely or finish the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flush {
    None,
    Finish,
}

impl Flush {
    pub(crate) fn as_raw(self) -> c_int {
        match self {
            Flush::None => ffi::Z_NO_FLUSH,
            Flush::Finish => ffi::Z_FINISH,
        }
    }
}

/// Deflate strategy selection, passed through to `deflateInit2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Default,
    Filtered,
    HuffmanOnly,
    Rle,
    Fixed,
}

impl Strategy {
    pub(crate) fn as_raw(self) -> c_int {
        match self {
            Strategy::Default => ffi::Z_DEFAULT_STRATEGY,
            Strategy::Filtered => ffi::Z_FILTERED,
            Strategy::HuffmanOnly => ffi::Z_HUFFMAN_ONLY,
            Strategy::Rle => ffi::Z_RLE,
            Strategy::Fixed => ffi::Z_FIXED,
        }
    }
}

/// Whether the stream carries the zlib header/adler32 envelope or raw
/// DEFLATE data. Encoded as the sign of the window-bits parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    #[default]
    Raw,
    Zlib,
}

impl Framing {
    pub(crate) fn window_bits(self) -> c_int {
        match self {
            Framing::Zlib => 15,
            Framing::Raw => -15,
        }
    }
}

/// Outcome of one library call: how far it got through the buffers.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    pub status: Status,
    pub consumed: usize,
    pub produced: usize,
}

/// Fatal library status codes. Messages follow the original zlib example
/// programs so downstream test drivers see familiar text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZlibError {
    #[error("invalid or incomplete deflate data")]
    Data,
    #[error("out of memory")]
    Mem,
    #[error("invalid compression level")]
    InvalidParam,
    #[error("zlib version mismatch")]
    VersionMismatch,
    #[error("unknown zlib error number: {0}")]
    Unknown(i32),
}

impl ZlibError {
    pub(crate) fn from_raw(code: c_int) -> Self {
        match code {
            ffi::Z_DATA_ERROR => ZlibError::Data,
            ffi::Z_MEM_ERROR => ZlibError::Mem,
            ffi::Z_STREAM_ERROR => ZlibError::InvalidParam,
            ffi::Z_VERSION_ERROR => ZlibError::VersionMismatch,
            other => ZlibError::Unknown(other),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ZlibError::Data => exit_codes::BAD_DATA,
            ZlibError::Mem => exit_codes::NO_MEMORY,
            ZlibError::InvalidParam => exit_codes::INVALID_PARAM,
            ZlibError::VersionMismatch => exit_codes::VERSION_MISMATCH,
            ZlibError::Unknown(code) => code.unsigned_abs().min(99) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_codes_map_to_variants() {
        assert_eq!(ZlibError::from_raw(ffi::Z_DATA_ERROR), ZlibError::Data);
        assert_eq!(ZlibError::from_raw(ffi::Z_MEM_ERROR), ZlibError::Mem);
        assert_eq!(ZlibError::from_raw(ffi::Z_STREAM_ERROR), ZlibError::InvalidParam);
        assert_eq!(ZlibError::from_raw(ffi::Z_VERSION_ERROR), ZlibError::VersionMismatch);
        assert_eq!(ZlibError::from_raw(-42), ZlibError::Unknown(-42));
    }

    #[test]
    fn recoverable_codes_are_statuses_not_errors() {
        assert_eq!(Status::from_raw(ffi::Z_OK).unwrap(), Status::Ok);
        assert_eq!(Status::from_raw(ffi::Z_STREAM_END).unwrap(), Status::StreamEnd);
        assert_eq!(Status::from_raw(ffi::Z_NEED_DICT).unwrap(), Status::NeedDict);
        assert_eq!(Status::from_raw(ffi::Z_BUF_ERROR).unwrap(), Status::BufError);
    }

    #[test]
    fn exit_codes_mirror_zlib_magnitudes() {
        assert_eq!(ZlibError::Data.exit_code(), 3);
        assert_eq!(ZlibError::Mem.exit_code(), 4);
        assert_eq!(ZlibError::InvalidParam.exit_code(), 2);
        assert_eq!(ZlibError::VersionMismatch.exit_code(), 6);
        assert_eq!(ZlibError::Unknown(-1000).exit_code(), 99);
    }
}
