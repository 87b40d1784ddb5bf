//! Unified error for a single harness run.
//!
//! Every failure is fatal to the invocation; the only handling is a
//! one-line message on stderr and a process exit status, so each variant
//! knows its code.

use std::io;

use thiserror::Error;

use crate::constants::exit_codes;
use crate::dict::DictError;
use crate::zlib::ZlibError;

#[derive(Error, Debug)]
pub enum StreamError {
    /// Failure reading the input stream (Z_ERRNO territory).
    #[error("error reading input: {0}")]
    Read(#[source] io::Error),

    /// Failure writing the output stream (Z_ERRNO territory).
    #[error("error writing output: {0}")]
    Write(#[source] io::Error),

    /// A fatal status code from the wrapped library.
    #[error(transparent)]
    Zlib(#[from] ZlibError),

    /// Preset-dictionary file problem.
    #[error(transparent)]
    Dictionary(#[from] DictError),
}

impl StreamError {
    pub fn exit_code(&self) -> u8 {
        match self {
            StreamError::Read(_) | StreamError::Write(_) => exit_codes::IO,
            StreamError::Zlib(e) => e.exit_code(),
            StreamError::Dictionary(e) => e.exit_code(),
        }
    }
}
