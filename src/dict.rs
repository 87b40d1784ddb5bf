//! Preset-dictionary file loading.
//!
//! The dictionary seeds the compressor's/decompressor's history window and
//! therefore cannot exceed the library's 32 KiB window cap. Each failure
//! mode keeps its own harness-local exit code so test drivers can tell
//! them apart.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::{exit_codes, MAX_DICT_LEN};

#[derive(Error, Debug)]
pub enum DictError {
    #[error("cannot open dictionary file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot stat dictionary file {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary file size {have} is larger than the max allowed size: {max}")]
    TooLarge { have: u64, max: usize },

    #[error("read error on dictionary file {path}: got {got} bytes, expected {expected}")]
    ShortRead {
        path: PathBuf,
        got: usize,
        expected: usize,
    },

    #[error("read error on dictionary file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DictError {
    pub fn exit_code(&self) -> u8 {
        match self {
            DictError::Open { .. } => exit_codes::DICT_OPEN,
            DictError::Stat { .. } => exit_codes::DICT_STAT,
            DictError::TooLarge { .. } => exit_codes::DICT_TOO_LARGE,
            DictError::ShortRead { .. } | DictError::Read { .. } => exit_codes::DICT_READ,
        }
    }
}

/// Read a preset dictionary, enforcing the window cap before touching the
/// contents.
pub fn load_dictionary(path: &Path) -> Result<Vec<u8>, DictError> {
    let mut file = File::open(path).map_err(|source| DictError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let expected = file
        .metadata()
        .map_err(|source| DictError::Stat {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if expected > MAX_DICT_LEN as u64 {
        return Err(DictError::TooLarge {
            have: expected,
            max: MAX_DICT_LEN,
        });
    }

    let mut dictionary = Vec::with_capacity(expected as usize);
    file.read_to_end(&mut dictionary)
        .map_err(|source| DictError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    if dictionary.len() as u64 != expected {
        return Err(DictError::ShortRead {
            path: path.to_path_buf(),
            got: dictionary.len(),
            expected: expected as usize,
        });
    }

    Ok(dictionary)
}
