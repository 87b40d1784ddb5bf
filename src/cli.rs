//! Command-line surface.
//!
//! stdin is the input stream, stdout the output stream; every flag is a
//! direct pass-through to the wrapped library.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::zlib::{Framing, Strategy};

#[derive(Debug, Parser)]
#[command(name = "zdeflate", version)]
#[command(about = "Compress or decompress a DEFLATE stream between stdin and stdout")]
pub struct Cli {
    /// Decompress instead of compress.
    #[arg(short = 'd', long)]
    pub decompress: bool,

    /// Wrap the stream in the zlib header/checksum envelope instead of raw
    /// DEFLATE.
    #[arg(long)]
    pub zlib: bool,

    /// Compression level, 0 (store) through 9 (best); the library default
    /// when omitted.
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u32).range(0..=9))]
    pub level: Option<u32>,

    /// Compression strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::Default)]
    pub strategy: StrategyArg,

    /// Preset dictionary file, at most 32768 bytes.
    #[arg(long, value_name = "FILE")]
    pub dict: Option<PathBuf>,

    /// Verbose diagnostics on stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn framing(&self) -> Framing {
        if self.zlib {
            Framing::Zlib
        } else {
            Framing::Raw
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Default,
    Filtered,
    HuffmanOnly,
    Rle,
    Fixed,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Default => Strategy::Default,
            StrategyArg::Filtered => Strategy::Filtered,
            StrategyArg::HuffmanOnly => Strategy::HuffmanOnly,
            StrategyArg::Rle => Strategy::Rle,
            StrategyArg::Fixed => Strategy::Fixed,
        }
    }
}
