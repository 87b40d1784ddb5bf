//! Fixed-size chunked pump loops between a reader and a writer.
//!
//! Both directions follow the same discipline: fill a 16 KiB input buffer,
//! hand it to the stream handle, and drain 16 KiB output buffers for as
//! long as the library keeps filling them completely. The library owns all
//! stream state; these loops own only the buffers.

use std::io::{self, Read, Write};

use crate::constants::CHUNK_SIZE;
use crate::types::StreamError;
use crate::zlib::{DeflateStream, Flush, Framing, InflateStream, Status, Strategy, ZlibError};

/// Compression-side knobs, passed through to the library untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeflateParams {
    /// 0–9, or `None` for the library default.
    pub level: Option<u32>,
    pub strategy: Strategy,
    pub framing: Framing,
}

/// Byte totals for a completed run, from the library's own counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    pub bytes_in: u64,
    pub bytes_out: u64,
    /// Input bytes left over after the end of the compressed stream
    /// (inflate only; always zero for deflate).
    pub trailing_bytes: u64,
}

/// Compress `src` to `dst` until EOF on `src`.
///
/// A preset dictionary, when given, is installed before any data flows, for
/// both framings. Empty input yields a minimal valid stream.
pub fn deflate_stream<R: Read, W: Write>(
    mut src: R,
    mut dst: W,
    params: &DeflateParams,
    dictionary: Option<&[u8]>,
) -> Result<StreamSummary, StreamError> {
    let mut stream = DeflateStream::new(params.level, params.framing, params.strategy)?;
    if let Some(dict) = dictionary {
        stream.set_dictionary(dict)?;
    }

    let mut inbuf = vec![0u8; CHUNK_SIZE];
    let mut outbuf = vec![0u8; CHUNK_SIZE];

    loop {
        let filled = read_full(&mut src, &mut inbuf).map_err(StreamError::Read)?;
        // A short fill is the only way read_full stops early, so it marks EOF.
        let flush = if filled < CHUNK_SIZE {
            Flush::Finish
        } else {
            Flush::None
        };

        let mut pending = &inbuf[..filled];
        let mut last = Status::Ok;
        loop {
            let step = stream.compress(pending, &mut outbuf, flush)?;
            pending = &pending[step.consumed..];
            dst.write_all(&outbuf[..step.produced])
                .map_err(StreamError::Write)?;
            last = step.status;
            if step.produced < outbuf.len() {
                break;
            }
        }
        // deflate consumes all input whenever it leaves output space.
        debug_assert!(pending.is_empty());

        if flush == Flush::Finish {
            debug_assert_eq!(last, Status::StreamEnd);
            break;
        }
    }

    dst.flush().map_err(StreamError::Write)?;
    Ok(StreamSummary {
        bytes_in: stream.total_in(),
        bytes_out: stream.total_out(),
        trailing_bytes: 0,
    })
}

/// Decompress `src` to `dst` until the compressed stream ends.
///
/// EOF before the stream's end marker is a data error, as is a stream that
/// demands a dictionary the caller did not supply. Input past the end
/// marker is counted, not consumed into the output.
pub fn inflate_stream<R: Read, W: Write>(
    mut src: R,
    mut dst: W,
    framing: Framing,
    dictionary: Option<&[u8]>,
) -> Result<StreamSummary, StreamError> {
    let mut stream = InflateStream::new(framing)?;
    // Raw streams carry no dictionary id, so a preset dictionary goes in up
    // front; zlib streams request theirs via NeedDict.
    if framing == Framing::Raw {
        if let Some(dict) = dictionary {
            stream.set_dictionary(dict)?;
        }
    }

    let mut inbuf = vec![0u8; CHUNK_SIZE];
    let mut outbuf = vec![0u8; CHUNK_SIZE];
    let mut leftover: usize = 0;
    let mut finished = false;

    'read: loop {
        let filled = read_full(&mut src, &mut inbuf).map_err(StreamError::Read)?;
        if filled == 0 {
            break;
        }

        let mut pending = &inbuf[..filled];
        loop {
            let step = stream.decompress(pending, &mut outbuf)?;
            pending = &pending[step.consumed..];

            if step.status == Status::NeedDict {
                let dict = dictionary.ok_or(ZlibError::Data)?;
                stream.set_dictionary(dict)?;
                // Nothing was produced; retry with the remaining input.
                continue;
            }

            dst.write_all(&outbuf[..step.produced])
                .map_err(StreamError::Write)?;

            if step.status == Status::StreamEnd {
                leftover = pending.len();
                finished = true;
                break 'read;
            }
            if step.produced < outbuf.len() {
                // Also covers BufError: no progress until more input arrives.
                break;
            }
        }
    }

    if !finished {
        return Err(ZlibError::Data.into());
    }

    let trailing =
        leftover as u64 + count_remaining(&mut src).map_err(StreamError::Read)?;

    dst.flush().map_err(StreamError::Write)?;
    Ok(StreamSummary {
        bytes_in: stream.total_in(),
        bytes_out: stream.total_out(),
        trailing_bytes: trailing,
    })
}

/// Fill `buf` completely unless EOF arrives first; returns bytes read.
/// Short fills therefore always mean EOF, which substitutes for C's feof.
fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Drain the rest of a reader, counting but discarding the bytes.
fn count_remaining<R: Read>(r: &mut R) -> io::Result<u64> {
    let mut sink = [0u8; 512];
    let mut total = 0u64;
    loop {
        match r.read(&mut sink) {
            Ok(0) => return Ok(total),
            Ok(n) => total += n as u64,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stutter<'a>(&'a [u8]);

    // Returns at most two bytes per call to exercise the fill loop.
    impl Read for Stutter<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.0.len().min(buf.len()).min(2);
            buf[..n].copy_from_slice(&self.0[..n]);
            self.0 = &self.0[n..];
            Ok(n)
        }
    }

    #[test]
    fn read_full_rides_out_short_reads() {
        let mut buf = [0u8; 8];
        let mut src = Stutter(b"abcdefgh_tail");
        assert_eq!(read_full(&mut src, &mut buf).unwrap(), 8);
        assert_eq!(&buf, b"abcdefgh");
    }

    #[test]
    fn read_full_short_fill_means_eof() {
        let mut buf = [0u8; 8];
        let mut src = Stutter(b"abc");
        assert_eq!(read_full(&mut src, &mut buf).unwrap(), 3);
    }

    #[test]
    fn count_remaining_drains_everything() {
        let mut src = Stutter(&[7u8; 1500]);
        assert_eq!(count_remaining(&mut src).unwrap(), 1500);
    }
}
