//! zlib/deflate.rs
//! Compression-side stream handle.

use std::ffi::{c_int, c_uint};

use libz_rs_sys as ffi;

use crate::zlib::types::{Flush, Framing, Progress, Status, Strategy, ZlibError};

/// Fixed `deflateInit2` parameters: only method zlib defines, and its
/// recommended memory level.
const METHOD_DEFLATED: c_int = ffi::Z_DEFLATED;
const MEM_LEVEL: c_int = 8;

/// An initialized deflate stream. The underlying `z_stream` is boxed so its
/// address stays stable for the library's internal state, and released on
/// drop on every exit path.
pub struct DeflateStream {
    strm: Box<ffi::z_stream>,
}

impl DeflateStream {
    /// Initialize a compressor. `level` of `None` selects the library
    /// default; `framing` picks the zlib envelope or raw DEFLATE output.
    pub fn new(
        level: Option<u32>,
        framing: Framing,
        strategy: Strategy,
    ) -> Result<Self, ZlibError> {
        let mut strm = Box::new(ffi::z_stream::default());
        let level = level.map_or(ffi::Z_DEFAULT_COMPRESSION, |l| l as c_int);
        let ret = unsafe {
            ffi::deflateInit2_(
                strm.as_mut(),
                level,
                METHOD_DEFLATED,
                framing.window_bits(),
                MEM_LEVEL,
                strategy.as_raw(),
                ffi::zlibVersion(),
                core::mem::size_of::<ffi::z_stream>() as c_int,
            )
        };
        if ret != ffi::Z_OK {
            return Err(ZlibError::from_raw(ret));
        }
        Ok(Self { strm })
    }

    /// Seed the history window with a preset dictionary. Valid for both
    /// framings; must be called before any data is compressed.
    pub fn set_dictionary(&mut self, dictionary: &[u8]) -> Result<(), ZlibError> {
        let ret = unsafe {
            ffi::deflateSetDictionary(
                self.strm.as_mut(),
                dictionary.as_ptr(),
                dictionary.len() as c_uint,
            )
        };
        if ret != ffi::Z_OK {
            return Err(ZlibError::from_raw(ret));
        }
        Ok(())
    }

    /// Run one deflate call over `input`, filling `out`. Reports how much
    /// of each buffer the library got through; callers keep feeding the
    /// unconsumed tail and draining until `produced < out.len()`.
    pub fn compress(
        &mut self,
        input: &[u8],
        out: &mut [u8],
        flush: Flush,
    ) -> Result<Progress, ZlibError> {
        self.strm.next_in = input.as_ptr();
        self.strm.avail_in = input.len() as c_uint;
        self.strm.next_out = out.as_mut_ptr();
        self.strm.avail_out = out.len() as c_uint;

        let ret = unsafe { ffi::deflate(self.strm.as_mut(), flush.as_raw()) };

        let consumed = input.len() - self.strm.avail_in as usize;
        let produced = out.len() - self.strm.avail_out as usize;
        let status = Status::from_raw(ret)?;
        Ok(Progress {
            status,
            consumed,
            produced,
        })
    }

    pub fn total_in(&self) -> u64 {
        self.strm.total_in as u64
    }

    pub fn total_out(&self) -> u64 {
        self.strm.total_out as u64
    }
}

impl Drop for DeflateStream {
    fn drop(&mut self) {
        // deflateEnd tolerates any stream state; errors here mean pending
        // output was discarded, which is what abandoning a stream does.
        unsafe { ffi::deflateEnd(self.strm.as_mut()) };
    }
}
