//! zlib/inflate.rs
//! Decompression-side stream handle.

use std::ffi::{c_int, c_uint};

use libz_rs_sys as ffi;

use crate::zlib::types::{Framing, Progress, Status, ZlibError};

/// An initialized inflate stream, released on drop.
pub struct InflateStream {
    strm: Box<ffi::z_stream>,
}

impl InflateStream {
    pub fn new(framing: Framing) -> Result<Self, ZlibError> {
        let mut strm = Box::new(ffi::z_stream::default());
        let ret = unsafe {
            ffi::inflateInit2_(
                strm.as_mut(),
                framing.window_bits(),
                ffi::zlibVersion(),
                core::mem::size_of::<ffi::z_stream>() as c_int,
            )
        };
        if ret != ffi::Z_OK {
            return Err(ZlibError::from_raw(ret));
        }
        Ok(Self { strm })
    }

    /// Install a preset dictionary. For raw streams this is legal right
    /// after init; for zlib streams only once inflate has reported
    /// `NeedDict`. A dictionary the stream was not compressed with is
    /// rejected by the library as a data error.
    pub fn set_dictionary(&mut self, dictionary: &[u8]) -> Result<(), ZlibError> {
        let ret = unsafe {
            ffi::inflateSetDictionary(
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

    /// Run one inflate call over `input`, filling `out`. `NeedDict` and
    /// `BufError` come back as statuses for the caller to resolve.
    pub fn decompress(&mut self, input: &[u8], out: &mut [u8]) -> Result<Progress, ZlibError> {
        self.strm.next_in = input.as_ptr();
        self.strm.avail_in = input.len() as c_uint;
        self.strm.next_out = out.as_mut_ptr();
        self.strm.avail_out = out.len() as c_uint;

        let ret = unsafe { ffi::inflate(self.strm.as_mut(), ffi::Z_NO_FLUSH) };

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

impl Drop for InflateStream {
    fn drop(&mut self) {
        unsafe { ffi::inflateEnd(self.strm.as_mut()) };
    }
}
