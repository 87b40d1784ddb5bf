/// Fixed buffer size for the read → (de)compress → write loop.
pub const CHUNK_SIZE: usize = 16 * 1024;

/// zlib caps preset dictionaries at its 32 KiB history window.
pub const MAX_DICT_LEN: usize = 32 * 1024;

/// Process exit codes. The library's negative status codes are reported as
/// their magnitudes; codes at 100 and above are harness-local.
pub mod exit_codes {
    pub const OK: u8 = 0;
    /// Z_ERRNO: failure reading stdin or writing stdout.
    pub const IO: u8 = 1;
    /// Z_STREAM_ERROR: invalid parameter passed to the library.
    pub const INVALID_PARAM: u8 = 2;
    /// Z_DATA_ERROR: corrupt or truncated compressed stream.
    pub const BAD_DATA: u8 = 3;
    /// Z_MEM_ERROR.
    pub const NO_MEMORY: u8 = 4;
    /// Z_VERSION_ERROR: header/runtime library mismatch.
    pub const VERSION_MISMATCH: u8 = 6;

    pub const DICT_STAT: u8 = 100;
    pub const DICT_TOO_LARGE: u8 = 101;
    pub const DICT_READ: u8 = 102;
    pub const DICT_OPEN: u8 = 103;
    pub const USAGE: u8 = 104;
}
