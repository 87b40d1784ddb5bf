//! A corrupt or truncated stream must surface as a data error, never be
//! silently accepted; bytes after a complete stream are counted, not
//! consumed.

use std::io::Cursor;

use zdeflate::stream::{deflate_stream, inflate_stream, DeflateParams};
use zdeflate::types::StreamError;
use zdeflate::zlib::{Framing, ZlibError};

fn compress(data: &[u8], framing: Framing) -> Vec<u8> {
    let params = DeflateParams {
        framing,
        ..Default::default()
    };
    let mut out = Vec::new();
    deflate_stream(Cursor::new(data), &mut out, &params, None).expect("deflate should succeed");
    out
}

fn inflate_err(compressed: &[u8], framing: Framing) -> StreamError {
    let mut out = Vec::new();
    inflate_stream(Cursor::new(compressed), &mut out, framing, None)
        .expect_err("corrupt stream must not decode")
}

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn bit_flip_mid_stream_is_a_data_error() {
    let mut compressed = compress(&sample(50_000), Framing::Zlib);
    let mid = compressed.len() / 2;
    compressed[mid] ^= 0x20;

    let err = inflate_err(&compressed, Framing::Zlib);
    assert!(matches!(err, StreamError::Zlib(ZlibError::Data)), "{err}");
}

#[test]
fn corrupt_zlib_header_is_a_data_error() {
    let mut compressed = compress(&sample(1024), Framing::Zlib);
    compressed[0] ^= 0xFF;

    let err = inflate_err(&compressed, Framing::Zlib);
    assert!(matches!(err, StreamError::Zlib(ZlibError::Data)), "{err}");
}

#[test]
fn truncated_zlib_stream_is_a_data_error() {
    let compressed = compress(&sample(50_000), Framing::Zlib);
    let truncated = &compressed[..compressed.len() - 5];

    let err = inflate_err(truncated, Framing::Zlib);
    assert!(matches!(err, StreamError::Zlib(ZlibError::Data)), "{err}");
}

#[test]
fn truncated_raw_stream_is_a_data_error() {
    let compressed = compress(&sample(50_000), Framing::Raw);
    let truncated = &compressed[..compressed.len() - 5];

    let err = inflate_err(truncated, Framing::Raw);
    assert!(matches!(err, StreamError::Zlib(ZlibError::Data)), "{err}");
}

#[test]
fn trailing_bytes_are_counted_not_consumed() {
    let data = sample(10_000);
    for framing in [Framing::Raw, Framing::Zlib] {
        let mut compressed = compress(&data, framing);
        compressed.extend_from_slice(b"GARBAGE");

        let mut out = Vec::new();
        let summary = inflate_stream(Cursor::new(&compressed), &mut out, framing, None)
            .expect("stream itself is intact");
        assert_eq!(out, data, "{framing:?}");
        assert_eq!(summary.trailing_bytes, 7, "{framing:?}");
    }
}

#[test]
fn trailing_bytes_are_counted_across_chunks() {
    let data = sample(10_000);
    let mut compressed = compress(&data, Framing::Zlib);
    // Push the junk well past a single 16 KiB read.
    compressed.extend_from_slice(&vec![0xAA; 40_000]);

    let mut out = Vec::new();
    let summary = inflate_stream(Cursor::new(&compressed), &mut out, Framing::Zlib, None)
        .expect("stream itself is intact");
    assert_eq!(out, data);
    assert_eq!(summary.trailing_bytes, 40_000);
}
