// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The compression and checksum boundary of this crate.
//!
//! Archive sessions never touch an entropy coder directly. Entries written at a non-zero [`CompressionLevel`] are
//! handed to the session's [`CompressionCodec`], which decides the method they're recorded with via
//! [`CompressionCodec::method()`]. Stored entries bypass the codec entirely.
//!
//! Two implementations are provided:
//! - [`StoredCodec`], which never compresses and refuses to inflate. Useful for exercising the container format alone.
//! - [`DeflateCodec`], backed by `flate2` (requires the `deflate` feature).

#[cfg(feature = "deflate")]
pub mod deflate;

#[cfg(feature = "deflate")]
pub use deflate::DeflateCodec;

use crate::entry::level::CompressionLevel;
use crate::error::{Result, ZipError};
use crate::spec::Compression;

use std::io::{BufRead, Read};

/// The codec used by sessions when none is chosen explicitly.
#[cfg(feature = "deflate")]
pub type DefaultCodec = DeflateCodec;

/// The codec used by sessions when none is chosen explicitly.
#[cfg(not(feature = "deflate"))]
pub type DefaultCodec = StoredCodec;

/// A compressor, decompressor and checksum primitive for entry payloads.
pub trait CompressionCodec {
    /// Returns the compression method that [`CompressionCodec::compress()`] produces.
    ///
    /// Returning [`Compression::Stored`] causes every entry to be stored regardless of its requested level.
    fn method(&self) -> Compression;

    /// Compresses a whole payload at the given level.
    fn compress(&self, data: &[u8], level: CompressionLevel) -> Result<Vec<u8>>;

    /// Decompresses a whole payload which is expected to expand to `expected_size` bytes.
    fn decompress(&self, data: &[u8], expected_size: u64) -> Result<Vec<u8>>;

    /// Wraps a bounded reader over compressed bytes with an incremental decompressor.
    fn decoder<'a>(&self, reader: Box<dyn BufRead + 'a>) -> Result<Box<dyn Read + 'a>>;

    /// Returns a fresh incremental CRC32 hasher.
    ///
    /// Every checksum a session computes, whether over a whole payload or while streaming, goes through this hasher.
    fn crc32_hasher(&self) -> Box<dyn Crc32Hasher> {
        Box::new(crc32fast::Hasher::new())
    }
}

/// An incremental CRC32 computation.
pub trait Crc32Hasher {
    /// Feeds more bytes into the hash.
    fn update(&mut self, data: &[u8]);

    /// Returns the hash of all bytes fed so far.
    fn finalize(&self) -> u32;
}

impl Crc32Hasher for crc32fast::Hasher {
    fn update(&mut self, data: &[u8]) {
        crc32fast::Hasher::update(self, data)
    }

    fn finalize(&self) -> u32 {
        crc32fast::Hasher::finalize(self.clone())
    }
}

/// Computes the CRC32 of a whole payload with the codec's hasher.
pub(crate) fn crc32<C: CompressionCodec + ?Sized>(codec: &C, data: &[u8]) -> u32 {
    let mut hasher = codec.crc32_hasher();
    hasher.update(data);
    hasher.finalize()
}

impl<C: CompressionCodec + ?Sized> CompressionCodec for Box<C> {
    fn method(&self) -> Compression {
        (**self).method()
    }

    fn compress(&self, data: &[u8], level: CompressionLevel) -> Result<Vec<u8>> {
        (**self).compress(data, level)
    }

    fn decompress(&self, data: &[u8], expected_size: u64) -> Result<Vec<u8>> {
        (**self).decompress(data, expected_size)
    }

    fn decoder<'a>(&self, reader: Box<dyn BufRead + 'a>) -> Result<Box<dyn Read + 'a>> {
        (**self).decoder(reader)
    }

    fn crc32_hasher(&self) -> Box<dyn Crc32Hasher> {
        (**self).crc32_hasher()
    }
}

/// A codec which only ever stores data.
#[derive(Debug, Default, Clone, Copy)]
pub struct StoredCodec;

impl CompressionCodec for StoredCodec {
    fn method(&self) -> Compression {
        Compression::Stored
    }

    fn compress(&self, data: &[u8], _: CompressionLevel) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(data.len())?;
        buffer.extend_from_slice(data);
        Ok(buffer)
    }

    fn decompress(&self, _: &[u8], _: u64) -> Result<Vec<u8>> {
        Err(ZipError::CompressionNotSupported(Compression::Deflate.into()))
    }

    fn decoder<'a>(&self, _: Box<dyn BufRead + 'a>) -> Result<Box<dyn Read + 'a>> {
        Err(ZipError::CompressionNotSupported(Compression::Deflate.into()))
    }
}
