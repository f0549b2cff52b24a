// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::codec::CompressionCodec;
use crate::entry::level::CompressionLevel;
use crate::error::{Result, ZipError};
use crate::spec::Compression;

use std::io::{BufRead, Read, Write};

use flate2::{bufread, write};

/// A raw DEFLATE codec backed by `flate2`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeflateCodec;

impl CompressionCodec for DeflateCodec {
    fn method(&self) -> Compression {
        Compression::Deflate
    }

    fn compress(&self, data: &[u8], level: CompressionLevel) -> Result<Vec<u8>> {
        // TODO: Reduce reallocations of Vec by making a lower-bound estimate of the length reduction.
        let mut writer = write::DeflateEncoder::new(Vec::new(), flate2::Compression::new(level.get()));
        writer.write_all(data).map_err(ZipError::CompressionFailed)?;
        writer.finish().map_err(ZipError::CompressionFailed)
    }

    fn decompress(&self, data: &[u8], expected_size: u64) -> Result<Vec<u8>> {
        let expected = usize::try_from(expected_size).map_err(|_| ZipError::AllocationFailed)?;
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(expected)?;

        // Reading one byte past the expected size is enough to detect payloads which inflate too far.
        let mut reader = bufread::DeflateDecoder::new(data).take(expected_size.saturating_add(1));
        reader.read_to_end(&mut buffer).map_err(ZipError::DecompressionFailed)?;

        if buffer.len() as u64 != expected_size {
            return Err(ZipError::UnexpectedDecompressedSize { expected: expected_size, actual: buffer.len() as u64 });
        }

        Ok(buffer)
    }

    fn decoder<'a>(&self, reader: Box<dyn BufRead + 'a>) -> Result<Box<dyn Read + 'a>> {
        Ok(Box::new(bufread::DeflateDecoder::new(reader)))
    }
}
