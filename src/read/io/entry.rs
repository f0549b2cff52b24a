// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::codec::CompressionCodec;
use crate::entry::Entry;
use crate::error::{Result, ZipError};
use crate::read::io::hashed::HashedReader;
use crate::spec::Compression;
use crate::store::BackingStore;

use std::io::{Read, Seek, SeekFrom, Take};

/// A ZIP entry reader which may implement decompression.
///
/// The reader is bounded to the entry's payload within the backing store, and yields at most one byte more than the
/// entry's recorded uncompressed size so that over-long payloads can be detected by [`EntryReader::verify()`].
pub struct EntryReader<'a> {
    reader: HashedReader<Take<Box<dyn Read + 'a>>>,
    entry: &'a Entry,
    read: u64,
}

impl<'a> EntryReader<'a> {
    /// Constructs a new entry reader positioned at the start of the entry's payload.
    pub(crate) fn new<C>(store: &'a BackingStore, entry: &'a Entry, codec: &C) -> Result<Self>
    where
        C: CompressionCodec + ?Sized,
    {
        let mut cursor = store.cursor();
        let data_offset = crate::read::data_offset(&mut cursor, entry)?;
        cursor.seek(SeekFrom::Start(data_offset)).map_err(ZipError::FileSeekFailed)?;

        let bounded = cursor.take(entry.compressed_size());
        let decoder: Box<dyn Read + 'a> = match entry.compression() {
            Compression::Stored => Box::new(bounded),
            Compression::Deflate => codec.decoder(Box::new(bounded))?,
        };

        let limit = entry.uncompressed_size().saturating_add(1);
        Ok(Self { reader: HashedReader::new(decoder.take(limit), codec.crc32_hasher()), entry, read: 0 })
    }

    /// Returns the entry this reader extracts.
    pub fn entry(&self) -> &Entry {
        self.entry
    }

    /// Returns the number of decompressed bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.read
    }

    /// Computes and returns the CRC32 hash of bytes read by this reader so far.
    ///
    /// This hash should only be computed once EOF has been reached.
    pub fn compute_hash(&self) -> u32 {
        self.reader.compute_hash()
    }

    /// Verifies the size and CRC32 value of the bytes read against those recorded for the entry.
    ///
    /// This should only be called once EOF has been reached.
    pub fn verify(&mut self) -> Result<()> {
        if self.read != self.entry.uncompressed_size() {
            return Err(ZipError::UnexpectedDecompressedSize {
                expected: self.entry.uncompressed_size(),
                actual: self.read,
            });
        }

        match self.compute_hash() {
            actual if actual == self.entry.crc32() => Ok(()),
            actual => Err(ZipError::ChecksumMismatch { expected: self.entry.crc32(), actual }),
        }
    }

    /// Reads all bytes until EOF has been reached, appending them to buf, and verifies the size and CRC32 values.
    ///
    /// This is a helper function synonymous to [`Read::read_to_end()`].
    pub fn read_to_end_checked(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        let remaining = usize::try_from(self.entry.uncompressed_size().saturating_sub(self.read))
            .map_err(|_| ZipError::AllocationFailed)?;
        buf.try_reserve(remaining)?;

        let read = self.read_to_end(buf).map_err(crate::read::io::map_entry_error)?;
        self.verify()?;

        Ok(read)
    }
}

impl Read for EntryReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let read = self.reader.read(buf)?;
        self.read += read as u64;

        Ok(read)
    }
}
