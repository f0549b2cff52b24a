// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The byte-addressable media an archive session reads from and writes to.
//!
//! A [`BackingStore`] is either an owned, growable buffer or an open file handle. Both expose the same three
//! operations: a seekable read cursor, a tail rewrite (truncate everything past an offset, then append), and flushing.

pub(crate) mod file;
pub(crate) mod mem;

use crate::archive::FinalizedArchive;
use crate::error::Result;

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read, Seek, SeekFrom};

use file::FileStore;
use mem::MemoryStore;

pub(crate) enum BackingStore {
    Memory(MemoryStore),
    File(FileStore),
}

impl BackingStore {
    /// Returns a new read cursor positioned at the start of the stored data.
    pub(crate) fn cursor(&self) -> StoreCursor<'_> {
        match self {
            BackingStore::Memory(inner) => StoreCursor::Memory(inner.cursor()),
            BackingStore::File(inner) => StoreCursor::File(inner.cursor()),
        }
    }

    /// Replaces everything from `offset` onwards with `data`.
    ///
    /// On failure, no bytes before `offset` have been touched.
    pub(crate) fn write_tail(&mut self, offset: u64, data: &[u8]) -> Result<()> {
        match self {
            BackingStore::Memory(inner) => inner.write_tail(offset, data),
            BackingStore::File(inner) => inner.write_tail(offset, data),
        }
    }

    /// Commits all writes to the underlying medium.
    pub(crate) fn flush(&mut self) -> Result<()> {
        match self {
            BackingStore::Memory(_) => Ok(()),
            BackingStore::File(inner) => inner.sync(),
        }
    }

    /// Releases the store, handing back its contents or location.
    pub(crate) fn into_finalized(self) -> FinalizedArchive {
        match self {
            BackingStore::Memory(inner) => FinalizedArchive::Memory(inner.into_inner()),
            BackingStore::File(inner) => FinalizedArchive::File(inner.into_path()),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            BackingStore::Memory(_) => "memory",
            BackingStore::File(_) => "file",
        }
    }
}

/// A seekable, buffered read cursor over a [`BackingStore`].
///
/// The cursor borrows the store, so it (and any reader layered on top of it) is released as soon as it goes out of
/// scope, on every exit path.
pub(crate) enum StoreCursor<'a> {
    Memory(Cursor<&'a [u8]>),
    File(BufReader<&'a File>),
}

impl Read for StoreCursor<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            StoreCursor::Memory(inner) => inner.read(buf),
            StoreCursor::File(inner) => inner.read(buf),
        }
    }
}

impl BufRead for StoreCursor<'_> {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        match self {
            StoreCursor::Memory(inner) => inner.fill_buf(),
            StoreCursor::File(inner) => inner.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            StoreCursor::Memory(inner) => inner.consume(amt),
            StoreCursor::File(inner) => inner.consume(amt),
        }
    }
}

impl Seek for StoreCursor<'_> {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        match self {
            StoreCursor::Memory(inner) => inner.seek(pos),
            StoreCursor::File(inner) => inner.seek(pos),
        }
    }
}
