// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The archive session: a lifecycle state machine over a catalog of entries and a backing store.
//!
//! ### Example
//! ```no_run
//! # use zip_session::{ZipArchive, CompressionLevel, ZipError};
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut archive = ZipArchive::new();
//! archive.add_file("foo.txt", b"This is an example file.", CompressionLevel::DEFAULT)?;
//! archive.add_empty_directory("bar")?;
//!
//! let bytes = archive.finalize()?.into_bytes();
//! #   Ok(())
//! # }
//! ```

pub mod builder;

use crate::codec::{CompressionCodec, DefaultCodec};
use crate::entry::catalog::EntryCatalog;
use crate::entry::level::CompressionLevel;
use crate::entry::Entry;
use crate::error::{Result, ZipError};
use crate::read::EntryReader;
use crate::spec::Compression;
use crate::store::BackingStore;
use crate::utils::read_bytes;
use crate::write::entry_whole::EntryWholeWriter;

use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};

pub use builder::{ArchiveBuilder, Mode};

/// The lifecycle state of a [`ZipArchive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveState {
    /// A fresh archive with no prior data.
    Building,
    /// An existing archive opened for queries only.
    ReadOnly,
    /// An existing archive which has been upgraded to accept new entries.
    ReadWrite,
    /// The archive has been finalized or closed. Nothing further is permitted.
    Finalized,
}

/// What a successfully finalized archive hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizedArchive {
    /// The complete archive bytes of a memory-backed session.
    Memory(Vec<u8>),
    /// The location of a file-backed session's archive, whose handle has been flushed and closed.
    File(PathBuf),
}

impl FinalizedArchive {
    /// Returns the archive bytes if the session was memory-backed.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            FinalizedArchive::Memory(bytes) => Some(bytes),
            FinalizedArchive::File(_) => None,
        }
    }

    /// Returns the archive's path if the session was file-backed.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FinalizedArchive::Memory(_) => None,
            FinalizedArchive::File(path) => Some(path),
        }
    }
}

/// A ZIP archive session over a memory buffer or a file.
///
/// Sessions are constructed via [`ArchiveBuilder`] or the shortcut constructors on `ZipArchive` (which use the
/// [`DefaultCodec`]). Entries are written to the backing store as soon as they're added; the central directory is
/// only written by [`ZipArchive::finalize()`].
pub struct ZipArchive<C = DefaultCodec> {
    state: ArchiveState,
    catalog: EntryCatalog,
    store: Option<BackingStore>,
    /// Where the next local file record (or the central directory) will be written.
    cursor: u64,
    /// The number of entries added during this session, as opposed to those parsed on open.
    pending: usize,
    codec: C,
    comment: Vec<u8>,
}

impl ZipArchive {
    /// Constructs a new, empty, memory-backed archive.
    pub fn new() -> Self {
        ArchiveBuilder::new().create()
    }

    /// Copies an existing archive into memory and upgrades it to accept new entries.
    pub fn open_mem(data: &[u8]) -> Result<Self> {
        ArchiveBuilder::new().open_mem(data)
    }

    /// Copies an existing archive into memory for queries only.
    pub fn open_mem_read(data: &[u8]) -> Result<Self> {
        ArchiveBuilder::new().open_mem_read(data)
    }

    /// Opens an archive on disk for writing, as per the provided [`Mode`].
    pub fn open_file<P: AsRef<Path>>(path: P, mode: Mode) -> Result<Self> {
        ArchiveBuilder::new().open_file(path, mode)
    }

    /// Opens an existing archive on disk for queries only.
    pub fn open_file_read<P: AsRef<Path>>(path: P) -> Result<Self> {
        ArchiveBuilder::new().open_file_read(path)
    }
}

impl Default for ZipArchive {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CompressionCodec> ZipArchive<C> {
    pub(crate) fn from_parts(
        state: ArchiveState,
        catalog: EntryCatalog,
        store: BackingStore,
        cursor: u64,
        codec: C,
        comment: Vec<u8>,
    ) -> Self {
        tracing::debug!(?state, store = store.kind(), entries = catalog.len(), cursor, "opened archive session");
        Self { state, catalog, store: Some(store), cursor, pending: 0, codec, comment }
    }

    /// Returns the session's current lifecycle state.
    pub fn state(&self) -> ArchiveState {
        self.state
    }

    /// Returns the codec this session compresses, decompresses and checksums with.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Returns the archive comment found when an existing archive was opened.
    ///
    /// Comments aren't carried over when the archive is finalized again.
    pub fn comment(&self) -> &[u8] {
        &self.comment
    }

    /// Returns the number of entries currently catalogued.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Returns whether or not no entries are catalogued.
    pub fn is_empty(&self) -> bool {
        self.catalog.len() == 0
    }

    /// Returns whether or not an entry exists at exactly the provided path.
    pub fn has_entry(&self, path: &str) -> bool {
        self.catalog.contains(path)
    }

    /// Returns the entry at exactly the provided path, if any.
    pub fn entry(&self, path: &str) -> Option<&Entry> {
        self.catalog.get(path)
    }

    /// Returns every entry in insertion order, which is the order the central directory is written in.
    pub fn entries(&self) -> Result<&[Entry]> {
        self.store("entries")?;
        Ok(self.catalog.as_slice())
    }

    /// Compresses and writes a file entry.
    ///
    /// A level of [`CompressionLevel::NONE`] stores the data as-is. On failure, neither the catalog nor the
    /// backing store's write position are changed.
    pub fn add_file(&mut self, path: &str, data: &[u8], level: CompressionLevel) -> Result<()> {
        self.writable("add_file")?;

        if self.catalog.contains(path) {
            return Err(ZipError::DuplicateEntry(path.to_owned()));
        }
        if path.is_empty() || path.ends_with('/') {
            return Err(ZipError::InvalidPath(path.to_owned()));
        }

        let (entry, record) = EntryWholeWriter::file(&self.codec, path.to_owned(), data, level).write(self.cursor)?;
        self.commit(entry, record)
    }

    /// Writes an empty directory entry, appending a trailing '/' to the path if it's missing.
    pub fn add_empty_directory(&mut self, path: &str) -> Result<()> {
        self.writable("add_empty_directory")?;

        let path = match path.ends_with('/') {
            true => path.to_owned(),
            false => format!("{path}/"),
        };

        if path == "/" {
            return Err(ZipError::InvalidPath(path));
        }
        if self.catalog.contains(&path) {
            return Err(ZipError::DuplicateEntry(path));
        }

        let (entry, record) = EntryWholeWriter::directory(&self.codec, path).write(self.cursor)?;
        self.commit(entry, record)
    }

    /// Writes an encoded local file record at the cursor and catalogues its entry.
    fn commit(&mut self, entry: Entry, record: Vec<u8>) -> Result<()> {
        let store = self.store.as_mut().ok_or(ZipError::InvalidState { operation: "add_entry", state: self.state })?;
        store.write_tail(self.cursor, &record)?;

        tracing::trace!(path = entry.path(), offset = self.cursor, length = record.len(), "wrote local file record");
        self.cursor += record.len() as u64;
        self.pending += 1;
        self.catalog.insert(entry)
    }

    /// Reads, decompresses and verifies an entry's whole payload.
    pub fn file_contents(&self, path: &str) -> Result<Vec<u8>> {
        let (store, entry) = self.lookup("file_contents", path)?;

        let mut cursor = store.cursor();
        let data_offset = crate::read::data_offset(&mut cursor, entry)?;
        cursor.seek(SeekFrom::Start(data_offset)).map_err(ZipError::FileSeekFailed)?;

        let compressed_size = usize::try_from(entry.compressed_size()).map_err(|_| ZipError::AllocationFailed)?;
        let compressed = read_bytes(&mut cursor, compressed_size)?;

        let data = match entry.compression() {
            Compression::Stored => compressed,
            Compression::Deflate => self.codec.decompress(&compressed, entry.uncompressed_size())?,
        };

        if data.len() as u64 != entry.uncompressed_size() {
            return Err(ZipError::UnexpectedDecompressedSize {
                expected: entry.uncompressed_size(),
                actual: data.len() as u64,
            });
        }

        match crate::codec::crc32(&self.codec, &data) {
            actual if actual == entry.crc32() => Ok(data),
            actual => Err(ZipError::ChecksumMismatch { expected: entry.crc32(), actual }),
        }
    }

    /// Returns a reader over an entry's decompressed payload.
    ///
    /// The reader doesn't verify anything by itself; see [`EntryReader::verify()`] and
    /// [`EntryReader::read_to_end_checked()`].
    pub fn entry_reader(&self, path: &str) -> Result<EntryReader<'_>> {
        let (store, entry) = self.lookup("entry_reader", path)?;
        EntryReader::new(store, entry, &self.codec)
    }

    /// Feeds an entry's decompressed payload to `handler` in chunks of at most `chunk_size` bytes.
    ///
    /// The handler returns `true` to continue or `false` to stop early. Concatenating every chunk yields exactly
    /// what [`ZipArchive::file_contents()`] returns, and the payload is verified once it has been exhausted.
    pub fn file_contents_chunked<F>(&self, path: &str, chunk_size: usize, handler: F) -> Result<()>
    where
        F: FnMut(&[u8]) -> bool,
    {
        if chunk_size == 0 {
            return Err(ZipError::InvalidParameter("chunk size must be greater than zero"));
        }

        let reader = self.entry_reader(path)?;
        crate::read::stream::read_chunked(reader, chunk_size, handler)
    }

    /// Writes the central directory and end of central directory record, then releases the backing store.
    ///
    /// Memory-backed sessions hand back the complete archive bytes. On failure, the session is left in its previous
    /// state and may be finalized again or closed.
    #[tracing::instrument(skip(self), fields(state = ?self.state, entries = self.catalog.len()))]
    pub fn finalize(&mut self) -> Result<FinalizedArchive> {
        self.writable("finalize")?;

        self.write_central_directory().map_err(|err| ZipError::FinalizeFailed(Box::new(err)))?;
        let store = self.store.take().ok_or(ZipError::InvalidState { operation: "finalize", state: self.state })?;

        self.state = ArchiveState::Finalized;
        self.catalog.clear();
        self.pending = 0;

        tracing::debug!(store = store.kind(), "finalized archive");
        Ok(store.into_finalized())
    }

    fn write_central_directory(&mut self) -> Result<()> {
        // Buffer the whole tail so that it's committed with a single write.
        let central_directory = crate::write::central_directory(self.catalog.as_slice(), self.cursor)?;

        let store = self.store.as_mut().ok_or(ZipError::InvalidState { operation: "finalize", state: self.state })?;
        store.write_tail(self.cursor, &central_directory)?;
        store.flush()
    }

    /// Releases the backing store without writing a central directory.
    ///
    /// Entries added during this session are lost, as is the central directory of an upgraded archive if any were
    /// added. Any further use of the session fails.
    pub fn close(&mut self) -> Result<()> {
        if self.state == ArchiveState::Finalized {
            return Err(ZipError::InvalidState { operation: "close", state: self.state });
        }

        if self.pending > 0 {
            tracing::warn!(pending = self.pending, "closing archive without finalizing added entries");
        }

        let store = self.store.take();
        tracing::debug!(state = ?self.state, store = store.as_ref().map(BackingStore::kind), "closed archive");

        self.state = ArchiveState::Finalized;
        self.catalog.clear();
        self.pending = 0;
        Ok(())
    }

    fn store(&self, operation: &'static str) -> Result<&BackingStore> {
        self.store.as_ref().ok_or(ZipError::InvalidState { operation, state: self.state })
    }

    fn writable(&self, operation: &'static str) -> Result<()> {
        match self.state {
            ArchiveState::Building | ArchiveState::ReadWrite => Ok(()),
            state => Err(ZipError::InvalidState { operation, state }),
        }
    }

    fn lookup(&self, operation: &'static str, path: &str) -> Result<(&BackingStore, &Entry)> {
        let store = self.store(operation)?;
        let entry = self.catalog.get(path).ok_or_else(|| ZipError::FileNotFound(path.to_owned()))?;

        Ok((store, entry))
    }
}
