// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::archive::{ArchiveState, ZipArchive};
use crate::codec::{CompressionCodec, DefaultCodec};
use crate::entry::catalog::EntryCatalog;
use crate::error::{Result, ZipError};
use crate::store::file::FileStore;
use crate::store::mem::MemoryStore;
use crate::store::BackingStore;

use std::io::ErrorKind;
use std::path::Path;

/// How an archive on disk is opened for writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Upgrade the archive if the file exists, otherwise create it.
    ReadAdd,
    /// Create a fresh archive, truncating anything already at the path.
    Overwrite,
}

/// A builder for [`ZipArchive`] sessions.
///
/// ```no_run
/// # use zip_session::{ArchiveBuilder, Mode, StoredCodec, ZipError};
/// #
/// # fn run() -> Result<(), ZipError> {
/// let archive = ArchiveBuilder::new().codec(StoredCodec).open_file("./foo.zip", Mode::ReadAdd)?;
/// #   Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveBuilder<C = DefaultCodec> {
    codec: C,
}

impl ArchiveBuilder {
    /// Constructs a new builder using the [`DefaultCodec`].
    pub fn new() -> Self {
        Self { codec: DefaultCodec::default() }
    }
}

impl<C: CompressionCodec> ArchiveBuilder<C> {
    /// Sets the codec sessions built from this builder will use.
    pub fn codec<D: CompressionCodec>(self, codec: D) -> ArchiveBuilder<D> {
        ArchiveBuilder { codec }
    }

    /// Constructs a new, empty, memory-backed archive.
    pub fn create(self) -> ZipArchive<C> {
        let store = BackingStore::Memory(MemoryStore::new());
        ZipArchive::from_parts(ArchiveState::Building, EntryCatalog::new(), store, 0, self.codec, Vec::new())
    }

    /// Copies an existing archive into memory and upgrades it to accept new entries.
    #[tracing::instrument(skip(self, data), fields(length = data.len()))]
    pub fn open_mem(self, data: &[u8]) -> Result<ZipArchive<C>> {
        let store = BackingStore::Memory(MemoryStore::from_slice(data)?);
        self.open(store, ArchiveState::ReadWrite)
    }

    /// Copies an existing archive into memory for queries only.
    #[tracing::instrument(skip(self, data), fields(length = data.len()))]
    pub fn open_mem_read(self, data: &[u8]) -> Result<ZipArchive<C>> {
        let store = BackingStore::Memory(MemoryStore::from_slice(data)?);
        self.open(store, ArchiveState::ReadOnly)
    }

    /// Opens an archive on disk for writing.
    ///
    /// In [`Mode::ReadAdd`], an existing non-empty file is parsed and upgraded, whereas a missing or empty file is
    /// created fresh. In [`Mode::Overwrite`], the file is always created fresh.
    #[tracing::instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn open_file<P: AsRef<Path>>(self, path: P, mode: Mode) -> Result<ZipArchive<C>> {
        let path = path.as_ref();

        let existing = match mode {
            Mode::ReadAdd => match std::fs::metadata(path) {
                Ok(metadata) => metadata.len() > 0,
                Err(err) if err.kind() == ErrorKind::NotFound => false,
                Err(err) => return Err(ZipError::FileStatFailed(err)),
            },
            Mode::Overwrite => false,
        };

        if existing {
            let store = BackingStore::File(FileStore::open(path)?);
            return self.open(store, ArchiveState::ReadWrite);
        }

        let store = BackingStore::File(FileStore::create(path)?);
        Ok(ZipArchive::from_parts(ArchiveState::Building, EntryCatalog::new(), store, 0, self.codec, Vec::new()))
    }

    /// Opens an existing archive on disk for queries only.
    #[tracing::instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn open_file_read<P: AsRef<Path>>(self, path: P) -> Result<ZipArchive<C>> {
        let store = BackingStore::File(FileStore::open_read(path.as_ref())?);
        self.open(store, ArchiveState::ReadOnly)
    }

    fn open(self, store: BackingStore, state: ArchiveState) -> Result<ZipArchive<C>> {
        let layout = crate::read::file(store.cursor())?;

        // New entries are appended over the old central directory, directly after the last payload.
        Ok(ZipArchive::from_parts(state, layout.catalog, store, layout.cd_offset, self.codec, layout.comment))
    }
}
