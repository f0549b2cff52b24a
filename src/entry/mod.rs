// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod catalog;
pub mod level;

use crate::date::ZipDateTime;
use crate::spec::consts::HOST_UNIX;
use crate::spec::header::GeneralPurposeFlag;
use crate::spec::Compression;

/// Whether an entry holds file data or marks a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Infers the kind of an entry from its path, as ZIP files carry no dedicated flag for it.
    pub fn from_path(path: &str) -> Self {
        match path.ends_with('/') {
            true => EntryKind::Directory,
            false => EntryKind::File,
        }
    }
}

/// Stores information about a ZIP entry.
///
/// Entries are immutable once recorded. They are either created by adding a file or directory to a session, or
/// reconstructed from the central directory of an existing archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) path: String,
    /// The name bytes as recorded in the archive, which may not be valid UTF-8 for parsed entries.
    pub(crate) raw_path: Vec<u8>,
    pub(crate) flags: GeneralPurposeFlag,
    pub(crate) kind: EntryKind,
    pub(crate) compression: Compression,
    pub(crate) crc32: u32,
    pub(crate) uncompressed_size: u64,
    pub(crate) compressed_size: u64,
    pub(crate) local_header_offset: u64,
    pub(crate) last_modification_date: ZipDateTime,
    pub(crate) version_made_by: u16,
    pub(crate) external_file_attribute: u32,
}

impl Entry {
    /// Returns the entry's path.
    ///
    /// # Note
    /// This will return the raw path stored during ZIP creation. If calling this method on entries retrieved from
    /// untrusted ZIP files, the path should be sanitised before being used as a file system path to prevent
    /// [directory travesal attacks](https://en.wikipedia.org/wiki/Directory_traversal_attack).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns whether the entry is a file or a directory.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns whether or not the entry represents a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    /// Returns the entry's compression method.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the entry's CRC32 value.
    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    /// Returns the entry's uncompressed size.
    pub fn uncompressed_size(&self) -> u64 {
        self.uncompressed_size
    }

    /// Returns the entry's compressed size.
    pub fn compressed_size(&self) -> u64 {
        self.compressed_size
    }

    /// Returns the offset of the entry's local file header within the archive.
    pub fn local_header_offset(&self) -> u64 {
        self.local_header_offset
    }

    /// Returns the entry's last modification time & date.
    pub fn last_modification_date(&self) -> &ZipDateTime {
        &self.last_modification_date
    }

    /// Returns the entry's external file attribute.
    pub fn external_file_attribute(&self) -> u32 {
        self.external_file_attribute
    }

    /// Returns the entry's integer-based UNIX permissions.
    ///
    /// # Note
    /// This will return None if the entry wasn't made by a Unix host.
    pub fn unix_permissions(&self) -> Option<u16> {
        if self.version_made_by >> 8 != HOST_UNIX {
            return None;
        }

        Some((self.external_file_attribute >> 16) as u16)
    }
}
