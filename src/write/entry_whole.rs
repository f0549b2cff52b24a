// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::codec::CompressionCodec;
use crate::date::ZipDateTime;
use crate::entry::level::CompressionLevel;
use crate::entry::{Entry, EntryKind};
use crate::error::{Result, ZipError};
use crate::spec::consts::{
    LFH_LENGTH, LFH_SIGNATURE, MSDOS_DIRECTORY, NON_ZIP64_MAX_SIZE, SIGNATURE_LENGTH, UNIX_DIRECTORY_MODE,
    UNIX_FILE_MODE,
};
use crate::spec::header::{GeneralPurposeFlag, LocalFileHeader};
use crate::spec::Compression;

use std::borrow::Cow;

/// An entry whose whole payload is known up front, encoded into its local file record.
pub(crate) struct EntryWholeWriter<'a, C: ?Sized> {
    codec: &'a C,
    path: String,
    kind: EntryKind,
    data: &'a [u8],
    level: CompressionLevel,
}

impl<'a, C> EntryWholeWriter<'a, C>
where
    C: CompressionCodec + ?Sized,
{
    pub(crate) fn file(codec: &'a C, path: String, data: &'a [u8], level: CompressionLevel) -> Self {
        Self { codec, path, kind: EntryKind::File, data, level }
    }

    pub(crate) fn directory(codec: &'a C, path: String) -> Self {
        Self { codec, path, kind: EntryKind::Directory, data: &[], level: CompressionLevel::NONE }
    }

    /// Compresses the payload and encodes the local file header followed by that payload.
    ///
    /// Returns the entry as it should be catalogued alongside the record to be placed at `offset`. Nothing is
    /// written anywhere, so a failure here leaves the session untouched.
    pub(crate) fn write(self, offset: u64) -> Result<(Entry, Vec<u8>)> {
        let store = self.level.is_store() || self.data.is_empty() || self.codec.method() == Compression::Stored;
        let (compression, compressed_data) = match store {
            true => (Compression::Stored, Cow::Borrowed(self.data)),
            false => (self.codec.method(), Cow::Owned(self.codec.compress(self.data, self.level)?)),
        };

        let compressed_size = u32::try_from(compressed_data.len()).map_err(|_| ZipError::FileTooLarge)?;
        let uncompressed_size = u32::try_from(self.data.len()).map_err(|_| ZipError::FileTooLarge)?;
        if compressed_size == NON_ZIP64_MAX_SIZE || uncompressed_size == NON_ZIP64_MAX_SIZE {
            return Err(ZipError::FileTooLarge);
        }

        let last_modification_date = ZipDateTime::now();
        let lf_header = LocalFileHeader {
            version: crate::spec::version::as_needed_to_extract(compression, self.kind),
            flags: GeneralPurposeFlag {
                encrypted: false,
                data_descriptor: false,
                filename_unicode: !self.path.is_ascii(),
            },
            compression: compression.into(),
            mod_time: last_modification_date.raw_time(),
            mod_date: last_modification_date.raw_date(),
            crc: crate::codec::crc32(self.codec, self.data),
            compressed_size,
            uncompressed_size,
            file_name_length: self.path.len().try_into().map_err(|_| ZipError::FileNameTooLarge)?,
            extra_field_length: 0,
        };

        let record_length = SIGNATURE_LENGTH + LFH_LENGTH + self.path.len() + compressed_data.len();
        if offset + record_length as u64 >= NON_ZIP64_MAX_SIZE as u64 {
            return Err(ZipError::ArchiveTooLarge);
        }

        let mut record = Vec::new();
        record.try_reserve_exact(record_length)?;
        record.extend_from_slice(&LFH_SIGNATURE.to_le_bytes());
        record.extend_from_slice(&lf_header.as_slice());
        record.extend_from_slice(self.path.as_bytes());
        record.extend_from_slice(&compressed_data);

        let external_file_attribute = match self.kind {
            EntryKind::File => UNIX_FILE_MODE << 16,
            EntryKind::Directory => (UNIX_DIRECTORY_MODE << 16) | MSDOS_DIRECTORY,
        };

        let entry = Entry {
            raw_path: self.path.as_bytes().to_vec(),
            flags: lf_header.flags,
            path: self.path,
            kind: self.kind,
            compression,
            crc32: lf_header.crc,
            uncompressed_size: uncompressed_size.into(),
            compressed_size: compressed_size.into(),
            local_header_offset: offset,
            last_modification_date,
            version_made_by: crate::spec::version::as_made_by(),
            external_file_attribute,
        };

        Ok((entry, record))
    }
}
