// Copyright (c) 2022-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports reading ZIP files.
//!
//! Parsing starts from the end of the data: the end of central directory record is located, the central directory
//! it points to is read sequentially, and one [`Entry`] is reconstructed per record. Local file headers are only
//! consulted when an entry's payload is extracted.

pub(crate) mod io;
pub(crate) mod stream;

pub use io::entry::EntryReader;

use crate::date::ZipDateTime;
use crate::entry::catalog::EntryCatalog;
use crate::entry::{Entry, EntryKind};
use crate::error::{Result, ZipError};
use crate::spec::consts::{
    CDH_SIGNATURE, LFH_LENGTH, LFH_SIGNATURE, NON_ZIP64_MAX_SIZE, SIGNATURE_LENGTH, ZIP64_EOCDL_SIGNATURE,
};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, LocalFileHeader};
use crate::spec::Compression;
use crate::utils::{assert_signature, map_read_error, read_bytes};

use std::io::{Read, Seek, SeekFrom};

/// The length of the ZIP64 end of central directory locator, excluding its signature.
const ZIP64_EOCDL_LENGTH: u64 = 16;

/// The structure of an existing archive, as recovered from its trailing records.
pub(crate) struct ArchiveLayout {
    pub(crate) catalog: EntryCatalog,
    /// Where the central directory starts, which is also where the last entry's payload ends.
    pub(crate) cd_offset: u64,
    pub(crate) comment: Vec<u8>,
}

#[tracing::instrument(skip(reader))]
pub(crate) fn file<R>(mut reader: R) -> Result<ArchiveLayout>
where
    R: Read + Seek,
{
    // First find and parse the EOCDR.
    let eocdr_offset = io::locator::eocdr(&mut reader)?;
    let signature_offset = eocdr_offset - SIGNATURE_LENGTH as u64;

    reader.seek(SeekFrom::Start(eocdr_offset)).map_err(ZipError::FileSeekFailed)?;
    let eocdr = EndOfCentralDirectoryHeader::from_reader(&mut reader)?;

    // Some writers truncate the comment, so take whatever is present rather than failing.
    let mut comment = Vec::new();
    (&mut reader).take(eocdr.file_comm_length.into()).read_to_end(&mut comment).map_err(map_read_error)?;

    if is_zip64(&mut reader, signature_offset)? {
        return Err(ZipError::FeatureNotSupported("ZIP64 archives"));
    }

    // Outdated feature so unlikely to ever make it into this crate.
    if eocdr.disk_num != eocdr.start_cent_dir_disk || eocdr.num_of_entries != eocdr.num_of_entries_disk {
        return Err(ZipError::FeatureNotSupported("spanned/split archives"));
    }

    let cd_offset = u64::from(eocdr.cent_dir_offset);
    let cd_end = cd_offset + u64::from(eocdr.size_cent_dir);
    if cd_end > signature_offset {
        return Err(ZipError::CorruptHeader("central directory overlaps the end of central directory record"));
    }

    // Read the whole central directory at once to avoid lots of small reads against the store.
    reader.seek(SeekFrom::Start(cd_offset)).map_err(ZipError::FileSeekFailed)?;
    let directory = read_bytes(&mut reader, eocdr.size_cent_dir as usize)?;
    let catalog = cd(&directory[..], eocdr.num_of_entries, cd_offset)?;

    tracing::debug!(entries = catalog.len(), cd_offset, "parsed central directory");
    Ok(ArchiveLayout { catalog, cd_offset, comment })
}

/// Checks the bytes directly preceding the EOCDR for a ZIP64 end of central directory locator.
fn is_zip64<R>(reader: &mut R, signature_offset: u64) -> Result<bool>
where
    R: Read + Seek,
{
    let Some(offset) = signature_offset.checked_sub(ZIP64_EOCDL_LENGTH + SIGNATURE_LENGTH as u64) else {
        return Ok(false);
    };

    reader.seek(SeekFrom::Start(offset)).map_err(ZipError::FileSeekFailed)?;
    let mut buffer = [0; SIGNATURE_LENGTH];
    reader.read_exact(&mut buffer).map_err(map_read_error)?;

    Ok(u32::from_le_bytes(buffer) == ZIP64_EOCDL_SIGNATURE)
}

pub(crate) fn cd<R>(mut reader: R, num_of_entries: u16, cd_offset: u64) -> Result<EntryCatalog>
where
    R: Read,
{
    let mut catalog = EntryCatalog::with_capacity(num_of_entries.into());

    for _ in 0..num_of_entries {
        let entry = cd_record(&mut reader)?;

        if entry.local_header_offset() >= cd_offset {
            return Err(ZipError::CorruptHeader("local file header offset points past the central directory"));
        }

        catalog.insert(entry)?;
    }

    Ok(catalog)
}

pub(crate) fn cd_record<R>(mut reader: R) -> Result<Entry>
where
    R: Read,
{
    assert_signature(&mut reader, CDH_SIGNATURE)?;

    let header = CentralDirectoryRecord::from_reader(&mut reader)?;
    let filename_basic = read_bytes(&mut reader, header.file_name_length.into())?;
    let compression = Compression::try_from(header.compression)?;

    // Neither the extra fields nor the comment carry anything this crate interprets.
    read_bytes(&mut reader, usize::from(header.extra_field_length) + usize::from(header.file_comment_length))?;

    if header.flags.encrypted {
        return Err(ZipError::FeatureNotSupported("encryption"));
    }
    if header.compressed_size == NON_ZIP64_MAX_SIZE
        || header.uncompressed_size == NON_ZIP64_MAX_SIZE
        || header.lh_offset == NON_ZIP64_MAX_SIZE
    {
        return Err(ZipError::FeatureNotSupported("ZIP64 entries"));
    }

    let raw_path = filename_basic.clone();
    let path = detect_path(filename_basic, header.flags.filename_unicode);
    if path.is_empty() {
        return Err(ZipError::InvalidPath(path));
    }

    Ok(Entry {
        kind: EntryKind::from_path(&path),
        path,
        raw_path,
        flags: header.flags,
        compression,
        crc32: header.crc,
        uncompressed_size: header.uncompressed_size.into(),
        compressed_size: header.compressed_size.into(),
        local_header_offset: header.lh_offset.into(),
        last_modification_date: ZipDateTime::from_raw(header.mod_date, header.mod_time),
        version_made_by: header.v_made_by,
        external_file_attribute: header.exter_attr,
    })
}

/// Reads an entry's local file header and returns the offset at which its payload starts.
pub(crate) fn data_offset<R>(mut reader: R, entry: &Entry) -> Result<u64>
where
    R: Read + Seek,
{
    reader.seek(SeekFrom::Start(entry.local_header_offset())).map_err(ZipError::FileSeekFailed)?;
    assert_signature(&mut reader, LFH_SIGNATURE)?;

    let header = LocalFileHeader::from_reader(&mut reader)?;
    let header_size = (SIGNATURE_LENGTH + LFH_LENGTH) as u64
        + u64::from(header.file_name_length)
        + u64::from(header.extra_field_length);

    Ok(entry.local_header_offset() + header_size)
}

fn detect_path(basic: Vec<u8>, basic_is_utf8: bool) -> String {
    match String::from_utf8(basic) {
        Ok(path) => path,
        Err(error) => {
            // Do not fail the whole archive over a legacy-encoded name; it'll simply never match a lookup.
            tracing::warn!(flagged_utf8 = basic_is_utf8, "entry path is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(error.as_bytes()).into_owned()
        }
    }
}
