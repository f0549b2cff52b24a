// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing ZIP files.
//!
//! Entries are encoded whole: each local file header is immediately followed by the (possibly compressed) payload,
//! so no data descriptors are ever emitted. The central directory and end of central directory record are encoded
//! together into a single buffer at finalization time, which lets the caller commit them with one write.

pub(crate) mod entry_whole;

use crate::entry::Entry;
use crate::error::{Result, ZipError};
use crate::spec::consts::{CDH_LENGTH, CDH_SIGNATURE, EOCDR_LENGTH, EOCDR_SIGNATURE, SIGNATURE_LENGTH};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader};

/// Encodes one central directory record per entry (in the order given), followed by the end of central directory
/// record, for a central directory starting at `cd_offset`.
#[tracing::instrument(skip(entries), fields(entries = entries.len()))]
pub(crate) fn central_directory(entries: &[Entry], cd_offset: u64) -> Result<Vec<u8>> {
    let num_of_entries = u16::try_from(entries.len()).map_err(|_| ZipError::TooManyFiles)?;

    let length = entries.iter().map(|entry| SIGNATURE_LENGTH + CDH_LENGTH + entry.raw_path.len()).sum::<usize>()
        + SIGNATURE_LENGTH
        + EOCDR_LENGTH;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(length)?;

    for entry in entries {
        let header = CentralDirectoryRecord {
            v_made_by: entry.version_made_by,
            v_needed: crate::spec::version::as_needed_to_extract(entry.compression(), entry.kind()),
            flags: entry.flags,
            compression: entry.compression().into(),
            mod_time: entry.last_modification_date().raw_time(),
            mod_date: entry.last_modification_date().raw_date(),
            crc: entry.crc32(),
            compressed_size: entry.compressed_size().try_into().map_err(|_| ZipError::FileTooLarge)?,
            uncompressed_size: entry.uncompressed_size().try_into().map_err(|_| ZipError::FileTooLarge)?,
            file_name_length: entry.raw_path.len().try_into().map_err(|_| ZipError::FileNameTooLarge)?,
            extra_field_length: 0,
            file_comment_length: 0,
            disk_start: 0,
            inter_attr: 0,
            exter_attr: entry.external_file_attribute(),
            lh_offset: entry.local_header_offset().try_into().map_err(|_| ZipError::ArchiveTooLarge)?,
        };

        buffer.extend_from_slice(&CDH_SIGNATURE.to_le_bytes());
        buffer.extend_from_slice(&header.as_slice());
        buffer.extend_from_slice(&entry.raw_path);
    }

    let central_directory_size = buffer.len() as u64;
    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: num_of_entries,
        num_of_entries,
        size_cent_dir: central_directory_size.try_into().map_err(|_| ZipError::ArchiveTooLarge)?,
        cent_dir_offset: cd_offset.try_into().map_err(|_| ZipError::ArchiveTooLarge)?,
        file_comm_length: 0,
    };

    buffer.extend_from_slice(&EOCDR_SIGNATURE.to_le_bytes());
    buffer.extend_from_slice(&header.as_slice());

    Ok(buffer)
}
