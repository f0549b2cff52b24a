// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! <https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316>
//!
//! The end of central directory record may be followed by a variable-length archive comment. As a result, we
//! cannot assume the record starts 22 bytes before the end of the data - we must locate it ourselves.
//!
//! Rather than seeking backwards one byte at a time and reading a u32 on each step, we read the tail of the data in
//! reverse in fixed-size buffers and linearly search each buffer (again in reverse) for the signature. Consecutive
//! buffers overlap by the signature length minus one, so a signature straddling two reads is still found.

use crate::error::{Result, ZipError};
use crate::spec::consts::{EOCDR_LENGTH, EOCDR_SIGNATURE, SIGNATURE_LENGTH};

use std::io::{Read, Seek, SeekFrom};

/// The buffer size used when locating the EOCDR, equal to 2KiB.
const BUFFER_SIZE: usize = 2048;

/// The smallest possible EOCDR, including its signature.
const EOCDR_MIN_LENGTH: u64 = (SIGNATURE_LENGTH + EOCDR_LENGTH) as u64;

/// The furthest distance from the end of the data at which the EOCDR signature can start.
const EOCDR_MAX_DISTANCE: u64 = EOCDR_MIN_LENGTH + u16::MAX as u64;

/// Locate the `end of central directory record` offset, if one exists.
/// The returned offset excludes the signature (4 bytes).
#[tracing::instrument(skip(reader))]
pub(crate) fn eocdr<R>(mut reader: R) -> Result<u64>
where
    R: Read + Seek,
{
    let length = reader.seek(SeekFrom::End(0)).map_err(ZipError::FileSeekFailed)?;
    if length < EOCDR_MIN_LENGTH {
        return Err(ZipError::NotAnArchive);
    }

    let signature = &EOCDR_SIGNATURE.to_le_bytes();
    let lower_bound = length.saturating_sub(EOCDR_MAX_DISTANCE);
    let mut buffer: [u8; BUFFER_SIZE] = [0; BUFFER_SIZE];

    // The signature must end no later than the fixed-length fields that follow it.
    let mut end = length - EOCDR_LENGTH as u64;

    loop {
        let start = std::cmp::max(end.saturating_sub(BUFFER_SIZE as u64), lower_bound);
        let window = &mut buffer[..(end - start) as usize];

        reader.seek(SeekFrom::Start(start)).map_err(ZipError::FileSeekFailed)?;
        reader.read_exact(window).map_err(crate::utils::map_read_error)?;

        if let Some(match_index) = reverse_search_buffer(window, signature) {
            return Ok(start + (match_index + 1) as u64);
        }

        // If we hit the start of the data or the lower bound, we're unable to locate the EOCDR.
        if start == lower_bound {
            return Err(ZipError::NotAnArchive);
        }

        end = start + (SIGNATURE_LENGTH - 1) as u64;
    }
}

/// A naive reverse linear search along the buffer for the specified signature bytes.
///
/// Returns the index of the final byte of the last occurrence of the signature.
pub(crate) fn reverse_search_buffer(buffer: &[u8], signature: &[u8]) -> Option<usize> {
    'outer: for index in (0..buffer.len()).rev() {
        for (signature_index, signature_byte) in signature.iter().rev().enumerate() {
            if let Some(next_index) = index.checked_sub(signature_index) {
                if buffer[next_index] != *signature_byte {
                    continue 'outer;
                }
            } else {
                break 'outer;
            }
        }
        return Some(index);
    }
    None
}
