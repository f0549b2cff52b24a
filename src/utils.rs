// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

use std::io::{ErrorKind, Read};

/// Read and return a dynamic length vector of bytes from a reader which impls Read.
pub(crate) fn read_bytes<R: Read>(reader: &mut R, length: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(length)?;
    reader.take(length as u64).read_to_end(&mut buffer).map_err(map_read_error)?;

    if buffer.len() != length {
        return Err(ZipError::CorruptHeader("record extends beyond the end of the archive"));
    }

    Ok(buffer)
}

/// Assert that the next four-byte signature read by a reader which impls Read matches the expected signature.
pub(crate) fn assert_signature<R: Read>(reader: &mut R, expected: u32) -> Result<()> {
    let mut buffer = [0; 4];
    reader.read_exact(&mut buffer).map_err(map_read_error)?;

    match u32::from_le_bytes(buffer) {
        actual if actual == expected => Ok(()),
        actual => Err(ZipError::UnexpectedHeaderError(actual, expected)),
    }
}

/// Maps an error raised whilst reading structural records.
///
/// Running out of data mid-record means the archive itself is truncated, anything else is an I/O failure.
pub(crate) fn map_read_error(error: std::io::Error) -> ZipError {
    match error.kind() {
        ErrorKind::UnexpectedEof => ZipError::CorruptHeader("record extends beyond the end of the archive"),
        _ => ZipError::FileReadFailed(error),
    }
}
