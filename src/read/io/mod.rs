// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod entry;
pub(crate) mod hashed;
pub(crate) mod locator;

use crate::error::ZipError;

use std::io::ErrorKind;

/// Maps an error raised whilst pulling decompressed bytes out of an entry.
///
/// Decoders report malformed input as `InvalidInput`/`InvalidData` (or run out of input mid-stream), whereas the
/// backing store only fails with genuine I/O errors.
pub(crate) fn map_entry_error(error: std::io::Error) -> ZipError {
    match error.kind() {
        ErrorKind::InvalidInput | ErrorKind::InvalidData | ErrorKind::UnexpectedEof => {
            ZipError::DecompressionFailed(error)
        }
        _ => ZipError::FileReadFailed(error),
    }
}
