// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod entry;
pub(crate) mod read;
pub(crate) mod spec;
pub(crate) mod write;

use crate::spec::consts::EOCDR_SIGNATURE;

/// Builds an archive holding no entries, followed by a comment of the given length.
pub(crate) fn empty_archive(comment_length: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&EOCDR_SIGNATURE.to_le_bytes());
    data.extend_from_slice(&[0; 16]);
    data.extend_from_slice(&comment_length.to_le_bytes());
    data.resize(data.len() + comment_length as usize, b'#');
    data
}
