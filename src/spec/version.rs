// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::EntryKind;
use crate::spec::consts::HOST_UNIX;
use crate::spec::Compression;

pub(crate) const SPEC_VERSION_MADE_BY: u16 = 63;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
pub fn as_needed_to_extract(compression: Compression, kind: EntryKind) -> u16 {
    let mut version = match compression {
        Compression::Deflate => 20,
        Compression::Stored => 10,
    };

    if let EntryKind::Directory = kind {
        version = std::cmp::max(version, 20);
    }

    version
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#442
pub fn as_made_by() -> u16 {
    (HOST_UNIX << 8) | SPEC_VERSION_MADE_BY
}
