// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

use std::io::Cursor;

/// A backing store over an owned, growable vector of bytes.
#[derive(Default)]
pub(crate) struct MemoryStore {
    data: Vec<u8>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Constructs a store holding its own copy of the provided bytes.
    pub(crate) fn from_slice(data: &[u8]) -> Result<Self> {
        let mut owned = Vec::new();
        owned.try_reserve_exact(data.len())?;
        owned.extend_from_slice(data);

        Ok(Self { data: owned })
    }

    pub(crate) fn cursor(&self) -> Cursor<&[u8]> {
        Cursor::new(&self.data[..])
    }

    pub(crate) fn write_tail(&mut self, offset: u64, data: &[u8]) -> Result<()> {
        let offset = usize::try_from(offset).map_err(|_| ZipError::ArchiveTooLarge)?;
        if offset > self.data.len() {
            return Err(ZipError::InvalidParameter("write offset lies beyond the end of the buffer"));
        }

        // Reserve before truncating so that an allocation failure leaves the buffer untouched.
        let required = (offset + data.len()).saturating_sub(self.data.len());
        self.data.try_reserve(required)?;

        self.data.truncate(offset);
        self.data.extend_from_slice(data);
        Ok(())
    }

    pub(crate) fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
