// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// Level of compression data should be compressed with, from 0 (store) to 9 (smallest output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    /// No compression, the data is stored as-is.
    pub const NONE: CompressionLevel = CompressionLevel(0);
    /// Fastest quality of compression, usually produces bigger size.
    pub const FASTEST: CompressionLevel = CompressionLevel(1);
    /// Default quality of compression.
    pub const DEFAULT: CompressionLevel = CompressionLevel(6);
    /// Best quality of compression, usually produces the smallest size.
    pub const BEST: CompressionLevel = CompressionLevel(9);

    /// Constructs a precise compression level, failing if it lies outside of `0..=9`.
    pub fn new(level: u32) -> Result<Self> {
        match u8::try_from(level) {
            Ok(level) if level <= Self::BEST.0 => Ok(CompressionLevel(level)),
            _ => Err(ZipError::InvalidParameter("compression level must be between 0 and 9")),
        }
    }

    /// Returns the numeric value of this level.
    pub fn get(&self) -> u32 {
        self.0.into()
    }

    /// Returns whether data written at this level is stored rather than compressed.
    pub fn is_store(&self) -> bool {
        self.0 == 0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::DEFAULT
    }
}

impl TryFrom<u32> for CompressionLevel {
    type Error = ZipError;

    fn try_from(level: u32) -> Result<Self> {
        CompressionLevel::new(level)
    }
}
