// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use crate::archive::ArchiveState;

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("invalid entry path: '{0}'")]
    InvalidPath(String),
    #[error("an entry already exists at '{0}'")]
    DuplicateEntry(String),
    #[error("no entry exists at '{0}'")]
    FileNotFound(String),
    #[error("'{operation}' is not permitted whilst the archive is {state:?}")]
    InvalidState { operation: &'static str, state: ArchiveState },
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("a computed CRC32 value did not match the expected value (expected: {expected:#x}, actual: {actual:#x})")]
    ChecksumMismatch { expected: u32, actual: u32 },
    #[error("decompressed {actual} bytes but the entry records {expected}")]
    UnexpectedDecompressedSize { expected: u64, actual: u64 },
    #[error("compression failed: {0}")]
    CompressionFailed(#[source] std::io::Error),
    #[error("decompression failed: {0}")]
    DecompressionFailed(#[source] std::io::Error),
    #[error("compression not supported: {0}")]
    CompressionNotSupported(u16),
    #[error("feature not supported: '{0}'")]
    FeatureNotSupported(&'static str),

    #[error("unable to locate the end of central directory record")]
    NotAnArchive,
    #[error("corrupt header: {0}")]
    CorruptHeader(&'static str),
    #[error("Encountered an unexpected header (actual: {0:#x}, expected: {1:#x}).")]
    UnexpectedHeaderError(u32, u32),

    #[error("unable to allocate a buffer for the requested data")]
    AllocationFailed,
    #[error("entry data exceeds the non-ZIP64 size limit")]
    FileTooLarge,
    #[error("archive exceeds the non-ZIP64 entry count limit")]
    TooManyFiles,
    #[error("archive exceeds the non-ZIP64 offset limit")]
    ArchiveTooLarge,
    #[error("entry path is longer than 65535 bytes")]
    FileNameTooLarge,

    #[error("failed to open file: {0}")]
    FileOpenFailed(#[source] std::io::Error),
    #[error("failed to create file: {0}")]
    FileCreateFailed(#[source] std::io::Error),
    #[error("failed to read file: {0}")]
    FileReadFailed(#[source] std::io::Error),
    #[error("failed to write file: {0}")]
    FileWriteFailed(#[source] std::io::Error),
    #[error("failed to seek file: {0}")]
    FileSeekFailed(#[source] std::io::Error),
    #[error("failed to stat file: {0}")]
    FileStatFailed(#[source] std::io::Error),
    #[error("failed to close file: {0}")]
    FileCloseFailed(#[source] std::io::Error),

    #[error("failed to finalize archive: {0}")]
    FinalizeFailed(#[source] Box<ZipError>),
}

impl From<std::collections::TryReserveError> for ZipError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ZipError::AllocationFailed
    }
}
