// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// Document all features on docs.rs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A synchronous ZIP archive engine over memory buffers and files.
//!
//! ## Features
//! - A single session type, [`ZipArchive`], for building, reading, and upgrading archives.
//! - Memory-backed and file-backed sessions, with in-place upgrade of existing archives.
//! - Chunked extraction which never holds more than one chunk of decompressed data in memory.
//! - A swappable [`CompressionCodec`], with Stored and Deflate support out of the box.
//! - Aims for reasonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! zip_session = { version = "0.1.0", features = ["full"] }
//! ```
//!
//! ### Feature Flags
//! - `full` - Enables all below features.
//! - `deflate` - Enables support for the Deflate compression method via `flate2`.
//! - `chrono` - Stamps new entries with the current time via `chrono`.
//!
//! ## Example
//! ```no_run
//! # use zip_session::{ZipArchive, CompressionLevel, Mode, ZipError};
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut archive = ZipArchive::open_file("./foo.zip", Mode::ReadAdd)?;
//! archive.add_file("bar.txt", b"This is an example file.", CompressionLevel::DEFAULT)?;
//!
//! for entry in archive.entries()? {
//!     println!("{} ({} bytes)", entry.path(), entry.uncompressed_size());
//! }
//!
//! archive.file_contents_chunked("bar.txt", 4096, |chunk| {
//!     println!("read {} bytes", chunk.len());
//!     true
//! })?;
//!
//! archive.finalize()?;
//! #   Ok(())
//! # }
//! ```

pub mod archive;
pub mod codec;
pub mod date;
pub mod entry;
pub mod error;
pub mod read;
pub mod spec;

pub(crate) mod store;
pub(crate) mod utils;
pub(crate) mod write;

#[cfg(test)]
pub(crate) mod tests;

pub use crate::archive::{ArchiveBuilder, ArchiveState, FinalizedArchive, Mode, ZipArchive};
pub use crate::codec::{CompressionCodec, Crc32Hasher, DefaultCodec, StoredCodec};
pub use crate::date::{builder::ZipDateTimeBuilder, ZipDateTime};
pub use crate::entry::{level::CompressionLevel, Entry, EntryKind};
pub use crate::error::{Result, ZipError};
pub use crate::read::EntryReader;
pub use crate::spec::Compression;

#[cfg(feature = "deflate")]
pub use crate::codec::DeflateCodec;
