// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::codec::StoredCodec;
use crate::entry::catalog::EntryCatalog;
use crate::entry::level::CompressionLevel;
use crate::entry::{Entry, EntryKind};
use crate::error::ZipError;
use crate::write::entry_whole::EntryWholeWriter;

fn entry(path: &str) -> Entry {
    let writer = match EntryKind::from_path(path) {
        EntryKind::File => EntryWholeWriter::file(&StoredCodec, path.to_string(), b"data", CompressionLevel::NONE),
        EntryKind::Directory => EntryWholeWriter::directory(&StoredCodec, path.to_string()),
    };

    writer.write(0).expect("failed to write entry").0
}

#[test]
fn catalog_order_test() {
    let mut catalog = EntryCatalog::new();
    for path in ["c", "a", "dir/", "b"] {
        catalog.insert(entry(path)).expect("failed to insert entry");
    }

    let paths: Vec<&str> = catalog.as_slice().iter().map(Entry::path).collect();
    assert_eq!(vec!["c", "a", "dir/", "b"], paths);
    assert_eq!(4, catalog.len());
    assert!(catalog.contains("dir/"));
    assert!(!catalog.contains("dir"));
    assert!(!catalog.contains("A"));
}

#[test]
fn catalog_duplicate_test() {
    let mut catalog = EntryCatalog::new();
    catalog.insert(entry("a")).expect("failed to insert entry");

    let result = catalog.insert(entry("a"));
    assert!(matches!(result, Err(ZipError::DuplicateEntry(path)) if path == "a"));
    assert_eq!(1, catalog.len());
}

#[test]
fn catalog_clear_test() {
    let mut catalog = EntryCatalog::with_capacity(2);
    catalog.insert(entry("a")).expect("failed to insert entry");
    catalog.clear();

    assert_eq!(0, catalog.len());
    assert!(catalog.get("a").is_none());
}

#[test]
fn entry_kind_test() {
    assert_eq!(EntryKind::Directory, EntryKind::from_path("foo/"));
    assert_eq!(EntryKind::File, EntryKind::from_path("foo"));
    assert_eq!(EntryKind::File, EntryKind::from_path("foo/bar"));
    assert!(entry("foo/").is_dir());
}

#[test]
fn compression_level_test() {
    assert_eq!(0, CompressionLevel::NONE.get());
    assert_eq!(1, CompressionLevel::FASTEST.get());
    assert_eq!(6, CompressionLevel::DEFAULT.get());
    assert_eq!(9, CompressionLevel::BEST.get());
    assert_eq!(CompressionLevel::DEFAULT, CompressionLevel::default());

    assert!(CompressionLevel::NONE.is_store());
    assert!(!CompressionLevel::FASTEST.is_store());

    for level in 0..=9 {
        assert_eq!(level, CompressionLevel::new(level).expect("level is in range").get());
    }

    assert!(matches!(CompressionLevel::new(10), Err(ZipError::InvalidParameter(_))));
    assert!(matches!(CompressionLevel::try_from(u32::MAX), Err(ZipError::InvalidParameter(_))));
}
