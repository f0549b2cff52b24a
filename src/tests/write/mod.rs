// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::codec::StoredCodec;
use crate::entry::level::CompressionLevel;
use crate::entry::EntryKind;
use crate::error::ZipError;
use crate::spec::consts::{CDH_SIGNATURE, EOCDR_SIGNATURE, LFH_SIGNATURE};
use crate::spec::Compression;
use crate::write::entry_whole::EntryWholeWriter;

#[test]
fn stored_record_test() {
    let data = b"Lorem ipsum dolor sit amet";
    let (entry, record) = EntryWholeWriter::file(&StoredCodec, "foo.txt".to_string(), data, CompressionLevel::BEST)
        .write(100)
        .expect("failed to write entry");

    assert_eq!(30 + 7 + data.len(), record.len());
    assert_eq!(LFH_SIGNATURE.to_le_bytes(), record[0..4]);
    assert_eq!(b"foo.txt", &record[30..37]);
    assert_eq!(data, &record[37..]);

    assert_eq!(100, entry.local_header_offset());
    assert_eq!(Compression::Stored, entry.compression());
    assert_eq!(crc32fast::hash(data), entry.crc32());
    assert_eq!(data.len() as u64, entry.compressed_size());
    assert_eq!(data.len() as u64, entry.uncompressed_size());
    assert_eq!(Some(0o100644), entry.unix_permissions());
}

#[cfg(feature = "deflate")]
#[test]
fn deflate_record_test() {
    use crate::codec::DeflateCodec;

    let data = "Lorem ipsum dolor sit amet, consectetur adipiscing elit".repeat(64);
    let (entry, record) =
        EntryWholeWriter::file(&DeflateCodec, "foo.txt".to_string(), data.as_bytes(), CompressionLevel::DEFAULT)
            .write(0)
            .expect("failed to write entry");

    assert_eq!(Compression::Deflate, entry.compression());
    assert!(entry.compressed_size() < entry.uncompressed_size());
    assert_eq!(30 + 7 + entry.compressed_size() as usize, record.len());
    assert_eq!([20, 0], record[4..6]);
    assert_eq!([8, 0], record[8..10]);
}

#[cfg(feature = "deflate")]
#[test]
fn level_none_stores_test() {
    use crate::codec::DeflateCodec;

    let (entry, _) = EntryWholeWriter::file(&DeflateCodec, "a".to_string(), b"aaaaaaaa", CompressionLevel::NONE)
        .write(0)
        .expect("failed to write entry");

    assert_eq!(Compression::Stored, entry.compression());
}

#[test]
fn directory_record_test() {
    let (entry, record) =
        EntryWholeWriter::directory(&StoredCodec, "dir/".to_string()).write(0).expect("failed to write entry");

    assert_eq!(EntryKind::Directory, entry.kind());
    assert_eq!(34, record.len());
    assert_eq!([20, 0], record[4..6]);
    assert_eq!(0, entry.uncompressed_size());
    assert_eq!(0x10, entry.external_file_attribute() & 0x10);
    assert_eq!(Some(0o040755), entry.unix_permissions());
}

#[test]
fn unicode_path_flag_test() {
    let (_, record) = EntryWholeWriter::file(&StoredCodec, "日本.txt".to_string(), b"", CompressionLevel::NONE)
        .write(0)
        .expect("failed to write entry");
    assert_eq!([0x00, 0x08], record[6..8]);

    let (_, record) = EntryWholeWriter::file(&StoredCodec, "plain.txt".to_string(), b"", CompressionLevel::NONE)
        .write(0)
        .expect("failed to write entry");
    assert_eq!([0x00, 0x00], record[6..8]);
}

#[test]
fn archive_too_large_test() {
    let result = EntryWholeWriter::file(&StoredCodec, "a".to_string(), b"data", CompressionLevel::NONE)
        .write(u32::MAX as u64 - 16);

    assert!(matches!(result, Err(ZipError::ArchiveTooLarge)));
}

#[test]
fn file_name_too_large_test() {
    let path = "a".repeat(u16::MAX as usize + 1);
    let result = EntryWholeWriter::file(&StoredCodec, path, b"data", CompressionLevel::NONE).write(0);

    assert!(matches!(result, Err(ZipError::FileNameTooLarge)));
}

#[test]
fn empty_central_directory_test() {
    let buffer = crate::write::central_directory(&[], 0).expect("failed to write central directory");

    assert_eq!(22, buffer.len());
    assert_eq!(EOCDR_SIGNATURE.to_le_bytes(), buffer[0..4]);
    assert!(buffer[4..].iter().all(|byte| *byte == 0));
}

#[test]
fn central_directory_test() {
    let (first, _) = EntryWholeWriter::file(&StoredCodec, "a".to_string(), b"x", CompressionLevel::NONE)
        .write(0)
        .expect("failed to write entry");
    let (second, _) =
        EntryWholeWriter::directory(&StoredCodec, "dir/".to_string()).write(32).expect("failed to write entry");

    let buffer = crate::write::central_directory(&[first, second], 66).expect("failed to write central directory");
    assert_eq!(47 + 50 + 22, buffer.len());

    assert_eq!(CDH_SIGNATURE.to_le_bytes(), buffer[0..4]);
    assert_eq!(b"a", &buffer[46..47]);
    assert_eq!(CDH_SIGNATURE.to_le_bytes(), buffer[47..51]);
    assert_eq!([32, 0, 0, 0], buffer[47 + 42..47 + 46]);
    assert_eq!(b"dir/", &buffer[47 + 46..47 + 50]);

    let eocdr = &buffer[97..];
    assert_eq!(EOCDR_SIGNATURE.to_le_bytes(), eocdr[0..4]);
    assert_eq!([2, 0, 2, 0], eocdr[8..12]);
    assert_eq!(97u32.to_le_bytes(), eocdr[12..16]);
    assert_eq!(66u32.to_le_bytes(), eocdr[16..20]);
    assert_eq!([0, 0], eocdr[20..22]);
}
