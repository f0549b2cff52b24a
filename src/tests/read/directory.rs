// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::archive::ArchiveBuilder;
use crate::codec::StoredCodec;
use crate::entry::level::CompressionLevel;
use crate::entry::EntryKind;
use crate::error::ZipError;
use crate::spec::consts::ZIP64_EOCDL_SIGNATURE;
use crate::spec::Compression;
use crate::tests::empty_archive;

use std::io::Cursor;

// Layout of the archive below:
//   0..32   local file record for "a" (30 bytes of header, 1 byte of name, 1 byte of data)
//   32..79  central directory record (46 bytes of header, 1 byte of name)
//   79..101 end of central directory record
const CDR_OFFSET: usize = 32;
const EOCDR_OFFSET: usize = 79;

fn single_entry() -> Vec<u8> {
    let mut archive = ArchiveBuilder::new().codec(StoredCodec).create();
    archive.add_file("a", b"x", CompressionLevel::NONE).expect("failed to add file");
    archive.finalize().expect("failed to finalize").into_bytes().expect("not memory-backed")
}

fn put_u16(data: &mut [u8], at: usize, value: u16) {
    data[at..at + 2].copy_from_slice(&value.to_le_bytes());
}

fn put_u32(data: &mut [u8], at: usize, value: u32) {
    data[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

#[test]
fn layout_test() {
    let data = single_entry();
    assert_eq!(101, data.len());

    let layout = crate::read::file(Cursor::new(&data)).expect("failed to parse archive");
    assert_eq!(CDR_OFFSET as u64, layout.cd_offset);
    assert!(layout.comment.is_empty());
    assert_eq!(1, layout.catalog.len());

    let entry = layout.catalog.get("a").expect("no 'a' entry");
    assert_eq!(EntryKind::File, entry.kind());
    assert_eq!(Compression::Stored, entry.compression());
    assert_eq!(0, entry.local_header_offset());
    assert_eq!(1, entry.compressed_size());
    assert_eq!(1, entry.uncompressed_size());
    assert_eq!(crc32fast::hash(b"x"), entry.crc32());
    assert_eq!(Some(0o100644), entry.unix_permissions());

    let data_offset = crate::read::data_offset(Cursor::new(&data), entry).expect("failed to read local header");
    assert_eq!(31, data_offset);
}

#[test]
fn comment_test() {
    let data = empty_archive(5);
    let layout = crate::read::file(Cursor::new(&data)).expect("failed to parse archive");

    assert_eq!(b"#####", &layout.comment[..]);
    assert_eq!(0, layout.cd_offset);
}

#[test]
fn truncated_comment_test() {
    let mut data = empty_archive(5);
    data.truncate(data.len() - 2);
    let layout = crate::read::file(Cursor::new(&data)).expect("failed to parse archive");

    assert_eq!(b"###", &layout.comment[..]);
}

#[test]
fn encrypted_entry_test() {
    let mut data = single_entry();
    data[CDR_OFFSET + 8] |= 0x1;

    let result = crate::read::file(Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::FeatureNotSupported("encryption"))));
}

#[test]
fn unknown_compression_test() {
    let mut data = single_entry();
    put_u16(&mut data, CDR_OFFSET + 10, 99);

    let result = crate::read::file(Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::CompressionNotSupported(99))));
}

#[test]
fn zip64_entry_test() {
    let mut data = single_entry();
    put_u32(&mut data, CDR_OFFSET + 20, u32::MAX);

    let result = crate::read::file(Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::FeatureNotSupported("ZIP64 entries"))));
}

#[test]
fn zip64_archive_test() {
    let mut data = ZIP64_EOCDL_SIGNATURE.to_le_bytes().to_vec();
    data.extend_from_slice(&[0; 16]);
    data.extend_from_slice(&empty_archive(0));

    let result = crate::read::file(Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::FeatureNotSupported("ZIP64 archives"))));
}

#[test]
fn spanned_archive_test() {
    let mut data = single_entry();
    put_u16(&mut data, EOCDR_OFFSET + 4, 1);

    let result = crate::read::file(Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::FeatureNotSupported(_))));
}

#[test]
fn local_header_past_directory_test() {
    let mut data = single_entry();
    put_u32(&mut data, CDR_OFFSET + 42, CDR_OFFSET as u32);

    let result = crate::read::file(Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::CorruptHeader(_))));
}

#[test]
fn directory_overlaps_eocdr_test() {
    let mut data = single_entry();
    put_u32(&mut data, EOCDR_OFFSET + 16, 40);

    let result = crate::read::file(Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::CorruptHeader(_))));
}

#[test]
fn missing_record_test() {
    let mut data = single_entry();
    put_u16(&mut data, EOCDR_OFFSET + 8, 2);
    put_u16(&mut data, EOCDR_OFFSET + 10, 2);

    let result = crate::read::file(Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::CorruptHeader(_))));
}

#[test]
fn bad_record_signature_test() {
    let mut data = single_entry();
    data[CDR_OFFSET] = 0;

    let result = crate::read::file(Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::UnexpectedHeaderError(_, _))));
}

#[test]
fn duplicate_path_test() {
    let mut archive = ArchiveBuilder::new().codec(StoredCodec).create();
    archive.add_file("a", b"x", CompressionLevel::NONE).expect("failed to add file");
    archive.add_file("b", b"x", CompressionLevel::NONE).expect("failed to add file");
    let mut data = archive.finalize().expect("failed to finalize").into_bytes().expect("not memory-backed");

    // Rename the second central directory record's path from "b" to "a".
    let second_record = 2 * CDR_OFFSET + 47 + 46;
    assert_eq!(b'b', data[second_record]);
    data[second_record] = b'a';

    let result = crate::read::file(Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::DuplicateEntry(path)) if path == "a"));
}

#[test]
fn lossy_path_test() {
    let mut data = single_entry();
    data[CDR_OFFSET + 46] = 0xFF;

    let layout = crate::read::file(Cursor::new(&data)).expect("failed to parse archive");
    assert!(layout.catalog.contains("\u{FFFD}"));
}

#[test]
fn lossy_path_kept_on_finalize_test() {
    let mut data = single_entry();
    data[30] = 0x82;
    data[CDR_OFFSET + 46] = 0x82;

    let mut archive = ArchiveBuilder::new().codec(StoredCodec).open_mem(&data).expect("failed to open archive");
    assert!(archive.has_entry("\u{FFFD}"));
    archive.add_file("b", b"y", CompressionLevel::NONE).expect("failed to add file");
    let upgraded = archive.finalize().expect("failed to finalize").into_bytes().expect("not memory-backed");

    // The untouched local file record of the parsed entry still matches its central directory record.
    assert_eq!(&data[..CDR_OFFSET], &upgraded[..CDR_OFFSET]);

    let eocdr_offset = upgraded.len() - 22;
    let cd_offset = u32::from_le_bytes(upgraded[eocdr_offset + 16..eocdr_offset + 20].try_into().unwrap()) as usize;
    assert_eq!(64, cd_offset);

    assert_eq!(&[0x00u8, 0x00], &upgraded[cd_offset + 8..cd_offset + 10]);
    assert_eq!(&[0x01u8, 0x00], &upgraded[cd_offset + 28..cd_offset + 30]);
    assert_eq!(&[0x82u8], &upgraded[cd_offset + 46..cd_offset + 47]);
    assert_eq!(b'b', upgraded[cd_offset + 47 + 46]);

    let reopened = ArchiveBuilder::new().codec(StoredCodec).open_mem_read(&upgraded).expect("failed to reopen archive");
    assert_eq!(b"x", &reopened.file_contents("\u{FFFD}").expect("failed to read entry")[..]);
    assert_eq!(b"y", &reopened.file_contents("b").expect("failed to read entry")[..]);
}
