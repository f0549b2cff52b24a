// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::ZipError;
use crate::tests::empty_archive;

use std::io::Cursor;

#[test]
fn search_one_byte_test() {
    let buffer: &[u8] = &[0x0, 0x0, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x1];

    let matched = crate::read::io::locator::reverse_search_buffer(buffer, signature);
    assert!(matched.is_none());

    let buffer: &[u8] = &[0x2, 0x1, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x1];

    let matched = crate::read::io::locator::reverse_search_buffer(buffer, signature);
    assert_eq!(Some(1), matched);
}

#[test]
fn search_two_byte_test() {
    let buffer: &[u8] = &[0x2, 0x1, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x2, 0x1];

    let matched = crate::read::io::locator::reverse_search_buffer(buffer, signature);
    assert_eq!(Some(1), matched);
}

#[test]
fn search_last_occurrence_test() {
    let buffer: &[u8] = &[0x2, 0x1, 0x0, 0x2, 0x1, 0x0];
    let signature: &[u8] = &[0x2, 0x1];

    let matched = crate::read::io::locator::reverse_search_buffer(buffer, signature);
    assert_eq!(Some(4), matched);
}

#[test]
fn locator_empty_test() {
    let data = empty_archive(0);
    let eocdr = crate::read::io::locator::eocdr(Cursor::new(&data)).expect("failed to locate EOCDR");

    assert_eq!(eocdr, 4);
}

#[test]
fn locator_empty_max_comment_test() {
    let data = empty_archive(u16::MAX);
    let eocdr = crate::read::io::locator::eocdr(Cursor::new(&data)).expect("failed to locate EOCDR");

    assert_eq!(eocdr, 4);
}

#[test]
fn locator_buffer_boundary_test() {
    // The first 2KiB window starts two bytes into the signature.
    let data = empty_archive(2046);
    let eocdr = crate::read::io::locator::eocdr(Cursor::new(&data)).expect("failed to locate EOCDR");

    assert_eq!(eocdr, 4);
}

#[test]
fn locator_prefixed_test() {
    let mut data = vec![0xAA; 5000];
    data.extend_from_slice(&empty_archive(300));
    let eocdr = crate::read::io::locator::eocdr(Cursor::new(&data)).expect("failed to locate EOCDR");

    assert_eq!(eocdr, 5004);
}

#[test]
fn locator_too_short_test() {
    let data = &empty_archive(0)[..21];
    let result = crate::read::io::locator::eocdr(Cursor::new(data));

    assert!(matches!(result, Err(ZipError::NotAnArchive)));
}

#[test]
fn locator_missing_signature_test() {
    let data = vec![0; 4096];
    let result = crate::read::io::locator::eocdr(Cursor::new(&data));

    assert!(matches!(result, Err(ZipError::NotAnArchive)));
}

#[test]
fn locator_beyond_max_comment_test() {
    // A signature further from the end than the largest possible comment allows is never considered.
    let mut data = empty_archive(0);
    data.resize(data.len() + u16::MAX as usize + 1, 0);
    let result = crate::read::io::locator::eocdr(Cursor::new(&data));

    assert!(matches!(result, Err(ZipError::NotAnArchive)));
}
