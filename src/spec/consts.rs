// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub const SIGNATURE_LENGTH: usize = 4;

// Local file header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

// Zip64 end of central directory locator constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4315
pub const ZIP64_EOCDL_SIGNATURE: u32 = 0x7064b50;

/// The value used to mark a 32-bit field as overflowing into a ZIP64 record.
pub const NON_ZIP64_MAX_SIZE: u32 = u32::MAX;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4422
pub const HOST_UNIX: u16 = 3;

// MS-DOS directory bit, followed by unix permission bits stored in the upper half of the external attribute.
pub const MSDOS_DIRECTORY: u32 = 0x10;
pub const UNIX_FILE_MODE: u32 = 0o100644;
pub const UNIX_DIRECTORY_MODE: u32 = 0o040755;
