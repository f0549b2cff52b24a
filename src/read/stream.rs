// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Chunked extraction of a single entry.
//!
//! Chunks are pulled through an [`EntryReader`], so at no point is more than one chunk of decompressed data held in
//! memory. The reader, its decoder and the chunk buffer are all owned by [`read_chunked()`]'s stack frame and are
//! therefore dropped on every exit path: exhaustion, an early stop requested by the handler, or an error.

use crate::error::Result;
use crate::read::io::entry::EntryReader;
use crate::read::io::map_entry_error;

use std::io::{ErrorKind, Read};

/// Feeds an entry's decompressed bytes to `handler` in chunks of at most `chunk_size` bytes.
///
/// Every chunk but the last is exactly `chunk_size` bytes long. The entry's size and CRC32 are verified once the
/// payload is exhausted; stopping early skips verification.
pub(crate) fn read_chunked<F>(mut reader: EntryReader<'_>, chunk_size: usize, mut handler: F) -> Result<()>
where
    F: FnMut(&[u8]) -> bool,
{
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(chunk_size)?;
    buffer.resize(chunk_size, 0);

    loop {
        let filled = fill(&mut reader, &mut buffer)?;
        if filled == 0 {
            return reader.verify();
        }

        if !handler(&buffer[..filled]) {
            tracing::trace!(read = reader.bytes_read(), "chunk handler stopped extraction early");
            return Ok(());
        }
    }
}

/// Reads until the buffer is full or EOF is reached, returning the number of bytes placed in the buffer.
fn fill<R: Read>(reader: &mut R, buffer: &mut [u8]) -> Result<usize> {
    let mut filled = 0;

    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) => return Err(map_entry_error(error)),
        }
    }

    Ok(filled)
}
