// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::codec::Crc32Hasher;

use std::io::Read;

/// A wrapping reader which computes the CRC32 hash of data read via [`Read`].
pub(crate) struct HashedReader<R> {
    pub(crate) reader: R,
    pub(crate) hasher: Box<dyn Crc32Hasher>,
}

impl<R> HashedReader<R>
where
    R: Read,
{
    /// Constructs a new wrapping reader from a generic [`Read`] implementer and the hasher fed by it.
    pub(crate) fn new(reader: R, hasher: Box<dyn Crc32Hasher>) -> Self {
        Self { reader, hasher }
    }

    /// Returns the CRC32 hash of all data read so far.
    ///
    /// This method should only be called once EOF has been reached and it's known that no more data will be read,
    /// else the computed hash won't accurately represent the data read in.
    pub(crate) fn compute_hash(&self) -> u32 {
        self.hasher.finalize()
    }
}

impl<R> Read for HashedReader<R>
where
    R: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let written = self.reader.read(buf)?;
        self.hasher.update(&buf[..written]);

        Ok(written)
    }
}
