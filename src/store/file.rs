// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A backing store over an open file handle.
pub(crate) struct FileStore {
    file: File,
    path: PathBuf,
}

impl FileStore {
    /// Opens an existing file for reading and writing.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path).map_err(ZipError::FileOpenFailed)?;
        Ok(Self { file, path: path.to_owned() })
    }

    /// Opens an existing file for reading only.
    pub(crate) fn open_read(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(ZipError::FileOpenFailed)?;
        Ok(Self { file, path: path.to_owned() })
    }

    /// Creates a file, truncating any existing contents.
    pub(crate) fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(ZipError::FileCreateFailed)?;
        Ok(Self { file, path: path.to_owned() })
    }

    pub(crate) fn cursor(&self) -> BufReader<&File> {
        BufReader::new(&self.file)
    }

    pub(crate) fn write_tail(&mut self, offset: u64, data: &[u8]) -> Result<()> {
        self.file.seek(SeekFrom::Start(offset)).map_err(ZipError::FileSeekFailed)?;
        self.file.write_all(data).map_err(ZipError::FileWriteFailed)?;

        // Shrink only once the new tail is fully written.
        self.file.set_len(offset + data.len() as u64).map_err(ZipError::FileWriteFailed)?;
        Ok(())
    }

    /// Flushes all writes to disk.
    pub(crate) fn sync(&mut self) -> Result<()> {
        self.file.flush().map_err(ZipError::FileWriteFailed)?;
        self.file.sync_all().map_err(ZipError::FileCloseFailed)
    }

    /// Releases the handle.
    pub(crate) fn into_path(self) -> PathBuf {
        self.path
    }
}
