// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::Entry;
use crate::error::{Result, ZipError};

use std::collections::HashMap;

/// An insertion-ordered index of the entries known to an archive session.
///
/// Lookups are by exact, case-sensitive path. A path may only ever be recorded once: inserting a second entry under
/// the same path is rejected rather than shadowing the first.
#[derive(Debug, Default, Clone)]
pub(crate) struct EntryCatalog {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl EntryCatalog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity), index: HashMap::with_capacity(capacity) }
    }

    /// Records an entry, failing if its path is already present.
    pub(crate) fn insert(&mut self, entry: Entry) -> Result<()> {
        if self.index.contains_key(entry.path()) {
            return Err(ZipError::DuplicateEntry(entry.path));
        }

        self.index.insert(entry.path.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub(crate) fn get(&self, path: &str) -> Option<&Entry> {
        self.index.get(path).map(|&index| &self.entries[index])
    }

    pub(crate) fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Returns every entry in the order it was recorded, which is also the central directory order.
    pub(crate) fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}
