use std::path::Path;

use kin_value::{RecordNode, RecordRef, RecordStore};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{parse_gedcom, GedcomError};

/// Level-0 records keyed by cross-reference id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: FxHashMap<String, RecordRef>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from GEDCOM text.
    pub fn from_gedcom(text: &str) -> Result<Self, GedcomError> {
        let mut store = MemoryStore::new();
        for record in parse_gedcom(text)? {
            store.insert_ref(record);
        }
        debug!(records = store.len(), "loaded GEDCOM records");
        Ok(store)
    }

    /// Read and parse a GEDCOM file.
    pub fn load(path: &Path) -> Result<Self, GedcomError> {
        let text = std::fs::read_to_string(path).map_err(|err| GedcomError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_gedcom(&text)
    }

    /// Add a record. Nodes without a cross-reference id are not addressable
    /// and are dropped.
    pub fn insert(&mut self, node: RecordNode) {
        self.insert_ref(RecordRef::new(node));
    }

    fn insert_ref(&mut self, record: RecordRef) {
        if let Some(key) = record.xref() {
            self.records.insert(key.to_string(), record.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.records.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl RecordStore for MemoryStore {
    fn record(&self, key: &str) -> Option<RecordRef> {
        self.records.get(key).cloned()
    }
}

#[cfg(test)]
mod tests;
