//! Document metadata cache.

use std::collections::HashMap;

use fmsync_core::{DocPath, MetadataMap};

/// In-memory metadata records keyed by document path.
///
/// Lookups clone, so every caller gets a snapshot that stays consistent for
/// the length of its pass no matter what edits land afterwards.
#[derive(Debug, Default)]
pub struct MetadataCache {
    records: HashMap<DocPath, MetadataMap>,
}

impl MetadataCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// An owned snapshot of `doc`'s metadata, if the document has any.
    pub fn snapshot(&self, doc: &DocPath) -> Option<MetadataMap> {
        self.records.get(doc).cloned()
    }

    /// Replaces the record for `doc`.
    pub fn set(&mut self, doc: DocPath, metadata: MetadataMap) {
        self.records.insert(doc, metadata);
    }

    /// Drops the record for `doc`. Returns whether one existed.
    pub fn remove(&mut self, doc: &DocPath) -> bool {
        self.records.remove(doc).is_some()
    }

    /// Returns whether `doc` has a record.
    pub fn contains(&self, doc: &DocPath) -> bool {
        self.records.contains_key(doc)
    }

    /// Number of documents with records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
