//! Bookkeeping for the attributes most recently applied to each element.

use std::collections::HashMap;

use crate::types::ElementId;

/// Per-element record of the sanitized keys written by the latest
/// projection pass.
///
/// A record is created when a pass writes at least one attribute, replaced
/// wholesale by the next pass, and removed once the element is cleared.
/// Entries key by [`ElementId`], so holding the table never extends any
/// element's lifetime.
#[derive(Debug, Default)]
pub struct AppliedRecords {
    records: HashMap<ElementId, Vec<String>>,
}

impl AppliedRecords {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the record for `element` with `keys`.
    ///
    /// An empty key list stores nothing; projection that wrote no attributes
    /// leaves no record behind.
    pub fn replace(&mut self, element: ElementId, keys: Vec<String>) {
        if keys.is_empty() {
            self.records.remove(&element);
        } else {
            self.records.insert(element, keys);
        }
    }

    /// Removes and returns the record for `element`.
    pub fn take(&mut self, element: ElementId) -> Option<Vec<String>> {
        self.records.remove(&element)
    }

    /// Drops the record for `element` without reading it. Returns whether a
    /// record existed.
    pub fn forget(&mut self, element: ElementId) -> bool {
        self.records.remove(&element).is_some()
    }

    /// The sanitized keys last applied to `element`, if any.
    pub fn keys(&self, element: ElementId) -> Option<&[String]> {
        self.records.get(&element).map(Vec::as_slice)
    }

    /// Returns whether `element` currently has a record.
    pub fn is_tracked(&self, element: ElementId) -> bool {
        self.records.contains_key(&element)
    }

    /// Ids of every element with a record, in no particular order.
    pub fn tracked(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.records.keys().copied()
    }

    /// Number of tracked elements.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether no element is tracked.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
