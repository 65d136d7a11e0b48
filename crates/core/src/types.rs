//! Identity types shared between the synchronizer and its hosts.

use std::fmt;

use serde_json::Value as JsonValue;

/// Parsed metadata snapshot for one document: key to JSON value.
///
/// Iteration order is the map's natural key order, which makes every
/// projection pass deterministic for a given snapshot.
pub type MetadataMap = serde_json::Map<String, JsonValue>;

/// Vault-relative path identifying a document.
///
/// Documents compare by path, never by any host-side handle, so two views of
/// the same file agree on identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocPath(String);

impl DocPath {
    /// Wraps a path string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocPath {
    fn from(path: &str) -> Self {
        Self(path.to_owned())
    }
}

impl From<String> for DocPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Opaque identity for a container element, minted by the host.
///
/// Ids are plain numbers: holding one never keeps the element alive, and a
/// stale id is harmless because host attribute primitives treat unknown ids
/// as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_path_compares_by_path() {
        let a = DocPath::new("notes/trip.md");
        let b = DocPath::from("notes/trip.md");
        let c = DocPath::from(String::from("notes/other.md"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "notes/trip.md");
        assert_eq!(a.to_string(), "notes/trip.md");
    }

    #[test]
    fn element_id_is_copy_and_displayable() {
        let id = ElementId(7);
        let copy = id;
        assert_eq!(id, copy);
        assert_eq!(id.to_string(), "#7");
    }
}
