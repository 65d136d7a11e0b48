//! Host-owned attribute names and engine-injected metadata keys.

use std::collections::HashSet;

/// Attribute names the host environment owns on document containers.
///
/// These mark what a pane is (`data-type`) and which mode it is in
/// (`data-mode`); overwriting or stripping them would break the host's own
/// rendering, so projection skips them in both directions.
pub const DEFAULT_RESERVED: &[&str] = &["data-type", "data-mode"];

/// Metadata keys injected by metadata engines for their own bookkeeping.
///
/// Matched against the raw key, case-sensitively, before sanitization; a
/// user key that merely sanitizes to the same text still projects.
pub const ENGINE_KEYS: &[&str] = &["position"];

/// Returns whether `key` is an engine bookkeeping key.
pub fn is_engine_key(key: &str) -> bool {
    ENGINE_KEYS.contains(&key)
}

/// The set of attribute names projection must never write or remove.
///
/// Fixed at construction; hosts embedding the synchronizer extend it with
/// their own names once, not per call.
#[derive(Debug, Clone)]
pub struct ReservedNames {
    names: HashSet<String>,
}

impl ReservedNames {
    /// The default reserved set.
    pub fn new() -> Self {
        Self {
            names: DEFAULT_RESERVED.iter().map(|name| (*name).to_owned()).collect(),
        }
    }

    /// The default reserved set extended with additional attribute names.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut reserved = Self::new();
        reserved.names.extend(extra.into_iter().map(Into::into));
        reserved
    }

    /// Returns whether `name` (a full attribute name) is reserved.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of reserved names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the set is empty. It never is for the default set.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ReservedNames {
    fn default() -> Self {
        Self::new()
    }
}
