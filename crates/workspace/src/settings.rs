//! Plugin settings and the storage seam they persist through.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Storage key the plugin persists its settings under.
pub const SETTINGS_KEY: &str = "fmsync";

/// Plugin settings.
///
/// Currently empty: the projection has no tunables. The load/merge/save
/// cycle is wired regardless, so adding a tunable is one field and a
/// default, not new plumbing. Unknown stored fields are ignored on load and
/// therefore dropped on the next save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {}

impl Settings {
    /// Builds settings from a stored record, merging over defaults.
    ///
    /// A missing or malformed record yields defaults; settings never block
    /// startup.
    pub fn from_stored(stored: Option<JsonValue>) -> Self {
        stored
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }
}

/// Error raised by settings storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A record could not be encoded or decoded.
    #[error("settings record is not valid JSON: {0}")]
    Codec(#[from] serde_json::Error),
    /// The backend itself failed.
    #[error("settings storage failed: {0}")]
    Backend(String),
}

/// Keyed JSON storage for plugin state.
pub trait SettingsStore {
    /// Loads the record stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<JsonValue>, StorageError>;

    /// Stores `value` under `key`, replacing any prior record.
    fn save(&mut self, key: &str, value: JsonValue) -> Result<(), StorageError>;
}

/// In-memory storage backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, JsonValue>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw record under `key`, for assertions.
    pub fn record(&self, key: &str) -> Option<&JsonValue> {
        self.records.get(key)
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<JsonValue>, StorageError> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: JsonValue) -> Result<(), StorageError> {
        self.records.insert(key.to_owned(), value);
        Ok(())
    }
}
