#![deny(missing_docs)]
//! fmsync workspace: an in-memory pane host with the event stream and
//! lifecycle plumbing the synchronizer plugs into.
//!
//! Real deployments sit on a live editor; this shell reproduces the same
//! seams (metadata lookup, view enumeration, attribute primitives, events)
//! so the whole projection cycle runs and tests without one.

/// Container elements and their attribute storage.
pub mod element;
/// Workspace event delivery with scoped subscriptions.
pub mod event;
/// Document metadata cache.
pub mod metadata;
/// Plugin lifecycle: load, pump, unload.
pub mod plugin;
/// Settings and the storage seam they persist through.
pub mod settings;
/// Pane model.
pub mod view;
/// The workspace shell itself.
pub mod workspace;

pub use element::{Element, ElementStore};
pub use event::{EventBus, EventSubscription, WorkspaceEvent};
pub use metadata::MetadataCache;
pub use plugin::Plugin;
pub use settings::{MemoryStore, SETTINGS_KEY, Settings, SettingsStore, StorageError};
pub use view::{View, ViewId, ViewKind};
pub use workspace::Workspace;
