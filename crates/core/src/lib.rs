#![deny(missing_docs)]
//! fmsync core: projection of document metadata onto container attributes,
//! with the bookkeeping needed to retract it cleanly.

/// Trait seams between the synchronizer and its host.
pub mod host;
/// Metadata key sanitization for attribute names.
pub mod key;
/// Pure projection planning.
pub mod plan;
/// Applied-attribute bookkeeping per element.
pub mod record;
/// Reserved attribute names and engine bookkeeping keys.
pub mod reserved;
/// The clear-then-apply synchronizer.
pub mod sync;
/// Identity types shared with hosts.
pub mod types;
/// Attribute text rendering for metadata values.
pub mod value;

pub use host::{AttributeSink, MARKDOWN_VIEW, MetadataSource, SyncHost, ViewAccess, ViewInfo};
pub use key::{DATA_PREFIX, attribute_name, sanitize_key};
pub use plan::{PlannedAttribute, plan};
pub use record::AppliedRecords;
pub use reserved::{DEFAULT_RESERVED, ENGINE_KEYS, ReservedNames, is_engine_key};
pub use sync::Synchronizer;
pub use types::{DocPath, ElementId, MetadataMap};
pub use value::{ValueRenderError, render_value};
