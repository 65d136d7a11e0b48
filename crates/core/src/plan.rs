//! Pure projection planning: a metadata snapshot in, attribute writes out.

use crate::key::{attribute_name, sanitize_key};
use crate::reserved::{ReservedNames, is_engine_key};
use crate::types::MetadataMap;
use crate::value::render_value;

/// One attribute write a projection pass will perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAttribute {
    /// Sanitized metadata key, recorded for later cleanup.
    pub key: String,
    /// Full attribute name (`data-` plus the sanitized key).
    pub name: String,
    /// Rendered attribute text.
    pub value: String,
}

/// Computes the attribute writes for one metadata snapshot.
///
/// Walks the snapshot in its natural key order and keeps every entry that
/// survives the three filters: engine bookkeeping keys are dropped by raw
/// name, values the serializer rejects are skipped with a warning, and
/// reserved attribute names are never produced. When two keys sanitize to
/// the same name the later value wins while the write keeps its first
/// position, mirroring how repeated attribute writes land on an element.
///
/// The result is deterministic for a given snapshot, which makes it equally
/// usable for live synchronization, one-shot HTML stamping, and host
/// bindings that only want the plan.
pub fn plan(metadata: &MetadataMap, reserved: &ReservedNames) -> Vec<PlannedAttribute> {
    let mut writes: Vec<PlannedAttribute> = Vec::with_capacity(metadata.len());
    for (key, value) in metadata {
        if is_engine_key(key) {
            continue;
        }
        let text = match render_value(value) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("skipping metadata key {key:?}: {err}");
                continue;
            }
        };
        let name = attribute_name(key);
        if reserved.contains(&name) {
            continue;
        }
        match writes.iter_mut().find(|write| write.name == name) {
            Some(write) => write.value = text,
            None => writes.push(PlannedAttribute {
                key: sanitize_key(key),
                name,
                value: text,
            }),
        }
    }
    writes
}
