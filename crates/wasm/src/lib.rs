//! WASM bindings for fmsync attribute planning.
//!
//! Hosts that own a real DOM keep element discovery and attribute writes on
//! their side; these bindings expose the pure half of the projection (key
//! sanitization, reserved-name checks, full plan computation) so every host
//! agrees byte for byte on what gets written.

use fmsync_core::{MetadataMap, ReservedNames, plan};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Planning API Types
// ============================================================================

/// One attribute write from a computed plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedWrite {
    /// Full attribute name (`data-` plus the sanitized key).
    pub name: String,
    /// Rendered attribute text, unescaped.
    pub value: String,
}

fn parse_metadata(metadata: JsValue) -> Result<MetadataMap, JsError> {
    if metadata.is_undefined() || metadata.is_null() {
        return Ok(MetadataMap::new());
    }
    serde_wasm_bindgen::from_value(metadata)
        .map_err(|e| JsError::new(&format!("Invalid metadata: {}", e)))
}

// ============================================================================
// Planning API
// ============================================================================

/// Computes the attribute writes for a metadata object.
///
/// Applies the same filters as the live synchronizer: engine bookkeeping
/// keys are dropped, unserializable values are skipped, reserved attribute
/// names are never produced, and keys colliding after sanitization collapse
/// to one write with the last value.
///
/// # Arguments
///
/// * `metadata` - The parsed frontmatter object (null/undefined means empty)
///
/// # Returns
///
/// Returns an array of `{name, value}` objects in deterministic key order.
/// Values are raw text; the caller's `setAttribute` handles escaping.
#[wasm_bindgen]
pub fn plan_attributes(metadata: JsValue) -> Result<JsValue, JsError> {
    let metadata = parse_metadata(metadata)?;
    let writes: Vec<PlannedWrite> = plan(&metadata, &ReservedNames::new())
        .into_iter()
        .map(|write| PlannedWrite {
            name: write.name,
            value: write.value,
        })
        .collect();
    serde_wasm_bindgen::to_value(&writes)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Computes the plan for a metadata object and feeds each write to
/// `set_attribute(name, value)`. Returns the number of writes performed.
///
/// The callback is the host's own attribute primitive, so writes land with
/// the host's escaping and the host's element resolution.
#[wasm_bindgen]
pub fn apply_plan(metadata: JsValue, set_attribute: &js_sys::Function) -> Result<u32, JsValue> {
    let metadata = parse_metadata(metadata).map_err(JsValue::from)?;
    let writes = plan(&metadata, &ReservedNames::new());
    for write in &writes {
        set_attribute.call2(
            &JsValue::NULL,
            &JsValue::from_str(&write.name),
            &JsValue::from_str(&write.value),
        )?;
    }
    Ok(writes.len() as u32)
}

/// Sanitizes a metadata key into an attribute-name suffix.
#[wasm_bindgen]
pub fn sanitize_key(key: &str) -> String {
    fmsync_core::sanitize_key(key)
}

/// Full attribute name for a metadata key: `data-` plus the sanitized key.
#[wasm_bindgen]
pub fn attribute_name(key: &str) -> String {
    fmsync_core::attribute_name(key)
}

/// Returns whether `name` is a reserved attribute name the host owns.
#[wasm_bindgen]
pub fn is_reserved_name(name: &str) -> bool {
    ReservedNames::new().contains(name)
}
