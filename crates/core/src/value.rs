//! Attribute text rendering for metadata values.

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Error raised when a metadata value cannot be rendered as attribute text.
#[derive(Debug, Error)]
pub enum ValueRenderError {
    /// The JSON serializer rejected the value.
    #[error("value is not serializable: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Renders one metadata value as the text of an attribute.
///
/// Strings pass through verbatim, without quotes. Numbers and booleans use
/// their canonical textual form (`27`, `2.5`, `true`). Everything else,
/// including `null`, is the value's compact JSON text, so arrays keep their
/// brackets and quotes and an explicit `key:` with no value renders as the
/// literal `null`.
///
/// Markup escaping is not this function's concern; whichever sink writes the
/// attribute escapes at its own serialization boundary.
pub fn render_value(value: &JsonValue) -> Result<String, ValueRenderError> {
    match value {
        JsonValue::String(text) => Ok(text.clone()),
        JsonValue::Number(number) => Ok(number.to_string()),
        JsonValue::Bool(flag) => Ok(flag.to_string()),
        other => Ok(serde_json::to_string(other)?),
    }
}
