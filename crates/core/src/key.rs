//! Metadata key sanitization for attribute names.

/// Prefix for every attribute this crate projects.
pub const DATA_PREFIX: &str = "data-";

/// Sanitizes a metadata key into the suffix of an attribute name.
///
/// The key is lowercased (Unicode-aware), then every character that is not
/// an ASCII lowercase letter, digit, or hyphen is replaced with a hyphen.
/// The result is always safe to place after `data-` in markup, no matter
/// what the metadata author typed.
///
/// Distinct keys may collapse to the same sanitized form (`"a b"` and
/// `"a-b"` both become `"a-b"`); the later write wins, matching attribute
/// overwrite semantics.
pub fn sanitize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for ch in key.chars() {
        for lower in ch.to_lowercase() {
            if lower.is_ascii_lowercase() || lower.is_ascii_digit() || lower == '-' {
                out.push(lower);
            } else {
                out.push('-');
            }
        }
    }
    out
}

/// Full attribute name for a metadata key: `data-` plus the sanitized key.
pub fn attribute_name(key: &str) -> String {
    format!("{DATA_PREFIX}{}", sanitize_key(key))
}
