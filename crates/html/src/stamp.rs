//! Streaming attribute stamping over rendered HTML.
//!
//! The live path projects onto retained elements; this is its one-shot twin
//! for static pipelines, where the container is addressed by CSS selector in
//! an HTML string and the result is a new string. Same planning, same
//! filters, same reserved-name protection.

use std::borrow::Cow;

use fmsync_core::{DATA_PREFIX, MetadataMap, ReservedNames, plan};
use lol_html::{ElementContentHandlers, RewriteStrSettings, Selector, rewrite_str};
use thiserror::Error;

/// Error raised by the stamping rewriter.
#[derive(Debug, Error)]
pub enum StampError {
    /// The container selector failed to parse.
    #[error("invalid container selector: {0}")]
    Selector(#[from] lol_html::errors::SelectorError),
    /// The underlying rewriter failed.
    #[error("html rewriting failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),
}

/// Stamps `metadata` onto every element matching `selector`.
///
/// Attribute writes are exactly the ones a live projection pass would
/// perform: engine keys dropped, unserializable values skipped, reserved
/// names left alone. Existing attributes with the same name are overwritten;
/// everything else on the element survives. Values are escaped by the
/// rewriter at write time.
pub fn stamp_str(html: &str, selector: &str, metadata: &MetadataMap) -> Result<String, StampError> {
    let writes = plan(metadata, &ReservedNames::new());
    let parsed: Selector = selector.parse()?;
    let handlers = vec![(
        Cow::Owned(parsed),
        ElementContentHandlers::default().element(|el: &mut lol_html::html_content::Element| {
            for write in &writes {
                el.set_attribute(&write.name, &write.value)?;
            }
            Ok(())
        }),
    )];
    Ok(rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::default()
        },
    )?)
}

/// Removes previously stamped attributes from every element matching
/// `selector`.
///
/// `keys` are sanitized metadata keys, as recorded by a projection pass;
/// each is removed as `data-<key>`. Reserved names are never removed, no
/// matter what the list says.
pub fn strip_str(html: &str, selector: &str, keys: &[String]) -> Result<String, StampError> {
    let reserved = ReservedNames::new();
    let names: Vec<String> = keys
        .iter()
        .map(|key| format!("{DATA_PREFIX}{key}"))
        .filter(|name| !reserved.contains(name))
        .collect();
    let parsed: Selector = selector.parse()?;
    let handlers = vec![(
        Cow::Owned(parsed),
        ElementContentHandlers::default().element(|el: &mut lol_html::html_content::Element| {
            for name in &names {
                el.remove_attribute(name);
            }
            Ok(())
        }),
    )];
    Ok(rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::default()
        },
    )?)
}
