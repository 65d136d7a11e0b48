//! Clear-then-apply projection of document metadata onto container
//! attributes.

use crate::host::{AttributeSink, MARKDOWN_VIEW, MetadataSource, ViewAccess};
use crate::key::DATA_PREFIX;
use crate::plan::plan;
use crate::record::AppliedRecords;
use crate::reserved::ReservedNames;
use crate::types::{DocPath, ElementId};

/// Projects document metadata onto `data-*` attributes of container
/// elements and retracts exactly what it wrote when the picture changes.
///
/// Every application starts from a clean slate: attributes from the previous
/// pass are removed before the current snapshot is projected, so removed and
/// renamed metadata keys never linger on the element. What was written is
/// tracked per element in [`AppliedRecords`]; host-owned attributes and
/// anything other code put on the element are never touched.
///
/// Methods take `&mut self` and an exclusive host borrow, so one pass runs
/// to completion before the next begins.
#[derive(Debug, Default)]
pub struct Synchronizer {
    records: AppliedRecords,
    reserved: ReservedNames,
}

impl Synchronizer {
    /// A synchronizer with the default reserved attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A synchronizer whose reserved set also covers `extra` attribute
    /// names, for hosts that own more than the defaults.
    pub fn with_reserved<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: AppliedRecords::new(),
            reserved: ReservedNames::with_extra(extra),
        }
    }

    /// Projects `doc`'s current metadata onto `element`.
    ///
    /// Clears the previous application first, unconditionally. A document
    /// without metadata therefore leaves the element bare rather than stale.
    /// Writes that survive planning are applied through the host and the
    /// sanitized keys are recorded for the next cleanup; a pass that writes
    /// nothing leaves no record.
    pub fn apply<H>(&mut self, host: &mut H, doc: &DocPath, element: ElementId)
    where
        H: MetadataSource + AttributeSink,
    {
        self.clear(host, element);
        let Some(snapshot) = host.metadata(doc) else {
            return;
        };
        let writes = plan(&snapshot, &self.reserved);
        if writes.is_empty() {
            return;
        }
        let mut keys = Vec::with_capacity(writes.len());
        for write in &writes {
            host.set_attribute(element, &write.name, &write.value);
            keys.push(write.key.clone());
        }
        log::debug!("applied {} attribute(s) to {element} for {doc}", keys.len());
        self.records.replace(element, keys);
    }

    /// Removes every attribute recorded for `element` and drops its record.
    ///
    /// Only recorded names are removed, never reserved ones, so host-owned
    /// markup and attributes written by other code survive. An element with
    /// no record is left untouched.
    pub fn clear<H>(&mut self, host: &mut H, element: ElementId)
    where
        H: AttributeSink,
    {
        let Some(keys) = self.records.take(element) else {
            return;
        };
        for key in &keys {
            let name = format!("{DATA_PREFIX}{key}");
            if self.reserved.contains(&name) {
                continue;
            }
            host.remove_attribute(element, &name);
        }
    }

    /// Reacts to a document becoming the content of the focused view.
    ///
    /// `doc` is `None` when the focused view emptied; nothing is done then,
    /// and any attributes on the container stay until it renders a document
    /// again. Views without a container element are skipped.
    pub fn handle_document_opened<H>(&mut self, host: &mut H, doc: Option<&DocPath>)
    where
        H: MetadataSource + ViewAccess + AttributeSink,
    {
        let Some(view) = host.focused_view() else {
            return;
        };
        let (Some(doc), Some(element)) = (doc, view.element) else {
            return;
        };
        self.apply(host, doc, element);
    }

    /// Reacts to a change in `doc`'s metadata by re-projecting onto every
    /// displayed view showing it, focused or not.
    pub fn handle_metadata_changed<H>(&mut self, host: &mut H, doc: &DocPath)
    where
        H: MetadataSource + ViewAccess + AttributeSink,
    {
        for view in host.displayed_views(MARKDOWN_VIEW) {
            if view.document.as_ref() != Some(doc) {
                continue;
            }
            let Some(element) = view.element else {
                continue;
            };
            self.apply(host, doc, element);
        }
    }

    /// Projects onto every displayed document view. Run once after the host
    /// finishes building its startup layout, so documents opened before the
    /// synchronizer existed are covered.
    pub fn sweep_startup<H>(&mut self, host: &mut H)
    where
        H: MetadataSource + ViewAccess + AttributeSink,
    {
        for view in host.displayed_views(MARKDOWN_VIEW) {
            let (Some(doc), Some(element)) = (view.document, view.element) else {
                continue;
            };
            self.apply(host, &doc, element);
        }
    }

    /// Clears every displayed document view and drops all records. Run at
    /// teardown so containers hand back to the host in their original state.
    ///
    /// Records for elements no longer displayed are dropped too; their
    /// elements are gone or out of reach, and ids are non-owning either way.
    pub fn sweep_teardown<H>(&mut self, host: &mut H)
    where
        H: ViewAccess + AttributeSink,
    {
        for view in host.displayed_views(MARKDOWN_VIEW) {
            let Some(element) = view.element else {
                continue;
            };
            self.clear(host, element);
        }
        self.records.clear();
    }

    /// Drops the record for `element` without touching the element, for
    /// hosts that discard containers wholesale. Returns whether a record
    /// existed.
    pub fn forget(&mut self, element: ElementId) -> bool {
        self.records.forget(element)
    }

    /// The sanitized keys last applied to `element`, if any.
    pub fn applied_keys(&self, element: ElementId) -> Option<&[String]> {
        self.records.keys(element)
    }

    /// Number of elements currently carrying applied attributes.
    pub fn tracked_elements(&self) -> usize {
        self.records.len()
    }
}
