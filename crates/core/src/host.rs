//! Trait seams between the synchronizer and its host environment.

use crate::types::{DocPath, ElementId, MetadataMap};

/// View kind string for document panes, as accepted by
/// [`ViewAccess::displayed_views`].
pub const MARKDOWN_VIEW: &str = "markdown";

/// One displayed view as the host reports it.
///
/// Either half may be absent: a freshly split pane has no document yet, and
/// a view mid-teardown may have no container element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewInfo {
    /// Path of the document the view currently shows, if any.
    pub document: Option<DocPath>,
    /// Container element rendering the document, if the view has one.
    pub element: Option<ElementId>,
}

/// Metadata lookup by document.
pub trait MetadataSource {
    /// An owned snapshot of `doc`'s metadata, or `None` when the document
    /// has no metadata block.
    ///
    /// Returning an owned map is the consistency guarantee: the snapshot a
    /// projection pass iterates cannot change under it.
    fn metadata(&self, doc: &DocPath) -> Option<MetadataMap>;
}

/// Enumeration of displayed views.
pub trait ViewAccess {
    /// Every currently displayed view of the given kind. Hidden or closed
    /// panes are not listed.
    fn displayed_views(&self, kind: &str) -> Vec<ViewInfo>;

    /// The focused view, or `None` when focus is elsewhere than a document
    /// pane.
    fn focused_view(&self) -> Option<ViewInfo>;
}

/// Attribute primitives on container elements.
///
/// Implementations treat unknown element ids as no-ops, which is what makes
/// stale ids in bookkeeping harmless. Escaping attribute text for markup is
/// the implementation's concern at its own serialization boundary.
pub trait AttributeSink {
    /// Sets attribute `name` to `value` on `element`.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    /// Removes attribute `name` from `element`, if present.
    fn remove_attribute(&mut self, element: ElementId, name: &str);
}

/// Everything the synchronizer needs from a host, in one bound.
pub trait SyncHost: MetadataSource + ViewAccess + AttributeSink {}

impl<T: MetadataSource + ViewAccess + AttributeSink> SyncHost for T {}
