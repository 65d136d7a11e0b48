//! Pane model: views over documents.

use fmsync_core::{DocPath, ElementId, MARKDOWN_VIEW};

/// Stable identity for a view within one workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

/// What a pane renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// A document pane rendering Markdown into a container element.
    Markdown,
    /// An auxiliary pane (outline, backlinks) with no document container.
    Auxiliary,
}

impl ViewKind {
    /// The kind string this pane reports through view enumeration.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Markdown => MARKDOWN_VIEW,
            ViewKind::Auxiliary => "auxiliary",
        }
    }
}

/// One pane: its kind, the document it shows, and its container element.
#[derive(Debug, Clone)]
pub struct View {
    pub(crate) id: ViewId,
    pub(crate) kind: ViewKind,
    pub(crate) document: Option<DocPath>,
    pub(crate) element: Option<ElementId>,
}

impl View {
    /// The view's id.
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// The view's kind.
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// The document currently shown, if any.
    pub fn document(&self) -> Option<&DocPath> {
        self.document.as_ref()
    }

    /// The container element, if the view has one.
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }
}
