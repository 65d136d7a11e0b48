//! The in-memory pane host: views, container elements, metadata, events.

use fmsync_core::{
    AttributeSink, DocPath, ElementId, MetadataMap, MetadataSource, ViewAccess, ViewInfo,
};

use crate::element::{Element, ElementStore};
use crate::event::{EventBus, EventSubscription, WorkspaceEvent};
use crate::metadata::MetadataCache;
use crate::view::{View, ViewId, ViewKind};

/// A pane-based shell hosting documents, their container elements, and the
/// event stream the plugin subscribes to.
///
/// The shell is deliberately small: panes show at most one document, every
/// Markdown pane owns one container element, and all mutation happens on the
/// caller's thread. Events queue on emit and are handled whenever the
/// embedder pumps its plugin.
#[derive(Debug, Default)]
pub struct Workspace {
    elements: ElementStore,
    views: Vec<View>,
    next_view: u64,
    focused: Option<ViewId>,
    metadata: MetadataCache,
    bus: EventBus,
    layout_ready: bool,
}

impl Workspace {
    /// An empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an event subscriber.
    pub fn subscribe(&mut self) -> EventSubscription {
        self.bus.subscribe()
    }

    /// Creates a pane. Markdown panes get a fresh container element; the
    /// first pane created becomes focused.
    pub fn create_view(&mut self, kind: ViewKind) -> ViewId {
        self.next_view += 1;
        let id = ViewId(self.next_view);
        let element = matches!(kind, ViewKind::Markdown).then(|| self.elements.create("div"));
        self.views.push(View {
            id,
            kind,
            document: None,
            element,
        });
        if self.focused.is_none() {
            self.focused = Some(id);
        }
        id
    }

    /// Opens `doc` in `view` and focuses it. Emits
    /// [`WorkspaceEvent::FileOpened`]. Non-Markdown panes ignore the call.
    pub fn open_document(&mut self, view: ViewId, doc: impl Into<DocPath>) {
        let doc = doc.into();
        let Some(entry) = self.view_mut(view) else {
            return;
        };
        if !matches!(entry.kind, ViewKind::Markdown) {
            return;
        }
        entry.document = Some(doc.clone());
        self.focused = Some(view);
        self.bus.emit(WorkspaceEvent::FileOpened(Some(doc)));
    }

    /// Empties `view`. If it was focused, emits `FileOpened(None)`; the
    /// container element stays alive with whatever attributes it carries.
    pub fn close_document(&mut self, view: ViewId) {
        let Some(entry) = self.view_mut(view) else {
            return;
        };
        if entry.document.take().is_none() {
            return;
        }
        if self.focused == Some(view) {
            self.bus.emit(WorkspaceEvent::FileOpened(None));
        }
    }

    /// Splits `view`: a new focused Markdown pane showing the same document
    /// in its own container element. Returns the new pane, or `None` when
    /// `view` shows nothing.
    pub fn split_view(&mut self, view: ViewId) -> Option<ViewId> {
        let doc = self.view(view)?.document.clone()?;
        let id = self.create_view(ViewKind::Markdown);
        if let Some(entry) = self.view_mut(id) {
            entry.document = Some(doc.clone());
        }
        self.focused = Some(id);
        self.bus.emit(WorkspaceEvent::FileOpened(Some(doc)));
        Some(id)
    }

    /// Moves focus to `view`. Focusing a Markdown pane emits `FileOpened`
    /// with the pane's document, since the active document changed;
    /// focusing an auxiliary pane emits nothing.
    pub fn focus_view(&mut self, view: ViewId) {
        if self.focused == Some(view) {
            return;
        }
        let Some(entry) = self.view(view) else {
            return;
        };
        let emitted = matches!(entry.kind, ViewKind::Markdown).then(|| entry.document.clone());
        self.focused = Some(view);
        if let Some(doc) = emitted {
            self.bus.emit(WorkspaceEvent::FileOpened(doc));
        }
    }

    /// Discards `view` and its container element. Focus falls back to the
    /// first remaining pane.
    pub fn discard_view(&mut self, view: ViewId) {
        let Some(position) = self.views.iter().position(|entry| entry.id == view) else {
            return;
        };
        let removed = self.views.remove(position);
        if let Some(element) = removed.element {
            self.elements.discard(element);
        }
        if self.focused == Some(view) {
            self.focused = self.views.first().map(|entry| entry.id);
        }
    }

    /// Replaces `doc`'s metadata record and emits
    /// [`WorkspaceEvent::MetadataChanged`].
    pub fn set_metadata(&mut self, doc: impl Into<DocPath>, metadata: MetadataMap) {
        let doc = doc.into();
        self.metadata.set(doc.clone(), metadata);
        self.bus.emit(WorkspaceEvent::MetadataChanged(doc));
    }

    /// Drops `doc`'s metadata record, as when a frontmatter block is
    /// deleted, and emits the change.
    pub fn clear_metadata(&mut self, doc: impl Into<DocPath>) {
        let doc = doc.into();
        self.metadata.remove(&doc);
        self.bus.emit(WorkspaceEvent::MetadataChanged(doc));
    }

    /// Announces that the startup layout has stabilized. Emits
    /// [`WorkspaceEvent::LayoutReady`] the first time and nothing after.
    pub fn notify_layout_ready(&mut self) {
        if self.layout_ready {
            return;
        }
        self.layout_ready = true;
        self.bus.emit(WorkspaceEvent::LayoutReady);
    }

    /// Whether [`Workspace::notify_layout_ready`] has already fired.
    pub fn layout_ready(&self) -> bool {
        self.layout_ready
    }

    /// The focused pane, if any.
    pub fn focused(&self) -> Option<ViewId> {
        self.focused
    }

    /// The container element id of `view`, if it has one.
    pub fn element_of(&self, view: ViewId) -> Option<ElementId> {
        self.view(view)?.element
    }

    /// The live element behind `id`, if any.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Rendered opening tag of `view`'s container, for assertions and
    /// diagnostics.
    pub fn container_tag(&self, view: ViewId) -> Option<String> {
        let element = self.element_of(view)?;
        Some(self.elements.get(element)?.opening_tag())
    }

    /// All panes, in creation order.
    pub fn views(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    fn view(&self, id: ViewId) -> Option<&View> {
        self.views.iter().find(|entry| entry.id == id)
    }

    fn view_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.iter_mut().find(|entry| entry.id == id)
    }
}

impl MetadataSource for Workspace {
    fn metadata(&self, doc: &DocPath) -> Option<MetadataMap> {
        self.metadata.snapshot(doc)
    }
}

impl ViewAccess for Workspace {
    fn displayed_views(&self, kind: &str) -> Vec<ViewInfo> {
        self.views
            .iter()
            .filter(|view| view.kind.as_str() == kind)
            .map(|view| ViewInfo {
                document: view.document.clone(),
                element: view.element,
            })
            .collect()
    }

    fn focused_view(&self) -> Option<ViewInfo> {
        let id = self.focused?;
        let view = self.view(id)?;
        matches!(view.kind, ViewKind::Markdown).then(|| ViewInfo {
            document: view.document.clone(),
            element: view.element,
        })
    }
}

impl AttributeSink for Workspace {
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        self.elements.set_attribute(element, name, value);
    }

    fn remove_attribute(&mut self, element: ElementId, name: &str) {
        self.elements.remove_attribute(element, name);
    }
}
