//! Plugin lifecycle: load, event pumping, teardown.

use fmsync_core::Synchronizer;

use crate::event::{EventSubscription, WorkspaceEvent};
use crate::settings::{SETTINGS_KEY, Settings, SettingsStore, StorageError};
use crate::workspace::Workspace;

/// The assembled plugin: a synchronizer wired to one workspace's events.
///
/// The embedder drives it cooperatively: mutate the workspace, then call
/// [`Plugin::pump`] so queued events synchronize attributes. Every handler
/// runs to completion on the pumping thread; there is no suspension point
/// between a clear and the apply that follows it.
pub struct Plugin {
    synchronizer: Synchronizer,
    settings: Settings,
    events: EventSubscription,
}

impl Plugin {
    /// Loads settings, subscribes to workspace events, and returns the
    /// running plugin.
    ///
    /// Documents opened before this call are picked up by the startup sweep,
    /// run immediately when the layout is already stable and otherwise once
    /// [`WorkspaceEvent::LayoutReady`] arrives.
    pub fn load(
        workspace: &mut Workspace,
        store: &impl SettingsStore,
    ) -> Result<Self, StorageError> {
        let settings = Settings::from_stored(store.load(SETTINGS_KEY)?);
        let events = workspace.subscribe();
        let mut synchronizer = Synchronizer::new();
        if workspace.layout_ready() {
            synchronizer.sweep_startup(workspace);
        }
        log::debug!("fmsync loaded");
        Ok(Self {
            synchronizer,
            settings,
            events,
        })
    }

    /// Drains queued workspace events and dispatches each to the
    /// synchronizer. Call after mutating the workspace.
    pub fn pump(&mut self, workspace: &mut Workspace) {
        while let Some(event) = self.events.try_next() {
            self.dispatch(workspace, event);
        }
    }

    fn dispatch(&mut self, workspace: &mut Workspace, event: WorkspaceEvent) {
        match event {
            WorkspaceEvent::FileOpened(doc) => self
                .synchronizer
                .handle_document_opened(workspace, doc.as_ref()),
            WorkspaceEvent::MetadataChanged(doc) => {
                self.synchronizer.handle_metadata_changed(workspace, &doc);
            }
            WorkspaceEvent::LayoutReady => self.synchronizer.sweep_startup(workspace),
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read access to the synchronizer, for assertions and diagnostics.
    pub fn synchronizer(&self) -> &Synchronizer {
        &self.synchronizer
    }

    /// Tears the plugin down: clears every displayed container, persists
    /// settings, and consumes the event subscription so nothing dangles.
    pub fn unload(
        mut self,
        workspace: &mut Workspace,
        store: &mut impl SettingsStore,
    ) -> Result<(), StorageError> {
        self.synchronizer.sweep_teardown(workspace);
        store.save(SETTINGS_KEY, serde_json::to_value(&self.settings)?)?;
        log::debug!("fmsync unloaded");
        Ok(())
    }
}
