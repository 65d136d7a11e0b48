//! Workspace event delivery with scoped subscriptions.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use fmsync_core::DocPath;

/// Events a workspace emits as panes and metadata change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEvent {
    /// A document became the content of the focused view. `None` means the
    /// focused view emptied.
    FileOpened(Option<DocPath>),
    /// A document's metadata record changed, whether or not the document is
    /// focused or even displayed.
    MetadataChanged(DocPath),
    /// The startup layout has stabilized. Emitted at most once.
    LayoutReady,
}

/// Fan-out of workspace events to any number of subscribers.
///
/// Each subscriber owns an [`EventSubscription`]; dropping it unsubscribes,
/// and the dead channel is pruned on the next emit. Delivery queues per
/// subscriber; nothing here runs handlers.
#[derive(Debug, Default)]
pub struct EventBus {
    senders: Vec<Sender<WorkspaceEvent>>,
}

impl EventBus {
    /// A bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber and returns its scoped handle.
    pub fn subscribe(&mut self) -> EventSubscription {
        let (sender, receiver) = channel();
        self.senders.push(sender);
        EventSubscription { receiver }
    }

    /// Queues `event` for every live subscriber, pruning dropped ones.
    pub fn emit(&mut self, event: WorkspaceEvent) {
        self.senders
            .retain(|sender| sender.send(event.clone()).is_ok());
    }

    /// Number of subscribers as of the last emit. Dropped subscriptions are
    /// counted until an emit prunes them.
    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }
}

/// Scoped subscription to workspace events.
///
/// Holds the receiving end of the queue; dropping it releases the
/// registration, so a handler can never outlive its owner.
#[derive(Debug)]
pub struct EventSubscription {
    receiver: Receiver<WorkspaceEvent>,
}

impl EventSubscription {
    /// The next queued event, if any. Never blocks.
    pub fn try_next(&self) -> Option<WorkspaceEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Drains everything currently queued.
    pub fn drain(&self) -> Vec<WorkspaceEvent> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}
