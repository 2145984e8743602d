//! In-process change-event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`ChangeBus`] is the store's native event mechanism: the in-memory store
//! publishes a [`ChangeEvent`] after every committed write, and any number
//! of subscribers (the change logger, tests) receive every event
//! independently. It is designed to be shared via `Arc` or embedded in the
//! store itself.

use genops_core::record::ServiceRecord;
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// ChangeEvent
// ---------------------------------------------------------------------------

/// A committed change to the record store.
///
/// Updates carry the full before/after pair so subscribers can report
/// transitions (e.g. status changes) without re-reading the store.
#[derive(Debug, Clone)]
pub enum ChangeEvent {
    /// A record was written under a previously absent key.
    Created { record: ServiceRecord },
    /// A record was overwritten under an existing key.
    Updated {
        before: ServiceRecord,
        after: ServiceRecord,
    },
}

// ---------------------------------------------------------------------------
// ChangeBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out bus for store change events.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`ChangeEvent`].
pub struct ChangeBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// notification is observational and must never fail a write.
    pub fn publish(&self, event: ChangeEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
