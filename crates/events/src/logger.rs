//! Structured logging of store change events.
//!
//! [`ChangeLogger`] subscribes to the [`ChangeBus`](crate::bus::ChangeBus)
//! broadcast channel and emits one structured log entry per create/update.
//! It runs as a long-lived background task and shuts down when the bus
//! sender is dropped. Because it sits behind the channel, nothing here can
//! fail or delay the write that triggered the event.

use tokio::sync::broadcast;

use crate::bus::ChangeEvent;

/// Background service that logs store change events.
pub struct ChangeLogger;

impl ChangeLogger {
    /// Run the logging loop.
    ///
    /// Subscribes via the provided `receiver` and logs every event it
    /// receives. The loop exits when the channel is closed (i.e. the owning
    /// store and its [`ChangeBus`](crate::bus::ChangeBus) are dropped).
    pub async fn run(mut receiver: broadcast::Receiver<ChangeEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => Self::log(&event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Change logger lagged, some events were not logged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Change bus closed, change logger shutting down");
                    break;
                }
            }
        }
    }

    /// Emit the structured log entry for a single event.
    fn log(event: &ChangeEvent) {
        match event {
            ChangeEvent::Created { record } => {
                tracing::info!(
                    service_id = %record.id,
                    service_name = %record.name,
                    service_type = ?record.service_type,
                    provider = %record.provider,
                    "New service created"
                );
            }
            ChangeEvent::Updated { before, after } => {
                tracing::info!(
                    service_id = %after.id,
                    before_status = ?before.status,
                    after_status = ?after.status,
                    service_name = %after.name,
                    "Service updated"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
