//! In-memory record store.

use std::collections::HashMap;

use async_trait::async_trait;
use genops_core::record::ServiceRecord;
use genops_events::{ChangeBus, ChangeEvent};
use tokio::sync::{broadcast, RwLock};

use crate::{RecordStore, StoreError};

/// In-memory [`RecordStore`] backed by a `RwLock<HashMap>`.
///
/// Single-key writes are atomic under the lock; there is deliberately no
/// cross-key coordination. Every committed `put` publishes a
/// [`ChangeEvent`] on the embedded [`ChangeBus`] -- `Created` when the key
/// was absent, `Updated` with the before/after pair when it was present.
pub struct MemoryStore {
    records: RwLock<HashMap<String, ServiceRecord>>,
    bus: ChangeBus,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            bus: ChangeBus::default(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_all(&self) -> Result<HashMap<String, ServiceRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<ServiceRecord>, StoreError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn put(&self, id: &str, record: ServiceRecord) -> Result<(), StoreError> {
        let previous = {
            let mut records = self.records.write().await;
            records.insert(id.to_string(), record.clone())
        };

        // Publish only after the write has committed and the lock is
        // released; subscribers must never observe an event before the
        // state change is visible.
        match previous {
            None => self.bus.publish(ChangeEvent::Created { record }),
            Some(before) => self.bus.publish(ChangeEvent::Updated {
                before,
                after: record,
            }),
        }
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.records.write().await.remove(id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.records.write().await.clear();
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.bus.subscribe()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
