//! Record store abstraction and in-memory implementation.
//!
//! [`RecordStore`] is the capability interface over the key-value document
//! store holding service records. Handlers receive an explicit
//! `Arc<dyn RecordStore>` handle through application state, so tests can
//! substitute any implementation. [`MemoryStore`] is the bundled
//! implementation and also the store's native event source: it publishes a
//! [`ChangeEvent`](genops_events::ChangeEvent) after every committed write.

pub mod memory;

use std::collections::HashMap;

use async_trait::async_trait;
use genops_core::record::ServiceRecord;
use genops_events::ChangeEvent;
use tokio::sync::broadcast;

pub use memory::MemoryStore;

/// Error returned by store operations.
///
/// Propagated to callers unmodified; the HTTP layer maps any store failure
/// to a 500 with a generic message and logs the detail server-side.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying store could not be reached or refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Capability interface over the service record store.
///
/// All operations are asynchronous single-key reads/writes. There are no
/// transactions: concurrent writes to different ids are independent, and
/// concurrent writes to the same id race with last-write-wins semantics.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the entire collection, keyed by record id.
    async fn list_all(&self) -> Result<HashMap<String, ServiceRecord>, StoreError>;

    /// Fetch a single record, `None` when absent.
    async fn get(&self, id: &str) -> Result<Option<ServiceRecord>, StoreError>;

    /// Write a record under `id`, fully overwriting any existing value.
    async fn put(&self, id: &str, record: ServiceRecord) -> Result<(), StoreError>;

    /// Remove the record under `id`. Removing an absent key is a no-op.
    async fn remove(&self, id: &str) -> Result<(), StoreError>;

    /// Drop the entire collection. Used by the seed routine, which replaces
    /// the collection wholesale.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Subscribe to the store's change events (creates and updates).
    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent>;
}
