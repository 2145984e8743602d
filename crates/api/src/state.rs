use std::sync::Arc;

use genops_store::RecordStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store handle
/// is an explicit trait object so tests can substitute any
/// [`RecordStore`] implementation.
#[derive(Clone)]
pub struct AppState {
    /// Record store handle.
    pub store: Arc<dyn RecordStore>,
}
