//! Integration tests for store failure propagation.
//!
//! Substitutes a store whose every operation fails, exercising the
//! explicit-handle seam: handlers must surface a 500 with a generic
//! message and no retries.

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use tokio::sync::broadcast;

use genops_core::record::ServiceRecord;
use genops_events::{ChangeBus, ChangeEvent};
use genops_store::{RecordStore, StoreError};

use common::{build_test_app_with_store, send, valid_create_payload};

/// A store where every operation fails with `Unavailable`.
struct FailingStore {
    bus: ChangeBus,
}

impl FailingStore {
    fn new() -> Self {
        Self {
            bus: ChangeBus::default(),
        }
    }

    fn unavailable() -> StoreError {
        StoreError::Unavailable("connection to db.internal:9000 refused".to_string())
    }
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn list_all(&self) -> Result<HashMap<String, ServiceRecord>, StoreError> {
        Err(Self::unavailable())
    }

    async fn get(&self, _id: &str) -> Result<Option<ServiceRecord>, StoreError> {
        Err(Self::unavailable())
    }

    async fn put(&self, _id: &str, _record: ServiceRecord) -> Result<(), StoreError> {
        Err(Self::unavailable())
    }

    async fn remove(&self, _id: &str) -> Result<(), StoreError> {
        Err(Self::unavailable())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        Err(Self::unavailable())
    }

    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.bus.subscribe()
    }
}

#[tokio::test]
async fn list_surfaces_store_failure_as_generic_500() {
    let app = build_test_app_with_store(Arc::new(FailingStore::new()));

    let (status, body) = send(&app, Method::GET, "/services", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"], "An internal error occurred");
    assert!(
        !body.to_string().contains("db.internal"),
        "store detail must not leak to the client"
    );
}

#[tokio::test]
async fn create_and_stats_also_surface_500() {
    let app = build_test_app_with_store(Arc::new(FailingStore::new()));

    let (status, _) = send(
        &app,
        Method::POST,
        "/services",
        Some(valid_create_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app, Method::GET, "/services/stats", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_degrades_when_the_store_is_down() {
    let app = build_test_app_with_store(Arc::new(FailingStore::new()));

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["store_healthy"], false);
}
