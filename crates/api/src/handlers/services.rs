//! Handlers for the service record CRUD, stats, and seed endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use genops_core::error::CoreError;
use genops_core::record::ServiceRecord;
use genops_core::request::{CreateServiceRequest, UpdateServiceRequest};
use genops_core::{id, seed, stats, validation};
use genops_store::RecordStore;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, ListResponse, MessageResponse, SeedResponse};
use crate::state::AppState;

/// Upper bound on id re-generation attempts when a freshly generated id
/// already exists in the store. The id format collides with probability
/// 1/1000 within a millisecond, so more than a couple of retries means
/// something is very wrong.
const MAX_ID_ATTEMPTS: usize = 5;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a record or fail with 404.
async fn ensure_service_exists(
    store: &dyn RecordStore,
    id: &str,
) -> AppResult<ServiceRecord> {
    store.get(id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Service",
            id: id.to_string(),
        })
    })
}

/// Generate a service id that is not currently present in the store.
///
/// The existence check and the eventual `put` are not atomic; a concurrent
/// create could still race to the same id, in which case the later write
/// wins. This mirrors the store's last-write-wins semantics and keeps the
/// external contract unchanged.
async fn allocate_service_id(store: &dyn RecordStore) -> AppResult<String> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = id::generate_service_id();
        if store.get(&candidate).await?.is_none() {
            return Ok(candidate);
        }
        tracing::warn!(id = %candidate, "Generated service id collided, retrying");
    }
    Err(AppError::InternalError(
        "could not allocate a unique service id".to_string(),
    ))
}

// ---------------------------------------------------------------------------
// GET /services
// ---------------------------------------------------------------------------

/// List all service records, newest first.
pub async fn list_services(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut records: Vec<ServiceRecord> =
        state.store.list_all().await?.into_values().collect();
    // Newest first; the sort is stable so equal timestamps keep their
    // relative order.
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    tracing::debug!(count = records.len(), "Listed services");
    Ok(Json(ListResponse::new(records)))
}

// ---------------------------------------------------------------------------
// POST /services
// ---------------------------------------------------------------------------

/// Create a new service record.
pub async fn create_service(
    State(state): State<AppState>,
    payload: Result<Json<CreateServiceRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let new = validation::validate_create(payload)?;

    let id = allocate_service_id(state.store.as_ref()).await?;
    let record = ServiceRecord::create(id, new, Utc::now());

    state.store.put(&record.id, record.clone()).await?;
    tracing::info!(id = %record.id, name = %record.name, "Service created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(record))))
}

// ---------------------------------------------------------------------------
// PUT /services/{id}
// ---------------------------------------------------------------------------

/// Merge a partial update over an existing service record.
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateServiceRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    if id.trim().is_empty() {
        return Err(CoreError::Validation("Service ID is required".to_string()).into());
    }

    let Json(payload) = payload?;
    let update = validation::validate_update(payload)?;

    let mut record = ensure_service_exists(state.store.as_ref(), &id).await?;
    record.apply_update(update, Utc::now());

    state.store.put(&id, record.clone()).await?;
    tracing::info!(id = %record.id, status = ?record.status, "Service updated");

    Ok(Json(DataResponse::new(record)))
}

// ---------------------------------------------------------------------------
// DELETE /services/{id}
// ---------------------------------------------------------------------------

/// Delete a service record.
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if id.trim().is_empty() {
        return Err(CoreError::Validation("Service ID is required".to_string()).into());
    }

    ensure_service_exists(state.store.as_ref(), &id).await?;
    state.store.remove(&id).await?;
    tracing::info!(%id, "Service deleted");

    Ok(Json(MessageResponse::new("Service deleted successfully")))
}

// ---------------------------------------------------------------------------
// GET /services/stats
// ---------------------------------------------------------------------------

/// Compute aggregate statistics over the full record set.
pub async fn service_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records: Vec<ServiceRecord> =
        state.store.list_all().await?.into_values().collect();
    let stats = stats::compute_stats(&records);

    tracing::debug!(total = stats.total_services, "Computed service stats");
    Ok(Json(DataResponse::new(stats)))
}

// ---------------------------------------------------------------------------
// POST /services/seed
// ---------------------------------------------------------------------------

/// Replace the whole collection with the canonical seed fixtures.
pub async fn seed_services(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let fixtures = seed::seed_records();

    state.store.clear().await?;
    for record in &fixtures {
        state.store.put(&record.id, record.clone()).await?;
    }

    tracing::info!(count = fixtures.len(), "Seed data loaded");
    Ok(Json(SeedResponse {
        success: true,
        message: "Services seed data added successfully".to_string(),
        count: fixtures.len(),
    }))
}
