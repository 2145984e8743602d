//! The service record entity and its lifecycle operations.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kind of work a service record tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Maintenance,
    Repair,
    Inspection,
    Installation,
}

/// Lifecycle status of a service record.
///
/// New records default to [`Scheduled`](ServiceStatus::Scheduled) when the
/// client does not supply a status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

// ---------------------------------------------------------------------------
// ServiceRecord
// ---------------------------------------------------------------------------

/// A maintenance / repair / inspection / installation work order against a
/// generator.
///
/// Invariants:
/// - `id` is unique across the store and immutable after creation.
/// - `created_at` never changes after creation.
/// - `updated_at >= created_at`; refreshed on every mutation.
/// - `generator_id` is an opaque reference with no referential integrity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub provider: String,
    pub cost: f64,
    pub status: ServiceStatus,
    pub scheduled_date: String,
    /// Serialized as `null` when absent, matching the wire contract.
    pub generator_id: Option<String>,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A fully validated create payload, produced by
/// [`validation::validate_create`](crate::validation::validate_create).
#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub service_type: ServiceType,
    pub provider: String,
    pub cost: f64,
    pub status: ServiceStatus,
    pub scheduled_date: String,
    pub generator_id: Option<String>,
    pub description: String,
}

/// A validated partial update, produced by
/// [`validation::validate_update`](crate::validation::validate_update).
///
/// `None` fields are left untouched by [`ServiceRecord::apply_update`].
#[derive(Debug, Clone, Default)]
pub struct ServiceUpdate {
    pub name: Option<String>,
    pub service_type: Option<ServiceType>,
    pub provider: Option<String>,
    pub cost: Option<f64>,
    pub status: Option<ServiceStatus>,
    pub scheduled_date: Option<String>,
    /// Outer `None` = field absent; `Some(None)` = explicit null (clears
    /// the generator reference).
    pub generator_id: Option<Option<String>>,
    pub description: Option<String>,
}

impl ServiceRecord {
    /// Materialize a new record from a validated payload.
    ///
    /// Stamps `created_at` and `updated_at` to the same instant.
    pub fn create(id: String, new: NewService, now: Timestamp) -> Self {
        Self {
            id,
            name: new.name,
            service_type: new.service_type,
            provider: new.provider,
            cost: new.cost,
            status: new.status,
            scheduled_date: new.scheduled_date,
            generator_id: new.generator_id,
            description: new.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow-merge an update over this record, last-write-wins per field.
    ///
    /// `id` and `created_at` are never touched; `updated_at` is always
    /// refreshed to `now`, even for an empty update.
    pub fn apply_update(&mut self, update: ServiceUpdate, now: Timestamp) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(service_type) = update.service_type {
            self.service_type = service_type;
        }
        if let Some(provider) = update.provider {
            self.provider = provider;
        }
        if let Some(cost) = update.cost {
            self.cost = cost;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(scheduled_date) = update.scheduled_date {
            self.scheduled_date = scheduled_date;
        }
        if let Some(generator_id) = update.generator_id {
            self.generator_id = generator_id;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.updated_at = now;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
