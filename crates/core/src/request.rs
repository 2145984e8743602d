//! Typed request payloads for the service record write paths.
//!
//! Create fields are all optional at the wire level so the validation layer
//! can report exactly which required field is missing instead of surfacing a
//! generic deserialization error. `type` and `status` deserialize straight
//! into their enums, so an invalid enum string is rejected at the boundary.

use serde::{Deserialize, Deserializer};

use crate::record::{ServiceStatus, ServiceType};

/// Deserialize a field as `Some(value)` whenever it is present.
///
/// A derived `Option<Option<T>>` collapses explicit `null` into the outer
/// `None`, making it indistinguishable from an absent field. Routing the
/// inner `Option` through here keeps present-`null` as `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

/// `cost` as received on the wire: either a JSON number or a numeric string.
///
/// The original clients send both (`100` and `"100"`); the validation layer
/// coerces either form to `f64`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CostInput {
    Number(f64),
    Text(String),
}

/// Payload for `POST /services`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub service_type: Option<ServiceType>,
    pub provider: Option<String>,
    pub cost: Option<CostInput>,
    pub status: Option<ServiceStatus>,
    pub scheduled_date: Option<String>,
    pub generator_id: Option<String>,
    pub description: Option<String>,
}

/// Payload for `PUT /services/{id}` — a partial-field merge.
///
/// No presence validation is applied; absent fields leave the stored value
/// untouched. `generator_id` uses a double `Option` so an explicit JSON
/// `null` clears the reference while an absent field preserves it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub service_type: Option<ServiceType>,
    pub provider: Option<String>,
    pub cost: Option<CostInput>,
    pub status: Option<ServiceStatus>,
    pub scheduled_date: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub generator_id: Option<Option<String>>,
    pub description: Option<String>,
}
