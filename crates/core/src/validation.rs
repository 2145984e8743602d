//! Validation for the service record write paths.
//!
//! Create payloads are checked for required-field presence in a fixed order,
//! failing fast on the first missing field with an error naming it. Update
//! payloads accept arbitrary partial merges; only `cost` coercion can fail.

use crate::error::CoreError;
use crate::record::{NewService, ServiceUpdate};
use crate::request::{CostInput, CreateServiceRequest, UpdateServiceRequest};

/// Coerce a wire-level cost into `f64`.
///
/// Numeric strings are trimmed and parsed; anything unparsable is a
/// validation error rather than a deserialization failure so the client
/// gets a 400 naming the field.
fn coerce_cost(input: CostInput) -> Result<f64, CoreError> {
    match input {
        CostInput::Number(n) => Ok(n),
        CostInput::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            CoreError::Validation(format!("Invalid value for field cost: '{s}'"))
        }),
    }
}

fn missing(field: &str) -> CoreError {
    CoreError::Validation(format!("Missing required field: {field}"))
}

/// Extract a required string field, treating absent and blank as missing.
fn required(field: &str, value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(missing(field)),
    }
}

/// Validate a create payload, producing a [`NewService`].
///
/// Required fields are checked in the canonical order -- name, type,
/// provider, cost, scheduledDate, description -- and the first missing one
/// aborts validation with `Missing required field: <name>`. The `status`
/// field is optional and defaults to `scheduled`.
pub fn validate_create(request: CreateServiceRequest) -> Result<NewService, CoreError> {
    let name = required("name", request.name)?;
    let Some(service_type) = request.service_type else {
        return Err(missing("type"));
    };
    let provider = required("provider", request.provider)?;
    let Some(cost_input) = request.cost else {
        return Err(missing("cost"));
    };
    let scheduled_date = required("scheduledDate", request.scheduled_date)?;
    let description = required("description", request.description)?;

    // Coercion happens only after every presence check has passed, so a
    // garbage cost never masks a missing later field.
    let cost = coerce_cost(cost_input)?;

    Ok(NewService {
        name,
        service_type,
        provider,
        cost,
        status: request.status.unwrap_or_default(),
        scheduled_date,
        generator_id: request.generator_id,
        description,
    })
}

/// Validate an update payload, producing a [`ServiceUpdate`].
///
/// No presence checks -- any subset of fields is acceptable. Only `cost`
/// coercion can reject the payload.
pub fn validate_update(request: UpdateServiceRequest) -> Result<ServiceUpdate, CoreError> {
    let cost = request.cost.map(coerce_cost).transpose()?;

    Ok(ServiceUpdate {
        name: request.name,
        service_type: request.service_type,
        provider: request.provider,
        cost,
        status: request.status,
        scheduled_date: request.scheduled_date,
        generator_id: request.generator_id,
        description: request.description,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
