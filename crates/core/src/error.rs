/// Domain-level error type shared across the workspace.
///
/// HTTP-specific mapping (status codes, response bodies) lives in
/// `genops_api::error::AppError`; this enum only describes what went wrong
/// in domain terms.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// A client-supplied value failed validation.
    #[error("{0}")]
    Validation(String),
}
