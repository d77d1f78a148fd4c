use crate::types::DbId;
use crate::validation::ValidationFailure;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// One or more record fields failed the validation gate.
    #[error("{0}")]
    InvalidFields(ValidationFailure),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
