use recordshop_core::types::DbId;
use recordshop_core::validation::ValidationFailure;

/// Failure modes of a catalog operation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The payload broke one or more field rules. Storage was not touched.
    #[error("{0}")]
    Validation(ValidationFailure),

    /// An update or delete targeted an id with no row behind it.
    #[error("Record with id {id} does not exist")]
    NotFound { id: DbId },

    /// Anything the storage layer reported; passed through unchanged.
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}
