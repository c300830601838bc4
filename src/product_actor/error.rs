use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors surfaced by the catalog client and view-model.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Price cannot be negative: {0}")]
    NegativePrice(i64),
    #[error("No authenticated session")]
    NotSignedIn,
    #[error("Rejected by store: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Rejected(reason) => CatalogError::Rejected(reason),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
