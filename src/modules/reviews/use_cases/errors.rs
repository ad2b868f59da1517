use crate::modules::reviews::adapters::outbound::review_store::StoreError;
use crate::modules::reviews::adapters::outbound::translation::TranslationError;
use crate::modules::reviews::core::validation::ValidationFailure;
use thiserror::Error;

/// Failure of one review operation, classified the way the transport reports it.
#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("internal failure: {0}")]
    Internal(String),
}

impl From<StoreError> for ApplicationError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { .. } => ApplicationError::NotFound(error.to_string()),
            StoreError::Backend(_) => ApplicationError::Internal(error.to_string()),
        }
    }
}

impl From<TranslationError> for ApplicationError {
    fn from(error: TranslationError) -> Self {
        ApplicationError::Internal(error.to_string())
    }
}
