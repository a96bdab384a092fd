use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod lead;

/// Failures surfaced by the service layer, mapped onto HTTP statuses at the
/// route boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Required input fields were absent or empty.
    #[error("Missing required field(s): {0}")]
    MissingField(String),

    /// Input was present but failed domain validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Pagination input did not parse as an integer.
    #[error("Invalid page or limit parameter")]
    InvalidParameter,

    /// The targeted lead does not exist.
    #[error("Lead not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
