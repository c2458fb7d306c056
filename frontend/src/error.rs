use thiserror::Error;

/// Failures surfaced by the client.
///
/// Request failures cover both non-success HTTP statuses (carrying the
/// server-supplied message when one is present) and transport errors.
/// Validation failures are raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("{0}")]
    Request(String),

    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn message(&self) -> &str {
        match self {
            AppError::Request(message) | AppError::Validation(message) => message,
        }
    }
}
