use thiserror::Error;

/// Failures the API layer maps onto client-facing responses.
///
/// Domain services return `anyhow::Result`; these travel inside the
/// `anyhow::Error` and are downcast at the controller boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String, received: String },

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl DomainError {
    pub fn validation(message: impl Into<String>, received: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            received: received.into(),
        }
    }
}
