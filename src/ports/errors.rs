//! Failure type shared by every collaborator port.

use thiserror::Error;

/// Errors returned by external collaborators.
///
/// None of these are fatal to a session; callers log and degrade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternalServiceError {
    /// Collaborator is not configured or refuses service.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Transport failure talking to the collaborator.
    #[error("network error: {0}")]
    Network(String),

    /// No response within the configured deadline.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Response arrived but could not be understood.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Local persistence failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Request rejected before reaching the collaborator.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ExternalServiceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<std::io::Error> for ExternalServiceError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ExternalServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
