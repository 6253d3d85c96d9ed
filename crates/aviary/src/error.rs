//! Platform client error types.

use thiserror::Error;

/// Result type for platform client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the platform API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed before a response envelope arrived.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The platform returned an error envelope.
    #[error("platform error: {message} (code: {code})")]
    Api { code: i64, message: String },

    /// The requested entity does not exist.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Missing or rejected credentials.
    #[error("unauthorized: log in again to refresh your token")]
    Unauthorized,

    /// The request was rejected locally, before any network call.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A response arrived but could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// True when the failure means the entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }

    /// True when the failure calls for a fresh login.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }

    /// Rebrand a 404 envelope as a typed not-found for the entity the
    /// caller asked for.
    pub(crate) fn or_not_found(self, resource: &'static str, id: &str) -> Self {
        match self {
            ClientError::Api { code: 404, .. } => ClientError::NotFound {
                resource,
                id: id.to_string(),
            },
            other => other,
        }
    }
}
