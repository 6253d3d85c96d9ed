//! The uniform HTTP response envelope.

use serde::{Deserialize, Serialize};

/// Wrapper the platform puts around every HTTP response body.
///
/// `code == 0` signals success and `data` carries the payload. Any other
/// code is an application-level failure described by `message`; the server
/// uses the HTTP status of the failure as the code (404, 401, 500, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Unix seconds when the server produced the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl<T> Envelope<T> {
    /// Code of a successful response.
    pub const SUCCESS: i64 = 0;

    /// Build a success envelope around `data`.
    pub fn success(data: T) -> Self {
        Self {
            code: Self::SUCCESS,
            message: "success".to_string(),
            data: Some(data),
            timestamp: Some(chrono::Utc::now().timestamp()),
            request_id: None,
        }
    }

    /// Build an error envelope with no payload.
    pub fn error(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
            timestamp: Some(chrono::Utc::now().timestamp()),
            request_id: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Self::SUCCESS
    }
}

/// Payload returned by delete endpoints: the id that was removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: String,
}
