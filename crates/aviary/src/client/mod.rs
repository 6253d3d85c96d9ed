//! Platform HTTP client.
//!
//! One [`PlatformClient`] per target server. Every versioned endpoint rides
//! the uniform envelope `{code, message, data, timestamp, request_id}`;
//! the client peels it and maps failures onto
//! [`ClientError`](crate::error::ClientError). The per-resource methods
//! live in submodules, one per entity.

mod agents;
mod auth;
mod conversations;
mod knowledge;
mod tools;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use aviary_protocol::Envelope;

use crate::error::{ClientError, ClientResult};

/// Prefix every versioned endpoint lives under.
const API_PREFIX: &str = "/api/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the platform REST API.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    /// HTTP client.
    client: Client,
    /// Base URL of the platform (e.g., "http://localhost:8080").
    base_url: String,
    /// Bearer token attached to every request when present.
    token: Option<String>,
}

impl PlatformClient {
    /// Create a client with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token for the authenticated endpoints.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token is attached.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Liveness probe at the server root. Not enveloped, no token needed.
    pub async fn health(&self) -> ClientResult<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }

    /// Reachability probe for the versioned API. Returns the raw payload
    /// (`{"message": "pong"}`); not enveloped.
    pub async fn ping(&self) -> ClientResult<serde_json::Value> {
        let response = self.client.get(self.url("/ping")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                code: i64::from(status.as_u16()),
                message: format!("ping failed with status {status}"),
            });
        }
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(format!("invalid ping response: {e}")))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Decode an enveloped response, mapping failures onto the error
    /// taxonomy.
    ///
    /// The platform mirrors the HTTP status into the envelope `code` on
    /// failure, so both a 200 carrying `{code: 500}` and a plain 500 with
    /// an envelope body land in the same place. Bodies that are not an
    /// envelope at all (a proxy error page, say) fall back to the HTTP
    /// status.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let body = response.bytes().await?;

        let envelope: Envelope<T> = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                return Err(ClientError::Decode(format!("invalid response envelope: {e}")));
            }
            Err(_) => {
                if status == StatusCode::UNAUTHORIZED {
                    return Err(ClientError::Unauthorized);
                }
                return Err(ClientError::Api {
                    code: i64::from(status.as_u16()),
                    message: String::from_utf8_lossy(&body).trim().to_string(),
                });
            }
        };

        if envelope.is_success() {
            return envelope
                .data
                .ok_or_else(|| ClientError::Decode("success envelope without data".to_string()));
        }

        debug!(code = envelope.code, message = %envelope.message, "error envelope");
        match envelope.code {
            401 => Err(ClientError::Unauthorized),
            code => Err(ClientError::Api {
                code,
                message: envelope.message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_strips_trailing_slash() {
        let client = PlatformClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert!(!client.has_token());
    }

    #[test]
    fn test_url_carries_api_prefix() {
        let client = PlatformClient::new("http://localhost:8080");
        assert_eq!(
            client.url("/agents/agent-1"),
            "http://localhost:8080/api/v1/agents/agent-1"
        );
    }

    #[test]
    fn test_with_token() {
        let client = PlatformClient::new("http://localhost:8080").with_token("tok");
        assert!(client.has_token());
    }
}
