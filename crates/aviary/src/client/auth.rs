//! Authentication endpoints.

use aviary_protocol::{LoginRequest, LoginResponse};

use super::PlatformClient;
use crate::error::{ClientError, ClientResult};

impl PlatformClient {
    /// Exchange credentials for a bearer token.
    ///
    /// This is the one call that goes out unauthenticated. The returned
    /// token is not attached to this client automatically; pass it to
    /// [`PlatformClient::with_token`] once persisted.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        if request.email.trim().is_empty() {
            return Err(ClientError::Validation("email is required".to_string()));
        }
        if request.password.trim().is_empty() {
            return Err(ClientError::Validation("password is required".to_string()));
        }

        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
