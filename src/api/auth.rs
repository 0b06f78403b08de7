//! Authentication endpoints

use super::client::{ApiClient, RequestOptions};
use super::error::Result;
use super::types::{Credentials, LoginResponse, RegisterResponse};

/// Register, login and logout
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create an account
    pub async fn register(&self, email: &str, password: &str) -> Result<RegisterResponse> {
        let options = RequestOptions::post().json(&Credentials::new(email, password))?;
        self.client.request("/api/auth/register", options).await
    }

    /// Exchange credentials for an access token
    ///
    /// The token is persisted on success, so every later call carries it.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let options = RequestOptions::post().json(&Credentials::new(email, password))?;
        let response: LoginResponse = self.client.request("/api/auth/login", options).await?;
        self.client.tokens().save(&response.access_token)?;
        log::debug!("Stored access token for {email}");
        Ok(response)
    }

    /// Tell the server the session is over, then forget the token
    ///
    /// The local token is cleared even when the server call fails; the
    /// server's result is still returned.
    pub async fn logout(&self) -> Result<()> {
        let result = self
            .client
            .request::<serde_json::Value>("/api/auth/logout", RequestOptions::post())
            .await;
        if let Err(e) = self.client.tokens().clear() {
            log::warn!("Failed to clear auth token: {e}");
        }
        result.map(|_| ())
    }
}
