//! The request function every façade goes through
//!
//! [`ApiClient::request`] resolves the endpoint against the configured base
//! URL, attaches the stored bearer token, sends the JSON body and turns the
//! response into either the caller's type or a typed [`Error`].
//!
//! One attempt per call: no retries, no timeouts, no cancellation.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, ApiErrorData, Error, Result};
use super::{AuthApi, ChatApi, TasksApi};
use crate::config::ClientConfig;
use crate::session::{ExpireSession, Navigator, UnauthorizedHandler};
use crate::storage::{FileTokenStore, TokenStore};

/// Method, body and extra headers for one request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,
    /// JSON body, if any
    pub body: Option<Value>,
    /// Extra headers, applied after `Content-Type`
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    /// Options for the given method with no body
    #[must_use]
    pub const fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: Vec::new(),
        }
    }

    /// GET request
    #[must_use]
    pub const fn get() -> Self {
        Self::new(Method::GET)
    }

    /// POST request
    #[must_use]
    pub const fn post() -> Self {
        Self::new(Method::POST)
    }

    /// PUT request
    #[must_use]
    pub const fn put() -> Self {
        Self::new(Method::PUT)
    }

    /// PATCH request
    #[must_use]
    pub const fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    /// DELETE request
    #[must_use]
    pub const fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Add an extra header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// HTTP client for the todo backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    unauthorized: Arc<dyn UnauthorizedHandler>,
}

impl ApiClient {
    /// Client whose 401 policy clears `tokens` and redirects via `navigator`
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let policy = Arc::new(ExpireSession::new(Arc::clone(&tokens), navigator));
        Self::with_handler(base_url, tokens, policy)
    }

    /// Client with a custom 401 policy
    pub fn with_handler(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
        unauthorized: Arc<dyn UnauthorizedHandler>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
            unauthorized,
        })
    }

    /// Client for the configured backend with the token in its default file
    pub fn from_config(
        config: &ClientConfig,
        override_url: Option<&str>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        Self::new(
            config.resolve_api_url(override_url),
            Arc::new(FileTokenStore::default_location()),
            navigator,
        )
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token storage used for the bearer header
    #[must_use]
    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    /// Authentication endpoints
    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Task endpoints
    #[must_use]
    pub const fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(self)
    }

    /// Chat endpoints
    #[must_use]
    pub const fn chat(&self) -> ChatApi<'_> {
        ChatApi::new(self)
    }

    /// Send one request and decode the JSON response as `T`
    ///
    /// A 204 (or an empty 2xx body) decodes from JSON `null`, so `()` and
    /// `Option<_>` are valid targets. Any non-2xx status becomes
    /// [`Error::Api`]; a 401 additionally runs the session policy before the
    /// error is returned. Transport failures come back as
    /// [`Error::Transport`] untouched.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let headers = self.build_headers(&options.headers)?;

        log::debug!("{} {}", options.method, url);

        let mut request = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.inspect_err(|e| {
            log::error!("Failed to fetch {url}: {e}");
        })?;
        let status = response.status();

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.unauthorized.on_unauthorized();
            }
            let status_text = status
                .canonical_reason()
                .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string);
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    log::debug!("Failed to read error body from {url}: {e}");
                    String::new()
                },
            };
            let data = ApiErrorData::from_body(&body, &status_text);
            let err = ApiError::new(status.as_u16(), status_text, data);
            log::warn!("{err} from {url}");
            return Err(err.into());
        }

        if status == StatusCode::NO_CONTENT {
            return decode_null(&url);
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return decode_null(&url);
        }
        serde_json::from_slice(&bytes).map_err(|source| Error::Decode { url, source })
    }

    /// Content type, caller headers, then the bearer token
    fn build_headers(&self, extra: &[(String, String)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in extra {
            let invalid = |reason: String| Error::InvalidHeader {
                name: name.clone(),
                reason,
            };
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
            headers.insert(header_name, header_value);
        }

        if let Some(token) = self.tokens.load() {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                Error::InvalidHeader {
                    name: AUTHORIZATION.as_str().to_string(),
                    reason: e.to_string(),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

fn decode_null<T: DeserializeOwned>(url: &str) -> Result<T> {
    serde_json::from_value(Value::Null).map_err(|source| Error::Decode {
        url: url.to_string(),
        source,
    })
}
