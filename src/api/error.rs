//! Error types for the API access layer
//!
//! Every non-2xx response becomes an [`ApiError`] carrying the HTTP status, its
//! reason phrase and whatever error body the backend sent. Everything else the
//! client can fail with is a variant of [`Error`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Parsed error body returned by the backend
///
/// The backend answers errors with `{"detail": "..."}`. Any other fields are
/// kept in `extra` so callers can inspect validation payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorData {
    /// Human-readable error detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Remaining fields of the error body
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiErrorData {
    /// Error data carrying only a detail message
    #[must_use]
    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            extra: Map::new(),
        }
    }

    /// Best-effort parse of an error body
    ///
    /// A body that is not valid JSON degrades to `{"detail": status_text}`.
    /// A `detail` that is not a string (validation errors send an array) is
    /// kept as its JSON rendering.
    #[must_use]
    pub fn from_body(body: &str, status_text: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(mut fields)) => {
                let detail = fields.remove("detail").map(|detail| match detail {
                    Value::String(text) => text,
                    other => other.to_string(),
                });
                Self {
                    detail,
                    extra: fields,
                }
            },
            Ok(_) => Self::default(),
            Err(_) => Self::with_detail(status_text),
        }
    }
}

/// A non-2xx HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Reason phrase for the status (e.g. "Not Found")
    pub status_text: String,
    /// Parsed error body
    pub data: ApiErrorData,
}

impl ApiError {
    /// Create an API error
    #[must_use]
    pub fn new(status: u16, status_text: impl Into<String>, data: ApiErrorData) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            data,
        }
    }

    /// The error detail, falling back to the status text
    #[must_use]
    pub fn detail(&self) -> &str {
        self.data.detail.as_deref().unwrap_or(&self.status_text)
    }

    /// Whether this is a 401 response
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Whether this is a 404 response
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API error: {} {}", self.status, self.status_text)?;
        let detail = self.detail();
        if detail != self.status_text {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Errors returned by the client, its façades and local state helpers
#[derive(Debug, Error)]
pub enum Error {
    /// The backend answered with a non-2xx status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request never produced an HTTP response
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A 2xx body did not match the expected shape
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// Request URL
        url: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// A header name or value was rejected
    #[error("invalid header {name}: {reason}")]
    InvalidHeader {
        /// Header name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// The task is not in the local task list
    #[error("task {0} is not on the board")]
    NotOnBoard(String),

    /// Token storage failed
    #[error("token storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The stub backend could not be started
    #[error("stub server failed: {0}")]
    Server(String),
}

impl Error {
    /// The HTTP status, if the backend answered
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// The API error, if the backend answered
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Human-facing message: the API detail when there is one
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.detail().to_string(),
            other => other.to_string(),
        }
    }
}

/// Result alias for client operations
pub type Result<T> = std::result::Result<T, Error>;
