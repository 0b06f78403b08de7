//! API access layer
//!
//! A single request function ([`ApiClient::request`]) plus three typed
//! façades over the backend's fixed endpoints.
//!
//! ## Design
//!
//! - **One request path**: every façade call goes through `request`, which owns
//!   headers, bearer token, JSON encoding and error mapping
//! - **Errors carry HTTP semantics**: non-2xx responses become [`ApiError`]
//!   with status, status text and parsed detail
//! - **Session policy is injected**: a 401 runs the client's
//!   [`UnauthorizedHandler`](crate::session::UnauthorizedHandler)

mod auth;
mod chat;
mod client;
mod error;
mod tasks;
mod types;

pub use auth::AuthApi;
pub use chat::ChatApi;
pub use client::{ApiClient, RequestOptions};
pub use error::{ApiError, ApiErrorData, Error, Result};
pub use tasks::TasksApi;
pub use types::{
    ChatRequest, ChatResponse, Credentials, CreateTaskRequest, LoginResponse, RegisterResponse,
    UpdateTaskRequest,
};
