//! tiny_http adapter for the stub backend
//!
//! Handles routing, body parsing and response conversion. Routing itself is
//! a pure function over method, path, bearer token and body text so it can be
//! tested without a socket.

use std::io::{Cursor, Read as _};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tiny_http::{Header, Request, Response, StatusCode};

use super::state::{StubError, StubState};
use crate::api::{ChatRequest, CreateTaskRequest, Credentials, UpdateTaskRequest};

/// What a route produced, before it becomes an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// JSON body with a status
    Json(u16, Value),
    /// Status with no body
    Empty(u16),
    /// Non-JSON body with a status
    Raw(u16, String),
}

impl Reply {
    /// HTTP status of this reply
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Json(status, _) | Self::Empty(status) | Self::Raw(status, _) => *status,
        }
    }
}

impl From<StubError> for Reply {
    fn from(err: StubError) -> Self {
        Self::Json(err.status_code(), err.body())
    }
}

// =============================================================================
// ROUTING
// =============================================================================

/// Map one request onto the state
pub fn route(
    state: &mut StubState,
    method: &str,
    path: &str,
    bearer: Option<&str>,
    body: &str,
) -> Reply {
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    let result = match (method, segments.as_slice()) {
        ("GET", ["health"]) => Ok(Reply::Json(200, serde_json::json!({"status": "ok"}))),

        ("POST", ["api", "auth", "register"]) => parse::<Credentials>(body)
            .and_then(|c| state.register(&c))
            .and_then(|r| json(201, &r)),
        ("POST", ["api", "auth", "login"]) => parse::<Credentials>(body)
            .and_then(|c| state.login(&c))
            .and_then(|r| json(200, &r)),
        ("POST", ["api", "auth", "logout"]) => state.logout(bearer).and_then(|r| json(200, &r)),

        ("GET", ["api", "tasks"]) => {
            user(state, bearer).and_then(|u| json(200, &state.list_tasks(&u)))
        },
        ("POST", ["api", "tasks"]) => user(state, bearer).and_then(|u| {
            let request = parse::<CreateTaskRequest>(body)?;
            json(201, &state.create_task(&u, &request)?)
        }),
        ("GET", ["api", "tasks", id]) => {
            user(state, bearer).and_then(|u| json(200, &state.get_task(&u, id)?))
        },
        ("PUT", ["api", "tasks", id]) => user(state, bearer).and_then(|u| {
            let request = parse::<UpdateTaskRequest>(body)?;
            json(200, &state.update_task(&u, id, &request)?)
        }),
        ("DELETE", ["api", "tasks", id]) => user(state, bearer).and_then(|u| {
            state.delete_task(&u, id)?;
            Ok(Reply::Empty(204))
        }),
        ("PATCH", ["api", "tasks", id, "complete"]) => {
            user(state, bearer).and_then(|u| json(200, &state.toggle_task(&u, id)?))
        },

        ("POST", ["api", "chat"]) => user(state, bearer).and_then(|u| {
            let request = parse::<ChatRequest>(body)?;
            json(200, &state.chat(&u, &request)?)
        }),
        ("GET", ["api", "chat", "conversations"]) => {
            user(state, bearer).and_then(|u| json(200, &state.conversations(&u)))
        },
        ("GET", ["api", "chat", "conversations", id, "messages"]) => {
            user(state, bearer).and_then(|u| json(200, &state.messages(&u, id)?))
        },

        _ => Err(StubError::not_found(format!("Not Found: {method} {path}"))),
    };

    result.unwrap_or_else(Reply::from)
}

fn user(state: &StubState, bearer: Option<&str>) -> Result<String, StubError> {
    state.authenticate(bearer)
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, StubError> {
    serde_json::from_str(body).map_err(|e| StubError::unprocessable(format!("Invalid JSON: {e}")))
}

fn json<T: Serialize>(status: u16, data: &T) -> Result<Reply, StubError> {
    serde_json::to_value(data)
        .map(|value| Reply::Json(status, value))
        .map_err(|e| StubError::bad_request(e.to_string()))
}

// =============================================================================
// TINY_HTTP GLUE
// =============================================================================

/// Pull the bearer token out of the `Authorization` header
pub fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Authorization"))
        .and_then(|h| h.value.as_str().strip_prefix("Bearer ").map(str::to_string))
}

/// Read the whole request body as text
pub fn read_body(request: &mut Request) -> String {
    let mut body = String::new();
    if let Err(e) = request.as_reader().read_to_string(&mut body) {
        log::warn!("Failed to read request body: {e}");
    }
    body
}

/// Convert a reply into a tiny_http response
pub fn to_response(reply: Reply) -> Response<Cursor<Vec<u8>>> {
    match reply {
        Reply::Json(status, value) => {
            let body = value.to_string();
            with_content_type(Response::from_data(body.into_bytes()), "application/json")
                .with_status_code(StatusCode(status))
        },
        Reply::Empty(status) => Response::from_data(Vec::new()).with_status_code(StatusCode(status)),
        Reply::Raw(status, text) => {
            with_content_type(Response::from_data(text.into_bytes()), "text/plain")
                .with_status_code(StatusCode(status))
        },
    }
}

fn with_content_type(
    response: Response<Cursor<Vec<u8>>>,
    content_type: &str,
) -> Response<Cursor<Vec<u8>>> {
    match Header::from_bytes("Content-Type", content_type) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
