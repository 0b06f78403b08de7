//! In-process stub of the todo backend
//!
//! Serves the same routes and JSON shapes as the real service from memory,
//! over a real socket, so the client can be exercised end to end. Used by the
//! `serve-stub` command and by the test suite.
//!
//! - `state` - users, tokens, tasks and conversations
//! - `http` - routing and tiny_http glue

pub mod http;
pub mod state;

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

use serde_json::Value;
use tiny_http::Server;

pub use http::Reply;
pub use state::{ErrorCode, StubError, StubState};

use crate::api::{Error, Result};

/// A request as the stub saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Path including any query string
    pub path: String,
    /// Raw `Authorization` header value
    pub authorization: Option<String>,
    /// Request body text
    pub body: String,
}

#[derive(Debug, Default)]
struct Shared {
    state: Mutex<StubState>,
    faults: Mutex<VecDeque<Reply>>,
    log: Mutex<Vec<RecordedRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Running stub backend
///
/// Stops when dropped.
pub struct StubServer {
    server: Arc<Server>,
    shared: Arc<Shared>,
    base_url: String,
    worker: Option<JoinHandle<()>>,
}

impl fmt::Debug for StubServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubServer").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl StubServer {
    /// Bind to `addr` and start serving on a background thread
    pub fn start(addr: &str) -> Result<Self> {
        let server = Server::http(addr).map_err(|e| Error::Server(e.to_string()))?;
        let bound = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| Error::Server(format!("{addr} is not an IP address")))?;
        let base_url = format!("http://{bound}");

        let server = Arc::new(server);
        let shared = Arc::new(Shared::default());
        let worker = {
            let server = Arc::clone(&server);
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || serve(&server, &shared))
        };

        log::info!("Stub backend listening on {base_url}");
        Ok(Self {
            server,
            shared,
            base_url,
            worker: Some(worker),
        })
    }

    /// Start on an ephemeral localhost port
    pub fn start_local() -> Result<Self> {
        Self::start("127.0.0.1:0")
    }

    /// Base URL to point a client at
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Answer the next request with `status` and `body` instead of routing it
    ///
    /// `body` is sent as JSON when it parses as JSON, otherwise as plain
    /// text. Queued faults are consumed in order.
    pub fn fail_next(&self, status: u16, body: &str) {
        let reply = match serde_json::from_str::<Value>(body) {
            Ok(value) => Reply::Json(status, value),
            Err(_) if body.is_empty() => Reply::Empty(status),
            Err(_) => Reply::Raw(status, body.to_string()),
        };
        lock(&self.shared.faults).push_back(reply);
    }

    /// Every request received so far, oldest first
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.shared.log).clone()
    }

    /// Number of conversations the backend has created
    #[must_use]
    pub fn conversation_count(&self) -> usize {
        lock(&self.shared.state).conversation_count()
    }

    /// Block until the server thread exits
    pub fn wait(mut self) {
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            log::error!("Stub backend thread panicked");
        }
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn serve(server: &Server, shared: &Shared) {
    for mut request in server.incoming_requests() {
        let method = request.method().as_str().to_uppercase();
        let path = request.url().to_string();
        let authorization = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("Authorization"))
            .map(|h| h.value.as_str().to_string());
        let bearer = http::bearer_token(&request);
        let body = http::read_body(&mut request);

        log::debug!("stub: {method} {path}");
        lock(&shared.log).push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            authorization,
            body: body.clone(),
        });

        let fault = lock(&shared.faults).pop_front();
        let reply = match fault {
            Some(reply) => reply,
            None => http::route(&mut lock(&shared.state), &method, &path, bearer.as_deref(), &body),
        };

        if let Err(e) = request.respond(http::to_response(reply)) {
            log::warn!("stub: failed to respond to {method} {path}: {e}");
        }
    }
}
