//! Shared test fixtures and helpers
//!
//! A `Harness` is a running stub backend plus a client wired to an in-memory
//! token store and a navigator that records redirects.

use std::sync::Arc;

use todopro::ApiClient;
use todopro::server::StubServer;
use todopro::session::RecordingNavigator;
use todopro::storage::{MemoryTokenStore, TokenStore};

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "correct-horse";

/// Stub backend and a client pointed at it
pub struct Harness {
    pub server: StubServer,
    pub tokens: Arc<MemoryTokenStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub client: ApiClient,
}

impl Harness {
    /// Fresh backend, signed out
    pub fn new() -> Self {
        let server = StubServer::start_local().expect("failed to start stub backend");
        let tokens = Arc::new(MemoryTokenStore::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let client = ApiClient::new(server.base_url(), tokens.clone(), navigator.clone())
            .expect("failed to build client");

        Self {
            server,
            tokens,
            navigator,
            client,
        }
    }

    /// Fresh backend with `EMAIL` registered and logged in
    pub async fn signed_in() -> Self {
        let harness = Self::new();
        harness.client.auth().register(EMAIL, PASSWORD).await.expect("register failed");
        harness.client.auth().login(EMAIL, PASSWORD).await.expect("login failed");
        harness
    }

    /// Current stored token
    pub fn token(&self) -> Option<String> {
        self.tokens.load()
    }
}

/// Client whose base URL points at a port nothing listens on
pub fn unreachable_client() -> ApiClient {
    ApiClient::new(
        "http://127.0.0.1:9",
        Arc::new(MemoryTokenStore::with_token("t")),
        Arc::new(RecordingNavigator::new()),
    )
    .expect("failed to build client")
}
