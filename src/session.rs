//! Session termination policy
//!
//! The request function reports a 401 like any other API error and then hands
//! control to an [`UnauthorizedHandler`]. The default handler,
//! [`ExpireSession`], ends the session: it clears the stored token and sends
//! the user to the login route through a [`Navigator`].

use std::sync::{Arc, Mutex, PoisonError};

use crate::storage::TokenStore;

/// Route the user is sent to when the session ends
pub const LOGIN_ROUTE: &str = "/login";

/// Moves the user to another screen
pub trait Navigator: Send + Sync + std::fmt::Debug {
    /// Navigate to `route`
    fn redirect(&self, route: &str);
}

/// Reacts to a 401 response
pub trait UnauthorizedHandler: Send + Sync + std::fmt::Debug {
    /// Called once for every 401 the client receives
    fn on_unauthorized(&self);
}

/// Navigator that only logs the redirect
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect(&self, route: &str) {
        log::info!("Session ended, redirecting to {route}");
    }
}

/// Navigator that remembers every redirect
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes redirected to so far, oldest first
    #[must_use]
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: &str) {
        self.routes.lock().unwrap_or_else(PoisonError::into_inner).push(route.to_string());
    }
}

/// Clears the token and redirects to [`LOGIN_ROUTE`]
#[derive(Debug, Clone)]
pub struct ExpireSession {
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl ExpireSession {
    /// Policy over the given token store and navigator
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { tokens, navigator }
    }
}

impl UnauthorizedHandler for ExpireSession {
    fn on_unauthorized(&self) {
        if let Err(e) = self.tokens.clear() {
            log::warn!("Failed to clear auth token: {e}");
        }
        self.navigator.redirect(LOGIN_ROUTE);
    }
}

/// Leaves the session alone; the caller only sees the error
///
/// For background work where a forced navigation would be wrong.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreUnauthorized;

impl UnauthorizedHandler for IgnoreUnauthorized {
    fn on_unauthorized(&self) {
        log::debug!("Ignoring 401 response");
    }
}
