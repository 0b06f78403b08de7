//! Command implementations

mod auth;
mod chat;
mod config;
mod serve;
mod status;
mod task;

use std::sync::Arc;

use todopro::ApiClient;
use todopro::config::ClientConfig;
use todopro::session::{LOGIN_ROUTE, Navigator};

pub use auth::{login, logout, register};
pub use chat::chat_cmd;
pub use config::config_cmd;
pub use serve::serve_stub;
pub use status::status;
pub use task::task_cmd;

/// Navigator for the terminal: there is no screen to switch to, so tell the
/// user how to get back in
#[derive(Debug, Clone, Copy)]
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn redirect(&self, route: &str) {
        log::debug!("Redirect to {route}");
        if route == LOGIN_ROUTE {
            eprintln!("Session expired. Run `todopro login <email>` to sign in again.");
        }
    }
}

/// Client for the configured backend using the stored token
pub fn connect(api_url: Option<&str>) -> anyhow::Result<ApiClient> {
    let config = ClientConfig::load();
    let client = ApiClient::from_config(&config, api_url, Arc::new(TerminalNavigator))?;
    log::debug!("Using backend {}", client.base_url());
    Ok(client)
}
