//! Centralized path definitions for todopro
//!
//! All client state lives in one per-user directory:
//!
//! ```text
//! ~/.todopro/
//! ├── config.toml     # API base URL
//! └── auth_token      # Bearer token (removed on logout or 401)
//! ```
//!
//! Set `TODOPRO_HOME` to use a different directory.

use std::path::PathBuf;

/// Environment variable overriding the state directory
pub const HOME_ENV: &str = "TODOPRO_HOME";

/// State directory name under the user's home
const GLOBAL_DIR: &str = ".todopro";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Token filename
const TOKEN_FILE: &str = "auth_token";

/// Get the todopro state directory.
///
/// Returns `$TODOPRO_HOME` when set, otherwise `~/.todopro/`.
#[must_use]
pub fn global_dir() -> PathBuf {
    std::env::var_os(HOME_ENV)
        .filter(|dir| !dir.is_empty())
        .map_or_else(
            || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR),
            PathBuf::from,
        )
}

/// Get the config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    global_dir().join(CONFIG_FILE)
}

/// Get the token file path.
#[must_use]
pub fn token_file() -> PathBuf {
    global_dir().join(TOKEN_FILE)
}
