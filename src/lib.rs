//! todopro - typed client for the Todo Pro task service
//!
//! This library provides the API access layer (one request function and
//! typed façades for auth, tasks and chat), the session policy applied on
//! 401, local task-board and chat-session state, and an in-process stub of
//! the backend.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod board;
pub mod config;
pub mod conversation;
pub mod models;
pub mod output;
pub mod paths;
pub mod server;
pub mod session;
pub mod storage;

pub use api::{ApiClient, ApiError, Error, RequestOptions, Result};
pub use board::TaskBoard;
pub use conversation::ChatSession;
