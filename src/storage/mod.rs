//! Client-side persistence
//!
//! Provides pluggable token backends:
//! - `FileTokenStore`: a file in the user's todopro directory (CLI default)
//! - `MemoryTokenStore`: process-local, for embedding and tests

/// Bearer token storage
pub mod token;

pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
