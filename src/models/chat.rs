//! Chat models
//!
//! Conversations and their messages are created by the chat backend; the
//! client only reads them back and renders them.

use serde::{Deserialize, Serialize};

/// A conversation thread owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// When the conversation started (RFC3339)
    pub created_at: String,
}

/// A single message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier
    pub id: String,
    /// Conversation this message belongs to
    pub conversation_id: String,
    /// Who wrote it
    pub role: MessageRole,
    /// Message text
    pub content: String,
    /// When it was written (RFC3339)
    pub timestamp: String,
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// The signed-in user
    User,
    /// The assistant behind the chat endpoint
    Assistant,
    /// System notices
    System,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
            Self::System => write!(f, "system"),
        }
    }
}
