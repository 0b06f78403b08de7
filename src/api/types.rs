//! API request and response types
//!
//! These mirror the backend's JSON contract field for field. The stub backend
//! decodes the same types, so every shape here is both `Serialize` and
//! `Deserialize`.

use serde::{Deserialize, Serialize};

use crate::api::Result;
use crate::models::{validate_description, validate_title};

// =============================================================================
// AUTH
// =============================================================================

/// Email and password, sent to both register and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Build credentials from borrowed strings
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// Summary of a freshly created account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// New user ID
    pub id: String,
    /// Registered email
    pub email: String,
    /// Whether the account is active
    pub is_active: bool,
}

/// Access token issued on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent calls
    pub access_token: String,
    /// Token type (always "bearer")
    pub token_type: String,
}

// =============================================================================
// TASKS
// =============================================================================

/// Request body for creating a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title
    pub title: String,
    /// Optional task description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateTaskRequest {
    /// Request with a title only, sent as given
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Request built from form input
    ///
    /// The title is trimmed and checked; a blank description is dropped.
    pub fn validated(title: &str, description: Option<&str>) -> Result<Self> {
        Ok(Self {
            title: validate_title(title)?,
            description: validate_description(description)?,
        })
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request body for updating a task; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New completion state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// An empty update
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Change the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Change the completion state
    #[must_use]
    pub fn completed(mut self, done: bool) -> Self {
        self.is_completed = Some(done);
        self
    }

    /// Whether no field would change
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.is_completed.is_none()
    }

    /// Apply the edit-dialog rules to the title and description
    pub fn validate(self) -> Result<Self> {
        let title = self.title.as_deref().map(validate_title).transpose()?;
        let description = match self.description.as_deref() {
            Some(text) => validate_description(Some(text))?,
            None => None,
        };
        Ok(Self {
            title,
            description,
            is_completed: self.is_completed,
        })
    }
}

// =============================================================================
// CHAT
// =============================================================================

/// Request body for sending a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Natural-language message
    pub message: String,
    /// Conversation to continue; the server starts one when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    /// Message starting a new conversation
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            conversation_id: None,
        }
    }

    /// Continue an existing conversation
    #[must_use]
    pub fn in_conversation(mut self, conversation_id: Option<String>) -> Self {
        self.conversation_id = conversation_id;
        self
    }
}

/// Assistant reply to a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant text
    pub message: String,
    /// Conversation the exchange belongs to
    pub conversation_id: String,
}
