//! In-memory backend state
//!
//! Pure handlers over plain data: every method takes typed input and returns
//! `Result<T, StubError>`. No HTTP types appear here; the adapter in
//! `server::http` translates.

use std::collections::HashMap;

use serde_json::{Value, json};

use crate::api::{
    ChatRequest, ChatResponse, CreateTaskRequest, Credentials, Error, LoginResponse,
    RegisterResponse, UpdateTaskRequest,
};
use crate::models::{
    Conversation, Message, MessageRole, Task, validate_description, validate_title,
};

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid request (400)
    BadRequest,
    /// Missing or unknown credentials (401)
    Unauthorized,
    /// Resource not found (404)
    NotFound,
    /// Body failed validation (422)
    Unprocessable,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Unprocessable => 422,
        }
    }
}

/// Handler failure, rendered as `{"detail": ...}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubError {
    /// Error code (determines HTTP status)
    pub code: ErrorCode,
    /// Detail message
    pub detail: String,
}

impl StubError {
    fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    /// Create a bad request error
    #[must_use]
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, detail)
    }

    /// Create an unauthorized error
    #[must_use]
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, detail)
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, detail)
    }

    /// Create a validation error
    #[must_use]
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unprocessable, detail)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }

    /// JSON error body
    #[must_use]
    pub fn body(&self) -> Value {
        json!({ "detail": self.detail })
    }
}

impl From<Error> for StubError {
    fn from(err: Error) -> Self {
        Self::unprocessable(err.user_message())
    }
}

type StubResult<T> = Result<T, StubError>;

#[derive(Debug, Clone)]
struct StubUser {
    id: String,
    email: String,
    password: String,
}

/// Users, sessions, tasks and chat history for one stub backend
#[derive(Debug, Default)]
pub struct StubState {
    users: Vec<StubUser>,
    sessions: HashMap<String, String>,
    tasks: Vec<Task>,
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl StubState {
    /// Empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Create an account
    pub fn register(&mut self, credentials: &Credentials) -> StubResult<RegisterResponse> {
        let email = credentials.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(StubError::unprocessable("Invalid email address"));
        }
        if credentials.password.chars().count() < 8 {
            return Err(StubError::unprocessable("Password must be at least 8 characters"));
        }
        if self.users.iter().any(|u| u.email == email) {
            return Err(StubError::bad_request("Email already registered"));
        }

        let user = StubUser {
            id: new_id(),
            email,
            password: credentials.password.clone(),
        };
        let response = RegisterResponse {
            id: user.id.clone(),
            email: user.email.clone(),
            is_active: true,
        };
        self.users.push(user);
        Ok(response)
    }

    /// Issue a token for valid credentials
    pub fn login(&mut self, credentials: &Credentials) -> StubResult<LoginResponse> {
        let email = credentials.email.trim().to_lowercase();
        let user = self
            .users
            .iter()
            .find(|u| u.email == email && u.password == credentials.password)
            .ok_or_else(|| StubError::unauthorized("Invalid email or password"))?;

        let token = new_id().replace('-', "");
        self.sessions.insert(token.clone(), user.id.clone());
        Ok(LoginResponse {
            access_token: token,
            token_type: "bearer".to_string(),
        })
    }

    /// Revoke the caller's token
    pub fn logout(&mut self, token: Option<&str>) -> StubResult<Value> {
        self.authenticate(token)?;
        if let Some(token) = token {
            self.sessions.remove(token);
        }
        Ok(json!({ "message": "Successfully logged out" }))
    }

    /// Resolve a bearer token to a user ID
    pub fn authenticate(&self, token: Option<&str>) -> StubResult<String> {
        let token = token.ok_or_else(|| StubError::unauthorized("Not authenticated"))?;
        self.sessions
            .get(token)
            .cloned()
            .ok_or_else(|| StubError::unauthorized("Invalid or expired token"))
    }

    // =========================================================================
    // TASKS
    // =========================================================================

    /// The user's tasks, newest first
    #[must_use]
    pub fn list_tasks(&self, user_id: &str) -> Vec<Task> {
        self.tasks.iter().rev().filter(|t| t.user_id == user_id).cloned().collect()
    }

    /// One of the user's tasks
    pub fn get_task(&self, user_id: &str, id: &str) -> StubResult<Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id && t.user_id == user_id)
            .cloned()
            .ok_or_else(|| StubError::not_found("Task not found"))
    }

    /// Create a task for the user
    pub fn create_task(&mut self, user_id: &str, request: &CreateTaskRequest) -> StubResult<Task> {
        let title = validate_title(&request.title)?;
        let description = validate_description(request.description.as_deref())?;
        let task = Task::new(new_id(), user_id.to_string(), title, description);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Apply a partial update
    pub fn update_task(
        &mut self,
        user_id: &str,
        id: &str,
        request: &UpdateTaskRequest,
    ) -> StubResult<Task> {
        let title = request.title.as_deref().map(validate_title).transpose()?;
        let description = match request.description.as_deref() {
            Some(text) => Some(validate_description(Some(text))?),
            None => None,
        };

        let task = self.task_mut(user_id, id)?;
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = description {
            task.description = description;
        }
        if let Some(done) = request.is_completed {
            task.is_completed = done;
        }
        task.updated_at = now();
        Ok(task.clone())
    }

    /// Delete a task
    pub fn delete_task(&mut self, user_id: &str, id: &str) -> StubResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !(t.id == id && t.user_id == user_id));
        if self.tasks.len() == before {
            return Err(StubError::not_found("Task not found"));
        }
        Ok(())
    }

    /// Flip a task's completion state
    pub fn toggle_task(&mut self, user_id: &str, id: &str) -> StubResult<Task> {
        let task = self.task_mut(user_id, id)?;
        task.is_completed = !task.is_completed;
        task.updated_at = now();
        Ok(task.clone())
    }

    fn task_mut(&mut self, user_id: &str, id: &str) -> StubResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id && t.user_id == user_id)
            .ok_or_else(|| StubError::not_found("Task not found"))
    }

    // =========================================================================
    // CHAT
    // =========================================================================

    /// Record a message and a canned assistant reply
    ///
    /// No language processing happens here: the reply acknowledges the text.
    pub fn chat(&mut self, user_id: &str, request: &ChatRequest) -> StubResult<ChatResponse> {
        let text = request.message.trim();
        if text.is_empty() {
            return Err(StubError::unprocessable("Message is empty"));
        }

        let conversation_id = match request.conversation_id.as_deref() {
            Some(id) => {
                self.conversation(user_id, id)?;
                id.to_string()
            },
            None => {
                let conversation = Conversation {
                    id: new_id(),
                    user_id: user_id.to_string(),
                    created_at: now(),
                };
                let id = conversation.id.clone();
                self.conversations.push(conversation);
                id
            },
        };

        let reply = format!("Noted: {text}");
        self.push_message(&conversation_id, MessageRole::User, text);
        self.push_message(&conversation_id, MessageRole::Assistant, &reply);

        Ok(ChatResponse {
            message: reply,
            conversation_id,
        })
    }

    /// The user's conversations, newest first
    #[must_use]
    pub fn conversations(&self, user_id: &str) -> Vec<Conversation> {
        self.conversations.iter().rev().filter(|c| c.user_id == user_id).cloned().collect()
    }

    /// Messages of one of the user's conversations, oldest first
    pub fn messages(&self, user_id: &str, conversation_id: &str) -> StubResult<Vec<Message>> {
        self.conversation(user_id, conversation_id)?;
        Ok(self
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect())
    }

    /// Total number of conversations across all users
    #[must_use]
    pub fn conversation_count(&self) -> usize {
        self.conversations.len()
    }

    fn conversation(&self, user_id: &str, id: &str) -> StubResult<&Conversation> {
        self.conversations
            .iter()
            .find(|c| c.id == id && c.user_id == user_id)
            .ok_or_else(|| StubError::not_found("Conversation not found"))
    }

    fn push_message(&mut self, conversation_id: &str, role: MessageRole, content: &str) {
        self.messages.push(Message {
            id: new_id(),
            conversation_id: conversation_id.to_string(),
            role,
            content: content.to_string(),
            timestamp: now(),
        });
    }
}
