//! Output formatting for human and JSON modes
//!
//! Every command builds one of these result structs and renders it either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::conversation::ChatLine;
use crate::models::{Conversation, Message, Task};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn checkbox(done: bool) -> &'static str {
    if done { "[x]" } else { "[ ]" }
}

/// Result of listing tasks
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Tasks, newest first
    pub tasks: Vec<Task>,
    /// Total number of tasks
    pub total: usize,
    /// Number of completed tasks
    pub completed: usize,
}

impl TaskListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.tasks.is_empty() {
            println!("No tasks yet.");
            println!("\nAdd one with: todopro task add \"<title>\"");
            return;
        }

        for task in &self.tasks {
            println!("{} {}  {}", checkbox(task.is_completed), task.id, task.title);
        }
        println!("\n{} of {} completed", self.completed, self.total);
    }
}

/// Result of showing one task
#[derive(Debug, Serialize)]
pub struct TaskShowResult {
    /// The task
    pub task: Task,
}

impl TaskShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(&self.task),
        }
    }

    fn render_human(&self) {
        let t = &self.task;
        println!("{} {}", checkbox(t.is_completed), t.title);
        println!("  ID:       {}", t.id);
        println!("  Priority: {}", t.priority);
        if let Some(description) = &t.description {
            println!("  Notes:    {description}");
        }
        let tags = t.tag_list();
        if !tags.is_empty() {
            println!("  Tags:     {}", tags.join(", "));
        }
        if let Some(due) = &t.due_date {
            println!("  Due:      {due}");
        }
        if let Some(interval) = t.recurring_interval.filter(|_| t.is_recurring) {
            println!("  Repeats:  {interval}");
        }
        println!("  Created:  {}", t.created_at);
        println!("  Updated:  {}", t.updated_at);
    }
}

/// Result of a mutation that returns a task
#[derive(Debug, Serialize)]
pub struct TaskChangeResult {
    /// What happened ("created", "updated", "completed", "reopened")
    pub action: String,
    /// The task as the backend returned it
    pub task: Task,
}

impl TaskChangeResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Task {}: {}", self.action, self.task.title);
                println!("  ID: {}", self.task.id);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Successful operation with a message
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}

/// Session and backend status
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Client version
    pub version: String,
    /// Backend base URL in use
    pub api_url: String,
    /// Whether a token is stored
    pub logged_in: bool,
    /// Where the token lives
    pub token_file: String,
    /// Number of tasks, when the backend could be reached with the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_count: Option<usize>,
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("todopro v{}", self.version);
        println!("  Backend: {}", self.api_url);
        if self.logged_in {
            println!("  Session: logged in");
        } else {
            println!("  Session: not logged in");
        }
        if let Some(count) = self.task_count {
            println!("  Tasks:   {count}");
        }
    }
}

/// Result of sending a chat message
#[derive(Debug, Serialize)]
pub struct ChatReplyResult {
    /// Conversation the exchange belongs to
    pub conversation_id: String,
    /// Assistant's reply
    pub reply: String,
    /// Full local transcript
    pub transcript: Vec<ChatLine>,
}

impl ChatReplyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}", self.reply);
                println!("\n(conversation {})", self.conversation_id);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of listing conversations
#[derive(Debug, Serialize)]
pub struct ConversationListResult {
    /// Conversations, newest first
    pub conversations: Vec<Conversation>,
}

impl ConversationListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.conversations.is_empty() {
                    println!("No conversations yet.");
                    return;
                }
                for c in &self.conversations {
                    println!("{}  {}", c.id, c.created_at);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of listing the messages of a conversation
#[derive(Debug, Serialize)]
pub struct MessageListResult {
    /// Conversation ID
    pub conversation_id: String,
    /// Messages, oldest first
    pub messages: Vec<Message>,
}

impl MessageListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for m in &self.messages {
                    println!("{}: {}", m.role, m.content);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}
