//! Data models shared by the client and the stub backend
//!
//! - Task: a todo item with priority and optional recurrence
//! - Conversation / Message: chat history kept by the backend

pub mod chat;
pub mod task;

pub use chat::{Conversation, Message, MessageRole};
pub use task::{
    MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, Priority, RecurringInterval, Task, validate_description,
    validate_title,
};
