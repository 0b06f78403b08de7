//! Chat session state
//!
//! Keeps the running transcript of one conversation. The user's line is
//! appended before the request goes out; the assistant's line is appended
//! when the reply arrives.

use serde::Serialize;

use crate::api::{ApiClient, ChatRequest, ChatResponse, Error, Result};
use crate::models::MessageRole;

/// One line of the local transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatLine {
    /// Who wrote it
    pub role: MessageRole,
    /// What was said
    pub content: String,
}

impl ChatLine {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A conversation as seen from the client
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    conversation_id: Option<String>,
    transcript: Vec<ChatLine>,
}

impl ChatSession {
    /// Session that will start a new conversation on its first message
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue an existing conversation, loading its history
    pub async fn resume(client: &ApiClient, conversation_id: &str) -> Result<Self> {
        let messages = client.chat().messages(conversation_id).await?;
        Ok(Self {
            conversation_id: Some(conversation_id.to_string()),
            transcript: messages.into_iter().map(|m| ChatLine::new(m.role, m.content)).collect(),
        })
    }

    /// Conversation ID, once the server has assigned one
    #[must_use]
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    /// Transcript so far
    #[must_use]
    pub fn transcript(&self) -> &[ChatLine] {
        &self.transcript
    }

    /// Send a message and record the reply
    ///
    /// Blank messages are rejected locally. If the request fails the user's
    /// line stays in the transcript and the error is returned.
    pub async fn send(&mut self, client: &ApiClient, text: &str) -> Result<ChatResponse> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Validation("Message is empty".to_string()));
        }

        self.transcript.push(ChatLine::new(MessageRole::User, text));
        let request = ChatRequest::new(text).in_conversation(self.conversation_id.clone());
        let response = client.chat().send_message(&request).await?;

        self.conversation_id = Some(response.conversation_id.clone());
        self.transcript.push(ChatLine::new(MessageRole::Assistant, response.message.clone()));
        Ok(response)
    }
}
