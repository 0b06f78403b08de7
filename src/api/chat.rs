//! Chat endpoints
//!
//! Messages are interpreted entirely by the backend; the client only relays
//! text and conversation IDs.

use super::client::{ApiClient, RequestOptions};
use super::error::Result;
use super::types::{ChatRequest, ChatResponse};
use crate::models::{Conversation, Message};

/// Conversational interface to the backend
#[derive(Debug, Clone, Copy)]
pub struct ChatApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ChatApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Send a message; the server starts a conversation when none is given
    pub async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.client.request("/api/chat", RequestOptions::post().json(request)?).await
    }

    /// The user's conversations
    pub async fn conversations(&self) -> Result<Vec<Conversation>> {
        self.client.request("/api/chat/conversations", RequestOptions::get()).await
    }

    /// Messages of one conversation, oldest first
    pub async fn messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        self.client
            .request(
                &format!("/api/chat/conversations/{conversation_id}/messages"),
                RequestOptions::get(),
            )
            .await
    }
}
