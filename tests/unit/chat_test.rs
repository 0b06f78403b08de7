//! Tests for the chat façade and chat session

use todopro::ChatSession;
use todopro::api::{ChatRequest, Error};
use todopro::models::MessageRole;

use crate::common::Harness;

#[tokio::test]
async fn test_send_message_starts_conversation() {
    let h = Harness::signed_in().await;
    let response = h.client.chat().send_message(&ChatRequest::new("add buy milk")).await.unwrap();
    assert!(!response.conversation_id.is_empty());
    assert!(!response.message.is_empty());

    let conversations = h.client.chat().conversations().await.unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].id, response.conversation_id);
}

#[tokio::test]
async fn test_session_reuses_conversation() {
    let h = Harness::signed_in().await;
    let mut session = ChatSession::new();
    assert_eq!(session.conversation_id(), None);

    let first = session.send(&h.client, "add buy milk").await.unwrap();
    let second = session.send(&h.client, "and eggs").await.unwrap();

    assert_eq!(first.conversation_id, second.conversation_id);
    assert_eq!(session.conversation_id(), Some(first.conversation_id.as_str()));
    assert_eq!(h.server.conversation_count(), 1);
    assert_eq!(session.transcript().len(), 4);
    assert_eq!(session.transcript()[0].role, MessageRole::User);
    assert_eq!(session.transcript()[1].role, MessageRole::Assistant);

    let last = h.server.requests().pop().unwrap();
    assert!(last.body.contains(&first.conversation_id));
}

#[tokio::test]
async fn test_blank_message_rejected_locally() {
    let h = Harness::signed_in().await;
    let mut session = ChatSession::new();
    let before = h.server.requests().len();

    let err = session.send(&h.client, "   ").await.unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(session.transcript().is_empty());
    assert_eq!(h.server.requests().len(), before);
}

#[tokio::test]
async fn test_resume_loads_history() {
    let h = Harness::signed_in().await;
    let mut session = ChatSession::new();
    let reply = session.send(&h.client, "hello").await.unwrap();

    let resumed = ChatSession::resume(&h.client, &reply.conversation_id).await.unwrap();
    assert_eq!(resumed.transcript(), session.transcript());

    let messages = h.client.chat().messages(&reply.conversation_id).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "hello");
}

#[tokio::test]
async fn test_unknown_conversation_is_404() {
    let h = Harness::signed_in().await;
    let err = h.client.chat().messages("nope").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message(), "Conversation not found");
}
