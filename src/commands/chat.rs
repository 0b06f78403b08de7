//! Chat command - talk to the task assistant

use todopro::output::{ChatReplyResult, ConversationListResult, MessageListResult, OutputMode};
use todopro::{ApiClient, ChatSession};

use crate::cli::ChatAction;

/// Handle chat subcommands
pub async fn chat_cmd(client: &ApiClient, action: ChatAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ChatAction::Send {
            message,
            conversation,
        } => send(client, &message, conversation.as_deref(), mode).await,
        ChatAction::Conversations => {
            let conversations = client.chat().conversations().await?;
            ConversationListResult { conversations }.render(mode);
            Ok(())
        },
        ChatAction::Messages { id } => {
            let messages = client.chat().messages(&id).await?;
            MessageListResult {
                conversation_id: id,
                messages,
            }
            .render(mode);
            Ok(())
        },
    }
}

async fn send(
    client: &ApiClient,
    message: &str,
    conversation: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut session = match conversation {
        Some(id) => ChatSession::resume(client, id).await?,
        None => ChatSession::new(),
    };

    let response = session.send(client, message).await?;

    ChatReplyResult {
        conversation_id: response.conversation_id,
        reply: response.message,
        transcript: session.transcript().to_vec(),
    }
    .render(mode);
    Ok(())
}
