use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use gmoji_core::{domain::ChatId, messaging::port::MessagingPort, session::ModeStore};

use crate::router::AppState;

/// Plain (non-command) text: auto-encode under the chat's stored mode and
/// reply with the result.
pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if text.trim().is_empty() {
        return Ok(());
    }

    auto_encode(&state, ChatId(msg.chat.id.0), text).await;
    Ok(())
}

async fn auto_encode(state: &AppState, chat: ChatId, text: &str) {
    let mode = state.store.mode(chat).await;
    let encoded = state.engine.encode(text, &mode);
    if let Err(e) = state.messenger.send_text(chat, &encoded).await {
        tracing::warn!("send failed for chat {}: {e}", chat.0);
    }
}
