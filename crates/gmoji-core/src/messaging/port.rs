use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::MessagingCapabilities,
    Result,
};

/// Cross-messenger port.
///
/// Telegram is the first implementation; the shape leaves room for other
/// chat backends behind the same interface.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    fn capabilities(&self) -> MessagingCapabilities;

    /// Send a message verbatim, with no parse mode. Cipher output goes
    /// through here: encoded or passed-through text must never be
    /// interpreted as markup.
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef>;

    /// Send a bot-authored message using Telegram's HTML subset.
    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef>;
}
