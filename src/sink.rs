use async_trait::async_trait;

use crate::error::BotError;
use crate::keyboard::Keyboard;

/// Identifier of the conversation a reply goes to
pub type ChatId = i64;

/// Outbound side of the chat transport
#[async_trait]
pub trait ChatSink: Send + Sync {
    /// Send a text message, optionally with a menu attached
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), BotError>;

    /// Acknowledge a button press so the client stops showing progress
    async fn answer_button(&self, callback_id: &str) -> Result<(), BotError>;
}
