use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;

use super::types::{ApiResponse, InlineKeyboardMarkup, Message, Update, User};
use crate::config::TelegramConfig;
use crate::error::BotError;
use crate::keyboard::Keyboard;
use crate::sink::{ChatId, ChatSink};

/// Headroom on top of the long polling timeout for the HTTP request itself
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

/// Minimal Bot API client over HTTPS
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    /// Create a client from configuration
    pub fn new(token: String, config: &TelegramConfig) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(config.poll_timeout() + REQUEST_TIMEOUT_MARGIN)
            .build()?;

        Ok(TelegramClient {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(token: String, base_url: String) -> Self {
        TelegramClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, body: Value) -> Result<T, BotError> {
        // The URL embeds the token; strip it from errors before they reach a log line
        let response = self
            .client
            .post(format!("{}/bot{}/{}", self.base_url, self.token, method))
            .json(&body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        debug!("{} answered with status {}", method, response.status());
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;
        envelope.into_result(method)
    }

    /// The bot's own account, used to recognize `/command@username`
    pub async fn get_me(&self) -> Result<User, BotError> {
        self.call("getMe", json!({})).await
    }

    /// Long poll for updates newer than `offset`
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> Result<Vec<Update>, BotError> {
        let mut body = json!({
            "timeout": timeout.as_secs(),
            "allowed_updates": ["message", "callback_query"],
        });
        if let Some(offset) = offset {
            body["offset"] = json!(offset);
        }
        self.call("getUpdates", body).await
    }

    pub async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<Message, BotError> {
        let mut body = json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(keyboard) = keyboard {
            body["reply_markup"] = serde_json::to_value(InlineKeyboardMarkup::from(keyboard))?;
        }
        self.call("sendMessage", body).await
    }

    pub async fn answer_callback_query(&self, callback_id: &str) -> Result<bool, BotError> {
        self.call(
            "answerCallbackQuery",
            json!({ "callback_query_id": callback_id }),
        )
        .await
    }
}

#[async_trait]
impl ChatSink for TelegramClient {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), BotError> {
        let message = self.send_text(chat_id, text, keyboard).await?;
        debug!("Sent message {} to chat {}", message.message_id, chat_id);
        Ok(())
    }

    async fn answer_button(&self, callback_id: &str) -> Result<(), BotError> {
        self.answer_callback_query(callback_id).await?;
        Ok(())
    }
}
