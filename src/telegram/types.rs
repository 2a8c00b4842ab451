//! The subset of Bot API objects the bot reads and writes.

use serde::{Deserialize, Serialize};

use crate::error::BotError;
use crate::keyboard::Keyboard;

/// Envelope around every Bot API response
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self, method: &str) -> Result<T, BotError> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(BotError::Api {
                method: method.to_string(),
                description: self
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    /// Absent for very old messages
    pub message: Option<Message>,
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

impl From<&Keyboard> for InlineKeyboardMarkup {
    fn from(keyboard: &Keyboard) -> Self {
        Self {
            inline_keyboard: keyboard
                .buttons
                .iter()
                .map(|button| {
                    vec![InlineKeyboardButton {
                        text: button.label.clone(),
                        callback_data: button.token.clone(),
                    }]
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_updates() {
        let body = r#"{
            "ok": true,
            "result": [
                {
                    "update_id": 10,
                    "message": {
                        "message_id": 1,
                        "date": 1700000000,
                        "chat": {"id": 42, "type": "private"},
                        "text": "/start"
                    }
                },
                {
                    "update_id": 11,
                    "callback_query": {
                        "id": "cb1",
                        "from": {"id": 42, "is_bot": false, "first_name": "A"},
                        "chat_instance": "x",
                        "data": "diff_easy"
                    }
                }
            ]
        }"#;

        let response: ApiResponse<Vec<Update>> = serde_json::from_str(body).unwrap();
        let updates = response.into_result("getUpdates").unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].message.as_ref().unwrap().chat.id, 42);
        let query = updates[1].callback_query.as_ref().unwrap();
        assert_eq!(query.data.as_deref(), Some("diff_easy"));
        assert!(query.message.is_none());
    }

    #[test]
    fn test_error_envelope() {
        let body = r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#;
        let response: ApiResponse<bool> = serde_json::from_str(body).unwrap();
        match response.into_result("getMe") {
            Err(BotError::Api {
                method,
                description,
            }) => {
                assert_eq!(method, "getMe");
                assert_eq!(description, "Unauthorized");
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_keyboard_markup() {
        let markup = InlineKeyboardMarkup::from(&Keyboard::difficulty());
        assert_eq!(
            serde_json::to_value(&markup).unwrap(),
            json!({
                "inline_keyboard": [
                    [{"text": "Легкая", "callback_data": "diff_easy"}],
                    [{"text": "Средняя", "callback_data": "diff_medium"}],
                    [{"text": "Сложная", "callback_data": "diff_hard"}]
                ]
            })
        );
    }
}
