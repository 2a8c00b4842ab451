use log::{info, warn};
use std::time::Duration;
use tokio::time::sleep;

use super::client::TelegramClient;
use super::types::Update;
use crate::config::TelegramConfig;
use crate::dispatcher::{Dispatcher, Inbound};
use crate::error::BotError;
use crate::sink::ChatSink;

/// Translate a Bot API update into a dispatcher event.
///
/// Updates without text or button data, unknown commands and commands for
/// other bots yield `None`.
pub fn inbound_from_update(update: Update, bot_username: Option<&str>) -> Option<Inbound> {
    if let Some(query) = update.callback_query {
        return Some(Inbound::Button {
            chat_id: query.message.map(|message| message.chat.id),
            callback_id: query.id,
            data: query.data.unwrap_or_default(),
        });
    }

    let message = update.message?;
    let text = message.text?;
    Inbound::from_message(message.chat.id, &text, bot_username)
}

/// Dispatch a fetched batch in order, returning the offset that confirms it
pub async fn dispatch_batch<S: ChatSink>(
    dispatcher: &Dispatcher<S>,
    updates: Vec<Update>,
    offset: Option<i64>,
    bot_username: Option<&str>,
) -> Option<i64> {
    let mut next_offset = offset;

    for update in updates {
        next_offset = Some(update.update_id + 1);
        if let Some(inbound) = inbound_from_update(update, bot_username) {
            dispatcher.dispatch(inbound).await;
        }
    }

    next_offset
}

/// Fetch one batch of updates and dispatch them in order.
///
/// Returns the offset to use for the next poll.
pub async fn poll_once<S: ChatSink>(
    client: &TelegramClient,
    dispatcher: &Dispatcher<S>,
    offset: Option<i64>,
    timeout: Duration,
    bot_username: Option<&str>,
) -> Result<Option<i64>, BotError> {
    let updates = client.get_updates(offset, timeout).await?;
    Ok(dispatch_batch(dispatcher, updates, offset, bot_username).await)
}

/// Tell the Bot API that everything before `offset` has been handled.
///
/// Telegram only forgets updates once a later getUpdates carries the new
/// offset; without this, a restart replays the last batch.
pub async fn confirm_offset(client: &TelegramClient, offset: Option<i64>) -> Result<(), BotError> {
    if let Some(offset) = offset {
        client.get_updates(Some(offset), Duration::ZERO).await?;
    }
    Ok(())
}

/// Long-poll until Ctrl-C.
///
/// The signal only interrupts the wait for updates; a fetched batch is
/// always dispatched completely and its offset confirmed before returning.
pub async fn run_polling<S: ChatSink>(
    client: &TelegramClient,
    dispatcher: &Dispatcher<S>,
    config: &TelegramConfig,
) -> Result<(), BotError> {
    let me = client.get_me().await?;
    let bot_username = me.username.as_deref();
    info!(
        "Bot @{} started, polling for updates",
        bot_username.unwrap_or("unknown")
    );

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut offset = None;

    loop {
        let fetched = tokio::select! {
            signal = &mut shutdown => {
                signal?;
                info!("Shutting down");
                return confirm_offset(client, offset).await;
            }
            fetched = client.get_updates(offset, config.poll_timeout()) => fetched,
        };

        match fetched {
            Ok(updates) => {
                offset = dispatch_batch(dispatcher, updates, offset, bot_username).await;
            }
            Err(e) => {
                warn!("Polling failed: {}", e);
                sleep(config.retry_delay()).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::Command;

    fn update_from(json: &str) -> Update {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_command_update() {
        let inbound = inbound_from_update(
            update_from(
                r#"{"update_id": 1, "message": {"message_id": 5, "chat": {"id": 9}, "text": "/help@recipe_bot"}}"#,
            ),
            Some("recipe_bot"),
        );
        assert_eq!(
            inbound,
            Some(Inbound::Command {
                chat_id: 9,
                command: Command::Help
            })
        );
    }

    #[test]
    fn test_callback_update() {
        let inbound = inbound_from_update(
            update_from(
                r#"{"update_id": 2, "callback_query": {"id": "q1", "data": "cal_200",
                    "message": {"message_id": 5, "chat": {"id": 9}}}}"#,
            ),
            None,
        );
        assert_eq!(
            inbound,
            Some(Inbound::Button {
                chat_id: Some(9),
                callback_id: "q1".to_string(),
                data: "cal_200".to_string()
            })
        );
    }

    #[test]
    fn test_message_without_text_is_skipped() {
        let inbound = inbound_from_update(
            update_from(r#"{"update_id": 3, "message": {"message_id": 5, "chat": {"id": 9}}}"#),
            None,
        );
        assert_eq!(inbound, None);
        assert_eq!(inbound_from_update(update_from(r#"{"update_id": 4}"#), None), None);
    }

    #[test]
    fn test_command_for_another_bot_is_skipped() {
        let inbound = inbound_from_update(
            update_from(
                r#"{"update_id": 5, "message": {"message_id": 6, "chat": {"id": 9}, "text": "/random@other_bot"}}"#,
            ),
            Some("recipe_bot"),
        );
        assert_eq!(inbound, None);
    }
}
