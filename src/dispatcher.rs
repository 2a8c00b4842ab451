//! Routes inbound chat events to the filter engine and sends the replies.

use log::{debug, error, info, warn};
use std::sync::Arc;

use crate::callback::CallbackAction;
use crate::error::BotError;
use crate::filters::{FilterEngine, Predicate};
use crate::keyboard::Keyboard;
use crate::messages;
use crate::model::Recipe;
use crate::presenter::{format_list, format_recipe};
use crate::sink::{ChatId, ChatSink};
use crate::store::RecipeStore;

/// Bot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Random,
    List,
    Categories,
    Time,
    Difficulty,
    Calories,
}

impl Command {
    /// Parse `/name`, `/name@botname` or `/name args`; `None` for anything else.
    ///
    /// Names are case-insensitive. A command addressed to another bot is
    /// rejected when `bot_username` is known.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let word = text.strip_prefix('/')?.split_whitespace().next()?;
        let (name, mention) = match word.split_once('@') {
            Some((name, mention)) => (name, Some(mention)),
            None => (word, None),
        };
        if let (Some(mention), Some(own)) = (mention, bot_username) {
            if !mention.eq_ignore_ascii_case(own) {
                return None;
            }
        }
        match name.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "help" => Some(Command::Help),
            "random" => Some(Command::Random),
            "list" => Some(Command::List),
            "categories" => Some(Command::Categories),
            "time" => Some(Command::Time),
            "difficulty" => Some(Command::Difficulty),
            "calories" => Some(Command::Calories),
            _ => None,
        }
    }
}

/// A transport-independent inbound event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Command { chat_id: ChatId, command: Command },
    /// Free text, read as a comma-separated ingredient list
    Text { chat_id: ChatId, text: String },
    /// Button press; the originating chat may be unknown
    Button {
        chat_id: Option<ChatId>,
        callback_id: String,
        data: String,
    },
}

impl Inbound {
    /// Classify a text message. Unknown `/commands`, and commands meant for
    /// another bot, yield `None`.
    pub fn from_message(chat_id: ChatId, text: &str, bot_username: Option<&str>) -> Option<Self> {
        if text.starts_with('/') {
            return match Command::parse(text, bot_username) {
                Some(command) => Some(Inbound::Command { chat_id, command }),
                None => {
                    debug!("Ignoring command {:?}", text);
                    None
                }
            };
        }
        Some(Inbound::Text {
            chat_id,
            text: text.to_string(),
        })
    }

    pub fn chat_id(&self) -> Option<ChatId> {
        match self {
            Inbound::Command { chat_id, .. } | Inbound::Text { chat_id, .. } => Some(*chat_id),
            Inbound::Button { chat_id, .. } => *chat_id,
        }
    }
}

pub struct Dispatcher<S> {
    engine: FilterEngine,
    sink: S,
}

impl<S: ChatSink> Dispatcher<S> {
    pub fn new(store: Arc<RecipeStore>, sink: S) -> Self {
        Self {
            engine: FilterEngine::new(store),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Handle one event. Failures are logged and, when the chat is known,
    /// answered with a generic apology; nothing is retried.
    pub async fn dispatch(&self, inbound: Inbound) {
        if let Err(e) = self.handle(&inbound).await {
            error!("Update {:?} caused error: {}", inbound, e);
            if let Some(chat_id) = inbound.chat_id() {
                if let Err(e) = self
                    .sink
                    .send_message(chat_id, messages::GENERIC_APOLOGY, None)
                    .await
                {
                    error!("Failed to send apology to chat {}: {}", chat_id, e);
                }
            }
        }
    }

    pub async fn handle(&self, inbound: &Inbound) -> Result<(), BotError> {
        match inbound {
            Inbound::Command { chat_id, command } => self.handle_command(*chat_id, *command).await,
            Inbound::Text { chat_id, text } => {
                debug!("Ingredient search in chat {}: {:?}", chat_id, text);
                self.reply_with_match(
                    *chat_id,
                    &Predicate::ingredients(text),
                    messages::NO_INGREDIENT_MATCH,
                )
                .await
            }
            Inbound::Button {
                chat_id,
                callback_id,
                data,
            } => self.handle_button(*chat_id, callback_id, data).await,
        }
    }

    async fn handle_command(&self, chat_id: ChatId, command: Command) -> Result<(), BotError> {
        info!("Command {:?} from chat {}", command, chat_id);
        match command {
            Command::Start => self.send(chat_id, messages::WELCOME, None).await,
            Command::Help => self.send(chat_id, messages::HELP, None).await,
            Command::Random => {
                self.reply_with_match(chat_id, &Predicate::Any, messages::NO_FILTER_MATCH)
                    .await
            }
            Command::List => {
                let list = format_list(self.engine.store());
                self.send(chat_id, &list, None).await
            }
            Command::Categories => {
                self.send(chat_id, messages::CHOOSE_CATEGORY, Some(&Keyboard::categories()))
                    .await
            }
            Command::Time => {
                self.send(chat_id, messages::CHOOSE_TIME, Some(&Keyboard::time()))
                    .await
            }
            Command::Difficulty => {
                self.send(chat_id, messages::CHOOSE_DIFFICULTY, Some(&Keyboard::difficulty()))
                    .await
            }
            Command::Calories => {
                self.send(chat_id, messages::CHOOSE_CALORIES, Some(&Keyboard::calories()))
                    .await
            }
        }
    }

    async fn handle_button(
        &self,
        chat_id: Option<ChatId>,
        callback_id: &str,
        data: &str,
    ) -> Result<(), BotError> {
        let (predicate, no_match) = match CallbackAction::parse(data) {
            CallbackAction::Category(category) => {
                (Predicate::Category(category), messages::EMPTY_CATEGORY)
            }
            CallbackAction::Time(bucket) => (Predicate::MaxTime(bucket), messages::NO_FILTER_MATCH),
            CallbackAction::Difficulty(level) => {
                (Predicate::Difficulty(level), messages::NO_FILTER_MATCH)
            }
            CallbackAction::Calories(bucket) => {
                (Predicate::MaxCalories(bucket), messages::NO_FILTER_MATCH)
            }
            CallbackAction::Ignored(data) => {
                debug!("Ignoring button {:?}", data);
                return Ok(());
            }
        };

        self.sink.answer_button(callback_id).await?;

        match chat_id {
            Some(chat_id) => self.reply_with_match(chat_id, &predicate, no_match).await,
            None => {
                warn!("Button {:?} has no originating chat, nothing to reply to", data);
                Ok(())
            }
        }
    }

    /// Send a random recipe matching `predicate`, or `no_match` if there is none
    async fn reply_with_match(
        &self,
        chat_id: ChatId,
        predicate: &Predicate,
        no_match: &str,
    ) -> Result<(), BotError> {
        match self.engine.select(predicate) {
            Some(recipe) => {
                self.send_recipe(chat_id, recipe).await;
                Ok(())
            }
            None => self.send(chat_id, no_match, None).await,
        }
    }

    /// Delivery failures end here: one apology attempt, no retry
    async fn send_recipe(&self, chat_id: ChatId, recipe: &Recipe) {
        let card = format_recipe(recipe);
        if let Err(e) = self.sink.send_message(chat_id, &card, None).await {
            error!("Error sending recipe {:?}: {}", recipe.name, e);
            if let Err(e) = self
                .sink
                .send_message(chat_id, messages::DELIVERY_APOLOGY, None)
                .await
            {
                error!("Failed to send apology to chat {}: {}", chat_id, e);
            }
        }
    }

    async fn send(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), BotError> {
        self.sink.send_message(chat_id, text, keyboard).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start", None), Some(Command::Start));
        assert_eq!(Command::parse("/random@recipe_bot", None), Some(Command::Random));
        assert_eq!(Command::parse("/list please", None), Some(Command::List));
        assert_eq!(Command::parse("/unknown", None), None);
        assert_eq!(Command::parse("start", None), None);
        assert_eq!(Command::parse("/", None), None);
    }

    #[test]
    fn test_command_names_are_case_insensitive() {
        assert_eq!(Command::parse("/Start", None), Some(Command::Start));
        assert_eq!(Command::parse("/HELP", Some("recipe_bot")), Some(Command::Help));
    }

    #[test]
    fn test_commands_for_other_bots_are_rejected() {
        let own = Some("Recipe_Bot");
        assert_eq!(Command::parse("/time@recipe_bot", own), Some(Command::Time));
        assert_eq!(Command::parse("/time@weather_bot", own), None);
        assert_eq!(Command::parse("/time", own), Some(Command::Time));
    }

    #[test]
    fn test_from_message() {
        assert_eq!(
            Inbound::from_message(7, "/time", None),
            Some(Inbound::Command {
                chat_id: 7,
                command: Command::Time
            })
        );
        assert_eq!(
            Inbound::from_message(7, "яйца, лук", None),
            Some(Inbound::Text {
                chat_id: 7,
                text: "яйца, лук".to_string()
            })
        );
        assert_eq!(Inbound::from_message(7, "/settings", None), None);
        assert_eq!(Inbound::from_message(7, "/start@other_bot", Some("recipe_bot")), None);
    }

    #[test]
    fn test_button_chat_id() {
        let inbound = Inbound::Button {
            chat_id: None,
            callback_id: "1".to_string(),
            data: "time_15".to_string(),
        };
        assert_eq!(inbound.chat_id(), None);
    }
}
