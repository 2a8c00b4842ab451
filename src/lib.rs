//! # recipe-bot
//!
//! A chat bot that suggests recipes from a small static collection.
//! Users search by ingredients or pick a category, cooking time,
//! difficulty or calorie range from a menu; the bot answers with a
//! randomly chosen matching recipe card.
//!
//! The core ([`filters`], [`presenter`], [`dispatcher`]) does not depend on
//! any chat transport; [`telegram`] plugs it into the Telegram Bot API.

pub mod callback;
pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod filters;
pub mod keyboard;
pub mod messages;
pub mod model;
pub mod parse;
pub mod presenter;
pub mod sink;
pub mod store;
pub mod telegram;

pub use callback::CallbackAction;
pub use classifier::category_of;
pub use config::{BotConfig, TelegramConfig};
pub use dispatcher::{Command, Dispatcher, Inbound};
pub use error::BotError;
pub use filters::{FilterEngine, Predicate};
pub use keyboard::{Button, Keyboard};
pub use model::{CalorieBucket, Category, Difficulty, Recipe, TimeBucket};
pub use parse::{calories_of, minutes_of};
pub use presenter::{format_list, format_recipe};
pub use sink::{ChatId, ChatSink};
pub use store::RecipeStore;
pub use telegram::TelegramClient;
