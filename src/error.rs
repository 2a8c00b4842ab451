use thiserror::Error;

/// Errors that can occur while running the bot
#[derive(Error, Debug)]
pub enum BotError {
    /// HTTP request to the Bot API failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The Bot API answered with `ok: false`
    #[error("Telegram API error in {method}: {description}")]
    Api { method: String, description: String },

    /// No bot token in config or environment
    #[error("Bot token not found: set telegram.token in config.toml, RECIPE_BOT__TELEGRAM__TOKEN or TELEGRAM_BOT_TOKEN")]
    MissingToken,

    /// Recipe data or an API payload could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Recipe file could not be read, or the signal handler failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
