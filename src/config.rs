use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::BotError;

/// Main bot configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BotConfig {
    /// Telegram connection settings
    #[serde(default)]
    pub telegram: TelegramConfig,
    /// JSON file with recipes; the built-in collection is used when unset
    #[serde(default)]
    pub recipes_path: Option<PathBuf>,
}

/// Configuration for the Telegram Bot API connection
#[derive(Debug, Deserialize, Clone)]
pub struct TelegramConfig {
    /// Bot token (can also be set via TELEGRAM_BOT_TOKEN)
    pub token: Option<String>,
    /// Base URL of the Bot API (for local Bot API servers or tests)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Long polling timeout in seconds
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout: u64,
    /// Delay before polling again after a failed getUpdates, in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: default_api_url(),
            poll_timeout: default_poll_timeout(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl TelegramConfig {
    /// Resolve the bot token: config first, then the TELEGRAM_BOT_TOKEN variable
    pub fn resolve_token(&self) -> Result<String, BotError> {
        self.token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| std::env::var("TELEGRAM_BOT_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
            .ok_or(BotError::MissingToken)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

// Default value functions
fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_timeout() -> u64 {
    30
}

fn default_retry_delay_ms() -> u64 {
    1000
}

impl BotConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BOT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BOT__TELEGRAM__TOKEN
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`BotConfig::load`] for the source priority.
pub fn load_config() -> Result<BotConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_BOT__TELEGRAM__POLL_TIMEOUT
        .add_source(
            Environment::with_prefix("RECIPE_BOT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        assert_eq!(default_api_url(), "https://api.telegram.org");
        assert_eq!(default_poll_timeout(), 30);
        assert_eq!(default_retry_delay_ms(), 1000);
    }

    #[test]
    fn test_telegram_config_default() {
        let telegram = TelegramConfig::default();
        assert!(telegram.token.is_none());
        assert_eq!(telegram.poll_timeout(), Duration::from_secs(30));
        assert_eq!(telegram.retry_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let toml = r#"
            recipes_path = "data/recipes.json"

            [telegram]
            token = "123:abc"
            poll_timeout = 10
        "#;

        let config: BotConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.telegram.token.as_deref(), Some("123:abc"));
        assert_eq!(config.telegram.poll_timeout, 10);
        assert_eq!(config.telegram.api_url, "https://api.telegram.org");
        assert_eq!(
            config.recipes_path,
            Some(PathBuf::from("data/recipes.json"))
        );
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config: BotConfig = Config::builder()
            .add_source(File::from_str("", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.recipes_path.is_none());
        assert_eq!(config.telegram.retry_delay_ms, 1000);
    }

    #[test]
    fn test_resolve_token_prefers_config() {
        let telegram = TelegramConfig {
            token: Some("from-config".to_string()),
            ..TelegramConfig::default()
        };
        assert_eq!(telegram.resolve_token().unwrap(), "from-config");
    }
}
