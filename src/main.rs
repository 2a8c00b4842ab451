use env_logger::Env;
use log::info;
use std::sync::Arc;

use recipe_bot::telegram::run_polling;
use recipe_bot::{BotConfig, Dispatcher, RecipeStore, TelegramClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = BotConfig::load()?;
    let token = config.telegram.resolve_token()?;

    let store = match &config.recipes_path {
        Some(path) => RecipeStore::load(path).await?,
        None => RecipeStore::builtin()?,
    };
    info!("Serving {} recipes", store.len());

    let client = TelegramClient::new(token, &config.telegram)?;
    let dispatcher = Dispatcher::new(Arc::new(store), client.clone());

    run_polling(&client, &dispatcher, &config.telegram).await?;
    Ok(())
}
