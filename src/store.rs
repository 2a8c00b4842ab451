use log::{debug, info};
use std::path::Path;

use crate::error::BotError;
use crate::model::Recipe;

/// The recipe collection compiled into the binary.
///
/// Loaded from `recipes.json` at compile time using `include_str!`, so the
/// data can be edited without touching Rust code.
pub const BUILTIN_RECIPES: &str = include_str!("recipes.json");

/// Read-only recipe collection.
///
/// The store is built once at startup and passed to whoever needs it;
/// nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The collection shipped with the bot
    pub fn builtin() -> Result<Self, BotError> {
        Self::from_json(BUILTIN_RECIPES)
    }

    /// Decode a JSON array of recipes
    pub fn from_json(json: &str) -> Result<Self, BotError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        debug!("Decoded {} recipes", recipes.len());
        Ok(Self::new(recipes))
    }

    /// Read a JSON array of recipes from a file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, BotError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let store = Self::from_json(&json)?;
        info!("Loaded {} recipes from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
