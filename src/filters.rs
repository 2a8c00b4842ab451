//! Recipe selection.
//!
//! A [`Predicate`] is evaluated against every record in the store; the
//! records that satisfy it form the candidate set, and one candidate is
//! picked uniformly at random.

use log::debug;
use rand::seq::IndexedRandom;
use std::sync::Arc;

use crate::classifier::category_of;
use crate::model::{CalorieBucket, Category, Difficulty, Recipe, TimeBucket};
use crate::parse::{calories_of, minutes_of};
use crate::store::RecipeStore;

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Every recipe matches
    Any,
    /// Lower-cased ingredient names; a recipe matches if it uses any of them
    Ingredients(Vec<String>),
    Category(Category),
    MaxTime(TimeBucket),
    Difficulty(Difficulty),
    MaxCalories(CalorieBucket),
}

impl Predicate {
    /// Build an ingredient predicate from a comma-separated user message.
    ///
    /// Tokens are trimmed and lower-cased; empty tokens are dropped.
    pub fn ingredients(query: &str) -> Self {
        let tokens = query
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect();
        Predicate::Ingredients(tokens)
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            Predicate::Any => true,
            Predicate::Ingredients(wanted) => recipe
                .ingredients
                .iter()
                .map(|ingredient| ingredient.to_lowercase())
                .any(|ingredient| wanted.contains(&ingredient)),
            Predicate::Category(category) => category_of(recipe) == *category,
            Predicate::MaxTime(bucket) => bucket.admits(minutes_of(&recipe.cooking_time)),
            Predicate::Difficulty(level) => level.matches(&recipe.difficulty),
            Predicate::MaxCalories(bucket) => bucket.admits(calories_of(&recipe.calories)),
        }
    }
}

/// Stateless selector over a shared, read-only store
#[derive(Debug, Clone)]
pub struct FilterEngine {
    store: Arc<RecipeStore>,
}

impl FilterEngine {
    pub fn new(store: Arc<RecipeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// All recipes satisfying the predicate, in store order
    pub fn candidates(&self, predicate: &Predicate) -> Vec<&Recipe> {
        self.store
            .iter()
            .filter(|recipe| predicate.matches(recipe))
            .collect()
    }

    /// Pick one matching recipe at random, `None` when nothing matches
    pub fn select(&self, predicate: &Predicate) -> Option<&Recipe> {
        let candidates = self.candidates(predicate);
        debug!(
            "{} of {} recipes match {:?}",
            candidates.len(),
            self.store.len(),
            predicate
        );
        candidates.choose(&mut rand::rng()).copied()
    }
}
