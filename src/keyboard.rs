//! Fixed choice menus shown by the filter commands.

use crate::model::{CalorieBucket, Category, Difficulty, TimeBucket};

/// A single menu choice; `token` comes back verbatim when it is pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub token: String,
}

impl Button {
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// Ordered list of buttons, rendered one per row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keyboard {
    pub buttons: Vec<Button>,
}

impl Keyboard {
    pub fn categories() -> Self {
        Self::from_buttons(Category::ALL.iter().map(|category| {
            Button::new(category.label(), format!("category_{}", category.id()))
        }))
    }

    pub fn time() -> Self {
        Self::from_buttons(
            TimeBucket::ALL
                .iter()
                .map(|bucket| Button::new(bucket.label(), format!("time_{}", bucket.token()))),
        )
    }

    pub fn difficulty() -> Self {
        Self::from_buttons(
            Difficulty::ALL
                .iter()
                .map(|level| Button::new(level.label(), format!("diff_{}", level.token()))),
        )
    }

    pub fn calories() -> Self {
        Self::from_buttons(
            CalorieBucket::ALL
                .iter()
                .map(|bucket| Button::new(bucket.label(), format!("cal_{}", bucket.token()))),
        )
    }

    fn from_buttons(buttons: impl Iterator<Item = Button>) -> Self {
        Self {
            buttons: buttons.collect(),
        }
    }
}
