use serde::{Deserialize, Serialize};

/// A single recipe record. Records are read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    /// Free-form duration such as "40 минут"
    pub cooking_time: String,
    /// Localized difficulty label such as "Средняя"
    pub difficulty: String,
    /// Free-form energy value such as "250 ккал"
    pub calories: String,
    pub instructions: String,
}

/// Derived recipe category, see [`crate::classifier::category_of`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Main,
    Soups,
    Salads,
    Desserts,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 4] = [
        Category::Main,
        Category::Soups,
        Category::Salads,
        Category::Desserts,
    ];

    /// Identifier used in button tokens
    pub fn id(&self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Soups => "soups",
            Category::Salads => "salads",
            Category::Desserts => "desserts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Main => "Основные блюда",
            Category::Soups => "Супы",
            Category::Salads => "Салаты",
            Category::Desserts => "Десерты",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Token used in button data and compared against recipe difficulty
    pub fn token(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Легкая",
            Difficulty::Medium => "Средняя",
            Difficulty::Hard => "Сложная",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.token() == token)
    }

    /// Whether a stored difficulty string denotes this level.
    ///
    /// Accepts the token itself or the localized label, case-insensitively.
    /// This is broader than comparing against the token alone: recipe data
    /// stores labels such as "Средняя", which a token-only comparison would
    /// never match.
    pub fn matches(&self, stored: &str) -> bool {
        let stored = stored.trim().to_lowercase();
        stored == self.token() || stored == self.label().to_lowercase()
    }
}

/// Upper bound on cooking time in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    UpTo15,
    UpTo30,
    UpTo60,
    Unbounded,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 4] = [
        TimeBucket::UpTo15,
        TimeBucket::UpTo30,
        TimeBucket::UpTo60,
        TimeBucket::Unbounded,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            TimeBucket::UpTo15 => "15",
            TimeBucket::UpTo30 => "30",
            TimeBucket::UpTo60 => "60",
            TimeBucket::Unbounded => "60+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeBucket::UpTo15 => "До 15 минут",
            TimeBucket::UpTo30 => "15-30 минут",
            TimeBucket::UpTo60 => "30-60 минут",
            TimeBucket::Unbounded => "Более 60 минут",
        }
    }

    /// Inclusive upper bound in minutes, `None` for no limit
    pub fn bound(&self) -> Option<u32> {
        match self {
            TimeBucket::UpTo15 => Some(15),
            TimeBucket::UpTo30 => Some(30),
            TimeBucket::UpTo60 => Some(60),
            TimeBucket::Unbounded => None,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.token() == token)
    }

    pub fn admits(&self, minutes: u32) -> bool {
        self.bound().map_or(true, |bound| minutes <= bound)
    }
}

/// Upper bound on calories per serving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalorieBucket {
    UpTo200,
    UpTo300,
    UpTo400,
    Unbounded,
}

impl CalorieBucket {
    pub const ALL: [CalorieBucket; 4] = [
        CalorieBucket::UpTo200,
        CalorieBucket::UpTo300,
        CalorieBucket::UpTo400,
        CalorieBucket::Unbounded,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            CalorieBucket::UpTo200 => "200",
            CalorieBucket::UpTo300 => "300",
            CalorieBucket::UpTo400 => "400",
            CalorieBucket::Unbounded => "400+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalorieBucket::UpTo200 => "До 200 ккал",
            CalorieBucket::UpTo300 => "200-300 ккал",
            CalorieBucket::UpTo400 => "300-400 ккал",
            CalorieBucket::Unbounded => "Более 400 ккал",
        }
    }

    pub fn bound(&self) -> Option<u32> {
        match self {
            CalorieBucket::UpTo200 => Some(200),
            CalorieBucket::UpTo300 => Some(300),
            CalorieBucket::UpTo400 => Some(400),
            CalorieBucket::Unbounded => None,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.token() == token)
    }

    pub fn admits(&self, calories: u32) -> bool {
        self.bound().map_or(true, |bound| calories <= bound)
    }
}
