use crate::model::{CalorieBucket, Category, Difficulty, TimeBucket};

/// A decoded `{kind}_{value}` button token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    Category(Category),
    Time(TimeBucket),
    Difficulty(Difficulty),
    Calories(CalorieBucket),
    /// Anything we don't recognize. Handled as a silent no-op.
    Ignored(String),
}

impl CallbackAction {
    pub fn parse(data: &str) -> Self {
        let parsed = data.split_once('_').and_then(|(kind, value)| match kind {
            "category" => Category::from_id(value).map(CallbackAction::Category),
            "time" => TimeBucket::from_token(value).map(CallbackAction::Time),
            "diff" => Difficulty::from_token(value).map(CallbackAction::Difficulty),
            "cal" => CalorieBucket::from_token(value).map(CallbackAction::Calories),
            _ => None,
        });
        parsed.unwrap_or_else(|| CallbackAction::Ignored(data.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::Keyboard;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!(
            CallbackAction::parse("category_soups"),
            CallbackAction::Category(Category::Soups)
        );
        assert_eq!(
            CallbackAction::parse("time_60+"),
            CallbackAction::Time(TimeBucket::Unbounded)
        );
        assert_eq!(
            CallbackAction::parse("diff_hard"),
            CallbackAction::Difficulty(Difficulty::Hard)
        );
        assert_eq!(
            CallbackAction::parse("cal_300"),
            CallbackAction::Calories(CalorieBucket::UpTo300)
        );
    }

    #[test]
    fn test_parse_unknown_tokens() {
        for data in ["", "random", "page_2", "time_45", "diff_", "cal_400_extra"] {
            assert_eq!(
                CallbackAction::parse(data),
                CallbackAction::Ignored(data.to_string())
            );
        }
    }

    #[test]
    fn test_every_menu_button_is_recognized() {
        let menus = [
            Keyboard::categories(),
            Keyboard::time(),
            Keyboard::difficulty(),
            Keyboard::calories(),
        ];
        for button in menus.iter().flat_map(|menu| menu.buttons.iter()) {
            let action = CallbackAction::parse(&button.token);
            assert!(
                !matches!(action, CallbackAction::Ignored(_)),
                "{} not handled",
                button.token
            );
        }
    }
}
