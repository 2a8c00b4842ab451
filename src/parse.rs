//! Leading-integer extraction for the free-form `cooking_time` and
//! `calories` fields.
//!
//! Both parsers are fail-soft: a missing or non-numeric leading token
//! yields 0, so a malformed record still takes part in "at most" filters.

use log::warn;

/// Parse the first whitespace-delimited token as an unsigned integer.
pub fn leading_integer(value: &str) -> Option<u32> {
    value.split_whitespace().next()?.parse().ok()
}

/// Cooking time in minutes, e.g. `"45 минут"` -> 45.
pub fn minutes_of(cooking_time: &str) -> u32 {
    leading_integer(cooking_time).unwrap_or(0)
}

/// Calorie count, e.g. `"250 ккал"` -> 250.
pub fn calories_of(calories: &str) -> u32 {
    leading_integer(calories).unwrap_or_else(|| {
        warn!("Unparsable calories value {:?}, treating as 0", calories);
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_of() {
        assert_eq!(minutes_of("45 минут"), 45);
        assert_eq!(minutes_of("  5 минут"), 5);
        assert_eq!(minutes_of(""), 0);
        assert_eq!(minutes_of("abc"), 0);
        assert_eq!(minutes_of("-5 минут"), 0);
    }

    #[test]
    fn test_calories_of() {
        assert_eq!(calories_of("250 ккал"), 250);
        assert_eq!(calories_of("много ккал"), 0);
        assert_eq!(calories_of(""), 0);
    }

    #[test]
    fn test_leading_integer_ignores_rest() {
        assert_eq!(leading_integer("1 час 20 минут"), Some(1));
        assert_eq!(leading_integer("20минут"), None);
    }
}
