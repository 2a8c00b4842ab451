use crate::model::{Category, Recipe};

const SOUP_WORDS: [&str; 3] = ["суп", "борщ", "бульон"];
const SALAD_WORDS: [&str; 1] = ["салат"];
const DESSERT_WORDS: [&str; 4] = ["запеканка", "пирог", "торт", "кекс"];

/// Derive the category of a recipe from its name.
///
/// Rules are checked in order and the first match wins; anything that
/// matches no rule is a main dish.
pub fn category_of(recipe: &Recipe) -> Category {
    let name = recipe.name.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|word| name.contains(word));

    if contains_any(&SOUP_WORDS) {
        Category::Soups
    } else if contains_any(&SALAD_WORDS) {
        Category::Salads
    } else if contains_any(&DESSERT_WORDS) {
        Category::Desserts
    } else {
        Category::Main
    }
}
