use crate::classifier::category_of;
use crate::messages;
use crate::model::Recipe;
use crate::store::RecipeStore;

/// Render a recipe card
pub fn format_recipe(recipe: &Recipe) -> String {
    format!(
        "🍳 {name}\n\
         📌 Категория: {category}\n\
         ⏱ Время приготовления: {time}\n\
         📊 Сложность: {difficulty}\n\
         🔥 Калории: {calories}\n\n\
         📝 Ингредиенты:\n\
         {ingredients}\n\n\
         📋 Инструкция:\n\
         {instructions}",
        name = recipe.name,
        category = category_of(recipe).label(),
        time = recipe.cooking_time,
        difficulty = recipe.difficulty,
        calories = recipe.calories,
        ingredients = recipe.ingredients.join(", "),
        instructions = recipe.instructions,
    )
}

/// Numbered list of every recipe with its category
pub fn format_list(store: &RecipeStore) -> String {
    if store.is_empty() {
        return messages::EMPTY_STORE.to_string();
    }

    let mut list = String::from("📋 Список всех рецептов:\n\n");
    for (i, recipe) in store.iter().enumerate() {
        list.push_str(&format!(
            "{}. {} ({})\n",
            i + 1,
            recipe.name,
            category_of(recipe).label()
        ));
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kharcho() -> Recipe {
        Recipe {
            name: "Суп харчо".to_string(),
            ingredients: vec!["мясо".to_string(), "рис".to_string()],
            cooking_time: "40 минут".to_string(),
            difficulty: "Средняя".to_string(),
            calories: "250 ккал".to_string(),
            instructions: "Варить.".to_string(),
        }
    }

    #[test]
    fn test_format_recipe() {
        let card = format_recipe(&kharcho());
        assert_eq!(
            card,
            "🍳 Суп харчо\n\
             📌 Категория: Супы\n\
             ⏱ Время приготовления: 40 минут\n\
             📊 Сложность: Средняя\n\
             🔥 Калории: 250 ккал\n\n\
             📝 Ингредиенты:\n\
             мясо, рис\n\n\
             📋 Инструкция:\n\
             Варить."
        );
    }

    #[test]
    fn test_format_list() {
        let mut salad = kharcho();
        salad.name = "Салат Оливье".to_string();
        let store = RecipeStore::new(vec![kharcho(), salad]);

        assert_eq!(
            format_list(&store),
            "📋 Список всех рецептов:\n\n1. Суп харчо (Супы)\n2. Салат Оливье (Салаты)\n"
        );
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_list(&RecipeStore::default()), messages::EMPTY_STORE);
    }
}
