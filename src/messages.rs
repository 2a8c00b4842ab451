//! Static user-facing texts.

pub const WELCOME: &str = "👋 Привет! Я бот с рецептами.\n\n\
Я могу:\n\
1. 🎲 Показать случайный рецепт (/random)\n\
2. 🔍 Найти рецепт по имеющимся продуктам (просто напишите список продуктов)\n\
3. 📑 Показать рецепты по категориям (/categories)\n\
4. ⏱ Найти рецепт по времени приготовления (/time)\n\
5. 📊 Найти рецепт по сложности (/difficulty)\n\
6. 🔥 Найти рецепт по калорийности (/calories)\n\
7. 📝 Показать список всех рецептов (/list)\n\
8. ❓ Показать справку (/help)\n\n\
Например: яйца, помидоры, лук";

pub const HELP: &str = "📚 Справка по командам:\n\n\
/start - Начать работу с ботом\n\
/random - Получить случайный рецепт\n\
/categories - Показать рецепты по категориям\n\
/time - Найти рецепт по времени приготовления\n\
/difficulty - Найти рецепт по сложности\n\
/calories - Найти рецепт по калорийности\n\
/list - Показать список всех рецептов\n\
/help - Показать эту справку\n\n\
Чтобы найти рецепт по продуктам, просто напишите список продуктов через запятую.\n\
Например: яйца, помидоры, лук";

pub const CHOOSE_CATEGORY: &str = "Выберите категорию рецептов:";
pub const CHOOSE_TIME: &str = "Выберите максимальное время приготовления:";
pub const CHOOSE_DIFFICULTY: &str = "Выберите сложность рецепта:";
pub const CHOOSE_CALORIES: &str = "Выберите максимальную калорийность:";

pub const NO_INGREDIENT_MATCH: &str = "😕 К сожалению, я не нашел рецептов с указанными продуктами.\n\
Попробуйте другие ингредиенты или используйте /random для случайного рецепта.";

pub const NO_FILTER_MATCH: &str = "К сожалению, не найдено рецептов по выбранным критериям.\n\
Попробуйте другие параметры или используйте /random для случайного рецепта.";

pub const EMPTY_CATEGORY: &str = "В этой категории пока нет рецептов.";

pub const EMPTY_STORE: &str = "Список рецептов пока пуст.";

pub const DELIVERY_APOLOGY: &str =
    "Извините, произошла ошибка при отправке рецепта. Пожалуйста, попробуйте еще раз.";

pub const GENERIC_APOLOGY: &str = "Извините, произошла ошибка. Пожалуйста, попробуйте еще раз.";
