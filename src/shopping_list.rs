//! Grouping recipe ingredients into a categorized shopping checklist

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde_json::Value;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::api::{Category, ShoppingListCategory, ShoppingListItem};
use crate::models::{StoredIngredient, StructuredIngredient};
use crate::parser::parse_line;

/// Order in which categories are tried when classifying an ingredient
///
/// Keywords overlap between categories ("pepper" is produce and pantry,
/// "bread" is pantry and bakery), so the first match decides.
pub const CLASSIFICATION_ORDER: [Category; 6] = [
    Category::Produce,
    Category::Meat,
    Category::Dairy,
    Category::Bakery,
    Category::Frozen,
    Category::Pantry,
];

/// Order in which populated categories are presented
///
/// Deliberately independent of [`CLASSIFICATION_ORDER`].
pub const DISPLAY_ORDER: [Category; 7] = [
    Category::Produce,
    Category::Meat,
    Category::Dairy,
    Category::Pantry,
    Category::Bakery,
    Category::Frozen,
    Category::Other,
];

const PRODUCE_KEYWORDS: &[&str] = &[
    "apple", "banana", "orange", "lemon", "lime", "grape", "strawberry", "blueberry", "onion",
    "garlic", "potato", "carrot", "celery", "lettuce", "tomato", "pepper", "broccoli",
    "cauliflower", "spinach", "kale", "mushroom", "avocado", "cucumber", "herb", "basil",
    "parsley", "cilantro", "mint", "rosemary", "thyme", "oregano",
];

const MEAT_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "turkey", "fish", "salmon", "tuna", "shrimp", "sausage", "bacon",
    "ham", "steak", "ground", "breast", "thigh", "wing",
];

const DAIRY_KEYWORDS: &[&str] = &[
    "milk",
    "cheese",
    "butter",
    "cream",
    "yogurt",
    "sour cream",
    "cream cheese",
    "mozzarella",
    "cheddar",
    "parmesan",
    "feta",
    "goat cheese",
];

const BAKERY_KEYWORDS: &[&str] = &[
    "bread", "roll", "bagel", "croissant", "muffin", "cake", "cookie", "pastry",
];

const FROZEN_KEYWORDS: &[&str] = &["frozen", "ice cream", "pizza", "vegetables", "fruit", "meat"];

const PANTRY_KEYWORDS: &[&str] = &[
    "flour", "sugar", "salt", "pepper", "oil", "vinegar", "rice", "pasta", "bread", "cereal",
    "oats", "beans", "lentils", "nuts", "seeds", "spice",
];

/// Keyword sets paired with their category, in [`CLASSIFICATION_ORDER`]
pub const CATEGORY_KEYWORDS: [(Category, &[&str]); 6] = [
    (Category::Produce, PRODUCE_KEYWORDS),
    (Category::Meat, MEAT_KEYWORDS),
    (Category::Dairy, DAIRY_KEYWORDS),
    (Category::Bakery, BAKERY_KEYWORDS),
    (Category::Frozen, FROZEN_KEYWORDS),
    (Category::Pantry, PANTRY_KEYWORDS),
];

/// Classify an ingredient name by case-insensitive substring match
pub fn categorize(name: &str) -> Category {
    let name = name.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map_or(Category::Other, |(category, _)| *category)
}

/// Build the shopping list for a set of parsed ingredients
///
/// Each ingredient becomes one unchecked item. Empty categories are left out,
/// categories follow [`DISPLAY_ORDER`] and items are sorted by name.
pub fn generate_shopping_list(ingredients: &[StructuredIngredient]) -> Vec<ShoppingListCategory> {
    let mut grouped: IndexMap<Category, Vec<ShoppingListItem>> = DISPLAY_ORDER
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for ingredient in ingredients {
        grouped
            .entry(categorize(&ingredient.name))
            .or_default()
            .push(ShoppingListItem {
                name: ingredient.name.clone(),
                quantity: ingredient.quantity.clone(),
                unit: ingredient.unit.clone(),
                checked: false,
                original: ingredient.original.clone(),
            });
    }

    grouped
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(category, mut items)| {
            items.sort_by(|a, b| locale_compare(&a.name, &b.name));
            ShoppingListCategory { category, items }
        })
        .collect()
}

/// Build the shopping list for a recipe's stored ingredients
///
/// Plain string entries are parsed on the fly.
pub fn generate_shopping_list_from_stored(
    ingredients: &[StoredIngredient],
) -> Vec<ShoppingListCategory> {
    let parsed: Vec<StructuredIngredient> = ingredients
        .iter()
        .filter_map(|ingredient| match ingredient {
            StoredIngredient::Text(text) => parse_line(text),
            StoredIngredient::Structured(structured) => Some(structured.clone()),
        })
        .collect();

    generate_shopping_list(&parsed)
}

/// Build the shopping list from a raw JSON ingredient field
///
/// Anything but an array yields an empty list; unreadable elements are skipped.
pub fn generate_shopping_list_value(value: &Value) -> Vec<ShoppingListCategory> {
    generate_shopping_list_from_stored(&StoredIngredient::list_from_value(value))
}

/// Name ordering that approximates a locale-aware comparison
///
/// Names are compared ignoring accents and case first, then with accents
/// (plain letters first), then lower case before upper case.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map_or_else(
                    || a.chars().count().cmp(&b.chars().count()),
                    |(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        _ => x.cmp(&y),
                    },
                )
        })
}

// Decomposed, with combining marks dropped: "Éclair" -> "eclair"
fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfc().flat_map(char::to_lowercase)
}
