mod recipe;
mod shopping_list;

pub use recipe::{Recipe, RecipeData, RecipeDraft};
pub use shopping_list::{Category, ShoppingListCategory, ShoppingListItem};
