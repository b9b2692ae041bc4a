mod ingredient;
mod recipe;

pub mod api;

#[cfg(test)]
pub mod test_fixtures;

pub use ingredient::{StoredIngredient, StructuredIngredient};
pub use recipe::RecipeRecord;
