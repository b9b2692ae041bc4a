//! Recipe collection with ingredient parsing and shopping list generation
//!
//! Free-text ingredient lines are parsed into structured records when a
//! recipe is saved ([`parser`]), stored through a [`store::RecipeStore`], and
//! turned into a categorized checklist on demand ([`shopping_list`]).

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod parser;
pub mod shopping_list;
pub mod store;

pub use error::{CookbookError, ErrorKind, Result};
