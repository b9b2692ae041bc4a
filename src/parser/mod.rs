//! Free-text ingredient parsing
//!
//! Lines such as `"2 cups flour, sifted"` become [`StructuredIngredient`]
//! records. Nothing here fails: input that cannot be segmented is kept whole
//! as the ingredient name.
//!
//! [`StructuredIngredient`]: crate::models::StructuredIngredient

mod batch;
mod format;
mod line;
mod notes;
mod quantity;
mod unit;

pub use batch::{parse_ingredient_lines, parse_ingredient_text, parse_ingredients_value};
pub use format::{format_ingredient, ingredients_to_strings};
pub use line::{parse_line, parse_line_value};
pub use notes::{NOTE_SEPARATORS, split_name_and_notes};
pub use quantity::{FRACTION_GLYPHS, normalize_quantity};
pub use unit::{UNIT_ABBREVIATIONS, normalize_unit};
