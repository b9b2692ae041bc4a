use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::line::{parse_line, parse_line_value};
use crate::models::StructuredIngredient;

static LINE_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\n]+").expect("delimiter pattern must compile"));

/// Split a pasted ingredient blob on commas, semicolons and newlines and parse
/// each non-blank piece
pub fn parse_ingredient_text(text: &str) -> Vec<StructuredIngredient> {
    LINE_DELIMITERS
        .split(text)
        .filter(|piece| !piece.trim().is_empty())
        .filter_map(parse_line)
        .collect()
}

/// Parse already itemized lines, one ingredient each, without further splitting
pub fn parse_ingredient_lines<I, S>(lines: I) -> Vec<StructuredIngredient>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}

/// Parse an ingredient field of unknown shape
///
/// A string is treated as a blob, an array as itemized lines (non-string
/// elements are dropped), and anything else gives an empty list.
pub fn parse_ingredients_value(value: &Value) -> Vec<StructuredIngredient> {
    match value {
        Value::String(text) => parse_ingredient_text(text),
        Value::Array(items) => items.iter().filter_map(parse_line_value).collect(),
        _ => Vec::new(),
    }
}
