use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde_json::Value;

use super::notes::split_name_and_notes;
use super::quantity::normalize_quantity;
use super::unit::{is_size_word, recognize_unit};
use crate::models::StructuredIngredient;

/// Quantity, unit and remainder of one ingredient line
///
/// quantity: "2", "1.5", "1/2", "1 1/2", "1 ½", "½"
/// unit: a single word followed by whitespace, kept only if it is a known unit
/// rest: everything else
static INGREDIENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<quantity>[0-9]+(?:\.[0-9]+|/[0-9]+)?(?:\s+[0-9]+/[0-9]+)?(?:\s*[¼½¾⅓⅔⅛⅜⅝⅞])?|[¼½¾⅓⅔⅛⅜⅝⅞])?(?P<gap>\s*)(?:(?P<unit>[a-zA-Z°%¼½¾⅓⅔⅛⅜⅝-]+)\.?\s+)?(?P<rest>.+)$",
    )
    .expect("ingredient line pattern must compile")
});

/// Parse one free-text ingredient line
///
/// Returns `None` for empty or whitespace-only input. Lines that cannot be
/// segmented come back with the whole trimmed text as the name.
///
/// ```
/// use cookbook::parser::parse_line;
///
/// let ingredient = parse_line("2 cups flour, sifted").unwrap();
/// assert_eq!(ingredient.quantity, "2");
/// assert_eq!(ingredient.unit, "cup");
/// assert_eq!(ingredient.name, "flour");
/// assert_eq!(ingredient.notes, "sifted");
/// ```
pub fn parse_line(text: &str) -> Option<StructuredIngredient> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Some(captures) = INGREDIENT_LINE.captures(trimmed) else {
        debug!("Ingredient line did not match, keeping it whole: {:?}", trimmed);
        return Some(whole_line(trimmed));
    };

    let quantity = captures.name("quantity");
    if let Some(quantity) = quantity {
        // "2% milk", "2-3 apples": the number belongs to the name
        let glued = captures.name("gap").is_some_and(|gap| gap.is_empty())
            && trimmed[quantity.end()..]
                .chars()
                .next()
                .is_some_and(|c| !c.is_alphabetic());
        if glued {
            debug!("Quantity is glued to the name, keeping line whole: {:?}", trimmed);
            return Some(whole_line(trimmed));
        }
    }

    let rest = captures.name("rest").map_or("", |rest| rest.as_str());
    let (unit, remainder) = match captures.name("unit") {
        Some(unit) => match recognize_unit(unit.as_str())
            .filter(|normalized| quantity.is_some() || !is_size_word(normalized))
        {
            Some(normalized) => (normalized, rest),
            // Not a unit after all, so it is part of the name
            None => (String::new(), &trimmed[unit.start()..]),
        },
        None => (String::new(), rest),
    };

    let (name, notes) = split_name_and_notes(remainder);

    Some(StructuredIngredient {
        quantity: quantity.map_or_else(String::new, |q| normalize_quantity(q.as_str())),
        unit,
        name,
        notes,
        original: trimmed.to_string(),
    })
}

/// Parse a line held in a JSON value; anything but a string yields `None`
pub fn parse_line_value(value: &Value) -> Option<StructuredIngredient> {
    match value {
        Value::String(text) => parse_line(text),
        _ => None,
    }
}

fn whole_line(trimmed: &str) -> StructuredIngredient {
    StructuredIngredient {
        quantity: String::new(),
        unit: String::new(),
        name: trimmed.to_string(),
        notes: String::new(),
        original: trimmed.to_string(),
    }
}
