/// Short unit spellings and the full name they stand for
pub const UNIT_ABBREVIATIONS: [(&str, &str); 16] = [
    ("tbsp", "tablespoon"),
    ("tbs", "tablespoon"),
    ("tbl", "tablespoon"),
    ("tsp", "teaspoon"),
    ("t", "teaspoon"),
    ("oz", "ounce"),
    ("lbs", "pound"),
    ("lb", "pound"),
    ("g", "gram"),
    ("kg", "kilogram"),
    ("ml", "milliliter"),
    ("l", "liter"),
    ("c", "cup"),
    ("pt", "pint"),
    ("qt", "quart"),
    ("gal", "gallon"),
];

/// Singular words accepted as the unit segment of a line
///
/// Covers measures plus the container and portion words that take the unit
/// slot in everyday recipes ("2 cloves garlic", "1 can tomatoes").
const KNOWN_UNITS: &[&str] = &[
    // measures
    "cup",
    "tablespoon",
    "teaspoon",
    "ounce",
    "pound",
    "gram",
    "milligram",
    "kilogram",
    "milliliter",
    "millilitre",
    "liter",
    "litre",
    "pint",
    "quart",
    "gallon",
    "inch",
    // containers and portions
    "bag",
    "bottle",
    "box",
    "bunch",
    "can",
    "clove",
    "container",
    "cube",
    "dash",
    "drop",
    "fillet",
    "handful",
    "head",
    "jar",
    "loaf",
    "package",
    "packet",
    "piece",
    "pinch",
    "scoop",
    "sheet",
    "slice",
    "sprig",
    "stalk",
    "stick",
];

/// Size words that fill the unit slot only after a quantity ("1 large onion")
const SIZE_WORDS: &[&str] = &["small", "medium", "large", "whole"];

fn expand_abbreviation(unit: &str) -> Option<&'static str> {
    UNIT_ABBREVIATIONS
        .iter()
        .find(|(short, _)| *short == unit)
        .map(|(_, full)| *full)
}

fn is_known_unit(unit: &str) -> bool {
    KNOWN_UNITS.contains(&unit) || is_size_word(unit)
}

pub(crate) fn is_size_word(unit: &str) -> bool {
    SIZE_WORDS.contains(&unit)
}

/// Normalize a unit to its lower-case singular full name
///
/// One trailing "s" is dropped and abbreviations are expanded. Anything not
/// in the abbreviation table passes through after the "s" is dropped. The
/// table is consulted before the "s" is removed too, so "tbs" still maps to
/// "tablespoon".
pub fn normalize_unit(raw: &str) -> String {
    let cleaned = raw.trim().to_lowercase();
    if cleaned.is_empty() {
        return String::new();
    }

    if let Some(full) = expand_abbreviation(&cleaned) {
        return full.to_string();
    }

    let singular = cleaned.strip_suffix('s').unwrap_or(&cleaned);
    match expand_abbreviation(singular) {
        Some(full) => full.to_string(),
        None => singular.to_string(),
    }
}

/// Normalize `raw` and return it only when it names a known unit
pub(crate) fn recognize_unit(raw: &str) -> Option<String> {
    let normalized = normalize_unit(raw);
    if is_known_unit(&normalized) {
        return Some(normalized);
    }

    let cleaned = raw.trim().to_lowercase();

    // "pinches", "bunches", "boxes"
    if let Some(stem) = cleaned.strip_suffix("es").filter(|stem| is_known_unit(stem)) {
        return Some(stem.to_string());
    }

    // "loaves"
    cleaned
        .strip_suffix("ves")
        .map(|stem| format!("{}f", stem))
        .filter(|singular| is_known_unit(singular))
}
