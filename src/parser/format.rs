use crate::models::{StoredIngredient, StructuredIngredient};

/// Render a structured ingredient as "quantity unit name (notes)", skipping
/// empty parts
pub fn format_ingredient(ingredient: Option<&StructuredIngredient>) -> String {
    let Some(ingredient) = ingredient else {
        return String::new();
    };

    let notes = (!ingredient.notes.is_empty()).then(|| format!("({})", ingredient.notes));

    [
        Some(ingredient.quantity.as_str()),
        Some(ingredient.unit.as_str()),
        Some(ingredient.name.as_str()),
        notes.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Turn stored ingredients back into editable lines
///
/// Plain strings pass through untouched. Structured entries give back their
/// `original` text when it is set, so the user sees what they typed.
pub fn ingredients_to_strings(ingredients: &[StoredIngredient]) -> Vec<String> {
    ingredients
        .iter()
        .map(|ingredient| match ingredient {
            StoredIngredient::Text(text) => text.clone(),
            StoredIngredient::Structured(structured) if !structured.original.is_empty() => {
                structured.original.clone()
            }
            StoredIngredient::Structured(structured) => format_ingredient(Some(structured)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;
    use rstest::rstest;

    fn structured(quantity: &str, unit: &str, name: &str, notes: &str) -> StructuredIngredient {
        StructuredIngredient {
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            name: name.to_string(),
            notes: notes.to_string(),
            original: String::new(),
        }
    }

    #[test]
    fn test_format_ingredient_all_parts() {
        let ingredient = structured("2", "cup", "flour", "sifted");

        assert_eq!(format_ingredient(Some(&ingredient)), "2 cup flour (sifted)");
    }

    #[test]
    fn test_format_ingredient_skips_empty_parts() {
        assert_eq!(format_ingredient(Some(&structured("3", "", "eggs", ""))), "3 eggs");
        assert_eq!(format_ingredient(Some(&structured("", "", "salt", ""))), "salt");
        assert_eq!(format_ingredient(Some(&structured("", "", "", ""))), "");
    }

    #[test]
    fn test_format_ingredient_none_is_empty() {
        assert_eq!(format_ingredient(None), "");
    }

    #[rstest]
    #[case("2 cup flour")]
    #[case("2 cup flour (sifted)")]
    #[case("3 eggs")]
    #[case("1 teaspoon salt")]
    #[case("1 clove  garlic")]
    fn test_format_reconstructs_unambiguous_lines(#[case] line: &str) {
        let parsed = parse_line(line).expect("Line should parse");

        let normalized_line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(format_ingredient(Some(&parsed)), normalized_line);
    }

    #[rstest]
    #[case("2 cups flour, sifted")]
    #[case("½ cup sugar")]
    #[case("1/2 tsp salt")]
    #[case("2% milk")]
    fn test_ingredients_to_strings_returns_original(#[case] line: &str) {
        let parsed = parse_line(line).expect("Line should parse");

        let lines = ingredients_to_strings(&[StoredIngredient::Structured(parsed)]);

        assert_eq!(lines, vec![line.to_string()]);
    }

    #[test]
    fn test_ingredients_to_strings_falls_back_to_format() {
        let stored = vec![StoredIngredient::Structured(structured("1", "cup", "milk", ""))];

        assert_eq!(ingredients_to_strings(&stored), vec!["1 cup milk".to_string()]);
    }

    #[test]
    fn test_ingredients_to_strings_leaves_plain_strings_unchanged() {
        let lines = vec!["2 eggs".to_string(), "  a pinch of salt ".to_string()];
        let stored: Vec<StoredIngredient> =
            lines.iter().cloned().map(StoredIngredient::Text).collect();

        assert_eq!(ingredients_to_strings(&stored), lines);
    }
}
