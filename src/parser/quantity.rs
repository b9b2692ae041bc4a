use std::sync::LazyLock;

use regex::Regex;

/// Vulgar fraction glyphs and the decimal text they are replaced with
///
/// Replacement is textual, so `⅓` becomes `0.333` rather than a rounded float.
pub const FRACTION_GLYPHS: [(char, &str); 9] = [
    ('¼', "0.25"),
    ('½', "0.5"),
    ('¾', "0.75"),
    ('⅓', "0.333"),
    ('⅔', "0.666"),
    ('⅛', "0.125"),
    ('⅜', "0.375"),
    ('⅝', "0.625"),
    ('⅞', "0.875"),
];

static MIXED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\s+([0-9.]+)$").expect("mixed number pattern must compile")
});

fn glyph_decimal(c: char) -> Option<&'static str> {
    FRACTION_GLYPHS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, decimal)| *decimal)
}

/// Normalize the quantity segment of an ingredient line
///
/// Fraction glyphs are substituted with their decimal text and a whole number
/// followed by a decimal part (`"1 0.5"`) is summed into one value. Slash
/// fractions such as `"1/3"` are left as written.
pub fn normalize_quantity(raw: &str) -> String {
    let cleaned = raw.trim().to_lowercase();
    if cleaned.is_empty() {
        return String::new();
    }

    let mut result = String::with_capacity(cleaned.len() + 8);
    let mut previous: Option<char> = None;
    for c in cleaned.chars() {
        match glyph_decimal(c) {
            Some(decimal) => {
                // "1½" reads as a mixed number, not as "10.5"
                if previous.is_some_and(|p| p.is_ascii_digit()) {
                    result.push(' ');
                }
                result.push_str(decimal);
            }
            None => result.push(c),
        }
        previous = Some(c);
    }

    collapse_mixed_number(&result).unwrap_or(result)
}

fn collapse_mixed_number(quantity: &str) -> Option<String> {
    let captures = MIXED_NUMBER.captures(quantity)?;
    let whole: f64 = captures[1].parse().ok()?;
    let fraction: f64 = captures[2].parse().ok()?;

    Some((whole + fraction).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2", "2")]
    #[case(" 3 ", "3")]
    #[case("½", "0.5")]
    #[case("¼", "0.25")]
    #[case("⅓", "0.333")]
    #[case("⅞", "0.875")]
    #[case("1 ½", "1.5")]
    #[case("2 ¾", "2.75")]
    #[case("1½", "1.5")]
    #[case("1/2", "1/2")]
    #[case("1/3", "1/3")]
    #[case("1 1/2", "1 1/2")]
    #[case("1.5", "1.5")]
    #[case("", "")]
    #[case("   ", "")]
    fn test_normalize_quantity(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_quantity(raw), expected);
    }

    #[test]
    fn test_multiple_glyphs_are_replaced_one_by_one() {
        assert_eq!(normalize_quantity("½¼"), "0.50.25");
    }

    #[test]
    fn test_mixed_number_with_whole_result_has_no_decimal_point() {
        assert_eq!(normalize_quantity("1 1.0"), "2");
    }
}
