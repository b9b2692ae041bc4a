/// Tokens that start the preparation notes of an ingredient
pub const NOTE_SEPARATORS: [&str; 9] = [
    ",", "(", "-", "for", "chopped", "diced", "sliced", "minced", "grated",
];

// Punctuation separators are dropped rather than kept in the notes text
const CONSUMED_SEPARATORS: [&str; 2] = [",", "-"];

/// Split the remainder of a line into the ingredient name and its notes
///
/// The separator with the lowest index wins, whatever its position in
/// [`NOTE_SEPARATORS`]. A separator at index 0 is ignored. Matching is
/// case-insensitive substring matching.
pub fn split_name_and_notes(text: &str) -> (String, String) {
    let cleaned = text.trim();
    // ASCII lowering keeps byte offsets valid for `cleaned`
    let lowered = cleaned.to_ascii_lowercase();

    let split = NOTE_SEPARATORS
        .iter()
        .filter_map(|separator| {
            lowered
                .find(separator)
                .filter(|&index| index > 0)
                .map(|index| (index, *separator))
        })
        .min_by_key(|(index, _)| *index);

    let (name, notes) = match split {
        Some((index, separator)) => {
            let notes_start = if CONSUMED_SEPARATORS.contains(&separator) {
                index + separator.len()
            } else {
                index
            };
            (cleaned[..index].trim(), cleaned[notes_start..].trim())
        }
        None => (cleaned, ""),
    };

    (name.to_string(), strip_parentheses(notes))
}

/// Remove at most one leading "(" and one trailing ")"
fn strip_parentheses(notes: &str) -> String {
    let notes = notes.strip_prefix('(').unwrap_or(notes);
    let notes = notes.strip_suffix(')').unwrap_or(notes);
    notes.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("flour, sifted", "flour", "sifted")]
    #[case("tomatoes (canned)", "tomatoes", "canned")]
    #[case("onion chopped", "onion", "chopped")]
    #[case("parsley for garnish", "parsley", "for garnish")]
    #[case("garlic, minced", "garlic", "minced")]
    #[case("beef - lean", "beef", "lean")]
    #[case("salt", "salt", "")]
    #[case("Cheddar Cheese, Grated", "Cheddar Cheese", "Grated")]
    #[case("(optional) salt", "(optional) salt", "")]
    fn test_split_name_and_notes(
        #[case] text: &str,
        #[case] name: &str,
        #[case] notes: &str,
    ) {
        assert_eq!(split_name_and_notes(text), (name.to_string(), notes.to_string()));
    }

    #[test]
    fn test_earliest_separator_wins_over_list_order() {
        // "chopped" comes before "," in the text even though "," is listed first
        let (name, notes) = split_name_and_notes("carrots chopped, peeled");

        assert_eq!(name, "carrots");
        assert_eq!(notes, "chopped, peeled");
    }

    #[test]
    fn test_separator_at_start_is_ignored_but_later_ones_count() {
        let (name, notes) = split_name_and_notes("(large) eggs, beaten");

        assert_eq!(name, "(large) eggs");
        assert_eq!(notes, "beaten");
    }

    #[test]
    fn test_only_one_pair_of_parentheses_is_stripped() {
        let (name, notes) = split_name_and_notes("beans ((dried))");

        assert_eq!(name, "beans");
        assert_eq!(notes, "(dried)");
    }
}
