use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One free-text ingredient line broken into its parts
///
/// Produced by the parser at recipe-save time and stored as part of the
/// recipe. `original` always holds the trimmed input line so the user can be
/// shown exactly what they typed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuredIngredient {
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub original: String,
}

/// An entry of a recipe's stored `ingredients` field
///
/// Older recipes hold plain strings, newer ones hold parsed records, and the
/// store hands back whichever shape was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredIngredient {
    Text(String),
    Structured(StructuredIngredient),
}

impl StoredIngredient {
    /// Keep the readable entries of a JSON ingredient list
    ///
    /// Elements that are neither a string nor an ingredient object are
    /// skipped, and anything but an array gives an empty list.
    pub fn list_from_value(value: &Value) -> Vec<StoredIngredient> {
        let Value::Array(items) = value else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect()
    }

    /// Decode a stored `ingredients` column without ever failing
    ///
    /// The column is written by whatever produced the recipe, so a field that
    /// is not a JSON array reads as no ingredients at all.
    pub fn list_from_json(text: &str) -> Vec<StoredIngredient> {
        match serde_json::from_str::<Value>(text) {
            Ok(value @ Value::Array(_)) => Self::list_from_value(&value),
            Ok(other) => {
                warn!("Ignoring ingredient field that is not a list: {}", other);
                Vec::new()
            }
            Err(e) => {
                warn!("Ignoring ingredient field that is not JSON: {}", e);
                Vec::new()
            }
        }
    }
}

impl From<StructuredIngredient> for StoredIngredient {
    fn from(ingredient: StructuredIngredient) -> Self {
        StoredIngredient::Structured(ingredient)
    }
}

impl From<String> for StoredIngredient {
    fn from(text: String) -> Self {
        StoredIngredient::Text(text)
    }
}
