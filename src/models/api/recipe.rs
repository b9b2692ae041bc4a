use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CookbookError;
use crate::models::{RecipeRecord, StoredIngredient};
use crate::parser::format_ingredient;

/// Complete recipe as handed out by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub servings: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub ingredients: Vec<StoredIngredient>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub source: Option<String>,
    pub is_public: bool,
    pub family_id: Option<i64>,
    pub created_by: String,
    pub created_at: String,
}

/// The writable part of a recipe, with ingredients already parsed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeData {
    pub title: String,
    pub description: Option<String>,
    pub servings: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub ingredients: Vec<StoredIngredient>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub source: Option<String>,
    pub is_public: bool,
}

/// Recipe form contents exactly as the user entered them
///
/// Ingredient lines are free text; they are parsed when the draft is saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub servings: String,
    pub prep_time: String,
    pub cook_time: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub source: String,
    pub is_public: bool,
}

impl TryFrom<RecipeRecord> for Recipe {
    type Error = CookbookError;

    /// Decode the JSON list columns of a stored row
    ///
    /// A malformed ingredient field reads as an empty list; the other list
    /// columns are only ever written by the store and must decode.
    fn try_from(record: RecipeRecord) -> Result<Self, Self::Error> {
        Ok(Recipe {
            id: record.id,
            title: record.title,
            description: record.description,
            servings: record.servings,
            prep_time: record.prep_time,
            cook_time: record.cook_time,
            ingredients: StoredIngredient::list_from_json(&record.ingredients),
            instructions: serde_json::from_str(&record.instructions)?,
            tags: serde_json::from_str(&record.tags)?,
            source: record.source,
            is_public: record.is_public,
            family_id: record.family_id,
            created_by: record.created_by,
            created_at: record.created_at,
        })
    }
}

impl fmt::Display for Recipe {
    /// Format the recipe as a human-readable string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.title)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Created: {}", self.created_at)?;

        if let Some(description) = &self.description {
            writeln!(f, "\n{}", description)?;
        }

        if let Some(servings) = &self.servings {
            writeln!(f, "Servings: {}", servings)?;
        }

        writeln!(f, "\nIngredients:")?;
        for ingredient in &self.ingredients {
            match ingredient {
                StoredIngredient::Text(text) => writeln!(f, "  - {}", text)?,
                StoredIngredient::Structured(structured) => {
                    writeln!(f, "  - {}", format_ingredient(Some(structured)))?
                }
            }
        }

        if !self.instructions.is_empty() {
            writeln!(f, "\nInstructions:")?;
            for (step, instruction) in self.instructions.iter().enumerate() {
                writeln!(f, "  {}. {}", step + 1, instruction)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StructuredIngredient;

    fn recipe(ingredients: Vec<StoredIngredient>, instructions: Vec<String>) -> Recipe {
        Recipe {
            id: 1,
            title: "Chocolate Chip Cookies".to_string(),
            description: None,
            servings: Some("24".to_string()),
            prep_time: None,
            cook_time: None,
            ingredients,
            instructions,
            tags: vec![],
            source: None,
            is_public: false,
            family_id: None,
            created_by: "user-1".to_string(),
            created_at: "2024-01-15 10:30:00".to_string(),
        }
    }

    #[test]
    fn test_recipe_to_string_with_all_fields() {
        let recipe = recipe(
            vec![
                StoredIngredient::Structured(StructuredIngredient {
                    quantity: "2".to_string(),
                    unit: "cup".to_string(),
                    name: "flour".to_string(),
                    notes: "all-purpose".to_string(),
                    original: "2 cups flour, all-purpose".to_string(),
                }),
                StoredIngredient::Text("1 cup sugar".to_string()),
            ],
            vec!["Mix and bake at 350°F for 12 minutes".to_string()],
        );

        let output = recipe.to_string();

        assert!(output.contains("Recipe: Chocolate Chip Cookies"));
        assert!(output.contains("ID: 1"));
        assert!(output.contains("Servings: 24"));
        assert!(output.contains("2 cup flour (all-purpose)"));
        assert!(output.contains("1 cup sugar"));
        assert!(output.contains("1. Mix and bake at 350°F for 12 minutes"));
    }

    #[test]
    fn test_recipe_from_record_decodes_json_columns() {
        let record = RecipeRecord {
            id: 3,
            title: "Omelette".to_string(),
            description: None,
            servings: None,
            prep_time: None,
            cook_time: None,
            ingredients: r#"["3 eggs", {"quantity": "1", "unit": "tablespoon", "name": "butter", "notes": "", "original": "1 tbsp butter"}]"#.to_string(),
            instructions: r#"["Whisk", "Fry"]"#.to_string(),
            tags: r#"["breakfast"]"#.to_string(),
            source: None,
            is_public: true,
            family_id: None,
            created_by: "user-1".to_string(),
            created_at: "2024-01-15 10:30:00".to_string(),
        };

        let recipe = Recipe::try_from(record).expect("Failed to decode record");

        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0], StoredIngredient::Text("3 eggs".to_string()));
        assert_eq!(recipe.instructions, vec!["Whisk", "Fry"]);
        assert_eq!(recipe.tags, vec!["breakfast"]);
    }

    #[test]
    fn test_recipe_from_record_with_corrupt_json_fails() {
        let record = RecipeRecord {
            id: 4,
            title: "Broken".to_string(),
            description: None,
            servings: None,
            prep_time: None,
            cook_time: None,
            ingredients: "not json".to_string(),
            instructions: "[]".to_string(),
            tags: "[]".to_string(),
            source: None,
            is_public: false,
            family_id: None,
            created_by: "user-1".to_string(),
            created_at: String::new(),
        };

        let result = Recipe::try_from(record);

        assert!(matches!(result, Err(CookbookError::Serialization(_))));
    }

    #[test]
    fn test_recipe_to_string_without_instructions() {
        let recipe = recipe(vec![StoredIngredient::Text("1 head lettuce".to_string())], vec![]);

        let output = recipe.to_string();

        assert!(output.contains("1 head lettuce"));
        assert!(!output.contains("Instructions:"));
    }
}
