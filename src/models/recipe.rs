use sqlx::prelude::FromRow;

/// A row of the `recipes` table
///
/// The list columns (`ingredients`, `instructions`, `tags`) are JSON text and
/// are decoded into [`crate::models::api::Recipe`] by the store.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub servings: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub ingredients: String,
    pub instructions: String,
    pub tags: String,
    pub source: Option<String>,
    pub is_public: bool,
    pub family_id: Option<i64>,
    pub created_by: String,
    pub created_at: String,
}
