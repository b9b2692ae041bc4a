//! Recipe persistence
//!
//! The application talks to storage only through [`RecipeStore`]. The
//! SQLite implementation is used by the binary, the in-memory one by tests
//! and anywhere a throwaway store is enough.

mod memory;
mod sqlite;

pub use memory::InMemoryRecipeStore;
pub(crate) use sqlite::MIGRATOR;
pub use sqlite::SqliteRecipeStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::api::{Recipe, RecipeData};

/// Record-level operations on recipes
///
/// Only the owner (`created_by`) of a recipe may update, delete, share or
/// unshare it; anyone else gets [`crate::error::CookbookError::PermissionDenied`].
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Store a new recipe owned by `owner` and return its id
    async fn create_recipe(&self, owner: &str, recipe: &RecipeData) -> Result<i64>;

    async fn get_recipe(&self, recipe_id: i64) -> Result<Recipe>;

    /// Fetch a recipe only if it is public; absent and private both give `None`
    async fn get_public_recipe(&self, recipe_id: i64) -> Result<Option<Recipe>>;

    /// All recipes created by `owner`, newest first
    async fn list_recipes(&self, owner: &str) -> Result<Vec<Recipe>>;

    /// Replace the writable fields of a recipe and return the stored result
    async fn update_recipe(
        &self,
        recipe_id: i64,
        user_id: &str,
        recipe: &RecipeData,
    ) -> Result<Recipe>;

    async fn delete_recipe(&self, recipe_id: i64, user_id: &str) -> Result<()>;

    async fn share_recipe_with_family(
        &self,
        recipe_id: i64,
        user_id: &str,
        family_id: i64,
    ) -> Result<Recipe>;

    async fn remove_recipe_from_family(&self, recipe_id: i64, user_id: &str) -> Result<Recipe>;

    /// Recipes shared with a family, newest first
    async fn family_recipes(&self, family_id: i64) -> Result<Vec<Recipe>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::test_db;
    use chrono::NaiveDateTime;
    use super::memory::CREATED_AT_FORMAT;
    use rstest::*;
    use sqlx::SqlitePool;

    async fn created_at<S: RecipeStore>(store: &S) -> String {
        let data = RecipeData {
            title: "Toast".to_string(),
            ..Default::default()
        };
        let recipe_id = store.create_recipe("user-1", &data).await.expect("create");
        store.get_recipe(recipe_id).await.expect("get").created_at
    }

    #[rstest]
    #[tokio::test]
    async fn test_stores_agree_on_created_at_format(#[future] test_db: SqlitePool) {
        let from_sqlite = created_at(&SqliteRecipeStore::new(test_db.await)).await;
        let from_memory = created_at(&InMemoryRecipeStore::new()).await;

        for stamp in [&from_sqlite, &from_memory] {
            assert!(
                NaiveDateTime::parse_from_str(stamp, CREATED_AT_FORMAT).is_ok(),
                "unexpected created_at {:?}",
                stamp
            );
        }
        assert_eq!(from_sqlite.len(), from_memory.len());
    }
}
