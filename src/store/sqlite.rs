use async_trait::async_trait;
use log::{debug, info};
use sqlx::migrate::{MigrateDatabase, Migrator};
use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};

use super::RecipeStore;
use crate::config::AppConfig;
use crate::error::{CookbookError, Result};
use crate::models::RecipeRecord;
use crate::models::api::{Recipe, RecipeData};

/// Embedded schema migrations from `migrations/`
pub(crate) static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const SELECT_RECIPE: &str = "SELECT id, title, description, servings, prep_time, cook_time, \
     ingredients, instructions, tags, source, is_public, family_id, created_by, created_at \
     FROM recipes";

/// [`RecipeStore`] backed by a SQLite connection pool
#[derive(Debug, Clone)]
pub struct SqliteRecipeStore {
    pool: SqlitePool,
}

impl SqliteRecipeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the configured database, creating it if needed, and bring the
    /// schema up to date
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        if !sqlx::Sqlite::database_exists(&config.database_url).await? {
            info!("Creating database {}", config.database_url);
            sqlx::Sqlite::create_database(&config.database_url).await?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.database_url)
            .await?;

        info!("Running migrations");
        MIGRATOR.run(&pool).await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn fetch_many(&self, filter: &str, value: RecipeFilter<'_>) -> Result<Vec<Recipe>> {
        let sql = format!("{SELECT_RECIPE} WHERE {filter} ORDER BY created_at DESC, id DESC");
        let query = sqlx::query_as::<_, RecipeRecord>(&sql);
        let query = match value {
            RecipeFilter::Text(text) => query.bind(text),
            RecipeFilter::Id(id) => query.bind(id),
        };

        query
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Recipe::try_from)
            .collect()
    }
}

enum RecipeFilter<'a> {
    Text(&'a str),
    Id(i64),
}

/// Fail unless `user_id` created the recipe
async fn check_owner(conn: &mut SqliteConnection, recipe_id: i64, user_id: &str) -> Result<()> {
    let owner: Option<String> = sqlx::query_scalar("SELECT created_by FROM recipes WHERE id = ?")
        .bind(recipe_id)
        .fetch_optional(&mut *conn)
        .await?;

    match owner {
        None => Err(CookbookError::RecipeNotFound(recipe_id)),
        Some(owner) if owner == user_id => Ok(()),
        Some(_) => Err(CookbookError::PermissionDenied {
            recipe_id,
            user_id: user_id.to_string(),
        }),
    }
}

async fn fetch_one(conn: &mut SqliteConnection, recipe_id: i64) -> Result<Recipe> {
    let record = sqlx::query_as::<_, RecipeRecord>(&format!("{SELECT_RECIPE} WHERE id = ?"))
        .bind(recipe_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(CookbookError::RecipeNotFound(recipe_id))?;

    Recipe::try_from(record)
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    async fn create_recipe(&self, owner: &str, recipe: &RecipeData) -> Result<i64> {
        let recipe_id = sqlx::query(
            "INSERT INTO recipes (title, description, servings, prep_time, cook_time, ingredients, \
             instructions, tags, source, is_public, created_by) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&recipe.servings)
        .bind(&recipe.prep_time)
        .bind(&recipe.cook_time)
        .bind(serde_json::to_string(&recipe.ingredients)?)
        .bind(serde_json::to_string(&recipe.instructions)?)
        .bind(serde_json::to_string(&recipe.tags)?)
        .bind(&recipe.source)
        .bind(recipe.is_public)
        .bind(owner)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        debug!("Created recipe {} for {}", recipe_id, owner);
        Ok(recipe_id)
    }

    async fn get_recipe(&self, recipe_id: i64) -> Result<Recipe> {
        let mut conn = self.pool.acquire().await?;
        fetch_one(&mut conn, recipe_id).await
    }

    async fn get_public_recipe(&self, recipe_id: i64) -> Result<Option<Recipe>> {
        let record = sqlx::query_as::<_, RecipeRecord>(&format!(
            "{SELECT_RECIPE} WHERE id = ? AND is_public = 1"
        ))
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await?;

        record.map(Recipe::try_from).transpose()
    }

    async fn list_recipes(&self, owner: &str) -> Result<Vec<Recipe>> {
        self.fetch_many("created_by = ?", RecipeFilter::Text(owner))
            .await
    }

    async fn update_recipe(
        &self,
        recipe_id: i64,
        user_id: &str,
        recipe: &RecipeData,
    ) -> Result<Recipe> {
        let mut tx = self.pool.begin().await?;

        check_owner(&mut tx, recipe_id, user_id).await?;

        sqlx::query(
            "UPDATE recipes SET title = ?, description = ?, servings = ?, prep_time = ?, \
             cook_time = ?, ingredients = ?, instructions = ?, tags = ?, source = ?, is_public = ? \
             WHERE id = ?",
        )
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&recipe.servings)
        .bind(&recipe.prep_time)
        .bind(&recipe.cook_time)
        .bind(serde_json::to_string(&recipe.ingredients)?)
        .bind(serde_json::to_string(&recipe.instructions)?)
        .bind(serde_json::to_string(&recipe.tags)?)
        .bind(&recipe.source)
        .bind(recipe.is_public)
        .bind(recipe_id)
        .execute(&mut *tx)
        .await?;

        let updated = fetch_one(&mut tx, recipe_id).await?;
        tx.commit().await?;

        debug!("Updated recipe {}", recipe_id);
        Ok(updated)
    }

    async fn delete_recipe(&self, recipe_id: i64, user_id: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        check_owner(&mut tx, recipe_id, user_id).await?;

        sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(recipe_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!("Deleted recipe {}", recipe_id);
        Ok(())
    }

    async fn share_recipe_with_family(
        &self,
        recipe_id: i64,
        user_id: &str,
        family_id: i64,
    ) -> Result<Recipe> {
        let mut tx = self.pool.begin().await?;

        check_owner(&mut tx, recipe_id, user_id).await?;

        sqlx::query("UPDATE recipes SET family_id = ? WHERE id = ?")
            .bind(family_id)
            .bind(recipe_id)
            .execute(&mut *tx)
            .await?;

        let shared = fetch_one(&mut tx, recipe_id).await?;
        tx.commit().await?;

        Ok(shared)
    }

    async fn remove_recipe_from_family(&self, recipe_id: i64, user_id: &str) -> Result<Recipe> {
        let mut tx = self.pool.begin().await?;

        check_owner(&mut tx, recipe_id, user_id).await?;

        sqlx::query("UPDATE recipes SET family_id = NULL WHERE id = ?")
            .bind(recipe_id)
            .execute(&mut *tx)
            .await?;

        let unshared = fetch_one(&mut tx, recipe_id).await?;
        tx.commit().await?;

        Ok(unshared)
    }

    async fn family_recipes(&self, family_id: i64) -> Result<Vec<Recipe>> {
        self.fetch_many("family_id = ?", RecipeFilter::Id(family_id))
            .await
    }
}
