use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::RecipeStore;
use crate::error::{CookbookError, Result};
use crate::models::api::{Recipe, RecipeData};

/// [`RecipeStore`] that keeps everything in a map, for tests and demos
#[derive(Debug, Default)]
pub struct InMemoryRecipeStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    recipes: BTreeMap<i64, Recipe>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl State {
    fn owned_mut(&mut self, recipe_id: i64, user_id: &str) -> Result<&mut Recipe> {
        let recipe = self
            .recipes
            .get_mut(&recipe_id)
            .ok_or(CookbookError::RecipeNotFound(recipe_id))?;

        if recipe.created_by != user_id {
            return Err(CookbookError::PermissionDenied {
                recipe_id,
                user_id: user_id.to_string(),
            });
        }

        Ok(recipe)
    }

    /// Recipes matching `filter`, newest first
    fn newest_first(&self, filter: impl Fn(&Recipe) -> bool) -> Vec<Recipe> {
        self.recipes
            .values()
            .rev()
            .filter(|recipe| filter(recipe))
            .cloned()
            .collect()
    }
}

/// Layout of `created_at`, matching SQLite's `CURRENT_TIMESTAMP`
pub(crate) const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn now() -> String {
    Utc::now().format(CREATED_AT_FORMAT).to_string()
}

fn apply(recipe: &mut Recipe, data: &RecipeData) {
    recipe.title = data.title.clone();
    recipe.description = data.description.clone();
    recipe.servings = data.servings.clone();
    recipe.prep_time = data.prep_time.clone();
    recipe.cook_time = data.cook_time.clone();
    recipe.ingredients = data.ingredients.clone();
    recipe.instructions = data.instructions.clone();
    recipe.tags = data.tags.clone();
    recipe.source = data.source.clone();
    recipe.is_public = data.is_public;
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn create_recipe(&self, owner: &str, recipe: &RecipeData) -> Result<i64> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let recipe_id = state.last_id;

        let mut stored = Recipe {
            id: recipe_id,
            title: String::new(),
            description: None,
            servings: None,
            prep_time: None,
            cook_time: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tags: Vec::new(),
            source: None,
            is_public: false,
            family_id: None,
            created_by: owner.to_string(),
            created_at: now(),
        };
        apply(&mut stored, recipe);
        state.recipes.insert(recipe_id, stored);

        Ok(recipe_id)
    }

    async fn get_recipe(&self, recipe_id: i64) -> Result<Recipe> {
        self.state
            .read()
            .await
            .recipes
            .get(&recipe_id)
            .cloned()
            .ok_or(CookbookError::RecipeNotFound(recipe_id))
    }

    async fn get_public_recipe(&self, recipe_id: i64) -> Result<Option<Recipe>> {
        Ok(self
            .state
            .read()
            .await
            .recipes
            .get(&recipe_id)
            .filter(|recipe| recipe.is_public)
            .cloned())
    }

    async fn list_recipes(&self, owner: &str) -> Result<Vec<Recipe>> {
        Ok(self
            .state
            .read()
            .await
            .newest_first(|recipe| recipe.created_by == owner))
    }

    async fn update_recipe(
        &self,
        recipe_id: i64,
        user_id: &str,
        recipe: &RecipeData,
    ) -> Result<Recipe> {
        let mut state = self.state.write().await;
        let stored = state.owned_mut(recipe_id, user_id)?;
        apply(stored, recipe);
        Ok(stored.clone())
    }

    async fn delete_recipe(&self, recipe_id: i64, user_id: &str) -> Result<()> {
        let mut state = self.state.write().await;
        state.owned_mut(recipe_id, user_id)?;
        state.recipes.remove(&recipe_id);
        Ok(())
    }

    async fn share_recipe_with_family(
        &self,
        recipe_id: i64,
        user_id: &str,
        family_id: i64,
    ) -> Result<Recipe> {
        let mut state = self.state.write().await;
        let stored = state.owned_mut(recipe_id, user_id)?;
        stored.family_id = Some(family_id);
        Ok(stored.clone())
    }

    async fn remove_recipe_from_family(&self, recipe_id: i64, user_id: &str) -> Result<Recipe> {
        let mut state = self.state.write().await;
        let stored = state.owned_mut(recipe_id, user_id)?;
        stored.family_id = None;
        Ok(stored.clone())
    }

    async fn family_recipes(&self, family_id: i64) -> Result<Vec<Recipe>> {
        Ok(self
            .state
            .read()
            .await
            .newest_first(|recipe| recipe.family_id == Some(family_id)))
    }
}
