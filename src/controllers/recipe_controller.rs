use log::{debug, info};

use crate::error::{CookbookError, Result};
use crate::models::StoredIngredient;
use crate::models::api::{Recipe, RecipeData, RecipeDraft, ShoppingListCategory};
use crate::parser::{ingredients_to_strings, parse_ingredient_lines};
use crate::shopping_list::generate_shopping_list_from_stored;
use crate::store::RecipeStore;

fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validate a recipe form and parse its ingredient lines
///
/// A title and at least one non-blank ingredient line are required. Blank
/// instruction lines are dropped.
pub fn recipe_data_from_draft(draft: &RecipeDraft) -> Result<RecipeData> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(CookbookError::Validation("Title is required".to_string()));
    }

    let ingredients: Vec<StoredIngredient> = parse_ingredient_lines(&draft.ingredients)
        .into_iter()
        .map(StoredIngredient::from)
        .collect();
    if ingredients.is_empty() {
        return Err(CookbookError::Validation(
            "At least one ingredient is required".to_string(),
        ));
    }

    Ok(RecipeData {
        title: title.to_string(),
        description: optional(&draft.description),
        servings: optional(&draft.servings),
        prep_time: optional(&draft.prep_time),
        cook_time: optional(&draft.cook_time),
        ingredients,
        instructions: draft
            .instructions
            .iter()
            .filter(|step| !step.trim().is_empty())
            .cloned()
            .collect(),
        tags: draft.tags.clone(),
        source: optional(&draft.source),
        is_public: draft.is_public,
    })
}

/// Fill a recipe form from a stored recipe
///
/// Ingredient lines show what the user originally typed.
pub fn draft_from_recipe(recipe: &Recipe) -> RecipeDraft {
    RecipeDraft {
        title: recipe.title.clone(),
        description: recipe.description.clone().unwrap_or_default(),
        servings: recipe.servings.clone().unwrap_or_default(),
        prep_time: recipe.prep_time.clone().unwrap_or_default(),
        cook_time: recipe.cook_time.clone().unwrap_or_default(),
        ingredients: ingredients_to_strings(&recipe.ingredients),
        instructions: recipe.instructions.clone(),
        tags: recipe.tags.clone(),
        source: recipe.source.clone().unwrap_or_default(),
        is_public: recipe.is_public,
    }
}

/// Create a recipe from a submitted form
/// Returns the recipe ID
pub async fn save_new_recipe<S: RecipeStore>(
    store: &S,
    owner: &str,
    draft: &RecipeDraft,
) -> Result<i64> {
    let data = recipe_data_from_draft(draft)?;
    let recipe_id = store.create_recipe(owner, &data).await?;

    info!(
        "Saved recipe {} ({} ingredients) as {}",
        data.title,
        data.ingredients.len(),
        recipe_id
    );
    Ok(recipe_id)
}

/// Replace a recipe with the contents of an edited form
pub async fn update_recipe_from_draft<S: RecipeStore>(
    store: &S,
    recipe_id: i64,
    user_id: &str,
    draft: &RecipeDraft,
) -> Result<Recipe> {
    let data = recipe_data_from_draft(draft)?;
    store.update_recipe(recipe_id, user_id, &data).await
}

/// Ingredient lines to pre-populate an edit form with
pub async fn edit_form_ingredients<S: RecipeStore>(store: &S, recipe_id: i64) -> Result<Vec<String>> {
    let recipe = store.get_recipe(recipe_id).await?;
    Ok(ingredients_to_strings(&recipe.ingredients))
}

/// Categorized shopping list for a single recipe
pub async fn recipe_shopping_list<S: RecipeStore>(
    store: &S,
    recipe_id: i64,
) -> Result<Vec<ShoppingListCategory>> {
    let recipe = store.get_recipe(recipe_id).await?;
    Ok(generate_shopping_list_from_stored(&recipe.ingredients))
}

/// One shopping list covering every recipe of a meal plan
///
/// A recipe planned twice contributes its ingredients twice.
pub async fn meal_plan_shopping_list<S: RecipeStore>(
    store: &S,
    recipe_ids: &[i64],
) -> Result<Vec<ShoppingListCategory>> {
    let mut ingredients = Vec::new();
    for recipe_id in recipe_ids {
        let recipe = store.get_recipe(*recipe_id).await?;
        ingredients.extend(recipe.ingredients);
    }

    debug!(
        "Building shopping list from {} recipes, {} ingredients",
        recipe_ids.len(),
        ingredients.len()
    );
    Ok(generate_shopping_list_from_stored(&ingredients))
}
