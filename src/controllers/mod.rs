mod recipe_controller;

pub use recipe_controller::{
    draft_from_recipe, edit_form_ingredients, meal_plan_shopping_list, recipe_data_from_draft,
    recipe_shopping_list, save_new_recipe, update_recipe_from_draft,
};
