use std::env;
use std::fs;

use anyhow::{Context, bail};
use cookbook::config::AppConfig;
use cookbook::controllers::{meal_plan_shopping_list, save_new_recipe};
use cookbook::models::api::RecipeDraft;
use cookbook::store::{RecipeStore, SqliteRecipeStore};
use log::info;

const USAGE: &str = "Usage:
  cookbook import <owner> <title> <ingredients-file>
  cookbook show <recipe-id>
  cookbook shopping-list <recipe-id>...";

fn parse_id(arg: &str) -> anyhow::Result<i64> {
    arg.parse()
        .with_context(|| format!("Invalid recipe id: {}", arg))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    let config = AppConfig::load()?;
    let store = SqliteRecipeStore::connect(&config).await?;
    info!("Database ready at {}", config.database_url);

    match (command.as_str(), rest) {
        ("import", [owner, title, path]) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read ingredients from {}", path))?;

            let draft = RecipeDraft {
                title: title.clone(),
                ingredients: text.lines().map(str::to_string).collect(),
                ..Default::default()
            };

            let recipe_id = save_new_recipe(&store, owner, &draft).await?;
            println!("Recipe saved with ID: {}", recipe_id);
        }
        ("show", [id]) => {
            let recipe = store.get_recipe(parse_id(id)?).await?;
            print!("{}", recipe);
        }
        ("shopping-list", ids) if !ids.is_empty() => {
            let ids = ids
                .iter()
                .map(|id| parse_id(id))
                .collect::<anyhow::Result<Vec<_>>>()?;

            for category in meal_plan_shopping_list(&store, &ids).await? {
                println!("{}:", category.category);
                for item in &category.items {
                    println!("  {}", item);
                }
            }
        }
        _ => bail!(USAGE),
    }

    Ok(())
}
