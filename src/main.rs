use log::error;
use recipe_cookbook::config::OutputFormat;
use recipe_cookbook::{fetch_recipe, viewer_url, CookbookConfig, CookbookError, RecipeView};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "Usage: recipe-cookbook <url-or-file> [--json] [--raw] [--viewer-link]";

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut location = None;
    let mut json = false;
    let mut raw = false;
    let mut viewer_link = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--raw" => raw = true,
            "--viewer-link" => viewer_link = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(ExitCode::SUCCESS);
            }
            _ => location = Some(arg),
        }
    }
    let location = location.ok_or(USAGE)?;

    let mut config = CookbookConfig::load()?;
    if json {
        config.output.format = OutputFormat::Json;
    }
    if raw {
        config.output.clean_instructions = false;
    }

    let saved = match fetch_recipe(&location, &config.fetch).await {
        Ok(saved) => saved,
        Err(CookbookError::NoRecipeFound) => {
            error!("Unable to parse a recipe from {}", location);
            eprintln!("No recipe found on this page. Make sure you're on a recipe website.");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if viewer_link {
        println!("{}", viewer_url(&config.viewer.base_url, &saved)?);
        return Ok(ExitCode::SUCCESS);
    }

    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&saved)?),
        OutputFormat::Text => println!(
            "{}",
            RecipeView::from_saved(&saved, config.output.clean_instructions)
        ),
    }

    Ok(ExitCode::SUCCESS)
}
