pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod instructions;
pub mod model;
pub mod pipeline;
pub mod transport;
pub mod view;

use log::{debug, error};
use scraper::Html;

pub use crate::config::CookbookConfig;
pub use crate::error::CookbookError;
pub use crate::instructions::{clean_instructions, format_for_viewer, format_instructions};
pub use crate::model::{Instructions, RecipeRecord, SavedRecipe};
pub use crate::pipeline::{extract_recipe, ExtractionPipeline};
pub use crate::transport::{decode_record, encode_record, from_viewer_url, viewer_url};
pub use crate::view::RecipeView;

/// Reads the page at `location` (a URL or a local path), extracts its recipe
/// and stamps it with where and when it was saved.
pub async fn fetch_recipe(
    location: &str,
    config: &config::FetchConfig,
) -> Result<SavedRecipe, CookbookError> {
    let source = fetchers::page_source_for(location, config)?;
    let body = source.fetch(location).await?;

    let document = Html::parse_document(&body);
    match ExtractionPipeline::default().extract(&document) {
        Some(recipe) => {
            debug!("{:#?}", recipe);
            Ok(SavedRecipe::new(recipe, location))
        }
        None => {
            error!("No extractor found a recipe on {}", location);
            Err(CookbookError::NoRecipeFound)
        }
    }
}
