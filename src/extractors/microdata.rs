use super::annotated::Vocabulary;
use super::Extractor;
use crate::model::{Instructions, RecipeRecord};
use log::debug;
use scraper::Html;
use std::sync::LazyLock;

static MICRODATA: LazyLock<Vocabulary> = LazyLock::new(|| Vocabulary::new("itemtype", "itemprop"));

pub struct MicroDataExtractor;

impl Extractor for MicroDataExtractor {
    fn name(&self) -> &'static str {
        "microdata"
    }

    fn parse(&self, document: &Html) -> Option<RecipeRecord> {
        debug!("Attempting to extract recipe using MicroData extractor");

        // Global searches for 'itemprop' (like "name" or "description") often pick up
        // unrelated page content, so everything is scoped to the Recipe item.
        let Some(container) = MICRODATA.find_container(document) else {
            debug!("No MicroData Recipe container found");
            return None;
        };

        let Some(mut recipe) = MICRODATA
            .first(container, "name")
            .and_then(RecipeRecord::named)
        else {
            debug!("MicroData Recipe container has no name");
            return None;
        };

        recipe.description = MICRODATA.first(container, "description");

        // Older markup uses the deprecated 'ingredients' property
        recipe.ingredients = MICRODATA.all(container, "recipeIngredient");
        if recipe.ingredients.is_empty() {
            recipe.ingredients = MICRODATA.all(container, "ingredients");
        }

        let steps = MICRODATA.all(container, "recipeInstructions");
        if !steps.is_empty() {
            recipe.instructions = Some(Instructions::Text(steps.join("\n\n")));
        }

        recipe.cook_time = MICRODATA.first(container, "cookTime");
        recipe.prep_time = MICRODATA.first(container, "prepTime");
        recipe.total_time = MICRODATA.first(container, "totalTime");
        recipe.recipe_yield = MICRODATA.first(container, "recipeYield");

        Some(recipe)
    }
}
