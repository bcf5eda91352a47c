use super::annotated::Vocabulary;
use super::Extractor;
use crate::model::{Instructions, RecipeRecord};
use log::debug;
use scraper::Html;
use std::sync::LazyLock;

static RDFA: LazyLock<Vocabulary> = LazyLock::new(|| Vocabulary::new("typeof", "property"));

/// Reads RDFa (`typeof` / `property`) annotations.
///
/// Only name, description, ingredients and instructions are read. Times and
/// yield are left empty even when the page annotates them.
pub struct RdfaExtractor;

impl Extractor for RdfaExtractor {
    fn name(&self) -> &'static str {
        "rdfa"
    }

    fn parse(&self, document: &Html) -> Option<RecipeRecord> {
        debug!("Attempting to extract recipe using RDFa extractor");

        let container = RDFA.find_container(document)?;
        let mut recipe = RDFA.first(container, "name").and_then(RecipeRecord::named)?;

        recipe.description = RDFA.first(container, "description");
        recipe.ingredients = RDFA.all(container, "recipeIngredient");

        let steps = RDFA.all(container, "recipeInstructions");
        if !steps.is_empty() {
            recipe.instructions = Some(Instructions::Text(steps.join("\n\n")));
        }

        Some(recipe)
    }
}
