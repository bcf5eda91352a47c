use crate::extractors::{
    Extractor, HeuristicExtractor, JsonLdExtractor, MicroDataExtractor, RdfaExtractor,
};
use crate::model::RecipeRecord;
use log::{debug, info};
use scraper::Html;

/// Runs extraction strategies in priority order and returns the first recipe
/// found. Later strategies are never consulted once one succeeds.
pub struct ExtractionPipeline {
    extractors: Vec<Box<dyn Extractor + Send + Sync>>,
}

impl Default for ExtractionPipeline {
    /// Structured data first, then microdata, RDFa, and finally layout heuristics.
    fn default() -> Self {
        Self::with_extractors(vec![
            Box::new(JsonLdExtractor),
            Box::new(MicroDataExtractor),
            Box::new(RdfaExtractor),
            Box::new(HeuristicExtractor),
        ])
    }
}

impl ExtractionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extractors(extractors: Vec<Box<dyn Extractor + Send + Sync>>) -> Self {
        Self { extractors }
    }

    pub fn extract(&self, document: &Html) -> Option<RecipeRecord> {
        for extractor in &self.extractors {
            match extractor.parse(document) {
                Some(recipe) if recipe.is_valid() => {
                    info!("Extracted \"{}\" using {}", recipe.name, extractor.name());
                    return Some(recipe);
                }
                _ => debug!("{} found no recipe", extractor.name()),
            }
        }
        None
    }
}

/// Parses `html` and runs the default pipeline over it.
pub fn extract_recipe(html: &str) -> Option<RecipeRecord> {
    let document = Html::parse_document(html);
    ExtractionPipeline::default().extract(&document)
}
