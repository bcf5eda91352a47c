use crate::model::RecipeRecord;
use scraper::{ElementRef, Html};

mod annotated;
mod heuristic;
mod json_ld;
mod microdata;
mod rdfa;
pub mod value;

pub use heuristic::HeuristicExtractor;
pub use json_ld::JsonLdExtractor;
pub use microdata::MicroDataExtractor;
pub use rdfa::RdfaExtractor;

/// One strategy for pulling a recipe out of a parsed page.
///
/// `None` means the strategy found nothing it trusts; it is not an error and
/// the caller is expected to move on to the next strategy.
pub trait Extractor {
    fn name(&self) -> &'static str;
    fn parse(&self, document: &Html) -> Option<RecipeRecord>;
}

/// Concatenated text of an element and its descendants, trimmed.
pub(crate) fn text_content(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
