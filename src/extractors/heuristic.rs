use super::{text_content, Extractor};
use crate::model::{Instructions, RecipeRecord};
use log::debug;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Title candidates, most specific first. Only the first element each
/// selector matches is considered.
const TITLE_SELECTORS: &[&str] = &[
    "h1[class*='recipe']",
    "h1[class*='title']",
    ".recipe-title",
    ".recipe-name",
    // Recipe card plugins
    ".wprm-recipe-name",
    ".tasty-recipes-title",
    ".mv-create-title",
    "h1",
];

const INGREDIENT_SELECTORS: &[&str] = &[
    ".wprm-recipe-ingredient",
    ".tasty-recipes-ingredients li",
    ".mv-create-ingredients li",
    "[class*='ingredient']",
    "[class*='ingredients']",
    "ul li",
    "ol li",
];

const INSTRUCTION_SELECTORS: &[&str] = &[
    ".wprm-recipe-instruction-text",
    ".tasty-recipes-instructions li",
    ".mv-create-instructions li",
    "[class*='instruction']",
    "[class*='direction']",
    "[class*='step']",
    "p",
];

/// An ordered list of selectors plus the plausibility rules a selector's
/// matches must pass. The first selector with any surviving text wins.
struct SelectorCascade {
    selectors: Vec<Selector>,
    /// Matches needed before a selector is considered at all (strictly more than).
    more_than: usize,
    /// Accepted text length in characters, both bounds exclusive.
    min_len: usize,
    max_len: usize,
}

impl SelectorCascade {
    fn new(selectors: &[&str], more_than: usize, min_len: usize, max_len: usize) -> Self {
        Self {
            selectors: selectors
                .iter()
                .map(|s| Selector::parse(s).expect("valid heuristic selector"))
                .collect(),
            more_than,
            min_len,
            max_len,
        }
    }

    fn first_match(&self, document: &Html) -> Option<Vec<String>> {
        self.selectors.iter().find_map(|selector| {
            let elements: Vec<_> = document.select(selector).collect();
            if elements.len() <= self.more_than {
                return None;
            }
            let texts: Vec<String> = elements
                .into_iter()
                .map(text_content)
                .filter(|text| {
                    let len = text.chars().count();
                    len > self.min_len && len < self.max_len
                })
                .collect();
            (!texts.is_empty()).then_some(texts)
        })
    }
}

static TITLES: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    TITLE_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("valid heuristic selector"))
        .collect()
});

// More than 3 items separates an ingredient list from incidental short lists.
static INGREDIENTS: LazyLock<SelectorCascade> =
    LazyLock::new(|| SelectorCascade::new(INGREDIENT_SELECTORS, 3, 0, 200));

static INSTRUCTIONS: LazyLock<SelectorCascade> =
    LazyLock::new(|| SelectorCascade::new(INSTRUCTION_SELECTORS, 0, 20, 1000));

/// Last-resort extraction from page layout conventions when the page carries
/// no machine-readable recipe markup.
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    fn find_title(&self, document: &Html) -> Option<String> {
        TITLES.iter().find_map(|selector| {
            document
                .select(selector)
                .next()
                .map(text_content)
                .filter(|text| !text.is_empty())
        })
    }
}

impl Extractor for HeuristicExtractor {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn parse(&self, document: &Html) -> Option<RecipeRecord> {
        debug!("Attempting to extract recipe using layout heuristics");

        let mut recipe = self.find_title(document).and_then(RecipeRecord::named)?;

        if let Some(ingredients) = INGREDIENTS.first_match(document) {
            debug!("Ingredients count: {}", ingredients.len());
            recipe.ingredients = ingredients;
        }

        if let Some(paragraphs) = INSTRUCTIONS.first_match(document) {
            debug!("Instruction paragraphs: {}", paragraphs.len());
            recipe.instructions = Some(Instructions::Text(paragraphs.join("\n\n")));
        }

        debug!("Recipe name: {}", recipe.name);
        Some(recipe)
    }
}
