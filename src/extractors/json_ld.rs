use super::value::{FieldValue, WrapKeys};
use super::{text_content, Extractor};
use crate::model::{Instructions, RecipeRecord};
use html_escape::decode_html_entities;
use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;

static SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script[type='application/ld+json']").expect("valid JSON-LD selector")
});

const RECIPE_TYPES: &[&str] = &["Recipe", "http://schema.org/Recipe", "https://schema.org/Recipe"];

pub struct JsonLdExtractor;

impl JsonLdExtractor {
    fn convert_to_recipe(&self, json: &Value) -> Option<RecipeRecord> {
        let name = field(json, "name", WrapKeys::Value)
            .map(|v| decode_html_symbols(&v.into_text(" ")))?;
        let mut recipe = RecipeRecord::named(name)?;

        recipe.description = field(json, "description", WrapKeys::Value)
            .map(|v| decode_html_symbols(&v.into_text(" ")))
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        if let Some(ingredients) = field(json, "recipeIngredient", WrapKeys::Value) {
            recipe.ingredients = ingredients
                .into_list()
                .iter()
                .map(|ing| decode_html_symbols(ing).trim().to_string())
                .filter(|ing| !ing.is_empty())
                .collect();
        }

        recipe.instructions = json
            .get("recipeInstructions")
            .map(flatten_sections)
            .and_then(|flattened| FieldValue::from_json(&flattened, WrapKeys::Text))
            .map(|v| decode_html_symbols(&v.into_text("\n\n")))
            .filter(|text| !text.trim().is_empty())
            .map(Instructions::Text);

        recipe.prep_time = scalar_field(json, "prepTime");
        recipe.cook_time = scalar_field(json, "cookTime");
        recipe.total_time = scalar_field(json, "totalTime");
        recipe.recipe_yield = field(json, "recipeYield", WrapKeys::Value).and_then(|v| {
            let yield_str = match v {
                // For arrays, prefer the descriptive version (e.g., "12 cookies") over just the number
                FieldValue::List(items) => {
                    let values: Vec<String> = items.into_iter().map(|i| i.into_text(" ")).collect();
                    values
                        .iter()
                        .find(|s| s.contains(char::is_alphabetic))
                        .or_else(|| values.first())
                        .cloned()
                }
                other => Some(other.into_text(" ")),
            };
            yield_str.filter(|s| !s.is_empty())
        });

        Some(recipe)
    }
}

fn field(json: &Value, key: &str, keys: WrapKeys) -> Option<FieldValue> {
    json.get(key).and_then(|v| FieldValue::from_json(v, keys))
}

fn scalar_field(json: &Value, key: &str) -> Option<String> {
    field(json, key, WrapKeys::Value)
        .map(|v| v.into_text(", "))
        .filter(|s| !s.is_empty())
}

/// Replaces `HowToSection` entries with the steps they contain.
fn flatten_sections(instructions: &Value) -> Value {
    let entries = match instructions {
        Value::Array(entries) => entries.as_slice(),
        single if is_section(single) => std::slice::from_ref(single),
        other => return other.clone(),
    };

    let mut steps = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.get("itemListElement") {
            Some(Value::Array(items)) if is_section(entry) => steps.extend(items.iter().cloned()),
            Some(item) if is_section(entry) => steps.push(item.clone()),
            _ => steps.push(entry.clone()),
        }
    }
    Value::Array(steps)
}

fn is_section(value: &Value) -> bool {
    value.get("@type").and_then(Value::as_str) == Some("HowToSection")
}

fn decode_html_symbols(text: &str) -> String {
    // sites often double-encode, so decode twice
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(type_str)) => RECIPE_TYPES.contains(&type_str.as_str()),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| RECIPE_TYPES.contains(&t)),
        _ => false,
    }
}

/// Objects worth checking in one parsed block, in document order: the block
/// itself (or each element of a top-level array), each followed by its
/// `@graph` members.
fn candidates(json: &Value) -> Vec<&Value> {
    let roots: Vec<&Value> = match json {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let mut found = Vec::new();
    for root in roots {
        found.push(root);
        if let Some(Value::Array(graph)) = root.get("@graph") {
            found.extend(graph.iter());
        }
    }
    found
}

impl Extractor for JsonLdExtractor {
    fn name(&self) -> &'static str {
        "json_ld"
    }

    fn parse(&self, document: &Html) -> Option<RecipeRecord> {
        let scripts: Vec<_> = document.select(&SCRIPT_SELECTOR).collect();
        debug!("JsonLdExtractor: Found {} JSON-LD script tags", scripts.len());

        for (index, script) in scripts.into_iter().enumerate() {
            let raw_json = text_content(script);
            let json_ld = match serde_json::from_str::<Value>(&raw_json) {
                Ok(json_ld) => json_ld,
                Err(e) => {
                    debug!("JsonLdExtractor: Failed to parse JSON-LD {}: {}", index, e);
                    continue;
                }
            };

            for candidate in candidates(&json_ld).into_iter().filter(|c| is_recipe_type(c)) {
                match self.convert_to_recipe(candidate) {
                    Some(recipe) => {
                        debug!("JsonLdExtractor: Found recipe in script {}", index);
                        return Some(recipe);
                    }
                    None => debug!("JsonLdExtractor: Recipe in script {} has no name", index),
                }
            }
        }

        debug!("JsonLdExtractor: No valid recipe found in any JSON-LD script");
        None
    }
}
