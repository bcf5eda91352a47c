use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Instructions as found on the page: either already split into steps or a
/// single block of free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Instructions {
    Steps(Vec<String>),
    Text(String),
}

impl Instructions {
    pub fn is_empty(&self) -> bool {
        match self {
            Instructions::Steps(steps) => steps.iter().all(|s| s.trim().is_empty()),
            Instructions::Text(text) => text.trim().is_empty(),
        }
    }
}

impl From<String> for Instructions {
    fn from(text: String) -> Self {
        Instructions::Text(text)
    }
}

impl From<Vec<String>> for Instructions {
    fn from(steps: Vec<String>) -> Self {
        Instructions::Steps(steps)
    }
}

/// A recipe extracted from a single page.
///
/// Field names on the wire follow schema.org so a record can be handed to
/// anything that already understands `Recipe` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "recipeIngredient",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ingredients: Vec<String>,
    #[serde(
        rename = "recipeInstructions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub instructions: Option<Instructions>,
    #[serde(rename = "prepTime", default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(rename = "cookTime", default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(rename = "totalTime", default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(rename = "recipeYield", default, skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<String>,
}

impl RecipeRecord {
    /// Starts a record with only a name. Returns `None` when the name is blank,
    /// since a record without a name is not a recipe.
    pub fn named(name: impl Into<String>) -> Option<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name,
            description: None,
            ingredients: Vec::new(),
            instructions: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            recipe_yield: None,
        })
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A recipe as kept by the caller after a successful extraction: the record
/// plus where it came from and when it was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecipe {
    #[serde(flatten)]
    pub recipe: RecipeRecord,
    pub url: String,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
}

impl SavedRecipe {
    pub fn new(recipe: RecipeRecord, url: impl Into<String>) -> Self {
        Self {
            recipe,
            url: url.into(),
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_rejects_blank_names() {
        assert!(RecipeRecord::named("   ").is_none());
        assert!(RecipeRecord::named("").is_none());
        assert_eq!(RecipeRecord::named("  Soup \n").unwrap().name, "Soup");
    }

    #[test]
    fn test_schema_org_field_names() {
        let mut recipe = RecipeRecord::named("Pancakes").unwrap();
        recipe.ingredients = vec!["flour".to_string(), "milk".to_string()];
        recipe.instructions = Some(Instructions::Text("Mix. Fry.".to_string()));
        recipe.recipe_yield = Some("4".to_string());

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["name"], "Pancakes");
        assert_eq!(json["recipeIngredient"][1], "milk");
        assert_eq!(json["recipeInstructions"], "Mix. Fry.");
        assert_eq!(json["recipeYield"], "4");
        assert!(json.get("description").is_none());
        assert!(json.get("prepTime").is_none());
    }

    #[test]
    fn test_instructions_accept_list_or_text() {
        let steps: Instructions = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(
            steps,
            Instructions::Steps(vec!["a".to_string(), "b".to_string()])
        );
        let text: Instructions = serde_json::from_str(r#""a then b""#).unwrap();
        assert_eq!(text, Instructions::Text("a then b".to_string()));
    }

    #[test]
    fn test_saved_recipe_flattens_record() {
        let recipe = RecipeRecord::named("Stew").unwrap();
        let saved = SavedRecipe::new(recipe, "https://example.com/stew");
        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["name"], "Stew");
        assert_eq!(json["url"], "https://example.com/stew");
        assert!(json["savedAt"].is_string());
    }
}
