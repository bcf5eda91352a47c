use crate::instructions::{format_for_viewer, format_instructions};
use crate::model::{RecipeRecord, SavedRecipe};
use std::fmt;

/// A recipe laid out for reading: every field resolved to display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeView {
    pub title: String,
    pub source: String,
    pub ingredients: Vec<String>,
    /// (label, value) pairs for the times and servings that are present.
    pub meta: Vec<(&'static str, String)>,
    pub instructions: String,
}

impl RecipeView {
    /// `clean` selects the viewer path (boilerplate removed before numbering)
    /// over the plain save-time formatting.
    pub fn from_record(recipe: &RecipeRecord, url: Option<&str>, clean: bool) -> Self {
        let title = if recipe.name.trim().is_empty() {
            "Untitled Recipe".to_string()
        } else {
            recipe.name.clone()
        };

        let ingredients = if recipe.ingredients.is_empty() {
            vec!["No ingredients found".to_string()]
        } else {
            recipe.ingredients.clone()
        };

        let meta = [
            ("Prep Time", &recipe.prep_time),
            ("Cook Time", &recipe.cook_time),
            ("Total Time", &recipe.total_time),
            ("Servings", &recipe.recipe_yield),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.clone().map(|v| (label, v)))
        .collect();

        let instructions = if clean {
            format_for_viewer(recipe.instructions.as_ref())
        } else {
            format_instructions(recipe.instructions.as_ref())
        };

        Self {
            title,
            source: format!("From: {}", url.unwrap_or("Unknown source")),
            ingredients,
            meta,
            instructions,
        }
    }

    pub fn from_saved(saved: &SavedRecipe, clean: bool) -> Self {
        Self::from_record(&saved.recipe, Some(&saved.url), clean)
    }

    /// What the viewer shows when it can't read the recipe it was given.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            source: message.into(),
            ingredients: Vec::new(),
            meta: Vec::new(),
            instructions: String::new(),
        }
    }
}

impl fmt::Display for RecipeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        write!(f, "{}", self.source)?;

        if !self.meta.is_empty() {
            writeln!(f)?;
            for (label, value) in &self.meta {
                write!(f, "\n{label}: {value}")?;
            }
        }

        if !self.ingredients.is_empty() {
            write!(f, "\n\nIngredients")?;
            for ingredient in &self.ingredients {
                write!(f, "\n- {ingredient}")?;
            }
        }

        if !self.instructions.is_empty() {
            write!(f, "\n\nInstructions\n{}", self.instructions)?;
        }
        Ok(())
    }
}
