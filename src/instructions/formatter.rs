use super::cleaner::clean_instructions;
use crate::model::Instructions;
use regex::Regex;
use std::sync::LazyLock;

pub const NO_INSTRUCTIONS: &str = "No instructions found";

/// One way of cutting a block of instruction text into steps. Returns `None`
/// when the text doesn't look like it was written that way.
trait StepSplitter: Send + Sync {
    fn try_split(&self, text: &str) -> Option<Vec<String>>;
}

/// Splits on every occurrence of a step marker such as "2. " or "- ".
struct MarkerSplitter {
    marker: Regex,
}

impl MarkerSplitter {
    fn new(marker: &str) -> Self {
        Self {
            marker: Regex::new(marker).expect("valid step marker"),
        }
    }
}

impl StepSplitter for MarkerSplitter {
    fn try_split(&self, text: &str) -> Option<Vec<String>> {
        if !self.marker.is_match(text) {
            return None;
        }
        let steps: Vec<String> = self
            .marker
            .split(text)
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(String::from)
            .collect();
        (!steps.is_empty()).then_some(steps)
    }
}

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence pattern"));

/// Treats each sentence longer than ten characters as a step. Needs at least
/// two such sentences to count as a split.
struct SentenceSplitter;

impl StepSplitter for SentenceSplitter {
    fn try_split(&self, text: &str) -> Option<Vec<String>> {
        let sentences: Vec<String> = SENTENCE_END
            .split(text)
            .map(str::trim)
            .filter(|s| s.chars().count() > 10)
            .map(|s| format!("{s}."))
            .collect();
        (sentences.len() > 1).then_some(sentences)
    }
}

static SPLITTERS: LazyLock<Vec<Box<dyn StepSplitter>>> = LazyLock::new(|| {
    let splitters: Vec<Box<dyn StepSplitter>> = vec![
        // "1. " anywhere
        Box::new(MarkerSplitter::new(r"\d+\.\s+")),
        // numbered lines
        Box::new(MarkerSplitter::new(r"\n\s*\d+\.\s+")),
        // hyphen bullets
        Box::new(MarkerSplitter::new(r"\n\s*-\s+")),
        // asterisk bullets
        Box::new(MarkerSplitter::new(r"\n\s*\*\s+")),
        Box::new(SentenceSplitter),
    ];
    splitters
});

/// Numbers steps as "1. first", "2. second", ... separated by blank lines.
pub fn number_steps<S: AsRef<str>>(steps: &[S]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step.as_ref()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Turns a block of instruction text into numbered steps using the first
/// splitter that recognises it. Text that can't be split comes back with
/// its line breaks doubled.
pub fn format_text(text: &str) -> String {
    if text.trim().is_empty() {
        return NO_INSTRUCTIONS.to_string();
    }
    match SPLITTERS.iter().find_map(|splitter| splitter.try_split(text)) {
        Some(steps) => number_steps(steps.as_slice()),
        None => text.replace('\n', "\n\n"),
    }
}

/// Display text for a recipe's instructions, as stored.
///
/// Step lists are numbered in their original order; text blocks go through
/// [`format_text`] untouched by the noise cleaner.
pub fn format_instructions(instructions: Option<&Instructions>) -> String {
    match instructions {
        None => NO_INSTRUCTIONS.to_string(),
        Some(found) if found.is_empty() => NO_INSTRUCTIONS.to_string(),
        Some(Instructions::Steps(steps)) => number_steps(steps.as_slice()),
        Some(Instructions::Text(text)) => format_text(text),
    }
}

/// Like [`format_instructions`], but text blocks are cleaned of boilerplate
/// first. Step lists are never cleaned.
pub fn format_for_viewer(instructions: Option<&Instructions>) -> String {
    match instructions {
        Some(Instructions::Text(text)) => format_text(&clean_instructions(text)),
        other => format_instructions(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_list_is_numbered_in_order() {
        let steps = Instructions::Steps(vec![
            "Preheat oven".to_string(),
            "Mix batter".to_string(),
            "Bake".to_string(),
        ]);
        assert_eq!(
            format_instructions(Some(&steps)),
            "1. Preheat oven\n\n2. Mix batter\n\n3. Bake"
        );
    }

    #[test]
    fn test_renumbers_inline_numbers() {
        assert_eq!(
            format_text("1. Preheat oven. 2. Mix batter. 3. Bake."),
            "1. Preheat oven.\n\n2. Mix batter.\n\n3. Bake."
        );
    }

    #[test]
    fn test_renumbers_from_one() {
        assert_eq!(
            format_text("4. Chop onions\n5. Fry them"),
            "1. Chop onions\n\n2. Fry them"
        );
    }

    #[test]
    fn test_hyphen_bullets() {
        assert_eq!(
            format_text("Method:\n- Chop onions\n - Fry them\n-   Season"),
            "1. Method:\n\n2. Chop onions\n\n3. Fry them\n\n4. Season"
        );
    }

    #[test]
    fn test_asterisk_bullets() {
        assert_eq!(
            format_text("Steps:\n* Rinse rice\n* Boil water\n* Cook"),
            "1. Steps:\n\n2. Rinse rice\n\n3. Boil water\n\n4. Cook"
        );
    }

    #[test]
    fn test_sentence_fallback() {
        assert_eq!(
            format_text("Whisk the eggs well! Pour into the hot pan. Eat."),
            "1. Whisk the eggs well.\n\n2. Pour into the hot pan."
        );
    }

    #[test]
    fn test_unsplittable_text_gets_paragraph_spacing() {
        assert_eq!(format_text("Stir well\nServe"), "Stir well\n\nServe");
    }

    #[test]
    fn test_missing_instructions() {
        assert_eq!(format_instructions(None), NO_INSTRUCTIONS);
        assert_eq!(
            format_instructions(Some(&Instructions::Text(String::new()))),
            NO_INSTRUCTIONS
        );
        assert_eq!(
            format_instructions(Some(&Instructions::Steps(Vec::new()))),
            NO_INSTRUCTIONS
        );
    }

    #[test]
    fn test_blank_steps_count_as_missing() {
        let blank = Instructions::Steps(vec!["  ".to_string(), "\n".to_string()]);
        assert_eq!(format_instructions(Some(&blank)), NO_INSTRUCTIONS);
        assert_eq!(format_for_viewer(Some(&blank)), NO_INSTRUCTIONS);
    }

    #[test]
    fn test_viewer_path_cleans_text() {
        let text = Instructions::Text(
            "Mix the flour and butter together.\nPhotographer: Jane Doe\nBake until golden brown."
                .to_string(),
        );
        assert_eq!(
            format_for_viewer(Some(&text)),
            "1. Mix the flour and butter together.\n\n2. Bake until golden brown."
        );
    }

    #[test]
    fn test_viewer_path_leaves_steps_alone() {
        let steps = Instructions::Steps(vec!["Photo by: me".to_string()]);
        assert_eq!(format_for_viewer(Some(&steps)), "1. Photo by: me");
    }
}
