use regex::Regex;
use std::sync::LazyLock;

/// Where a noise match stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Up to (not including) the next newline.
    LineEnd,
    /// An asterisk-wrapped aside: from the opening asterisks to the closing run.
    Asterisks,
}

/// One kind of boilerplate that sites mix into instruction text.
///
/// `phrase` is a case-insensitive regex fragment in which a literal space
/// stands for any run of horizontal whitespace, so a phrase never spans lines.
#[derive(Debug, Clone, Copy)]
pub struct NoisePattern {
    pub phrase: &'static str,
    pub until: Boundary,
    pub replacement: &'static str,
}

const fn line(phrase: &'static str) -> NoisePattern {
    NoisePattern {
        phrase,
        until: Boundary::LineEnd,
        replacement: "",
    }
}

const fn aside(phrase: &'static str) -> NoisePattern {
    NoisePattern {
        phrase,
        until: Boundary::Asterisks,
        replacement: "",
    }
}

/// Applied in order.
pub const NOISE_PATTERNS: &[NoisePattern] = &[
    // Photo and styling credits
    line("Photographer:"),
    line("Food Styling:"),
    line("Prop Styling:"),
    line("Photo by:"),
    line("Image by:"),
    line("Credit:"),
    // Nutrition disclaimers
    aside("Percent Daily Values"),
    aside("Nutrient information"),
    aside("Information is not currently available"),
    aside("If you are following"),
    // Consent dialogs
    line("Store and/or access information"),
    line("Use limited data"),
    line("Create profiles"),
    line("Measure advertising"),
    line("Develop and improve"),
    line("List of Partners"),
    // Community prompts
    line("Get recipe help"),
    line("Check out our Community"),
    line("Connect with the community"),
    // Scaling notes
    line("This recipe was developed"),
    line("Ingredient amounts are automatically"),
    line("Note that not all recipes"),
    line(r"Original recipe (?:\([^)\n]*\) )?yields"),
    // Attribution
    line("Recipe developed by"),
    line("Recipe by:"),
    // Cookie banners
    line("We process your data"),
    line("These cookies (?:are used|are necessary|are essential|allow us|may be set|help us|collect|track)"),
    line("Advertising presented"),
    line("Information about your activity"),
    line("Content presented"),
    line("Reports can be generated"),
];

impl NoisePattern {
    /// The full regex this pattern compiles to.
    pub fn to_regex(&self) -> String {
        let phrase = self.phrase.replace(' ', r"[^\S\n]*");
        match self.until {
            Boundary::LineEnd => format!(r"(?i)\b{phrase}[^\n]*"),
            Boundary::Asterisks => format!(r"(?i)\*+[^\S\n]*{phrase}[^*]*\*+"),
        }
    }
}

static COMPILED: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    NOISE_PATTERNS
        .iter()
        .map(|p| {
            let regex = Regex::new(&p.to_regex()).expect("valid noise pattern");
            (regex, p.replacement)
        })
        .collect()
});

static EXTRA_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("valid blank line pattern"));

fn clean_once(text: &str) -> String {
    let mut cleaned = text.to_string();
    for (regex, replacement) in COMPILED.iter() {
        cleaned = regex.replace_all(&cleaned, *replacement).into_owned();
    }
    EXTRA_BLANK_LINES
        .replace_all(&cleaned, "\n\n")
        .trim()
        .to_string()
}

/// Strips photo credits, consent banners, nutrition asides and similar
/// boilerplate from free-text instructions, then collapses the blank lines
/// left behind.
///
/// Removing one aside can butt two fragments together into a new match, so
/// passes repeat until nothing changes. Every pass that changes the text
/// shortens it, which bounds the loop.
pub fn clean_instructions(text: &str) -> String {
    let mut current = clean_once(text);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}
