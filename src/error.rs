use thiserror::Error;

/// Errors surfaced to callers of the cookbook.
///
/// Extraction itself never fails: a page without a recipe yields `None`.
/// These variants cover the caller-side work around it (fetching pages,
/// configuration, and decoding records that crossed a transport boundary).
#[derive(Error, Debug)]
pub enum CookbookError {
    /// Failed to fetch page from URL
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Failed to read a local page
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// No extraction strategy recognised a recipe on the page
    #[error("No recipe found on this page")]
    NoRecipeFound,

    /// A record embedded in a viewer link could not be decoded
    #[error("Invalid recipe data: {0}")]
    InvalidTransport(String),

    /// Failed to serialize a record
    #[error("Serialization failed: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
