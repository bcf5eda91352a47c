use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CookbookConfig {
    /// How pages are retrieved
    #[serde(default)]
    pub fetch: FetchConfig,
    /// How extracted recipes are printed
    #[serde(default)]
    pub output: OutputConfig,
    /// Viewer link generation
    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Configuration for page retrieval
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable recipe view
    #[default]
    Text,
    /// Saved recipe entry as JSON
    Json,
}

/// Configuration for printed output
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Strip boilerplate from free-text instructions before numbering them
    #[serde(default = "default_clean_instructions")]
    pub clean_instructions: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            clean_instructions: default_clean_instructions(),
        }
    }
}

/// Configuration for viewer links
#[derive(Debug, Deserialize, Clone)]
pub struct ViewerConfig {
    #[serde(default = "default_viewer_base_url")]
    pub base_url: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: default_viewer_base_url(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_clean_instructions() -> bool {
    true
}

fn default_viewer_base_url() -> String {
    "recipe-viewer.html".to_string()
}

impl CookbookConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKBOOK__ prefix
    /// 2. cookbook.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKBOOK__FETCH__TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<CookbookConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("cookbook").required(false))
        // Use double underscore for nested: COOKBOOK__OUTPUT__FORMAT
        .add_source(
            Environment::with_prefix("COOKBOOK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
