use crate::config::FetchConfig;
use crate::error::CookbookError;
use async_trait::async_trait;

mod file;
mod request;

pub use file::FilePageSource;
pub use request::HttpPageSource;

/// Somewhere a page's HTML can be read from.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<String, CookbookError>;
}

/// Picks HTTP for `http(s)://` locations and the filesystem for anything else.
pub fn page_source_for(
    location: &str,
    config: &FetchConfig,
) -> Result<Box<dyn PageSource>, CookbookError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpPageSource::new(config)?))
    } else {
        Ok(Box::new(FilePageSource))
    }
}
