use super::PageSource;
use crate::error::CookbookError;
use async_trait::async_trait;
use log::debug;

/// Reads saved pages from disk.
pub struct FilePageSource;

#[async_trait]
impl PageSource for FilePageSource {
    async fn fetch(&self, path: &str) -> Result<String, CookbookError> {
        debug!("Reading {}", path);
        Ok(tokio::fs::read_to_string(path).await?)
    }
}
