use crate::models::MediaItem;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{0} credentials are not configured")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl SourceError {
    pub fn is_not_configured(&self) -> bool {
        matches!(self, SourceError::NotConfigured(_))
    }
}

/// An external media host that can list the items in a gallery folder.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn is_configured(&self) -> bool;

    async fn fetch(&self, folder: &str) -> Result<Vec<MediaItem>, SourceError>;
}
