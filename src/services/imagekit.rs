use super::media::classify;
use super::source::{MediaSource, SourceError};
use crate::config::ImageKitConfig;
use crate::models::MediaItem;
use async_trait::async_trait;
use serde::Deserialize;

/// One entry of the ImageKit file listing. Only the fields the gallery
/// consumes are decoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub name: String,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl FileEntry {
    fn is_media_file(&self) -> bool {
        self.entry_type == "file" && (self.file_type == "image" || self.file_type == "non-image")
    }
}

/// File-listing source: everything stored under `/{folder}`, sorted by name.
pub struct ImageKitSource {
    client: reqwest::Client,
    api_url: String,
    delivery_url: String,
    private_key: Option<String>,
}

impl ImageKitSource {
    pub fn new(client: reqwest::Client, config: &ImageKitConfig, private_key: Option<String>) -> Self {
        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            delivery_url: config.delivery_url.trim_end_matches('/').to_string(),
            private_key,
        }
    }
}

#[async_trait]
impl MediaSource for ImageKitSource {
    fn name(&self) -> &'static str {
        "imagekit"
    }

    fn is_configured(&self) -> bool {
        self.private_key.is_some()
    }

    async fn fetch(&self, folder: &str) -> Result<Vec<MediaItem>, SourceError> {
        let key = self
            .private_key
            .as_deref()
            .ok_or(SourceError::NotConfigured("imagekit"))?;

        let response = self
            .client
            .get(format!("{}/v1/files", self.api_url))
            .query(&[("path", format!("/{}", folder)), ("sort", "ASC_NAME".to_string())])
            .basic_auth(key, Some(""))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let files: Vec<FileEntry> = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;

        Ok(normalize_files(&files, &self.delivery_url))
    }
}

/// Keeps gallery-eligible files and maps them onto [`MediaItem`]s.
pub fn normalize_files(files: &[FileEntry], delivery_url: &str) -> Vec<MediaItem> {
    files
        .iter()
        .filter(|f| f.is_media_file() && !f.file_path.is_empty())
        .filter_map(|f| {
            let kind = classify(&f.name)?;
            let url = format!("{}{}", delivery_url, f.file_path);
            Some(MediaItem::new(url, kind, f.width, f.height))
        })
        .collect()
}
