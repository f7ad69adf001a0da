use super::source::{MediaSource, SourceError};
use crate::config::{CloudinaryConfig, CloudinaryCredentials};
use crate::models::{MediaItem, MediaKind};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub resources: Option<Vec<Resource>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub secure_url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Video search source: every video asset whose asset folder matches the
/// gallery folder, ordered by public id.
pub struct CloudinarySource {
    client: reqwest::Client,
    api_url: String,
    max_results: u32,
    credentials: Option<CloudinaryCredentials>,
}

impl CloudinarySource {
    pub fn new(
        client: reqwest::Client,
        config: &CloudinaryConfig,
        credentials: Option<CloudinaryCredentials>,
    ) -> Self {
        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            max_results: config.max_results,
            credentials,
        }
    }
}

/// Search expression for the videos of one asset folder.
pub fn search_expression(folder: &str) -> String {
    let escaped = folder.replace('\\', "\\\\").replace('"', "\\\"");
    format!("asset_folder=\"{}\" AND resource_type:video", escaped)
}

#[async_trait]
impl MediaSource for CloudinarySource {
    fn name(&self) -> &'static str {
        "cloudinary"
    }

    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    async fn fetch(&self, folder: &str) -> Result<Vec<MediaItem>, SourceError> {
        let creds = self
            .credentials
            .as_ref()
            .ok_or(SourceError::NotConfigured("cloudinary"))?;

        let body = json!({
            "expression": search_expression(folder),
            "max_results": self.max_results,
            "sort_by": [{ "public_id": "asc" }],
        });

        let response = self
            .client
            .post(format!(
                "{}/v1_1/{}/resources/search",
                self.api_url, creds.cloud_name
            ))
            .basic_auth(&creds.api_key, Some(&creds.api_secret))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;

        Ok(normalize_resources(data))
    }
}

pub fn normalize_resources(response: SearchResponse) -> Vec<MediaItem> {
    response
        .resources
        .unwrap_or_default()
        .into_iter()
        .filter(|r| !r.secure_url.is_empty())
        .map(|r| MediaItem::new(r.secure_url, MediaKind::Video, r.width, r.height))
        .collect()
}
