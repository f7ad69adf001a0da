use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_events_per_page")]
    pub events_per_page: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Per-request timeout for both media APIs, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub imagekit: ImageKitConfig,
    #[serde(default)]
    pub cloudinary: CloudinaryConfig,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            imagekit: ImageKitConfig::default(),
            cloudinary: CloudinaryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageKitConfig {
    #[serde(default = "default_imagekit_api_url")]
    pub api_url: String,
    /// URL endpoint that `filePath` values are appended to.
    #[serde(default = "default_imagekit_delivery_url")]
    pub delivery_url: String,
}

impl Default for ImageKitConfig {
    fn default() -> Self {
        Self {
            api_url: default_imagekit_api_url(),
            delivery_url: default_imagekit_delivery_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CloudinaryConfig {
    #[serde(default = "default_cloudinary_api_url")]
    pub api_url: String,
    /// Overridden by `CLOUDINARY_CLOUD_NAME` when set.
    #[serde(default)]
    pub cloud_name: Option<String>,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_cloudinary_api_url(),
            cloud_name: None,
            max_results: default_max_results(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GalleryConfig {
    /// How long an aggregated gallery is reused before the sources are
    /// queried again. 0 disables caching.
    #[serde(default = "default_revalidate_secs")]
    pub revalidate_secs: u64,
    #[serde(default = "default_thumbnail_transform")]
    pub thumbnail_transform: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            revalidate_secs: default_revalidate_secs(),
            thumbnail_transform: default_thumbnail_transform(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_tagline() -> String {
    "DJ / Producer".to_string()
}

fn default_events_per_page() -> usize {
    5
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_imagekit_api_url() -> String {
    "https://api.imagekit.io".to_string()
}

fn default_imagekit_delivery_url() -> String {
    "https://ik.imagekit.io/ecliptix".to_string()
}

fn default_cloudinary_api_url() -> String {
    "https://api.cloudinary.com".to_string()
}

fn default_max_results() -> u32 {
    100
}

fn default_revalidate_secs() -> u64 {
    60
}

fn default_thumbnail_transform() -> String {
    "w-400,q-80".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Run 'encore init' to create one.",
                path.display(),
                e
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.site.events_per_page == 0 {
            anyhow::bail!("site.events_per_page must be greater than 0");
        }
        if self.site.events_per_page > 50 {
            anyhow::bail!("site.events_per_page must be 50 or less");
        }
        url::Url::parse(&self.site.url)
            .map_err(|e| anyhow::anyhow!("site.url '{}' is not a valid URL: {}", self.site.url, e))?;
        for (key, value) in [
            ("sources.imagekit.api_url", &self.sources.imagekit.api_url),
            ("sources.imagekit.delivery_url", &self.sources.imagekit.delivery_url),
            ("sources.cloudinary.api_url", &self.sources.cloudinary.api_url),
        ] {
            url::Url::parse(value)
                .map_err(|e| anyhow::anyhow!("{} '{}' is not a valid URL: {}", key, value, e))?;
        }
        if self.sources.timeout_secs == 0 {
            anyhow::bail!("sources.timeout_secs must be greater than 0");
        }
        if self.sources.cloudinary.max_results == 0 || self.sources.cloudinary.max_results > 500 {
            anyhow::bail!("sources.cloudinary.max_results must be between 1 and 500");
        }
        Ok(())
    }
}

pub const IMAGEKIT_PRIVATE_KEY: &str = "IMAGEKIT_PRIVATE_KEY";
pub const CLOUDINARY_CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";
pub const CLOUDINARY_API_KEY: &str = "CLOUDINARY_API_KEY";
pub const CLOUDINARY_API_SECRET: &str = "CLOUDINARY_API_SECRET";

/// Media API secrets. These never live in the config file.
#[derive(Clone, Default)]
pub struct Credentials {
    pub imagekit_private_key: Option<String>,
    pub cloudinary: Option<CloudinaryCredentials>,
}

#[derive(Clone)]
pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn from_env(config: &Config) -> Self {
        Self::from_lookup(config, |key| std::env::var(key).ok())
    }

    /// Resolves credentials through `lookup`; blank values count as absent.
    pub fn from_lookup(config: &Config, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cloud_name = get(CLOUDINARY_CLOUD_NAME).or_else(|| {
            config
                .sources
                .cloudinary
                .cloud_name
                .clone()
                .filter(|v| !v.trim().is_empty())
        });

        let cloudinary = match (cloud_name, get(CLOUDINARY_API_KEY), get(CLOUDINARY_API_SECRET)) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryCredentials {
                cloud_name,
                api_key,
                api_secret,
            }),
            _ => None,
        };

        Self {
            imagekit_private_key: get(IMAGEKIT_PRIVATE_KEY),
            cloudinary,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("imagekit", &self.imagekit_private_key.is_some())
            .field("cloudinary", &self.cloudinary.is_some())
            .finish()
    }
}
