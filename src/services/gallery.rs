use super::aggregate::Aggregator;
use super::cache::GalleryCache;
use super::cloudinary::CloudinarySource;
use super::http::create_client;
use super::imagekit::ImageKitSource;
use crate::config::{Config, Credentials};
use crate::models::MediaItem;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Cached front door to the aggregator.
///
/// Concurrent cache misses for one folder wait on a per-folder gate so only
/// the first of them queries the media APIs.
pub struct Gallery {
    aggregator: Aggregator,
    cache: GalleryCache,
    gates: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl Gallery {
    pub fn new(aggregator: Aggregator, ttl: Duration) -> Self {
        Self {
            aggregator,
            cache: GalleryCache::new(ttl),
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Wires the ImageKit and Cloudinary sources from config and credentials.
    pub fn from_config(config: &Config, credentials: Credentials) -> Result<Self> {
        let client = create_client(config.sources.timeout_secs)?;
        let files = ImageKitSource::new(
            client.clone(),
            &config.sources.imagekit,
            credentials.imagekit_private_key,
        );
        let videos = CloudinarySource::new(client, &config.sources.cloudinary, credentials.cloudinary);

        let aggregator = Aggregator::new(Arc::new(files), Arc::new(videos));
        for source in aggregator.sources() {
            if !source.is_configured() {
                tracing::info!(
                    "{} credentials not set; galleries will omit its media",
                    source.name()
                );
            }
        }

        Ok(Self::new(
            aggregator,
            Duration::from_secs(config.gallery.revalidate_secs),
        ))
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    pub fn cache(&self) -> &GalleryCache {
        &self.cache
    }

    pub async fn items(&self, folder: &str) -> Vec<MediaItem> {
        if let Some(items) = self.cache.get(folder) {
            return items;
        }
        if !self.cache.is_enabled() {
            return self.aggregator.aggregate(folder).await;
        }

        let gate = self.gate(folder);
        let _turn = gate.lock().await;

        // Filled while we waited on the gate.
        if let Some(items) = self.cache.get(folder) {
            return items;
        }

        let aggregation = self.aggregator.collect(folder).await;
        if aggregation.degraded {
            tracing::debug!(folder, "Not caching gallery with a failed source");
        } else {
            self.cache.insert(folder, aggregation.items.clone());
        }
        aggregation.items
    }

    /// Drops expired galleries and gates nobody is waiting on.
    pub fn cleanup(&self) {
        self.cache.cleanup();
        if let Ok(mut gates) = self.gates.lock() {
            gates.retain(|_, gate| Arc::strong_count(gate) > 1);
        }
    }

    fn gate(&self, folder: &str) -> Arc<tokio::sync::Mutex<()>> {
        match self.gates.lock() {
            Ok(mut gates) => gates.entry(folder.to_string()).or_default().clone(),
            Err(_) => Arc::default(),
        }
    }
}
