use crate::models::MediaItem;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Aggregated galleries keyed by folder, reused until they are `ttl` old.
pub struct GalleryCache {
    entries: RwLock<HashMap<String, (Instant, Vec<MediaItem>)>>,
    ttl: Duration,
}

impl GalleryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub fn get(&self, folder: &str) -> Option<Vec<MediaItem>> {
        if !self.is_enabled() {
            return None;
        }
        let entries = self.entries.read().ok()?;
        let (stored_at, items) = entries.get(folder)?;
        if stored_at.elapsed() < self.ttl {
            Some(items.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, folder: &str, items: Vec<MediaItem>) {
        if !self.is_enabled() {
            return;
        }
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(folder.to_string(), (Instant::now(), items));
        }
    }

    pub fn cleanup(&self) {
        let ttl = self.ttl;
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|_, (stored_at, _)| stored_at.elapsed() < ttl);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
