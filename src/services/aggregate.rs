use super::media::{interleave, partition_by_kind};
use super::source::{MediaSource, SourceError};
use crate::models::MediaItem;
use std::sync::Arc;

/// Merges the file listing and the video search into one display order.
#[derive(Clone)]
pub struct Aggregator {
    files: Arc<dyn MediaSource>,
    videos: Arc<dyn MediaSource>,
}

impl Aggregator {
    pub fn new(files: Arc<dyn MediaSource>, videos: Arc<dyn MediaSource>) -> Self {
        Self { files, videos }
    }

    pub fn sources(&self) -> [&dyn MediaSource; 2] {
        [self.files.as_ref(), self.videos.as_ref()]
    }

    /// Never fails: a source that errors contributes nothing.
    pub async fn aggregate(&self, folder: &str) -> Vec<MediaItem> {
        self.collect(folder).await.items
    }

    /// Like [`aggregate`](Self::aggregate), but also reports whether a
    /// configured source failed, so callers can avoid keeping the result.
    pub async fn collect(&self, folder: &str) -> Aggregation {
        let (files, videos) = tokio::join!(self.files.fetch(folder), self.videos.fetch(folder));

        let (files, files_failed) = settle(self.files.name(), folder, files);
        let (searched_videos, videos_failed) = settle(self.videos.name(), folder, videos);

        let (images, mut listed_videos) = partition_by_kind(files);
        let mut all_videos = searched_videos;
        all_videos.append(&mut listed_videos);

        tracing::debug!(
            folder,
            images = images.len(),
            videos = all_videos.len(),
            "Aggregated gallery"
        );

        Aggregation {
            items: interleave(images, all_videos),
            degraded: files_failed || videos_failed,
        }
    }
}

/// Display sequence for one folder.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub items: Vec<MediaItem>,
    /// A configured source errored and contributed nothing. Missing
    /// credentials do not count.
    pub degraded: bool,
}

fn settle(
    source: &str,
    folder: &str,
    result: Result<Vec<MediaItem>, SourceError>,
) -> (Vec<MediaItem>, bool) {
    match result {
        Ok(items) => (items, false),
        Err(e) if e.is_not_configured() => {
            tracing::debug!(source, folder, "Skipping source: {}", e);
            (Vec::new(), false)
        }
        Err(e) => {
            tracing::warn!(source, folder, "Media source unavailable: {}", e);
            (Vec::new(), true)
        }
    }
}
