//! Template-facing shapes for gallery pages.

use super::chrome::PageChrome;
use crate::models::{Event, MediaItem, MediaKind};
use crate::services::lightbox::Lightbox;
use crate::services::media_url::{image_thumbnail, video_poster};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Tile {
    pub index: usize,
    pub position: usize,
    pub kind: MediaKind,
    pub url: String,
    pub display_url: String,
    pub poster: Option<String>,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

impl Tile {
    pub fn new(event: &Event, index: usize, item: &MediaItem, thumbnail_transform: &str) -> Self {
        let display_url = match item.kind {
            MediaKind::Image => image_thumbnail(&item.url, thumbnail_transform),
            MediaKind::Video => item.url.clone(),
        };
        Self {
            index,
            position: index + 1,
            kind: item.kind,
            url: item.url.clone(),
            display_url,
            poster: item.is_video().then(|| video_poster(&item.url)).flatten(),
            width: item.width,
            height: item.height,
            alt: format!("{} — Photo {}", event.title, index + 1),
        }
    }
}

pub fn tiles(event: &Event, items: &[MediaItem], thumbnail_transform: &str) -> Vec<Tile> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| Tile::new(event, i, item, thumbnail_transform))
        .collect()
}

/// Rendered state of the lightbox overlay plus the links that drive it.
#[derive(Debug, Clone, Serialize)]
pub struct LightboxView {
    pub open: bool,
    pub count: usize,
    pub item: Option<Tile>,
    pub next: Option<usize>,
    pub previous: Option<usize>,
    pub chrome: PageChrome,
    pub endpoint: String,
    pub page_url: String,
}

impl LightboxView {
    pub fn new(event: &Event, items: &[MediaItem], lightbox: &Lightbox<PageChrome>) -> Self {
        let item = lightbox
            .index()
            .and_then(|i| items.get(i).map(|item| Tile::new(event, i, item, "")));

        Self {
            open: item.is_some(),
            count: lightbox.count(),
            item,
            next: lightbox.next_index(),
            previous: lightbox.previous_index(),
            chrome: lightbox.viewport().clone(),
            endpoint: format!("/htmx/gallery/{}/lightbox", event.slug),
            page_url: format!("/gallery/{}", event.slug),
        }
    }
}
