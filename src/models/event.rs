use serde::Serialize;

/// A past or upcoming show; `folder` scopes the gallery lookups.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub date: &'static str,
    pub city: &'static str,
    pub venue: &'static str,
    pub title: &'static str,
    pub slug: &'static str,
    pub folder: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub venue: &'static str,
    pub playback_id: &'static str,
    pub thumbnail_time: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Release {
    pub title: &'static str,
    pub kind: &'static str,
    pub video_id: &'static str,
}
