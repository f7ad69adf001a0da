use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_IMAGE_WIDTH: u32 = 1920;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 1080;
pub const DEFAULT_VIDEO_WIDTH: u32 = 1080;
pub const DEFAULT_VIDEO_HEIGHT: u32 = 1920;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Fallback dimensions for items whose source does not report them.
    pub fn default_dimensions(self) -> (u32, u32) {
        match self {
            MediaKind::Image => (DEFAULT_IMAGE_WIDTH, DEFAULT_IMAGE_HEIGHT),
            MediaKind::Video => (DEFAULT_VIDEO_WIDTH, DEFAULT_VIDEO_HEIGHT),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

impl MediaItem {
    /// Builds an item, substituting the kind's default dimensions for any
    /// missing or zero width/height.
    pub fn new(url: impl Into<String>, kind: MediaKind, width: Option<u32>, height: Option<u32>) -> Self {
        let (default_width, default_height) = kind.default_dimensions();
        Self {
            url: url.into(),
            width: width.filter(|w| *w > 0).unwrap_or(default_width),
            height: height.filter(|h| *h > 0).unwrap_or(default_height),
            kind,
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}
