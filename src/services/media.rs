use crate::models::{MediaItem, MediaKind};

/// Extension table for gallery media. Anything not listed is rejected.
const EXTENSIONS: &[(&str, MediaKind)] = &[
    ("jpg", MediaKind::Image),
    ("jpeg", MediaKind::Image),
    ("png", MediaKind::Image),
    ("webp", MediaKind::Image),
    ("mov", MediaKind::Video),
    ("mp4", MediaKind::Video),
];

/// Classifies a filename by its extension, case-insensitively.
pub fn classify(filename: &str) -> Option<MediaKind> {
    let (_, extension) = filename.rsplit_once('.')?;
    EXTENSIONS
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, kind)| *kind)
}

/// Spreads `videos` evenly through `images`.
///
/// One video is placed after every `step`-th image, where
/// `step = max(1, images / (videos + 1))`. Videos left over once the images
/// run out are appended in order.
pub fn interleave(images: Vec<MediaItem>, videos: Vec<MediaItem>) -> Vec<MediaItem> {
    if videos.is_empty() {
        return images;
    }
    if images.is_empty() {
        return videos;
    }

    let step = (images.len() / (videos.len() + 1)).max(1);
    let mut result = Vec::with_capacity(images.len() + videos.len());
    let mut videos = videos.into_iter();

    for (i, image) in images.into_iter().enumerate() {
        result.push(image);
        if (i + 1) % step == 0 {
            if let Some(video) = videos.next() {
                result.push(video);
            }
        }
    }
    result.extend(videos);
    result
}

/// Splits a mixed listing into `(images, videos)`, keeping relative order.
pub fn partition_by_kind(items: Vec<MediaItem>) -> (Vec<MediaItem>, Vec<MediaItem>) {
    items.into_iter().partition(|item| item.kind == MediaKind::Image)
}
