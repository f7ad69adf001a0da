use once_cell::sync::Lazy;
use regex::Regex;

static CLOUDINARY_VIDEO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https://res\.cloudinary\.com/.+/video/upload/)(v\d+/.+)\.\w+$")
        .expect("valid cloudinary regex")
});

/// First-frame JPEG poster for a Cloudinary-hosted video. Other hosts get
/// no poster.
pub fn video_poster(src: &str) -> Option<String> {
    let caps = CLOUDINARY_VIDEO.captures(src)?;
    Some(format!("{}so_0,w_480,f_jpg/{}.jpg", &caps[1], &caps[2]))
}

/// Applies an ImageKit transformation (e.g. `w-400,q-80`) to a delivery URL.
pub fn image_thumbnail(src: &str, transform: &str) -> String {
    if transform.is_empty() {
        return src.to_string();
    }
    let separator = if src.contains('?') { '&' } else { '?' };
    format!("{}{}tr={}", src, separator, transform)
}

pub fn mux_thumbnail(playback_id: &str, time: u32) -> String {
    format!(
        "https://image.mux.com/{}/thumbnail.jpg?time={}",
        playback_id, time
    )
}

pub fn youtube_embed(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}
