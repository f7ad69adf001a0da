use axum::extract::Path;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "static/"]
pub struct StaticAssets;

/// Content hashes of every embedded file, computed on first use.
static FINGERPRINTS: Lazy<HashMap<String, String>> = Lazy::new(|| {
    StaticAssets::iter()
        .filter_map(|path| {
            let file = StaticAssets::get(&path)?;
            let digest = Sha256::digest(file.data.as_ref());
            Some((path.into_owned(), hex::encode(digest)[..12].to_string()))
        })
        .collect()
});

/// Short content hash used for cache busting and as the ETag.
pub fn fingerprint(path: &str) -> Option<&'static str> {
    FINGERPRINTS.get(path).map(String::as_str)
}

/// Versioned URLs of the assets every page links.
#[derive(Debug, Clone, Serialize)]
pub struct AssetUrls {
    pub css: String,
    pub js: String,
}

impl AssetUrls {
    pub fn build() -> Self {
        Self {
            css: versioned("site.css"),
            js: versioned("lightbox.js"),
        }
    }
}

fn versioned(path: &str) -> String {
    match fingerprint(path) {
        Some(hash) => format!("/static/{}?v={}", path, hash),
        None => format!("/static/{}", path),
    }
}

pub async fn serve_static(Path(path): Path<String>, headers: HeaderMap) -> Response {
    if path.contains("..") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let Some(file) = StaticAssets::get(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let etag = format!("\"{}\"", fingerprint(&path).unwrap_or_default());
    let matches = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == etag)
        .unwrap_or(false);

    if matches {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    let mut response = (
        [(header::CONTENT_TYPE, mime.as_ref().to_string())],
        file.data.into_owned(),
    )
        .into_response();

    if let Ok(value) = HeaderValue::from_str(&etag) {
        response.headers_mut().insert(header::ETAG, value);
    }
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=31536000, immutable"),
    );
    response
}
