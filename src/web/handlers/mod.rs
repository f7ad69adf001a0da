pub mod api;
pub mod htmx;
pub mod public;

use super::chrome::PageChrome;
use super::state::AppState;
use crate::models::{Event, MediaItem};
use crate::services::catalog;
use crate::services::lightbox::{Key, Lightbox};
use crate::services::slug::is_valid_slug;
use chrono::Datelike;
use serde::Deserialize;
use tera::Context;

pub(crate) fn make_context(state: &AppState) -> Context {
    let mut ctx = Context::new();
    ctx.insert("site", &state.config.site);
    ctx.insert("contact", &state.config.contact);
    ctx.insert("assets", &state.assets);
    ctx.insert("year", &chrono::Utc::now().year());
    ctx.insert("chrome", &PageChrome::default());
    ctx
}

/// Event behind a gallery URL segment. Malformed slugs never reach the
/// catalog.
pub(crate) fn gallery_event(slug: &str) -> Option<&'static Event> {
    if !is_valid_slug(slug) {
        return None;
    }
    catalog::find_event(slug)
}

/// Lightbox position carried in gallery URLs. `count` is the number of items
/// the client saw when the link was rendered.
#[derive(Debug, Default, Deserialize)]
pub struct LightboxQuery {
    pub view: Option<usize>,
    pub count: Option<usize>,
    pub action: Option<String>,
    pub key: Option<String>,
}

/// Replays a request against a fresh lightbox over `items`.
pub(crate) fn restore_lightbox(items: &[MediaItem], query: &LightboxQuery) -> Lightbox<PageChrome> {
    let mut lightbox = Lightbox::new(query.count.unwrap_or(items.len()), PageChrome::default());
    if let Some(view) = query.view {
        lightbox.select(view);
    }
    lightbox.resize(items.len());

    match query.action.as_deref() {
        Some("next") => lightbox.next(),
        Some("prev") | Some("previous") => lightbox.previous(),
        Some("close") => lightbox.close(),
        _ => {}
    }
    if let Some(key) = &query.key {
        lightbox.handle_key(key.parse().unwrap_or(Key::Other));
    }
    lightbox
}
