use super::{gallery_event, make_context, restore_lightbox, LightboxQuery};
use crate::services::catalog::{self, HIGHLIGHTS, RELEASES};
use crate::services::media_url::{mux_thumbnail, youtube_embed};
use crate::web::error::AppResult;
use crate::web::state::AppState;
use crate::web::views::{tiles, LightboxView};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct EventsPagination {
    #[serde(default = "default_page")]
    events_page: usize,
}

fn default_page() -> usize {
    1
}

#[derive(Serialize)]
struct HighlightView {
    title: &'static str,
    venue: &'static str,
    playback_id: &'static str,
    thumbnail_time: u32,
    poster_url: String,
}

#[derive(Serialize)]
struct ReleaseView {
    title: &'static str,
    kind: &'static str,
    embed_url: String,
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<EventsPagination>,
) -> AppResult<Html<String>> {
    let highlights: Vec<HighlightView> = HIGHLIGHTS
        .iter()
        .map(|h| HighlightView {
            title: h.title,
            venue: h.venue,
            playback_id: h.playback_id,
            thumbnail_time: h.thumbnail_time,
            poster_url: mux_thumbnail(h.playback_id, h.thumbnail_time),
        })
        .collect();

    let releases: Vec<ReleaseView> = RELEASES
        .iter()
        .map(|r| ReleaseView {
            title: r.title,
            kind: r.kind,
            embed_url: youtube_embed(r.video_id),
        })
        .collect();

    let events = catalog::events_page(pagination.events_page, state.config.site.events_per_page);

    let mut ctx = make_context(&state);
    ctx.insert("highlights", &highlights);
    ctx.insert("events", &events);
    ctx.insert("releases", &releases);

    let html = state.templates.render("public/index.html", &ctx)?;
    Ok(Html(html))
}

pub async fn gallery(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<LightboxQuery>,
) -> AppResult<Response> {
    let Some(event) = gallery_event(&slug) else {
        return not_found_page(&state);
    };

    let items = state.gallery.items(event.folder).await;
    let lightbox = restore_lightbox(&items, &query);
    let lightbox_view = LightboxView::new(event, &items, &lightbox);

    let mut ctx = make_context(&state);
    ctx.insert("event", event);
    ctx.insert(
        "tiles",
        &tiles(event, &items, &state.config.gallery.thumbnail_transform),
    );
    ctx.insert("chrome", &lightbox_view.chrome);
    ctx.insert("lightbox", &lightbox_view);

    let html = state.templates.render("public/gallery.html", &ctx)?;
    Ok(Html(html).into_response())
}

pub async fn not_found(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    not_found_page(&state)
}

fn not_found_page(state: &AppState) -> AppResult<Response> {
    let ctx = make_context(state);
    let html = state.templates.render("public/404.html", &ctx)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

pub async fn sitemap(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    let base = state.config.site.url.trim_end_matches('/');
    let today = chrono::Utc::now().format("%Y-%m-%d");

    let mut urls = format!(
        r#"  <url>
    <loc>{}/</loc>
    <lastmod>{}</lastmod>
    <changefreq>weekly</changefreq>
    <priority>1.0</priority>
  </url>
"#,
        base, today
    );

    for event in catalog::EVENTS {
        urls.push_str(&format!(
            r#"  <url>
    <loc>{}/gallery/{}</loc>
    <changefreq>monthly</changefreq>
    <priority>0.6</priority>
  </url>
"#,
            base, event.slug
        ));
    }

    let sitemap = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}</urlset>"#,
        urls
    );

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap,
    )
        .into_response())
}

pub async fn robots(State(state): State<Arc<AppState>>) -> Response {
    let body = format!(
        "User-agent: *\nDisallow: /htmx/\nDisallow: /api/\nSitemap: {}/sitemap.xml\n",
        state.config.site.url.trim_end_matches('/')
    );
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

pub async fn health() -> &'static str {
    "ok"
}
