use super::{gallery_event, make_context, restore_lightbox, LightboxQuery};
use crate::services::catalog;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use crate::web::views::LightboxView;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PageQuery {
    page: Option<usize>,
}

pub async fn events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> AppResult<Html<String>> {
    let events = catalog::events_page(query.page.unwrap_or(1), state.config.site.events_per_page);

    let mut ctx = make_context(&state);
    ctx.insert("events", &events);

    let html = state.templates.render("partials/events.html", &ctx)?;
    Ok(Html(html))
}

pub async fn lightbox(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<LightboxQuery>,
) -> AppResult<Response> {
    let Some(event) = gallery_event(&slug) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let items = state.gallery.items(event.folder).await;
    let lightbox = restore_lightbox(&items, &query);
    let view = LightboxView::new(event, &items, &lightbox);

    let mut ctx = make_context(&state);
    ctx.insert("event", event);
    ctx.insert("lightbox", &view);

    let html = state.templates.render("partials/lightbox.html", &ctx)?;
    Ok(Html(html).into_response())
}
