use super::gallery_event;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;

pub async fn gallery(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    let Some(event) = gallery_event(&slug) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no event with slug '{}'", slug) })),
        )
            .into_response();
    };

    let items = state.gallery.items(event.folder).await;
    Json(json!({
        "event": event,
        "count": items.len(),
        "items": items,
    }))
    .into_response()
}
