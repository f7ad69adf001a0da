use super::assets::serve_static;
use super::handlers;
use super::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::public::index))
        .route("/gallery/:slug", get(handlers::public::gallery))
        .route("/sitemap.xml", get(handlers::public::sitemap))
        .route("/robots.txt", get(handlers::public::robots))
        .route("/health", get(handlers::public::health))
        .route("/static/*path", get(serve_static))
}

pub fn htmx_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/htmx/events", get(handlers::htmx::events))
        .route(
            "/htmx/gallery/:slug/lightbox",
            get(handlers::htmx::lightbox),
        )
}

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/gallery/:slug", get(handlers::api::gallery))
}
