mod assets;
mod chrome;
pub(crate) mod error;
mod handlers;
mod routes;
pub mod security;
mod state;
mod views;

pub use assets::fingerprint;
pub use chrome::PageChrome;
pub use state::AppState;

use crate::config::Credentials;
use crate::Config;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Assembles the full application around `state`.
pub fn router(state: Arc<AppState>) -> Router {
    // Leave room for both media sources to time out before giving up.
    let request_timeout = Duration::from_secs(state.config.sources.timeout_secs * 2 + 5);

    Router::new()
        .merge(routes::public_routes())
        .merge(routes::htmx_routes())
        .merge(routes::api_routes())
        .fallback(handlers::public::not_found)
        .layer(axum::middleware::from_fn(security::apply_security_headers))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: Config, credentials: Credentials, addr: &str) -> Result<()> {
    let state = Arc::new(AppState::new(config, credentials)?);

    if state.gallery.cache().is_enabled() {
        let sweeper = state.clone();
        let interval_secs = state.config.gallery.revalidate_secs.max(30);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
            loop {
                interval.tick().await;
                sweeper.gallery.cleanup();
            }
        });
    }

    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
