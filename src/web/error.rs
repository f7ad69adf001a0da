use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Rendering or plumbing failure inside a handler. Media source outages
/// never reach this type: the aggregator turns them into empty galleries.
/// The cause is logged; the client only sees a bare 500.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
