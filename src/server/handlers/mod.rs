//! HTTP handlers for the server.

pub mod join;
pub mod render;

use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::TickerError;
use crate::strip::Strip;

/// Handler error: status plus a plain-text message.
pub type Rejection = (StatusCode, String);

/// GET /health - liveness check (never authenticated).
pub async fn health() -> &'static str {
    "ok"
}

/// Map a core error to the status a client sees.
pub(crate) fn reject(route: &str, err: TickerError) -> Rejection {
    let status = match &err {
        TickerError::InvalidColorFormat(_)
        | TickerError::InvalidDimension(_)
        | TickerError::InvalidJson(_)
        | TickerError::DecodeError(_)
        | TickerError::EmptyInput(_)
        | TickerError::RowCountMismatch { .. } => StatusCode::BAD_REQUEST,
        TickerError::OutOfBounds { .. }
        | TickerError::Font(_)
        | TickerError::Image(_)
        | TickerError::Transport(_)
        | TickerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    eprintln!("[render] {} -> {}: {}", route, status.as_u16(), err);
    (status, err.to_string())
}

/// Parse a JSON body regardless of the request's content type.
pub(crate) fn parse_json<T: DeserializeOwned>(route: &str, body: &[u8]) -> Result<T, Rejection> {
    serde_json::from_slice(body).map_err(|e| {
        eprintln!("[render] {} -> 400: invalid JSON: {}", route, e);
        (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", e))
    })
}

/// Run a producer on the blocking pool.
pub(crate) async fn run_blocking<F>(route: &'static str, job: F) -> Result<Strip, Rejection>
where
    F: FnOnce() -> crate::error::Result<Strip> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Task error: {}", e),
            )
        })?
        .map_err(|e| reject(route, e))
}
