//! Bearer-token check for the render routes.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::state::AppState;

/// Reject requests without `Authorization: Bearer <token>` when a token is configured.
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(expected) = &state.config.token {
        let provided = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        let reason = match provided {
            Some(token) if token == expected => None,
            Some(_) => Some("invalid token"),
            None => Some("missing bearer token"),
        };
        if let Some(reason) = reason {
            eprintln!("[auth] {} {}: {}", request.method(), request.uri().path(), reason);
            return (StatusCode::UNAUTHORIZED, format!("Access denied: {}", reason)).into_response();
        }
    }

    next.run(request).await
}
