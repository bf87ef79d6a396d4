//! # HTTP Server for Strip Rendering
//!
//! Exposes the renderers over HTTP. Every render route answers with a strip
//! as JSON (`{"rows", "columns", "bitmap"}`).
//!
//! ## Routes
//!
//! | Route | Body |
//! |-------|------|
//! | `POST /renderSpace` | `{"len", "bgColor"}` |
//! | `POST /renderText` | `{"text", "fontSize", "fgColor", "bgColor"}` |
//! | `POST /renderImage` | raw image bytes |
//! | `POST /join` | `[strip, ...]` |
//! | `POST /compose` | `[{"type": "space" \| "text" \| "strip", ...}, ...]` |
//! | `GET /health` | - |
//!
//! ## Usage
//!
//! ```bash
//! ticker serve --listen 0.0.0.0:8080 --token s3cret
//! ```

mod auth;
mod handlers;
mod state;

pub use state::{AppState, DEFAULT_MAX_BODY_BYTES, ServerConfig};

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::error::TickerError;
use crate::font::GlyphSet;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let max_body = state.config.max_body_bytes;

    let api = Router::new()
        .route("/renderSpace", post(handlers::render::space))
        .route("/renderText", post(handlers::render::text))
        .route("/renderImage", post(handlers::render::image))
        .route("/join", post(handlers::join::join))
        .route("/compose", post(handlers::join::compose))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_token,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(api)
        .layer(DefaultBodyLimit::max(max_body))
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use std::sync::Arc;
/// use ticker::font::SpleenGlyphs;
/// use ticker::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), ticker::TickerError> {
/// let glyphs = Arc::new(SpleenGlyphs::new()?);
/// serve(ServerConfig::default(), glyphs).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig, glyphs: Arc<dyn GlyphSet>) -> Result<(), TickerError> {
    let app = router(Arc::new(AppState::new(config.clone(), glyphs)));

    println!("Ticker HTTP server starting...");
    println!("Listening on: {}", config.listen_addr);
    println!(
        "Authentication: {}",
        if config.token.is_some() {
            "bearer token"
        } else {
            "disabled"
        }
    );
    println!("Max body size: {} bytes", config.max_body_bytes);
    println!();

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            TickerError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| TickerError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
