//! Server state and configuration.

use std::sync::Arc;

use crate::font::GlyphSet;

/// Default request body limit (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Shared bearer token; `None` disables authentication
    pub token: Option<String>,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            token: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Glyphs used by every text request
    pub glyphs: Arc<dyn GlyphSet>,
}

impl AppState {
    pub fn new(config: ServerConfig, glyphs: Arc<dyn GlyphSet>) -> Self {
        Self { config, glyphs }
    }
}
