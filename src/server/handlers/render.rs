//! Producer endpoints: space, text and image.

use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use super::{parse_json, reject, run_blocking, Rejection};
use crate::json_api::{JsonSpace, JsonText};
use crate::render;
use crate::server::state::AppState;
use crate::strip::Strip;

/// POST /renderSpace - solid background strip.
pub async fn space(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Strip>, Rejection> {
    let route = "/renderSpace";
    let msg: JsonSpace = parse_json(route, &body)?;
    let request = msg.to_request().map_err(|e| reject(route, e))?;
    let glyphs = state.glyphs.clone();
    let strip = run_blocking(route, move || request.render(glyphs.as_ref())).await?;
    Ok(Json(strip))
}

/// POST /renderText - text through the server's glyph set.
pub async fn text(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Strip>, Rejection> {
    let route = "/renderText";
    let msg: JsonText = parse_json(route, &body)?;
    let request = msg.to_request().map_err(|e| reject(route, e))?;
    let glyphs = state.glyphs.clone();
    let strip = run_blocking(route, move || request.render(glyphs.as_ref())).await?;
    Ok(Json(strip))
}

/// POST /renderImage - the body is the encoded image itself.
pub async fn image(body: Bytes) -> Result<Json<Strip>, Rejection> {
    let strip = run_blocking("/renderImage", move || render::import_image(&body)).await?;
    Ok(Json(strip))
}
