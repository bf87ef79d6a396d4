//! Composition endpoints: join and compose.

use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use super::{parse_json, reject, run_blocking, Rejection};
use crate::error::Result;
use crate::json_api::JsonSegment;
use crate::render::{self, RenderRequest};
use crate::server::state::AppState;
use crate::strip::Strip;

/// POST /join - concatenate previously rendered strips.
pub async fn join(body: Bytes) -> std::result::Result<Json<Strip>, Rejection> {
    let route = "/join";
    let strips: Vec<Strip> = parse_json(route, &body)?;
    let strip = run_blocking(route, move || render::join(&strips)).await?;
    Ok(Json(strip))
}

/// POST /compose - render a list of segments and join them in order.
pub async fn compose(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> std::result::Result<Json<Strip>, Rejection> {
    let route = "/compose";
    let segments: Vec<JsonSegment> = parse_json(route, &body)?;
    let requests = segments
        .iter()
        .map(JsonSegment::to_request)
        .collect::<Result<Vec<RenderRequest>>>()
        .map_err(|e| reject(route, e))?;

    let glyphs = state.glyphs.clone();
    let strip = run_blocking(route, move || render::compose(&requests, glyphs.as_ref())).await?;
    Ok(Json(strip))
}
