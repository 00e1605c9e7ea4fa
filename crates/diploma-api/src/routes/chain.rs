//! # Dev Chain Clock API
//!
//! The server's block height is a [`ManualClock`](diploma_core::ManualClock).
//! It only moves forward, and only when advanced here.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use diploma_core::BlockClock;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Current block height.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HeightResponse {
    pub height: u64,
}

/// Request to advance the clock.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdvanceRequest {
    /// Number of blocks to advance by.
    #[serde(default = "one_block")]
    pub blocks: u64,
}

fn one_block() -> u64 {
    1
}

/// Build the chain router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/chain/height", get(get_height))
        .route("/v1/chain/advance", post(advance))
}

/// GET /v1/chain/height: Current block height.
#[utoipa::path(
    get,
    path = "/v1/chain/height",
    responses((status = 200, description = "Current height", body = HeightResponse)),
    tag = "chain"
)]
async fn get_height(State(state): State<AppState>) -> Json<HeightResponse> {
    Json(HeightResponse {
        height: state.clock.block_height().value(),
    })
}

/// POST /v1/chain/advance: Advance the block height.
#[utoipa::path(
    post,
    path = "/v1/chain/advance",
    request_body = AdvanceRequest,
    responses((status = 200, description = "New height", body = HeightResponse)),
    tag = "chain"
)]
async fn advance(
    State(state): State<AppState>,
    body: Result<Json<AdvanceRequest>, JsonRejection>,
) -> Result<Json<HeightResponse>, AppError> {
    let req = extract_json(body)?;
    let height = state.clock.advance(req.blocks);
    tracing::debug!(blocks = req.blocks, height = height.value(), "block clock advanced");
    Ok(Json(HeightResponse {
        height: height.value(),
    }))
}
