//! # Host Ledger API
//!
//! Access to the collaborators the registry consults: the authority set,
//! which the dev host may also grant and revoke, and the fee transfer log.
//!
//! - `GET /v1/authorities`: every verified authority
//! - `GET /v1/authorities/{principal}`: is-verified-authority
//! - `PUT /v1/authorities/{principal}`: grant authority (dev host)
//! - `DELETE /v1/authorities/{principal}`: revoke authority (dev host)
//! - `GET /v1/transfers`: every fee transfer, oldest first

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use diploma_core::Principal;
use diploma_registry::FeeTransfer;

use crate::error::AppError;
use crate::state::AppState;

/// Authority membership of a principal.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorityResponse {
    pub principal: String,
    pub verified: bool,
}

/// One issuance fee transfer.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransferResponse {
    pub amount: u64,
    pub from: String,
    pub to: String,
}

impl From<FeeTransfer> for TransferResponse {
    fn from(t: FeeTransfer) -> Self {
        Self {
            amount: t.amount,
            from: t.from.to_string(),
            to: t.to.to_string(),
        }
    }
}

/// Build the ledger router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/authorities", get(list_authorities))
        .route(
            "/v1/authorities/{principal}",
            get(get_authority).put(grant_authority).delete(revoke_authority),
        )
        .route("/v1/transfers", get(list_transfers))
}

/// GET /v1/authorities: Verified authorities, sorted.
#[utoipa::path(
    get,
    path = "/v1/authorities",
    responses((status = 200, description = "Verified authorities", body = Vec<String>)),
    tag = "ledger"
)]
async fn list_authorities(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .authorities
            .members()
            .iter()
            .map(ToString::to_string)
            .collect(),
    )
}

/// PUT /v1/authorities/{principal}: Grant issuing authority.
#[utoipa::path(
    put,
    path = "/v1/authorities/{principal}",
    params(("principal" = String, Path, description = "Principal to grant")),
    responses(
        (status = 200, description = "Authority granted", body = AuthorityResponse),
        (status = 400, description = "Malformed principal", body = crate::error::ErrorBody),
    ),
    tag = "ledger"
)]
async fn grant_authority(
    State(state): State<AppState>,
    Path(principal): Path<String>,
) -> Result<Json<AuthorityResponse>, AppError> {
    let principal = Principal::new(principal)?;
    if state.authorities.grant(principal.clone()) {
        tracing::info!(principal = %principal, "authority granted");
    }
    Ok(Json(AuthorityResponse {
        verified: state.registry.is_verified_authority(&principal),
        principal: principal.to_string(),
    }))
}

/// DELETE /v1/authorities/{principal}: Revoke issuing authority.
#[utoipa::path(
    delete,
    path = "/v1/authorities/{principal}",
    params(("principal" = String, Path, description = "Principal to revoke")),
    responses(
        (status = 200, description = "Authority revoked", body = AuthorityResponse),
        (status = 400, description = "Malformed principal", body = crate::error::ErrorBody),
    ),
    tag = "ledger"
)]
async fn revoke_authority(
    State(state): State<AppState>,
    Path(principal): Path<String>,
) -> Result<Json<AuthorityResponse>, AppError> {
    let principal = Principal::new(principal)?;
    if state.authorities.revoke(&principal) {
        tracing::info!(principal = %principal, "authority revoked");
    }
    Ok(Json(AuthorityResponse {
        verified: state.registry.is_verified_authority(&principal),
        principal: principal.to_string(),
    }))
}

/// GET /v1/authorities/{principal}: Whether a principal may issue.
#[utoipa::path(
    get,
    path = "/v1/authorities/{principal}",
    params(("principal" = String, Path, description = "Principal to check")),
    responses(
        (status = 200, description = "Membership result", body = AuthorityResponse),
        (status = 400, description = "Malformed principal", body = crate::error::ErrorBody),
    ),
    tag = "ledger"
)]
async fn get_authority(
    State(state): State<AppState>,
    Path(principal): Path<String>,
) -> Result<Json<AuthorityResponse>, AppError> {
    let principal = Principal::new(principal)?;
    Ok(Json(AuthorityResponse {
        verified: state.registry.is_verified_authority(&principal),
        principal: principal.to_string(),
    }))
}

/// GET /v1/transfers: Fee transfer audit log.
#[utoipa::path(
    get,
    path = "/v1/transfers",
    responses((status = 200, description = "Transfers, oldest first", body = Vec<TransferResponse>)),
    tag = "ledger"
)]
async fn list_transfers(State(state): State<AppState>) -> Json<Vec<TransferResponse>> {
    Json(
        state
            .transfers
            .transfers()
            .into_iter()
            .map(TransferResponse::from)
            .collect(),
    )
}
