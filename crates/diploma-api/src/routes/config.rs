//! # Registry Configuration API
//!
//! - `GET /v1/config`: fee, capacity, count and authority contract
//! - `PUT /v1/config/authority-contract`: set the write-once authority contract
//! - `PUT /v1/config/issuance-fee`: change the fee once a contract is set

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use diploma_core::Principal;
use diploma_registry::RegistrySnapshot;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Current registry configuration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfigResponse {
    pub issuance_fee: u64,
    pub max_diplomas: u64,
    pub diploma_count: u64,
    /// Absent until set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority_contract: Option<String>,
}

impl From<RegistrySnapshot> for ConfigResponse {
    fn from(snapshot: RegistrySnapshot) -> Self {
        Self {
            issuance_fee: snapshot.issuance_fee,
            max_diplomas: snapshot.max_diplomas,
            diploma_count: snapshot.diploma_count,
            authority_contract: snapshot.authority_contract.map(|p| p.to_string()),
        }
    }
}

/// Request to designate the authority contract.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetAuthorityContractRequest {
    pub contract: String,
}

/// Request to change the issuance fee.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetIssuanceFeeRequest {
    pub fee: u64,
}

/// Build the configuration router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/config", get(get_config))
        .route("/v1/config/authority-contract", put(set_authority_contract))
        .route("/v1/config/issuance-fee", put(set_issuance_fee))
}

/// GET /v1/config: Current registry configuration.
#[utoipa::path(
    get,
    path = "/v1/config",
    responses((status = 200, description = "Registry configuration", body = ConfigResponse)),
    tag = "config"
)]
async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(state.registry.snapshot().into())
}

/// PUT /v1/config/authority-contract: Set the authority contract.
#[utoipa::path(
    put,
    path = "/v1/config/authority-contract",
    request_body = SetAuthorityContractRequest,
    responses(
        (status = 200, description = "Authority contract set", body = ConfigResponse),
        (status = 409, description = "Already set, or the burn principal", body = crate::error::ErrorBody),
    ),
    tag = "config"
)]
async fn set_authority_contract(
    State(state): State<AppState>,
    body: Result<Json<SetAuthorityContractRequest>, JsonRejection>,
) -> Result<Json<ConfigResponse>, AppError> {
    let req = extract_json(body)?;
    let contract = Principal::new(req.contract)?;
    state
        .registry
        .set_authority_contract(contract)
        .map_err(|_| AppError::Rejected("authority contract refused".to_string()))?;
    Ok(Json(state.registry.snapshot().into()))
}

/// PUT /v1/config/issuance-fee: Change the issuance fee.
#[utoipa::path(
    put,
    path = "/v1/config/issuance-fee",
    request_body = SetIssuanceFeeRequest,
    responses(
        (status = 200, description = "Fee changed", body = ConfigResponse),
        (status = 409, description = "Authority contract not set", body = crate::error::ErrorBody),
    ),
    tag = "config"
)]
async fn set_issuance_fee(
    State(state): State<AppState>,
    body: Result<Json<SetIssuanceFeeRequest>, JsonRejection>,
) -> Result<Json<ConfigResponse>, AppError> {
    let req = extract_json(body)?;
    state
        .registry
        .set_issuance_fee(req.fee)
        .map_err(|_| AppError::Rejected("issuance fee change refused".to_string()))?;
    Ok(Json(state.registry.snapshot().into()))
}
