//! # Diplomas API
//!
//! Issuance, issuer-only updates and lookups.
//!
//! ## Endpoints
//!
//! - `POST /v1/diplomas`: issue a diploma (requires `x-caller`)
//! - `GET /v1/diplomas/count`: number of diplomas issued
//! - `GET /v1/diplomas/{id}`: get a diploma
//! - `PUT /v1/diplomas/{id}`: update GPA and honors (requires `x-caller`)
//! - `GET /v1/diplomas/{id}/update`: latest update applied to a diploma
//! - `GET /v1/diplomas/by-hash/{hash}`: existence check by content hash

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use diploma_core::digest::hex_to_bytes;
use diploma_core::{BlockHeight, ContentHash, DiplomaId};
use diploma_registry::{DiplomaRecord, DiplomaUpdateRecord, IssueRequest};

use crate::error::AppError;
use crate::extractors::{extract_json, Caller};
use crate::state::AppState;
use crate::telemetry;

// ── Request/Response DTOs ───────────────────────────────────────────

/// Request to issue a diploma.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IssueDiplomaRequest {
    pub institution_id: u64,
    pub student_id: u64,
    pub template_id: u64,
    /// Hex-encoded content hash, 32 bytes.
    pub content_hash: String,
    /// Block height; must not lie before the current height.
    pub issuance_date: u64,
    /// "Bachelor", "Master" or "PhD".
    pub degree_type: String,
    /// Fixed-point GPA, 0 to 400.
    pub gpa: u32,
    #[serde(default)]
    pub honors: String,
    pub major: String,
    #[serde(default)]
    pub minor: String,
    pub location: String,
    /// "STX", "USD" or "BTC".
    pub currency: String,
    /// Block height; must not lie before the current height.
    pub expiry: u64,
    pub credits: u64,
    #[serde(default)]
    pub thesis_title: String,
    #[serde(default)]
    pub advisor: String,
    /// Committee member names, at most five.
    #[serde(default)]
    pub committee: Vec<String>,
}

impl From<IssueDiplomaRequest> for IssueRequest {
    /// Decode the wire form without judging it. Every field rule belongs
    /// to the registry so the first failing check reports its own code.
    fn from(req: IssueDiplomaRequest) -> Self {
        IssueRequest {
            institution_id: req.institution_id,
            student_id: req.student_id,
            template_id: req.template_id,
            // Text that is not hex cannot be 32 bytes; rule 104 reports it.
            content_hash: hex_to_bytes(&req.content_hash).unwrap_or_default(),
            issuance_date: BlockHeight(req.issuance_date),
            degree_type: req.degree_type,
            gpa: req.gpa,
            honors: req.honors,
            major: req.major,
            minor: req.minor,
            location: req.location,
            currency: req.currency,
            expiry: BlockHeight(req.expiry),
            credits: req.credits,
            thesis_title: req.thesis_title,
            advisor: req.advisor,
            committee: req.committee,
        }
    }
}

/// Id assigned to a newly issued diploma.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IssuedResponse {
    pub id: u64,
}

/// A stored diploma.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiplomaResponse {
    pub id: u64,
    pub institution_id: u64,
    pub student_id: u64,
    pub template_id: u64,
    pub content_hash: String,
    pub issuance_date: u64,
    pub timestamp: u64,
    pub issuer: String,
    pub degree_type: String,
    pub gpa: u32,
    pub honors: String,
    pub major: String,
    pub minor: String,
    pub location: String,
    pub currency: String,
    pub status: bool,
    pub expiry: u64,
    pub credits: u64,
    pub thesis_title: String,
    pub advisor: String,
    pub committee: Vec<String>,
}

impl DiplomaResponse {
    fn new(id: DiplomaId, record: DiplomaRecord) -> Self {
        Self {
            id: id.value(),
            institution_id: record.institution_id,
            student_id: record.student_id,
            template_id: record.template_id,
            content_hash: record.content_hash.to_hex(),
            issuance_date: record.issuance_date.value(),
            timestamp: record.timestamp.value(),
            issuer: record.issuer.to_string(),
            degree_type: record.degree_type.as_str().to_string(),
            gpa: record.gpa,
            honors: record.honors,
            major: record.major,
            minor: record.minor,
            location: record.location,
            currency: record.currency.as_str().to_string(),
            status: record.status,
            expiry: record.expiry.value(),
            credits: record.credits,
            thesis_title: record.thesis_title,
            advisor: record.advisor,
            committee: record.committee,
        }
    }
}

/// Request to update a diploma's GPA and honors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateDiplomaRequest {
    pub gpa: u32,
    #[serde(default)]
    pub honors: String,
}

/// Latest update applied to a diploma.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiplomaUpdateResponse {
    pub update_gpa: u32,
    pub update_honors: String,
    pub update_timestamp: u64,
    pub updater: String,
}

impl From<DiplomaUpdateRecord> for DiplomaUpdateResponse {
    fn from(update: DiplomaUpdateRecord) -> Self {
        Self {
            update_gpa: update.update_gpa,
            update_honors: update.update_honors,
            update_timestamp: update.update_timestamp.value(),
            updater: update.updater.to_string(),
        }
    }
}

/// Number of diplomas issued.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    pub count: u64,
}

/// Existence of a content hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExistenceResponse {
    pub content_hash: String,
    pub exists: bool,
    /// Id of the diploma issued under the hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the diplomas router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/diplomas", post(issue_diploma))
        .route("/v1/diplomas/count", get(diploma_count))
        .route("/v1/diplomas/{id}", get(get_diploma).put(update_diploma))
        .route("/v1/diplomas/{id}/update", get(get_diploma_update))
        .route("/v1/diplomas/by-hash/{hash}", get(check_existence))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /v1/diplomas: Issue a diploma.
#[utoipa::path(
    post,
    path = "/v1/diplomas",
    request_body = IssueDiplomaRequest,
    params(("x-caller" = String, Header, description = "Issuing principal")),
    responses(
        (status = 201, description = "Diploma issued", body = IssuedResponse),
        (status = 400, description = "Malformed request", body = crate::error::ErrorBody),
        (status = 403, description = "Caller is not a verified authority (100)", body = crate::error::ErrorBody),
        (status = 409, description = "Content hash already issued (106)", body = crate::error::ErrorBody),
        (status = 422, description = "Field rule failed", body = crate::error::ErrorBody),
        (status = 502, description = "Fee transfer refused (120)", body = crate::error::ErrorBody),
        (status = 503, description = "Authority contract not set (109)", body = crate::error::ErrorBody),
        (status = 507, description = "Registry full (114)", body = crate::error::ErrorBody),
    ),
    tag = "diplomas"
)]
async fn issue_diploma(
    State(state): State<AppState>,
    Caller(caller): Caller,
    body: Result<Json<IssueDiplomaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IssuedResponse>), AppError> {
    let request = IssueRequest::from(extract_json(body)?);
    let ctx = state.call_context(caller);
    match state.registry.issue_diploma(&ctx, request) {
        Ok(id) => {
            telemetry::record_issued();
            Ok((StatusCode::CREATED, Json(IssuedResponse { id: id.value() })))
        }
        Err(err) => {
            telemetry::record_issue_rejected(err);
            Err(err.into())
        }
    }
}

/// GET /v1/diplomas/count: Number of diplomas issued.
#[utoipa::path(
    get,
    path = "/v1/diplomas/count",
    responses((status = 200, description = "Diploma count", body = CountResponse)),
    tag = "diplomas"
)]
async fn diploma_count(State(state): State<AppState>) -> Json<CountResponse> {
    Json(CountResponse {
        count: state.registry.get_diploma_count(),
    })
}

/// GET /v1/diplomas/{id}: Get a diploma.
#[utoipa::path(
    get,
    path = "/v1/diplomas/{id}",
    params(("id" = u64, Path, description = "Diploma id")),
    responses(
        (status = 200, description = "Diploma found", body = DiplomaResponse),
        (status = 404, description = "Diploma not found", body = crate::error::ErrorBody),
    ),
    tag = "diplomas"
)]
async fn get_diploma(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DiplomaResponse>, AppError> {
    let id = DiplomaId(id);
    state
        .registry
        .get_diploma(id)
        .map(|record| Json(DiplomaResponse::new(id, record)))
        .ok_or_else(|| AppError::NotFound(format!("{id} not found")))
}

/// PUT /v1/diplomas/{id}: Update GPA and honors.
#[utoipa::path(
    put,
    path = "/v1/diplomas/{id}",
    params(
        ("id" = u64, Path, description = "Diploma id"),
        ("x-caller" = String, Header, description = "Original issuer"),
    ),
    request_body = UpdateDiplomaRequest,
    responses(
        (status = 200, description = "Diploma updated", body = DiplomaResponse),
        (status = 409, description = "Update rejected", body = crate::error::ErrorBody),
    ),
    tag = "diplomas"
)]
async fn update_diploma(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Caller(caller): Caller,
    body: Result<Json<UpdateDiplomaRequest>, JsonRejection>,
) -> Result<Json<DiplomaResponse>, AppError> {
    let req = extract_json(body)?;
    let id = DiplomaId(id);
    let ctx = state.call_context(caller);
    match state.registry.update_and_get(&ctx, id, req.gpa, req.honors) {
        Ok(record) => {
            telemetry::record_updated();
            Ok(Json(DiplomaResponse::new(id, record)))
        }
        Err(_) => {
            telemetry::record_update_rejected();
            Err(AppError::Rejected(format!("update of {id} refused")))
        }
    }
}

/// GET /v1/diplomas/{id}/update: Latest update applied to a diploma.
#[utoipa::path(
    get,
    path = "/v1/diplomas/{id}/update",
    params(("id" = u64, Path, description = "Diploma id")),
    responses(
        (status = 200, description = "Latest update", body = DiplomaUpdateResponse),
        (status = 404, description = "No update recorded", body = crate::error::ErrorBody),
    ),
    tag = "diplomas"
)]
async fn get_diploma_update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DiplomaUpdateResponse>, AppError> {
    let id = DiplomaId(id);
    state
        .registry
        .get_diploma_update(id)
        .map(|update| Json(update.into()))
        .ok_or_else(|| AppError::NotFound(format!("no update recorded for {id}")))
}

/// GET /v1/diplomas/by-hash/{hash}: Whether a diploma exists for a content hash.
#[utoipa::path(
    get,
    path = "/v1/diplomas/by-hash/{hash}",
    params(("hash" = String, Path, description = "Hex-encoded 32-byte content hash")),
    responses(
        (status = 200, description = "Existence result", body = ExistenceResponse),
        (status = 400, description = "Malformed hash", body = crate::error::ErrorBody),
    ),
    tag = "diplomas"
)]
async fn check_existence(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<ExistenceResponse>, AppError> {
    let hash = ContentHash::from_hex(&hash)?;
    let id = state.registry.find_diploma_by_hash(&hash);
    Ok(Json(ExistenceResponse {
        content_hash: hash.to_hex(),
        exists: id.is_some(),
        id: id.map(|id| id.value()),
    }))
}
