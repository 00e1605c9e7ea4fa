//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Diploma Registry API",
        version = "0.1.0",
        description = "Issuance, issuer-only updates and lookups of academic diplomas, with fee transfers to a write-once authority contract.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        // Diplomas
        crate::routes::diplomas::issue_diploma,
        crate::routes::diplomas::diploma_count,
        crate::routes::diplomas::get_diploma,
        crate::routes::diplomas::update_diploma,
        crate::routes::diplomas::get_diploma_update,
        crate::routes::diplomas::check_existence,
        // Config
        crate::routes::config::get_config,
        crate::routes::config::set_authority_contract,
        crate::routes::config::set_issuance_fee,
        // Ledger
        crate::routes::ledger::list_authorities,
        crate::routes::ledger::get_authority,
        crate::routes::ledger::grant_authority,
        crate::routes::ledger::revoke_authority,
        crate::routes::ledger::list_transfers,
        // Chain
        crate::routes::chain::get_height,
        crate::routes::chain::advance,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::diplomas::IssueDiplomaRequest,
        crate::routes::diplomas::IssuedResponse,
        crate::routes::diplomas::DiplomaResponse,
        crate::routes::diplomas::UpdateDiplomaRequest,
        crate::routes::diplomas::DiplomaUpdateResponse,
        crate::routes::diplomas::CountResponse,
        crate::routes::diplomas::ExistenceResponse,
        crate::routes::config::ConfigResponse,
        crate::routes::config::SetAuthorityContractRequest,
        crate::routes::config::SetIssuanceFeeRequest,
        crate::routes::ledger::AuthorityResponse,
        crate::routes::ledger::TransferResponse,
        crate::routes::chain::HeightResponse,
        crate::routes::chain::AdvanceRequest,
    )),
    tags(
        (name = "diplomas", description = "Diploma issuance, updates and lookups"),
        (name = "config", description = "Authority contract and issuance fee"),
        (name = "ledger", description = "Authority membership and fee transfers"),
        (name = "chain", description = "Development block clock"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
