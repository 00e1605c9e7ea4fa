//! # diploma-api: Axum HTTP Surface for the Diploma Registry
//!
//! ## API Surface
//!
//! | Prefix               | Module                  | Domain                    |
//! |----------------------|-------------------------|---------------------------|
//! | `/v1/diplomas/*`     | [`routes::diplomas`]    | Issuance, updates, lookups |
//! | `/v1/config/*`       | [`routes::config`]      | Authority contract, fee   |
//! | `/v1/authorities/*`  | [`routes::ledger`]      | Authority membership      |
//! | `/v1/transfers`      | [`routes::ledger`]      | Fee transfer log          |
//! | `/v1/chain/*`        | [`routes::chain`]       | Dev block clock           |
//!
//! The caller of a write is the principal in the `x-caller` header; the
//! block height is the server's clock. Health probes, `/metrics` and
//! `/openapi.json` need no caller.
//!
//! ## OpenAPI
//!
//! Generated via utoipa derive macros at `/openapi.json`.

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .route("/metrics", get(prometheus_metrics))
        .merge(routes::diplomas::router())
        .merge(routes::config::router())
        .merge(routes::ledger::router())
        .merge(routes::chain::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}

/// GET /metrics: Prometheus text exposition, when a recorder is installed.
async fn prometheus_metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let handle = state
        .metrics
        .as_ref()
        .ok_or_else(|| AppError::NotFound("metrics recorder not installed".to_string()))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    ))
}
