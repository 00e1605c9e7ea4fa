//! # Registry Metrics
//!
//! Counters emitted through the `metrics` facade. They are no-ops until a
//! recorder is installed; the binary installs the Prometheus recorder with
//! [`install_recorder`] and the handle is rendered at `/metrics`.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use diploma_registry::IssueError;

pub const ISSUED_TOTAL: &str = "diploma_issued_total";
pub const ISSUE_REJECTED_TOTAL: &str = "diploma_issue_rejected_total";
pub const UPDATED_TOTAL: &str = "diploma_updated_total";
pub const UPDATE_REJECTED_TOTAL: &str = "diploma_update_rejected_total";

/// Install the global Prometheus recorder.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

pub fn record_issued() {
    metrics::counter!(ISSUED_TOTAL).increment(1);
}

/// Count a refused issuance, labelled by its registry code.
pub fn record_issue_rejected(err: IssueError) {
    metrics::counter!(ISSUE_REJECTED_TOTAL, "code" => err.code().to_string()).increment(1);
}

pub fn record_updated() {
    metrics::counter!(UPDATED_TOTAL).increment(1);
}

pub fn record_update_rejected() {
    metrics::counter!(UPDATE_REJECTED_TOTAL).increment(1);
}
