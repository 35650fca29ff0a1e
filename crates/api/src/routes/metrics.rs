//! Prometheus metrics endpoint and metric descriptions.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use metrics::{Unit, describe_counter};
use metrics_exporter_prometheus::PrometheusHandle;

/// Registers help text for every counter the service emits.
///
/// Must run after the recorder is installed.
pub fn describe() {
    describe_counter!(
        "vaccination_requests_total",
        Unit::Count,
        "Status requests handled, labelled by outcome (ok, invalid, error)"
    );
    describe_counter!(
        "vaccination_lookups_total",
        Unit::Count,
        "Dataset lookups, labelled by whether a record was found"
    );
    describe_counter!(
        "dataset_loads_total",
        Unit::Count,
        "Successful reads of the vaccination dataset file"
    );
    describe_counter!(
        "dataset_load_failures_total",
        Unit::Count,
        "Failed reads of the vaccination dataset file, labelled by kind"
    );
}

/// GET /metrics — returns Prometheus-formatted metrics.
pub async fn get(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        handle.render(),
    )
}
