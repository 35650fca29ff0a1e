//! Vaccination status lookup endpoint.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use common::{Identifier, ValidationPolicy};
use registry::{VaccinationDataset, VaccinationRecord, VaccinationRegistry};
use serde::Serialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<D: VaccinationDataset> {
    pub registry: VaccinationRegistry<D>,
    pub validation_policy: ValidationPolicy,
}

impl<D: VaccinationDataset> AppState<D> {
    pub fn new(dataset: D, validation_policy: ValidationPolicy) -> Self {
        Self {
            registry: VaccinationRegistry::new(dataset),
            validation_policy,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationStatusResponse {
    pub message: String,
    pub vaccination_data: VaccinationRecord,
}

/// GET /id — no identifier supplied.
pub async fn missing<D: VaccinationDataset + 'static>(
    State(state): State<Arc<AppState<D>>>,
) -> Result<Response, ApiError> {
    handle(&state, "").await
}

/// GET /id/:id — look up vaccination status by national ID or passport.
pub async fn get<D: VaccinationDataset + 'static>(
    State(state): State<Arc<AppState<D>>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    handle(&state, &id).await
}

#[tracing::instrument(skip_all)]
async fn handle<D: VaccinationDataset>(
    state: &AppState<D>,
    raw: &str,
) -> Result<Response, ApiError> {
    let result = check_status(state, raw).await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(ApiError::BadRequest(_)) => "invalid",
        Err(_) => "error",
    };
    metrics::counter!("vaccination_requests_total", "outcome" => outcome).increment(1);

    result
}

async fn check_status<D: VaccinationDataset>(
    state: &AppState<D>,
    raw: &str,
) -> Result<Response, ApiError> {
    let identifier = Identifier::parse_with(raw, state.validation_policy).inspect_err(|err| {
        tracing::info!(reason = ?err, "vaccination request rejected");
    })?;

    let record = state.registry.lookup(&identifier).await?;

    let response = VaccinationStatusResponse {
        message: identifier.kind().received_message(identifier.as_str()),
        vaccination_data: record,
    };
    let body = serde_json::to_string_pretty(&response)
        .map_err(|e| ApiError::Internal(format!("failed to serialize response: {e}")))?;

    tracing::info!(
        kind = ?identifier.kind(),
        vaccinated = response.vaccination_data.vaccinated,
        "vaccination request processed"
    );

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
