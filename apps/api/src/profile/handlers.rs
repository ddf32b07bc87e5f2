//! Axum route handlers for profile submission and lookup.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::{Profile, ProfileSubmission};
use crate::profile::store::StoreError;
use crate::reports::collect_reports;
use crate::state::AppState;

pub const USAGE_HINT: &str = "Please make a POST request with the required data.";

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: &'static str,
}

/// GET /
pub async fn handle_usage() -> &'static str {
    USAGE_HINT
}

/// POST /
///
/// Full workflow: save profile → fetch each planet report in order → persist each.
/// Upstream failures are recorded per planet and never fail the request.
pub async fn handle_submit(
    State(state): State<AppState>,
    payload: Result<Json<ProfileSubmission>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let Json(submission) = payload?;
    let profile = Profile::from(submission);

    state
        .store
        .save_profile(&profile)
        .await
        .map_err(|e| AppError::Storage(format!("Failed to save user data: {e}")))?;

    let reports = collect_reports(state.reports.as_ref(), &state.store, &profile).await?;
    let fetched = reports.values().filter(|r| r.is_fetched()).count();
    info!("Submission processed: {fetched}/{} planet reports fetched", reports.len());

    Ok(Json(SubmissionResponse {
        message: "Data processed successfully",
    }))
}

/// GET /name
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<Profile>, AppError> {
    match state.store.load_profile().await {
        Ok(profile) => Ok(Json(profile)),
        Err(StoreError::NotFound(_)) => Err(AppError::NotFound("User data not found".to_string())),
        Err(e) => Err(AppError::Internal(e.into())),
    }
}
