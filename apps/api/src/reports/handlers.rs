use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::Planet;
use crate::profile::store::StoreError;
use crate::state::AppState;

/// GET /planet/:planet_name
///
/// Only the fixed planet set resolves; any other name is a 404 without
/// touching the filesystem.
pub async fn handle_get_planet(
    State(state): State<AppState>,
    Path(planet_name): Path<String>,
) -> Result<Json<Value>, AppError> {
    let not_found = || AppError::NotFound(format!("Data for {planet_name} not found"));

    let planet = Planet::from_name(&planet_name).ok_or_else(not_found)?;

    match state.store.load_report(planet).await {
        Ok(report) => Ok(Json(report)),
        Err(StoreError::NotFound(_)) => Err(not_found()),
        Err(e) => Err(AppError::Internal(e.into())),
    }
}
