//! Planet report acquisition.
//!
//! `ReportSource` is the seam to the remote report API. `AppState` carries an
//! `Arc<dyn ReportSource>`; the default backend is `VedicAstroClient`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{Planet, PlanetReport, Profile};
use crate::profile::store::ProfileStore;

pub mod client;
pub mod handlers;

pub use client::{ReportError, VedicAstroClient};

#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetches the report for one planet. Any failure is returned as an
    /// error; callers decide how to degrade.
    async fn fetch_report(&self, profile: &Profile, planet: Planet) -> Result<Value, ReportError>;
}

/// Fetches and persists a report for every planet, strictly one after another.
///
/// A planet whose fetch fails is recorded as `PlanetReport::Unavailable` and the
/// loop moves on. Each report is written before the next fetch starts, so an
/// interrupted run leaves a mix of old and new report files.
pub async fn collect_reports(
    source: &dyn ReportSource,
    store: &ProfileStore,
    profile: &Profile,
) -> Result<BTreeMap<Planet, PlanetReport>, AppError> {
    let mut reports = BTreeMap::new();

    for planet in Planet::ALL {
        let report = match source.fetch_report(profile, planet).await {
            Ok(payload) => {
                info!("{planet} report fetched");
                PlanetReport::Fetched(payload)
            }
            Err(e) => {
                warn!("{planet} report unavailable: {e}");
                PlanetReport::Unavailable
            }
        };

        store
            .save_report(planet, &report)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to save report for {planet}: {e}")))?;

        reports.insert(planet, report);
    }

    Ok(reports)
}
