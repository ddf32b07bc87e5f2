//! File-backed record store for the profile and the per-planet reports.
//!
//! Layout inside the data directory:
//! - `User.json` — the single active profile (compact JSON)
//! - `{Planet}_report.json` — one report per planet (4-space indented JSON)
//!
//! Every save overwrites in place. There is no locking: concurrent
//! submissions resolve as last-writer-wins per file.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Planet, PlanetReport, Profile};

const PROFILE_FILE: &str = "User.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("Malformed record {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    /// Opens the store, creating the data directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        info!("Record store ready at {}", dir.display());
        Ok(Self { dir })
    }

    pub async fn save_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(profile).map_err(|source| StoreError::Malformed {
            path: PROFILE_FILE.to_string(),
            source,
        })?;
        self.write(PROFILE_FILE, &bytes).await
    }

    pub async fn load_profile(&self) -> Result<Profile, StoreError> {
        let bytes = self.read(PROFILE_FILE).await?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: PROFILE_FILE.to_string(),
            source,
        })
    }

    pub async fn save_report(
        &self,
        planet: Planet,
        report: &PlanetReport,
    ) -> Result<(), StoreError> {
        let file = report_file(planet);
        let bytes = to_indented_json(report).map_err(|source| StoreError::Malformed {
            path: file.clone(),
            source,
        })?;
        self.write(&file, &bytes).await
    }

    /// Returns the stored report exactly as written, success payload or error marker.
    pub async fn load_report(&self, planet: Planet) -> Result<Value, StoreError> {
        let file = report_file(planet);
        let bytes = self.read(&file).await?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed { path: file, source })
    }

    async fn write(&self, file: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.dir.join(file);
        tokio::fs::write(&path, bytes).await?;
        debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    async fn read(&self, file: &str) -> Result<Vec<u8>, StoreError> {
        match tokio::fs::read(self.dir.join(file)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(file.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

fn report_file(planet: Planet) -> String {
    format!("{planet}_report.json")
}

fn to_indented_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
