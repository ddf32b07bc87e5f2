use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub report_api_key: String,
    pub flow: FlowConfig,
    /// Astra DB credentials. Accepted for compatibility with existing `.env`
    /// files; no route talks to the database.
    pub astra: Option<AstraCredentials>,
    pub data_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

/// Location and credentials of the remote chat flow.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub base_url: String,
    pub langflow_id: String,
    pub flow_id: String,
    pub application_token: String,
}

#[derive(Debug, Clone)]
pub struct AstraCredentials {
    pub client_id: String,
    pub secret: String,
    pub url: String,
}

impl FlowConfig {
    /// Full run endpoint: `{base}/lf/{langflow_id}/api/v1/run/{flow_id}`.
    pub fn run_url(&self) -> String {
        format!(
            "{}/lf/{}/api/v1/run/{}",
            self.base_url.trim_end_matches('/'),
            self.langflow_id,
            self.flow_id
        )
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir = match std::env::var("DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .context("Unable to resolve the working directory")?
                .join("AI"),
        };

        Ok(Config {
            report_api_key: require_env("API_KEY")?,
            flow: FlowConfig {
                base_url: require_env("LANGFLOW_BASE_API_URL")?,
                langflow_id: require_env("LANGFLOW_ID")?,
                flow_id: require_env("FLOW_ID")?,
                application_token: require_env("APPLICATION_TOKEN")?,
            },
            astra: astra_from_env(),
            data_dir,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn astra_from_env() -> Option<AstraCredentials> {
    Some(AstraCredentials {
        client_id: std::env::var("ASTRA_DB_CLIENT_ID").ok()?,
        secret: std::env::var("ASTRA_DB_SECRET").ok()?,
        url: std::env::var("ASTRA_DB_URL").ok()?,
    })
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
