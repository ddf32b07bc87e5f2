//! HTTP client for the Langflow run endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::chat::ChatFlow;
use crate::config::FlowConfig;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Flow service returned HTTP {status} for url: {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    input_value: &'a str,
    output_type: &'a str,
    input_type: &'a str,
}

#[derive(Clone)]
pub struct LangflowClient {
    client: Client,
    run_url: String,
    application_token: String,
}

impl LangflowClient {
    pub fn new(config: &FlowConfig) -> Self {
        Self {
            client: Client::new(),
            run_url: config.run_url(),
            application_token: config.application_token.clone(),
        }
    }
}

#[async_trait]
impl ChatFlow for LangflowClient {
    async fn run(&self, prompt: &str) -> Result<Value, ChatError> {
        let request_body = RunRequest {
            input_value: prompt,
            output_type: "chat",
            input_type: "chat",
        };

        let response = self
            .client
            .post(&self.run_url)
            .bearer_auth(&self.application_token)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status {
                status: status.as_u16(),
                url: self.run_url.clone(),
            });
        }

        let body: Value = response.json().await?;
        debug!("Flow run succeeded");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_request_shape() {
        let body = serde_json::to_value(RunRequest {
            input_value: "question",
            output_type: "chat",
            input_type: "chat",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "input_value": "question",
                "output_type": "chat",
                "input_type": "chat"
            })
        );
    }

    #[test]
    fn test_status_error_names_url() {
        let err = ChatError::Status {
            status: 401,
            url: "https://flow.test/lf/a/api/v1/run/b".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Flow service returned HTTP 401 for url: https://flow.test/lf/a/api/v1/run/b"
        );
    }
}
