//! Chat relay: turns a user's question into a prompt, runs it through the
//! remote conversational flow and hands back a single line of text.
//!
//! `ChatFlow` is the seam to the flow service; `AppState` carries an
//! `Arc<dyn ChatFlow>` (default: `LangflowClient`).

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;

pub mod client;
pub mod handlers;
pub mod prompts;

pub use client::{ChatError, LangflowClient};

/// Returned when the flow answers but the text is not where we expect it.
pub const NO_RESPONSE: &str = "No response found.";
const RESPONSE_TEXT_PATH: &str = "/outputs/0/outputs/0/results/message/text";

#[async_trait]
pub trait ChatFlow: Send + Sync {
    /// Runs the flow with a chat-typed input and returns the raw response body.
    async fn run(&self, prompt: &str) -> Result<Value, ChatError>;
}

/// Outcome of one relay. Remote failures are carried in-band, never as an
/// HTTP error status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChatReply {
    #[serde(rename = "response")]
    Response(String),
    #[serde(rename = "error")]
    Error(String),
}

/// Validates the inputs, then relays the question to the flow.
///
/// A `name` or `message` that is missing or empty (`null`, `""`, `false`, `0`,
/// `[]`, `{}`) fails with `AppError::Validation` before any remote call is
/// made. Non-string values are written into the prompt as JSON text.
pub async fn relay(
    flow: &dyn ChatFlow,
    name: &Value,
    message: &Value,
) -> Result<ChatReply, AppError> {
    if !is_present(name) || !is_present(message) {
        return Err(AppError::Validation(
            "Name and message are required".to_string(),
        ));
    }

    let prompt = prompts::build_astrologer_prompt(&prompt_text(name), &prompt_text(message));

    match flow.run(&prompt).await {
        Ok(body) => Ok(ChatReply::Response(extract_text(&body))),
        Err(e) => {
            warn!("Chat flow failed: {e}");
            Ok(ChatReply::Error(e.to_string()))
        }
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn prompt_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Reads `outputs[0].outputs[0].results.message.text`, falling back to
/// `NO_RESPONSE` when any step is missing.
fn extract_text(body: &Value) -> String {
    body.pointer(RESPONSE_TEXT_PATH)
        .and_then(Value::as_str)
        .unwrap_or(NO_RESPONSE)
        .to_string()
}
