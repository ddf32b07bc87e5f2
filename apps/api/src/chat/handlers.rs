use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::chat::{relay, ChatReply};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub name: Value,
    pub message: Value,
}

/// POST /api/message
///
/// Always 200 once the inputs are present; flow failures come back as
/// `{"error": ...}` in the body.
pub async fn handle_message(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload?;
    let reply = relay(state.chat.as_ref(), &request.name, &request.message).await?;
    Ok(Json(reply))
}
