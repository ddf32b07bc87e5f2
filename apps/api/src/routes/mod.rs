pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::profile::handlers as profile;
use crate::reports::handlers as reports;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/",
            get(profile::handle_usage).post(profile::handle_submit),
        )
        .route("/name", get(profile::handle_get_profile))
        .route("/planet/:planet_name", get(reports::handle_get_planet))
        .route("/api/message", post(chat::handle_message))
        .with_state(state)
}
