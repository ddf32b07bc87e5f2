use std::sync::Arc;

use crate::chat::ChatFlow;
use crate::profile::store::ProfileStore;
use crate::reports::ReportSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ProfileStore,
    /// Remote planet-report API. Default: `VedicAstroClient`.
    pub reports: Arc<dyn ReportSource>,
    /// Remote conversational flow. Default: `LangflowClient`.
    pub chat: Arc<dyn ChatFlow>,
}
