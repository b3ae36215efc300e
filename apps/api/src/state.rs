use std::sync::Arc;

use crate::config::Config;
use crate::jobs::store::JobStore;
use crate::upstream::AnalysisClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup; handlers hold no
/// mutable state across requests.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide settings, injected once at startup. The upstream address
    /// and timeout already live inside `analysis`.
    #[allow(dead_code)]
    pub config: Config,
    /// The one client through which every analysis-service call goes.
    pub analysis: AnalysisClient,
    /// Static job dataset, loaded once on first use.
    pub jobs: Arc<JobStore>,
}
