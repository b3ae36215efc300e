use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::analysis::Recommendations;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

/// POST /api/recommendations
///
/// Proxies a skill list to the learning-recommendations capability and
/// relays the returned advice lines.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(req): Json<RecommendationsRequest>,
) -> Result<Json<Recommendations>, AppError> {
    if req.skills.is_empty() {
        return Err(AppError::Validation(
            "Skills must be a non-empty list".to_string(),
        ));
    }

    let recs = state.analysis.recommendations(&req.skills).await?;
    Ok(Json(recs))
}
