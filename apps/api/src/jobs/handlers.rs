use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::job::JobRecord;
use crate::state::AppState;

#[derive(Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobRecord>,
}

/// GET /api/jobs
///
/// Serves the static job dataset. This handler performs no network call and
/// never fails the request: with no dataset on disk the listing is empty,
/// not an error.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobsResponse> {
    let jobs = state.jobs.jobs().await.to_vec();
    Json(JobsResponse { jobs })
}
