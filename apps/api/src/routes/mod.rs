pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{analysis, auth, chat, jobs, recommend};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        // Proxy capabilities
        .route(
            "/api/analyze-resume",
            post(analysis::handlers::handle_analyze_resume),
        )
        .route(
            "/api/analyze-resume-skills",
            post(analysis::handlers::handle_analyze_resume_skills),
        )
        .route("/api/chat", post(chat::handlers::handle_chat))
        .route(
            "/api/recommendations",
            post(recommend::handlers::handle_recommendations),
        )
        // Local capabilities (no upstream call)
        .route("/api/jobs", get(jobs::handlers::handle_list_jobs))
        .route("/api/auth/login", post(auth::handlers::handle_login))
        .with_state(state)
}
