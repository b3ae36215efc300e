use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::chat::{ChatReply, ChatTurn};
use crate::state::AppState;

/// One chat turn from the client: the new message, optional extracted-skills
/// context, and the full ordered history so far. No length cap is enforced
/// here; that is the analysis service's concern.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(default)]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub chat_history: Vec<ChatTurn>,
}

/// POST /api/chat
///
/// Relays the assistant's reply unmodified. The client renders it as
/// lightweight markdown; nothing here interprets it.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let message = req
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Validation("No message provided".to_string()))?;

    let reply = state
        .analysis
        .chat(message, &req.resume_skills, &req.chat_history)
        .await?;
    Ok(Json(reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::jobs::store::JobStore;
    use crate::routes::build_router;
    use crate::state::AppState;
    use crate::upstream::AnalysisClient;

    fn test_state(upstream_url: &str) -> AppState {
        AppState {
            config: Config {
                analysis_service_url: upstream_url.to_string(),
                port: 0,
                rust_log: "info".to_string(),
                jobs_csv_path: None,
                upstream_timeout_secs: 2,
            },
            analysis: AnalysisClient::new(upstream_url, 2),
            jobs: Arc::new(JobStore::with_candidates(Vec::new())),
        }
    }

    fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn relays_reply_and_sends_history_once() {
        // Record every body the upstream sees.
        let seen: Arc<Mutex<Vec<serde_json::Value>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_by_upstream = seen.clone();
        let upstream = Router::new().route(
            "/api/chat",
            post(move |Json(body): Json<serde_json::Value>| {
                seen_by_upstream.lock().unwrap().push(body);
                async { Json(json!({"response": "Hello! Ask me about your resume."})) }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });

        let app = build_router(test_state(&url));
        let resp = app
            .oneshot(json_request(
                "/api/chat",
                json!({"message": "hi", "chatHistory": []}),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["response"], "Hello! Ask me about your resume.");

        let calls = seen.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0]["chatHistory"].as_array().unwrap().len(), 0);
        assert_eq!(calls[0]["message"], "hi");
    }

    #[tokio::test]
    async fn empty_message_is_400() {
        let app = build_router(test_state("http://127.0.0.1:9"));
        let resp = app
            .oneshot(json_request("/api/chat", json!({"message": "   "})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn history_roles_roundtrip() {
        let req: ChatRequest = serde_json::from_value(json!({
            "message": "next question",
            "resumeSkills": ["Rust"],
            "chatHistory": [
                {"role": "user", "content": "hi"},
                {"role": "assistant", "content": "hello"}
            ]
        }))
        .unwrap();
        assert_eq!(req.chat_history.len(), 2);
        assert_eq!(
            req.chat_history[1].role,
            crate::models::chat::ChatRole::Assistant
        );
    }
}
