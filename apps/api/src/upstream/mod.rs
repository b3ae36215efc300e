//! Analysis Client — the single point of entry for all calls to the
//! external Analysis Service.
//!
//! ARCHITECTURAL RULE: no handler may call the analysis backend directly.
//! All upstream interactions MUST go through this module, so timeout and
//! error classification live in exactly one place.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;
use crate::models::analysis::{AnalysisReport, MatchEnvelope, Recommendations};
use crate::models::chat::{ChatReply, ChatTurn};

const ANALYZE_RESUME_PATH: &str = "/api/analyze-resume";
const ANALYZE_SKILLS_PATH: &str = "/api/analyze-resume-skills";
const CHAT_PATH: &str = "/api/chat";
const RECOMMENDATIONS_PATH: &str = "/api/gemini-recommendations";

const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Analysis service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            // Connect failures and expired timeouts are both "unreachable"
            UpstreamError::Http(e) => AppError::UpstreamUnreachable(e.to_string()),
            UpstreamError::Api { status, message } => AppError::Upstream { status, message },
            UpstreamError::Parse(e) => AppError::Internal(anyhow::anyhow!(
                "analysis service returned an unexpected body: {e}"
            )),
        }
    }
}

/// Thin typed client over the Analysis Service's HTTP surface.
/// Stateless apart from the connection pool; cheap to clone.
#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    /// `timeout_secs` bounds every upstream call end to end; a stalled
    /// backend surfaces as `UpstreamUnreachable` instead of hanging the
    /// request. No retries: a single failure is surfaced immediately.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Forwards resume bytes to the resume-analysis capability.
    pub async fn analyze_resume(
        &self,
        filename: &str,
        resume: Bytes,
    ) -> Result<AnalysisReport, UpstreamError> {
        let part = Part::bytes(resume.to_vec())
            .file_name(filename.to_string())
            .mime_str(PDF_MIME)?;
        let form = Form::new().part("resume", part);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, ANALYZE_RESUME_PATH))
            .multipart(form)
            .send()
            .await?;
        self.read_json(response).await
    }

    /// Forwards resume bytes plus a target skill list to the match-analysis
    /// capability. One match per (resume, job) pair, recomputed every call.
    pub async fn analyze_resume_skills(
        &self,
        filename: &str,
        resume: Bytes,
        job_skills: &str,
    ) -> Result<MatchEnvelope, UpstreamError> {
        let part = Part::bytes(resume.to_vec())
            .file_name(filename.to_string())
            .mime_str(PDF_MIME)?;
        let form = Form::new()
            .part("resume", part)
            .text("jobSkills", job_skills.to_string());

        let response = self
            .client
            .post(format!("{}{}", self.base_url, ANALYZE_SKILLS_PATH))
            .multipart(form)
            .send()
            .await?;
        self.read_json(response).await
    }

    /// Sends one chat turn with the full prior history. The service keeps no
    /// session state, so the history travels on every call.
    pub async fn chat(
        &self,
        message: &str,
        resume_skills: &[String],
        history: &[ChatTurn],
    ) -> Result<ChatReply, UpstreamError> {
        let body = json!({
            "message": message,
            "resumeSkills": resume_skills,
            "chatHistory": history,
        });

        let response = self
            .client
            .post(format!("{}{}", self.base_url, CHAT_PATH))
            .json(&body)
            .send()
            .await?;
        self.read_json(response).await
    }

    /// Asks the service for learning/career recommendations for a skill set.
    pub async fn recommendations(&self, skills: &[String]) -> Result<Recommendations, UpstreamError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, RECOMMENDATIONS_PATH))
            .json(&json!({ "skills": skills }))
            .send()
            .await?;
        self.read_json(response).await
    }

    /// Reads a response body, classifying non-2xx statuses as `Api` errors
    /// with whatever message the upstream body yields.
    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, UpstreamError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        debug!("upstream call succeeded: status={status}, body_len={}", body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

/// Pulls the `error` field out of an upstream failure body. The body shape
/// is not guaranteed: non-JSON or `error`-less bodies degrade to the raw
/// text, and an empty body to a generic message.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value.get("error").and_then(|e| e.as_str()) {
            return msg.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Analysis service returned an error".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field_from_json_body() {
        let body = r#"{"error": "File must be a PDF"}"#;
        assert_eq!(extract_error_message(body), "File must be a PDF");
    }

    #[test]
    fn falls_back_to_raw_text_for_non_json() {
        assert_eq!(extract_error_message("502 Bad Gateway\n"), "502 Bad Gateway");
    }

    #[test]
    fn falls_back_to_generic_message_for_empty_body() {
        assert_eq!(
            extract_error_message("   "),
            "Analysis service returned an error"
        );
    }

    #[test]
    fn json_without_error_field_uses_raw_text() {
        let body = r#"{"detail": "boom"}"#;
        assert_eq!(extract_error_message(body), body);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = AnalysisClient::new("http://localhost:5000/", 5);
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
