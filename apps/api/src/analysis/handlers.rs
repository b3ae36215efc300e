//! Resume-analysis proxy handlers.
//!
//! Both handlers follow the same shape: pull the upload out of the multipart
//! form, validate it, forward to the analysis service, relay the result.
//! Validation happens before any upstream I/O, so a bad request never costs
//! a backend call.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;

use crate::errors::AppError;
use crate::models::analysis::{AnalysisReport, MatchEnvelope};
use crate::state::AppState;

struct ResumeUpload {
    filename: String,
    content_type: Option<String>,
    bytes: Bytes,
}

/// POST /api/analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let (upload, _) = read_form(&mut multipart).await?;
    let upload = require_pdf(upload)?;

    let report = state
        .analysis
        .analyze_resume(&upload.filename, upload.bytes)
        .await?;
    Ok(Json(report))
}

/// POST /api/analyze-resume-skills
pub async fn handle_analyze_resume_skills(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchEnvelope>, AppError> {
    let (upload, job_skills) = read_form(&mut multipart).await?;
    let upload = require_pdf(upload)?;
    let job_skills = job_skills
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No job skills provided".to_string()))?;

    let envelope = state
        .analysis
        .analyze_resume_skills(&upload.filename, upload.bytes, &job_skills)
        .await?;
    Ok(Json(envelope))
}

/// Drains the multipart form, picking out the `resume` file and the
/// optional `jobSkills` text field. Unknown fields are ignored.
async fn read_form(
    multipart: &mut Multipart,
) -> Result<(Option<ResumeUpload>, Option<String>), AppError> {
    let mut resume = None;
    let mut job_skills = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        match field.name() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(malformed)?;
                resume = Some(ResumeUpload {
                    filename,
                    content_type,
                    bytes,
                });
            }
            Some("jobSkills") => {
                job_skills = Some(field.text().await.map_err(malformed)?);
            }
            _ => {}
        }
    }

    Ok((resume, job_skills))
}

fn malformed(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart request: {e}"))
}

/// The upload must be present, named, and a PDF. Browsers usually send the
/// right content type; when they don't, the filename extension decides.
fn require_pdf(upload: Option<ResumeUpload>) -> Result<ResumeUpload, AppError> {
    let upload =
        upload.ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;

    if upload.filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }

    let is_pdf = upload.content_type.as_deref() == Some("application/pdf")
        || upload.filename.to_ascii_lowercase().ends_with(".pdf");
    if !is_pdf {
        return Err(AppError::Validation("File must be a PDF".to_string()));
    }

    Ok(upload)
}
