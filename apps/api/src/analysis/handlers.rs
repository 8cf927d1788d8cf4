//! Axum route handlers for the Analysis API.
//!
//! All upload validation happens here, before the core pipeline runs: only a
//! readable PDF with non-blank extracted text and a non-empty job description
//! reach `analyze`.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;

use crate::analysis::analyzer::{analyze, AnalysisResult};
use crate::errors::AppError;
use crate::extract;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// POST /api/v1/analyze
///
/// Multipart form: `resume` (a PDF file) and `job_description` (text).
/// Extracts resume text from the PDF, then runs the analysis pipeline.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut resume_bytes: Option<bytes::Bytes> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("resume") => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                if content_type != "application/pdf" {
                    return Err(AppError::Validation(
                        "Only PDF files are supported".to_string(),
                    ));
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
                resume_bytes = Some(bytes);
            }
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job_description: {e}"))
                })?;
                job_description = Some(text);
            }
            // Unknown parts are ignored rather than rejected.
            _ => {}
        }
    }

    let resume_bytes = resume_bytes
        .ok_or_else(|| AppError::Validation("Missing 'resume' file part".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("Missing 'job_description' part".to_string()))?;

    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let resume_text = extract::text_from_pdf(&resume_bytes)?;

    let result = analyze(
        &resume_text,
        &job_description,
        &state.patterns,
        state.skill_matcher.as_ref(),
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/v1/analyze/text
///
/// JSON body with plain resume and job-description text, for callers that
/// already hold extracted text. Same pipeline, no PDF collaborator.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let result = analyze(
        &request.resume_text,
        &request.job_description,
        &state.patterns,
        state.skill_matcher.as_ref(),
    )
    .await?;

    Ok(Json(result))
}
