//! Axum route handlers for the Scoring API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::analysis::aggregate::{self, ScoreBreakdown};
use crate::analysis::document::{analyze_jd, analyze_resume, Document};
use crate::errors::AppError;
use crate::extract;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreTextRequest {
    pub resume_text: String,
    pub jd_text: Option<String>,
}

/// POST /api/v1/score
///
/// Multipart form: `resume` (PDF file, required) plus optional `jd_text`
/// field. Scores general quality, or quality-plus-fit when a non-trivial JD
/// is supplied.
pub async fn handle_score(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreBreakdown>, AppError> {
    let mut resume_bytes: Option<Bytes> = None;
    let mut jd_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                resume_bytes = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read resume upload: {e}"))
                })?);
            }
            Some("jd_text") => {
                jd_text = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read jd_text field: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let resume_bytes = resume_bytes
        .ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;
    let resume_text = extract::text_from_pdf(&resume_bytes)?;

    score_texts(&state, &resume_text, jd_text.as_deref())
        .await
        .map(Json)
}

/// POST /api/v1/score/text
///
/// JSON body for callers that already hold plain text (no PDF involved).
pub async fn handle_score_text(
    State(state): State<AppState>,
    Json(request): Json<ScoreTextRequest>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    score_texts(&state, &request.resume_text, request.jd_text.as_deref())
        .await
        .map(Json)
}

/// Shared pipeline: analyze the resume, analyze the JD when non-trivial,
/// score. A trivial JD skips its annotation call entirely.
async fn score_texts(
    state: &AppState,
    resume_text: &str,
    jd_text: Option<&str>,
) -> Result<ScoreBreakdown, AppError> {
    let started = std::time::Instant::now();

    let resume = analyze_resume(resume_text, state.annotator.as_ref()).await?;

    let jd: Option<Document> = match jd_text {
        Some(text) if text.trim().chars().count() > aggregate::MIN_JD_CHARS => {
            Some(analyze_jd(text, state.annotator.as_ref()).await?)
        }
        _ => None,
    };

    let breakdown = aggregate::score(&resume, jd.as_ref(), state.embedder.as_deref()).await;

    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        mode = ?breakdown.mode,
        total = breakdown.total_score,
        "Scored resume"
    );

    Ok(breakdown)
}
