//! Axum route handlers for the analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::analyzer::{analyze_resume, AnalysisResult, ScoreBreakdown};
use crate::errors::AppError;
use crate::extraction::{DocumentFormat, ExtractionError};
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
pub const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub score: u32,
    pub details: AnalysisDetails,
}

#[derive(Debug, Serialize)]
pub struct AnalysisDetails {
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub analysis_notes: Vec<String>,
    pub sections: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            score: result.score,
            details: AnalysisDetails {
                email: result.email,
                phone: result.phone,
                skills: result.skills,
                analysis_notes: result.notes,
                sections: result.sections,
                breakdown: result.breakdown,
            },
        }
    }
}

struct Upload {
    file_name: String,
    data: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Accepts a multipart upload with a `resume` file field (.pdf or .docx), extracts its
/// text in memory and returns the ATS score with notes. Nothing is written to disk.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_resume_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No file part".to_string()))?;

    if upload.file_name.trim().is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }

    let format = DocumentFormat::from_file_name(&upload.file_name)
        .ok_or_else(|| AppError::UnsupportedFileType(upload.file_name.clone()))?;

    info!(
        "Analyzing upload '{}' ({} bytes, {})",
        upload.file_name,
        upload.data.len(),
        format.as_str()
    );

    let text = state.extractor.extract(format, upload.data).await?;
    if text.trim().is_empty() {
        return Err(ExtractionError::Empty.into());
    }

    let result = analyze_resume(&text);
    info!("Upload '{}' scored {}", upload.file_name, result.score);

    Ok(Json(result.into()))
}

/// POST /api/v1/analyze/text
///
/// Scores already-extracted text. Empty text is valid and simply scores low.
pub async fn handle_analyze_text(
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    Ok(Json(analyze_resume(&request.text).into()))
}

/// Returns the first `resume` field. Other fields are skipped.
async fn read_resume_field(multipart: &mut Multipart) -> Result<Option<Upload>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        return Ok(Some(Upload { file_name, data }));
    }

    Ok(None)
}
