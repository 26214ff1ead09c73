//! Axum route handlers for the sample catalogue.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::analysis::handlers::{analyze_transcript, AnalysisReport};
use crate::errors::AppError;
use crate::samples::{find_sample, SampleInterview, SAMPLES};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SampleDetailResponse {
    #[serde(flatten)]
    pub sample: &'static SampleInterview,
    pub transcript: &'static str,
}

fn lookup(slug: &str) -> Result<&'static SampleInterview, AppError> {
    find_sample(slug).ok_or_else(|| AppError::NotFound(format!("Sample '{slug}' not found")))
}

/// GET /api/v1/samples
pub async fn handle_list_samples() -> Json<&'static [SampleInterview]> {
    Json(SAMPLES)
}

/// GET /api/v1/samples/:slug
pub async fn handle_get_sample(
    Path(slug): Path<String>,
) -> Result<Json<SampleDetailResponse>, AppError> {
    let sample = lookup(&slug)?;
    Ok(Json(SampleDetailResponse {
        sample,
        transcript: sample.transcript,
    }))
}

/// POST /api/v1/samples/:slug/analyze
pub async fn handle_analyze_sample(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<AnalysisReport>, AppError> {
    let sample = lookup(&slug)?;
    let report = analyze_transcript(&state.analyzer, sample.transcript).await?;
    Ok(Json(report))
}
