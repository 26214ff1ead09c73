//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::insights::BiasInsights;
use crate::analysis::models::{BiasReport, RecommendationList, SummaryResult, Verdict};
use crate::analysis::Analyzer;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: RecommendationList,
}

/// Everything the dashboard renders for one transcript.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub summary: SummaryResult,
    pub verdict: Verdict,
    pub bias: BiasReport,
    pub recommendations: RecommendationList,
    pub insights: BiasInsights,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs summary → bias → recommendations, strictly in that order.
pub async fn analyze_transcript(
    analyzer: &Analyzer,
    transcript: &str,
) -> Result<AnalysisReport, AppError> {
    let transcript = require_transcript(transcript)?;
    let id = Uuid::new_v4();
    info!("Analysis {id} started");

    let summary = analyzer.summarize(transcript).await?;
    debug!(
        "Analysis {id} summary: {} strength(s), {} improvement(s): {}",
        summary.strengths().len(),
        summary.improvements().len(),
        summary.executive_summary()
    );
    let bias = analyzer.detect_bias(transcript).await?;
    let recommendations = analyzer.recommend(&bias).await;
    let insights = BiasInsights::from_report(&bias);

    info!(
        "Analysis {id} finished: {} bias item(s), {} recommendation(s)",
        bias.bias_items.len(),
        recommendations.len()
    );

    Ok(AnalysisReport {
        id,
        analyzed_at: Utc::now(),
        verdict: summary.verdict(),
        summary,
        bias,
        recommendations,
        insights,
    })
}

fn require_transcript(transcript: &str) -> Result<&str, AppError> {
    if transcript.trim().is_empty() {
        return Err(AppError::Validation(
            "transcript cannot be empty".to_string(),
        ));
    }
    Ok(transcript)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<TranscriptRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = analyze_transcript(&state.analyzer, &request.transcript).await?;
    Ok(Json(report))
}

/// POST /api/v1/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(request): Json<TranscriptRequest>,
) -> Result<Json<SummaryResult>, AppError> {
    let transcript = require_transcript(&request.transcript)?;
    Ok(Json(state.analyzer.summarize(transcript).await?))
}

/// POST /api/v1/bias
pub async fn handle_bias(
    State(state): State<AppState>,
    Json(request): Json<TranscriptRequest>,
) -> Result<Json<BiasReport>, AppError> {
    let transcript = require_transcript(&request.transcript)?;
    Ok(Json(state.analyzer.detect_bias(transcript).await?))
}

/// POST /api/v1/recommendations
///
/// Takes a bias report as produced by /api/v1/bias. An empty report gets the
/// canned "no bias" guidance without a model call.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(report): Json<BiasReport>,
) -> Json<RecommendationsResponse> {
    let recommendations = state.analyzer.recommend(&report).await;
    Json(RecommendationsResponse { recommendations })
}
