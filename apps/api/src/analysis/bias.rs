//! DetectBias — scans a transcript for biased or discriminatory language.

use tracing::{info, warn};

use crate::analysis::extract::decode_object;
use crate::analysis::models::{BiasItem, BiasReport, Severity};
use crate::analysis::prompts::bias_prompt;
use crate::llm_client::{LlmError, TextModel};

pub const ANALYSIS_ERROR_TYPE: &str = "Analysis Error";

/// Never fails. An unreadable response is reported as "no bias found"; a failed
/// call is reported as a single `Analysis Error` item with `Unknown` severity.
pub async fn detect_bias(model: &dyn TextModel, transcript: &str) -> BiasReport {
    info!("Scanning transcript for bias ({} chars)", transcript.len());
    let prompt = bias_prompt(transcript);

    let text = match model.generate_content(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Bias call failed: {e}");
            return call_failed(&e);
        }
    };

    match decode_object::<BiasReport>(&text) {
        Ok(report) => {
            info!("Bias scan flagged {} item(s)", report.bias_items.len());
            report
        }
        Err(e) => {
            warn!("Bias extraction failed, reporting no items: {e}");
            BiasReport::default()
        }
    }
}

fn call_failed(error: &LlmError) -> BiasReport {
    BiasReport {
        bias_items: vec![BiasItem {
            bias_type: ANALYSIS_ERROR_TYPE.to_string(),
            example_phrase: format!("Failed to analyze: {error}"),
            severity: Severity::Unknown,
        }],
    }
}
