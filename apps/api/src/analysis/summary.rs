//! Summarize — structured interview summary.

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::analysis::extract::decode_object;
use crate::analysis::models::SummaryResult;
use crate::analysis::prompts::summary_prompt;
use crate::llm_client::{LlmError, TextModel};

pub const PARSE_FAILED_SUMMARY: &str =
    "Summary parsing failed - please check the transcript format";
pub const CALL_FAILED_SUMMARY: &str = "Analysis failed. Please check your API key and try again.";

/// Never fails: extraction and call errors both come back as a populated `SummaryResult`.
pub async fn summarize(model: &dyn TextModel, transcript: &str) -> SummaryResult {
    info!("Summarizing transcript ({} chars)", transcript.len());
    let prompt = summary_prompt(transcript);

    let text = match model.generate_content(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Summary call failed: {e}");
            return call_failed(&e);
        }
    };

    match decode_object::<Map<String, Value>>(&text) {
        Ok(fields) => SummaryResult::from(fields),
        Err(e) => {
            warn!("Summary extraction failed: {e}");
            parse_failed()
        }
    }
}

fn parse_failed() -> SummaryResult {
    SummaryResult::new(
        PARSE_FAILED_SUMMARY,
        &["Analysis incomplete"],
        &["Technical issue occurred"],
        "Please try again with a valid API key",
    )
}

fn call_failed(error: &LlmError) -> SummaryResult {
    SummaryResult::new(CALL_FAILED_SUMMARY, &[], &[], &format!("Error: {error}"))
}
