//! Result records returned by the analysis pipeline.
//!
//! These are plain data. None of them know whether the remote call behind them
//! actually succeeded; only the shape is guaranteed.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const NO_EXECUTIVE_SUMMARY: &str = "No executive summary available";
pub const NO_RECOMMENDATION: &str = "No recommendation available";

// ────────────────────────────────────────────────────────────────────────────
// Summary
// ────────────────────────────────────────────────────────────────────────────

/// The decoded summary object, kept exactly as the model produced it.
///
/// No schema is enforced: a field may be missing or have the wrong type. Read it
/// through the accessors, which substitute placeholders instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryResult(Map<String, Value>);

impl SummaryResult {
    pub fn new(
        executive_summary: &str,
        strengths: &[&str],
        improvements: &[&str],
        recommendation: &str,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert("executive_summary".into(), executive_summary.into());
        fields.insert("strengths".into(), strengths.to_vec().into());
        fields.insert("improvements".into(), improvements.to_vec().into());
        fields.insert("recommendation".into(), recommendation.into());
        Self(fields)
    }

    pub fn executive_summary(&self) -> &str {
        self.str_field("executive_summary")
            .unwrap_or(NO_EXECUTIVE_SUMMARY)
    }

    pub fn strengths(&self) -> Vec<&str> {
        self.str_list("strengths")
    }

    pub fn improvements(&self) -> Vec<&str> {
        self.str_list("improvements")
    }

    pub fn recommendation(&self) -> &str {
        self.str_field("recommendation").unwrap_or(NO_RECOMMENDATION)
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::classify(self.recommendation())
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn str_list(&self, key: &str) -> Vec<&str> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for SummaryResult {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Coarse reading of the hiring recommendation, used to colour it in a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Positive,
    Negative,
    Neutral,
}

impl Verdict {
    /// "hire"/"recommend" win over "not"/"reject", so "do not hire" reads as positive.
    /// Dashboard colouring depends on this precedence.
    pub fn classify(recommendation: &str) -> Self {
        let lower = recommendation.to_lowercase();
        if lower.contains("hire") || lower.contains("recommend") {
            Verdict::Positive
        } else if lower.contains("not") || lower.contains("reject") {
            Verdict::Negative
        } else {
            Verdict::Neutral
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Bias
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Unknown,
    ];

    /// Case-insensitive; anything that is not Low/Medium/High is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            _ => Severity::Unknown,
        }
    }

}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(Value::as_str)
            .map(Severity::parse)
            .unwrap_or_default())
    }
}

/// Text fields from the model: null becomes "", other scalars and nested values
/// keep their JSON text. One odd field must not sink the whole report.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// One flagged phrase. Wire names match what the model is asked to produce.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasItem {
    #[serde(rename = "Bias_Type", default, deserialize_with = "lenient_string")]
    pub bias_type: String,
    #[serde(rename = "Example_Phrase", default, deserialize_with = "lenient_string")]
    pub example_phrase: String,
    #[serde(rename = "Severity", default)]
    pub severity: Severity,
}

/// An empty `bias_items` means "no bias detected", not "analysis failed".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    #[serde(default)]
    pub bias_items: Vec<BiasItem>,
}

impl BiasReport {
    pub fn is_empty(&self) -> bool {
        self.bias_items.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendations
// ────────────────────────────────────────────────────────────────────────────

pub const MAX_RECOMMENDATIONS: usize = 5;

/// 0–5 recommendation sentences, in display order.
pub type RecommendationList = Vec<String>;
