//! Recommend — turns a bias report into actionable interviewer guidance.

use tracing::{info, warn};

use crate::analysis::extract::decode_array;
use crate::analysis::models::{BiasItem, BiasReport, RecommendationList, MAX_RECOMMENDATIONS};
use crate::analysis::prompts::recommendation_prompt;
use crate::llm_client::TextModel;

pub const NOT_CONFIGURED: &str = "API key not configured";

/// Returned without a model call when nothing was flagged.
pub const NO_BIAS_RECOMMENDATIONS: [&str; 3] = [
    "Great job! No significant biases were detected in this interview.",
    "Continue following structured interview practices and focusing on job-relevant skills.",
    "Consider using standardized questions to maintain consistency across all candidates.",
];

/// Category rules for the offline generator, applied in this order.
const CATEGORY_RULES: [(&str, &str); 3] = [
    (
        "gender",
        "Avoid questions about family planning, marital status, or use gender-specific language.",
    ),
    (
        "age",
        "Focus on skills and experience rather than age-related questions or assumptions.",
    ),
    (
        "education",
        "Evaluate candidates based on demonstrated skills rather than educational pedigree.",
    ),
];

const UNIVERSAL_RECOMMENDATIONS: [&str; 2] = [
    "Use structured interviews with standardized questions for all candidates.",
    "Consider having multiple interviewers to reduce individual bias.",
];

/// Model-backed path. The caller has already handled the unconfigured and
/// nothing-flagged cases; see `Analyzer::recommend`.
pub async fn recommend(model: &dyn TextModel, report: &BiasReport) -> RecommendationList {
    info!(
        "Generating recommendations for {} bias item(s)",
        report.bias_items.len()
    );

    let items_json = match serde_json::to_string_pretty(&report.bias_items) {
        Ok(json) => json,
        Err(e) => {
            warn!("Could not serialize bias items, using rule-based recommendations: {e}");
            return rule_based(&report.bias_items);
        }
    };
    let prompt = recommendation_prompt(&items_json);

    let text = match model.generate_content(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Recommendation call failed: {e}");
            return vec![format!("Error generating recommendations: {e}")];
        }
    };

    match decode_array::<Vec<String>>(&text) {
        Ok(mut recommendations) => {
            recommendations.truncate(MAX_RECOMMENDATIONS);
            recommendations
        }
        Err(e) => {
            warn!("Recommendation extraction failed, using rule-based recommendations: {e}");
            rule_based(&report.bias_items)
        }
    }
}

pub fn no_bias_recommendations() -> RecommendationList {
    NO_BIAS_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
}

/// Offline generator: one sentence per matched category (substring, case-insensitive),
/// then the universal practices. "age" also matches types like "Language".
pub fn rule_based(items: &[BiasItem]) -> RecommendationList {
    let bias_types: Vec<String> = items.iter().map(|i| i.bias_type.to_lowercase()).collect();

    let mut recommendations: RecommendationList = CATEGORY_RULES
        .iter()
        .filter(|(needle, _)| bias_types.iter().any(|t| t.contains(needle)))
        .map(|(_, sentence)| sentence.to_string())
        .collect();
    recommendations.extend(UNIVERSAL_RECOMMENDATIONS.iter().map(|s| s.to_string()));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::Severity;
    use crate::analysis::stub::StubModel;

    fn item(bias_type: &str) -> BiasItem {
        BiasItem {
            bias_type: bias_type.to_string(),
            example_phrase: "phrase".to_string(),
            severity: Severity::Medium,
        }
    }

    fn report(types: &[&str]) -> BiasReport {
        BiasReport {
            bias_items: types.iter().map(|t| item(t)).collect(),
        }
    }

    #[tokio::test]
    async fn test_model_array_is_returned() {
        let model = StubModel::replying(
            "Here you go:\n[\"Use a scoring rubric.\", \"Remove questions about family.\"]",
        );
        let recs = recommend(&model, &report(&["Gender"])).await;
        assert_eq!(recs, vec!["Use a scoring rubric.", "Remove questions about family."]);
    }

    #[tokio::test]
    async fn test_prompt_contains_pretty_printed_items() {
        let model = StubModel::replying("[]");
        recommend(&model, &report(&["Age"])).await;
        let prompt = model.last_prompt().unwrap();
        assert!(prompt.contains("\"Bias_Type\": \"Age\""));
        assert!(prompt.contains("\"Severity\": \"Medium\""));
    }

    #[tokio::test]
    async fn test_model_list_is_capped_at_five() {
        let model = StubModel::replying(r#"["1", "2", "3", "4", "5", "6", "7"]"#);
        let recs = recommend(&model, &report(&["Age"])).await;
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[4], "5");
    }

    #[tokio::test]
    async fn test_parse_failure_uses_rules_in_fixed_order() {
        let model = StubModel::replying("[not, valid, json]");
        let recs = recommend(
            &model,
            &report(&["EDUCATION Background", "age discrimination", "Gender/Sex"]),
        )
        .await;
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0], CATEGORY_RULES[0].1);
        assert_eq!(recs[1], CATEGORY_RULES[1].1);
        assert_eq!(recs[2], CATEGORY_RULES[2].1);
        assert_eq!(recs[3], UNIVERSAL_RECOMMENDATIONS[0]);
        assert_eq!(recs[4], UNIVERSAL_RECOMMENDATIONS[1]);
    }

    #[tokio::test]
    async fn test_missing_array_uses_rules() {
        let model = StubModel::replying("I recommend more training.");
        let recs = recommend(&model, &report(&["Religion"])).await;
        assert_eq!(recs, UNIVERSAL_RECOMMENDATIONS.to_vec());
    }

    #[tokio::test]
    async fn test_non_string_array_uses_rules() {
        let model = StubModel::replying("[1, 2, 3]");
        let recs = recommend(&model, &report(&["Gender"])).await;
        assert_eq!(recs[0], CATEGORY_RULES[0].1);
        assert_eq!(recs.len(), 3);
    }

    #[tokio::test]
    async fn test_call_failure_is_single_error_entry() {
        let model = StubModel::failing("timeout");
        let recs = recommend(&model, &report(&["Age"])).await;
        assert_eq!(recs.len(), 1);
        assert!(recs[0].starts_with("Error generating recommendations:"));
        assert!(recs[0].contains("timeout"));
    }

    #[test]
    fn test_rule_based_only_present_categories() {
        let recs = rule_based(&[item("Age"), item("Appearance")]);
        assert_eq!(
            recs,
            vec![
                CATEGORY_RULES[1].1,
                UNIVERSAL_RECOMMENDATIONS[0],
                UNIVERSAL_RECOMMENDATIONS[1]
            ]
        );
    }

    #[test]
    fn test_rule_based_age_substring_matches_language() {
        let recs = rule_based(&[item("Language")]);
        assert_eq!(recs[0], CATEGORY_RULES[1].1);
    }

    #[test]
    fn test_rule_based_duplicates_collapse_to_one_sentence() {
        let recs = rule_based(&[item("Gender"), item("gender stereotyping")]);
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn test_no_bias_list_is_fixed() {
        let recs = no_bias_recommendations();
        assert_eq!(recs.len(), 3);
        assert!(recs[0].starts_with("Great job!"));
    }
}
