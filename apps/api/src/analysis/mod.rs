// Analysis Pipeline: Summarize, DetectBias, Recommend.
// All model calls go through the session's `TextModel` — never a client held here.

pub mod bias;
pub mod extract;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod prompts;
pub mod recommend;
pub mod summary;

#[cfg(test)]
pub mod stub;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::analysis::models::{BiasReport, RecommendationList, SummaryResult};
use crate::config::Config;
use crate::llm_client::{GeminiClient, LlmError, TextModel, MODEL};

/// Raised when an operation needs the model but no session exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not configured")]
    NotConfigured,

    #[error("API credential is empty")]
    MissingCredential,

    #[error("Failed to build model client: {0}")]
    Client(#[from] LlmError),
}

/// An authenticated handle to the remote model. Read-only once built, so one
/// session can serve any number of concurrent requests.
#[derive(Clone)]
pub struct ModelSession {
    model: Arc<dyn TextModel>,
}

impl ModelSession {
    /// Binds `credential` to the fixed Gemini model.
    pub fn configure(credential: &str, config: &Config) -> Result<Self, ConfigError> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        let client = GeminiClient::new(
            credential.to_string(),
            &config.gemini_api_base,
            Duration::from_secs(config.llm_timeout_secs),
        )?;
        info!("Model session configured (model: {MODEL})");
        Ok(Self::with_model(Arc::new(client)))
    }

    pub fn with_model(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    fn model(&self) -> &dyn TextModel {
        self.model.as_ref()
    }
}

/// Entry point for the three pipeline operations.
///
/// Only `ConfigError` ever escapes, and only from `summarize`/`detect_bias`.
/// Everything else is folded into the returned value.
#[derive(Clone, Default)]
pub struct Analyzer {
    session: Option<ModelSession>,
}

impl Analyzer {
    pub fn new(session: ModelSession) -> Self {
        Self {
            session: Some(session),
        }
    }

    // Production always configures at startup; kept for callers that defer it.
    #[allow(dead_code)]
    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.session.is_some()
    }

    fn session(&self) -> Result<&ModelSession, ConfigError> {
        self.session.as_ref().ok_or(ConfigError::NotConfigured)
    }

    pub async fn summarize(&self, transcript: &str) -> Result<SummaryResult, ConfigError> {
        let session = self.session()?;
        Ok(summary::summarize(session.model(), transcript).await)
    }

    pub async fn detect_bias(&self, transcript: &str) -> Result<BiasReport, ConfigError> {
        let session = self.session()?;
        Ok(bias::detect_bias(session.model(), transcript).await)
    }

    /// Tolerates a missing session: answers with a placeholder instead of failing.
    pub async fn recommend(&self, report: &BiasReport) -> RecommendationList {
        let Some(session) = &self.session else {
            return vec![recommend::NOT_CONFIGURED.to_string()];
        };
        if report.is_empty() {
            return recommend::no_bias_recommendations();
        }
        recommend::recommend(session.model(), report).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{BiasItem, Severity};
    use crate::analysis::stub::StubModel;

    fn analyzer_with(stub: &Arc<StubModel>) -> Analyzer {
        Analyzer::new(ModelSession::with_model(stub.clone()))
    }

    fn flagged(bias_type: &str) -> BiasReport {
        BiasReport {
            bias_items: vec![BiasItem {
                bias_type: bias_type.to_string(),
                example_phrase: "phrase".to_string(),
                severity: Severity::High,
            }],
        }
    }

    fn test_config() -> Config {
        Config {
            gemini_api_key: "unused".to_string(),
            gemini_api_base: crate::config::DEFAULT_GEMINI_API_BASE.to_string(),
            llm_timeout_secs: 5,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_summarize_and_bias_raise() {
        let analyzer = Analyzer::unconfigured();
        assert!(matches!(
            analyzer.summarize("t").await,
            Err(ConfigError::NotConfigured)
        ));
        assert!(matches!(
            analyzer.detect_bias("t").await,
            Err(ConfigError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_unconfigured_recommend_returns_placeholder() {
        let analyzer = Analyzer::unconfigured();
        assert_eq!(
            analyzer.recommend(&flagged("Age")).await,
            vec!["API key not configured"]
        );
        // Checked before the empty-report shortcut.
        assert_eq!(
            analyzer.recommend(&BiasReport::default()).await,
            vec!["API key not configured"]
        );
    }

    #[tokio::test]
    async fn test_empty_report_skips_model_call() {
        let stub = Arc::new(StubModel::replying(r#"["should not be used"]"#));
        let analyzer = analyzer_with(&stub);
        let recs = analyzer.recommend(&BiasReport::default()).await;
        assert_eq!(recs, recommend::NO_BIAS_RECOMMENDATIONS.to_vec());
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_flagged_report_calls_model_once() {
        let stub = Arc::new(StubModel::replying(r#"["Use a rubric."]"#));
        let analyzer = analyzer_with(&stub);
        assert_eq!(analyzer.recommend(&flagged("Age")).await, vec!["Use a rubric."]);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_every_operation_keeps_shape_when_model_throws() {
        let stub = Arc::new(StubModel::failing("network unreachable"));
        let analyzer = analyzer_with(&stub);

        let summary = analyzer.summarize("t").await.unwrap();
        assert!(summary.executive_summary().contains("Analysis failed"));
        assert!(summary.recommendation().starts_with("Error:"));

        let report = analyzer.detect_bias("t").await.unwrap();
        assert_eq!(report.bias_items.len(), 1);
        assert_eq!(report.bias_items[0].severity, Severity::Unknown);

        // The synthetic error item is non-empty, so Recommend does call the model.
        let recs = analyzer.recommend(&report).await;
        assert_eq!(recs.len(), 1);
        assert!(recs[0].starts_with("Error generating recommendations:"));
        assert_eq!(stub.calls(), 3);
    }

    #[tokio::test]
    async fn test_recommend_rule_fallback_for_three_categories() {
        let stub = Arc::new(StubModel::replying("[\"unterminated"));
        let analyzer = analyzer_with(&stub);
        let report = BiasReport {
            bias_items: ["Gender", "Age", "Education Background"]
                .iter()
                .map(|t| flagged(t).bias_items.remove(0))
                .collect(),
        };
        let recs = analyzer.recommend(&report).await;
        assert_eq!(recs.len(), 5);
        assert!(recs[0].contains("family planning"));
        assert!(recs[1].contains("age-related"));
        assert!(recs[2].contains("educational pedigree"));
        assert!(recs[3].starts_with("Use structured interviews"));
        assert!(recs[4].starts_with("Consider having multiple interviewers"));
    }

    #[test]
    fn test_configure_rejects_blank_credential() {
        let result = ModelSession::configure("   ", &test_config());
        assert!(matches!(result, Err(ConfigError::MissingCredential)));
    }

    #[test]
    fn test_configure_builds_session() {
        let session = ModelSession::configure("secret", &test_config());
        assert!(session.is_ok());
        assert!(Analyzer::new(session.unwrap()).is_configured());
    }
}
