use std::sync::Arc;

use crate::analysis::Analyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup. Each request builds its own prompts and responses.
    pub analyzer: Arc<Analyzer>,
}
