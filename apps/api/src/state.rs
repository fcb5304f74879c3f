use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::InferenceBackend;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds nothing mutable; cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable inference backend. Default: `OllamaClient`.
    pub inference: Arc<dyn InferenceBackend>,
    pub config: Config,
}
