use std::sync::Arc;

use crate::llm_client::TextModel;
use crate::session::SessionStore;
use crate::skills::gap::GapAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// The model seam. Production: `LlmClient` (Gemini). Tests: stubs.
    pub model: Arc<dyn TextModel>,
    /// Pluggable gap analyzer. Default: CatalogGapAnalyzer.
    /// Swap via ENABLE_LLM_GAP_ANALYSIS env.
    pub gap_analyzer: Arc<dyn GapAnalyzer>,
}
