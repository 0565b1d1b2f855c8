use crate::llm_client::LlmClient;
use crate::matching::matcher::Matcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless matcher; holds only the provider handle and limits.
    pub matcher: Matcher,
    pub llm: LlmClient,
}
