use std::sync::Arc;

use crate::llm_client::CompletionService;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// `None` when no credential was resolvable at startup; every fetch then
    /// fails fast with `MissingCredential` while the rest of the API works.
    pub completion: Option<Arc<dyn CompletionService>>,
}
