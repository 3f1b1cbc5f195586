use std::sync::Arc;

use crate::config::Config;
use crate::nlp::annotator::Annotate;
use crate::nlp::embedder::Embed;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both collaborators are constructed once at startup and shared read-only
/// across concurrent requests; the scoring engine itself keeps no state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Linguistic annotator. Hard startup dependency.
    pub annotator: Arc<dyn Annotate>,
    /// Embedding collaborator. `None` disables semantic matching; per-call
    /// failures also degrade the semantic score to 0 rather than failing
    /// the request.
    pub embedder: Option<Arc<dyn Embed>>,
}
