use std::sync::Arc;

use crate::config::Config;
use crate::extraction::DocumentExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text extractor. Default: NativeExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
}
