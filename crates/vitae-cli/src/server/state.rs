//! Application state for the web server.

use std::sync::Arc;

use vitae::Analyzer;

/// Shared application state.
///
/// The analyzer is immutable and every analysis call is independent, so a
/// plain `Arc` is enough - no locking.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}
