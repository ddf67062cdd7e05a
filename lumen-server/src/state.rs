//! Shared application state for the lumen server

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use lumen_core::{ContentStore, ProgressStore, TopicCatalog};

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Learner profiles and the score ranking
    pub store: Arc<ProgressStore>,
    /// Reference content lookups
    pub content: Arc<ContentStore>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state over the given store and content directory
    pub fn new(store: Arc<ProgressStore>, content: Arc<ContentStore>) -> Self {
        Self {
            store,
            content,
            started_at: Utc::now(),
        }
    }

    /// State over a memory-only store and the stock curriculum (for testing)
    pub fn in_memory(content_dir: impl Into<PathBuf>) -> Self {
        Self::new(
            Arc::new(ProgressStore::in_memory(TopicCatalog::default())),
            Arc::new(ContentStore::new(content_dir)),
        )
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
