//! Reference content lookup.
//!
//! Teaching content lives in JSON files under the content directory and is
//! read fresh on every lookup, so edits show up without a restart. At this
//! request rate a cache would buy nothing.

use std::path::PathBuf;

use serde_json::Value;
use tokio::fs;

use crate::error::ContentError;

/// File mapping topic name to its concept definitions.
pub const CONCEPTS_FILE: &str = "concepts.json";
/// File holding the notable-scientists reference data.
pub const SCIENTISTS_FILE: &str = "scientists.json";

/// Read-only lookup into the reference content directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    dir: PathBuf,
}

impl ContentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Concept definitions for one topic.
    ///
    /// The concepts file maps topic name to a block of concept entries; a
    /// file that parses but lacks the topic is `UnknownTopic`, never a
    /// server-side failure.
    pub async fn concepts(&self, topic: &str) -> Result<Value, ContentError> {
        let all = self.load(CONCEPTS_FILE).await?;
        match all.get(topic) {
            Some(section) => Ok(section.clone()),
            None => Err(ContentError::UnknownTopic(topic.to_string())),
        }
    }

    /// The notable-scientists payload, whole file.
    pub async fn scientists(&self) -> Result<Value, ContentError> {
        self.load(SCIENTISTS_FILE).await
    }

    async fn load(&self, file: &str) -> Result<Value, ContentError> {
        let path = self.dir.join(file);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(file, error = %e, "content file unreadable");
                }
                return Err(ContentError::SourceMissing {
                    file: file.to_string(),
                });
            }
        };
        serde_json::from_str(&content).map_err(|source| ContentError::SourceCorrupt {
            file: file.to_string(),
            source,
        })
    }
}
