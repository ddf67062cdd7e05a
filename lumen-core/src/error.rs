//! Error types for lumen-core.

use thiserror::Error;

/// Errors from progress-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Registration was attempted without a usable display name.
    #[error("name must not be empty")]
    EmptyName,

    /// No profile is registered under the given identifier.
    #[error("learner not found: {0}")]
    LearnerNotFound(String),

    /// The topic is not part of the learner's curriculum.
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
}

/// Errors from reference-content lookups.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The backing content file does not exist (or cannot be read).
    #[error("content file not found: {file}")]
    SourceMissing { file: String },

    /// The backing content file exists but is not valid JSON.
    #[error("content file {file} is not valid JSON: {source}")]
    SourceCorrupt {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// The concepts file is valid but has no section for the topic.
    #[error("no content for topic: {0}")]
    UnknownTopic(String),
}

/// Errors from snapshot persistence.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file exists but could not be read.
    #[error("failed to read snapshot: {0}")]
    Read(#[source] std::io::Error),

    /// The snapshot file could not be written.
    #[error("failed to write snapshot: {0}")]
    Write(#[source] std::io::Error),

    /// The snapshot file exists but does not parse, typically after a crash
    /// mid-write.
    #[error("snapshot is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// In-memory state could not be serialized.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
}
