//! Learner profiles and per-topic progress.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::topics::TopicCatalog;

/// Completion state for one topic inside a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicProgress {
    /// Items completed so far; never exceeds `total`.
    pub completed: u32,
    /// Completable items in this topic, copied from the catalog at
    /// registration.
    pub total: u32,
    /// Points earned in this topic.
    pub score: u64,
}

impl TopicProgress {
    /// Fresh state for a topic with `total` completable items.
    pub fn zeroed(total: u32) -> Self {
        Self {
            completed: 0,
            total,
            score: 0,
        }
    }

    /// Whether every item in this topic has been completed.
    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }
}

/// A learner's record: identity, grade, and progress across every topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque identifier, equal to the learner's session id.
    pub id: String,
    /// Display name as given at registration.
    pub name: String,
    /// Grade level as reported by the client. Kept free-form: the sign-up
    /// form sends a number, older clients sent strings.
    pub grade: Value,
    /// When the profile was created.
    pub joined_at: DateTime<Utc>,
    /// Sum of all per-topic scores.
    pub total_score: u64,
    /// Per-topic completion state, keyed by topic name.
    pub progress: BTreeMap<String, TopicProgress>,
}

impl Profile {
    /// Create a profile with every catalog topic zeroed at its declared
    /// total and no score.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        grade: Value,
        topics: &TopicCatalog,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grade,
            joined_at: Utc::now(),
            total_score: 0,
            progress: topics
                .iter()
                .map(|(t, n)| (t.to_string(), TopicProgress::zeroed(n)))
                .collect(),
        }
    }
}
