//! The progress store: learner profiles plus the score ranking.
//!
//! One service object owns both collections behind a single lock, so a
//! mutation and its snapshot write are serialized against every other
//! mutation. The ranking is updated eagerly on score-affecting events rather
//! than recomputed on read; reads stay cheap and the two collections can
//! never drift apart.

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::leaderboard::{Leaderboard, RankedEntry};
use crate::profile::Profile;
use crate::snapshot::Snapshot;
use crate::topics::TopicCatalog;

/// Points granted by a progress event when the caller does not name a score.
pub const DEFAULT_SCORE_DELTA: u64 = 10;

/// In-memory learner state with optional file-backed persistence.
pub struct ProgressStore {
    inner: RwLock<Inner>,
    topics: TopicCatalog,
    /// Snapshot target; `None` keeps the store memory-only.
    snapshot_path: Option<PathBuf>,
}

#[derive(Default)]
struct Inner {
    profiles: HashMap<String, Profile>,
    board: Leaderboard,
}

impl ProgressStore {
    /// Open a store backed by the snapshot file at `path`.
    ///
    /// A missing file starts the store empty. An unreadable or unparseable
    /// file is discarded with a warning rather than repaired; the snapshot
    /// is best-effort and the next mutation overwrites it.
    pub async fn open(path: impl Into<PathBuf>, topics: TopicCatalog) -> Self {
        let path = path.into();
        let inner = match Snapshot::read(&path).await {
            Ok(Some(snapshot)) => {
                tracing::info!(
                    learners = snapshot.profiles.len(),
                    path = %path.display(),
                    "restored progress snapshot"
                );
                Inner {
                    profiles: snapshot.profiles,
                    board: snapshot.leaderboard,
                }
            }
            Ok(None) => Inner::default(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "discarding unusable snapshot, starting empty"
                );
                Inner::default()
            }
        };
        Self {
            inner: RwLock::new(inner),
            topics,
            snapshot_path: Some(path),
        }
    }

    /// A store that never touches disk.
    pub fn in_memory(topics: TopicCatalog) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            topics,
            snapshot_path: None,
        }
    }

    /// Register a learner under `id` with every catalog topic zeroed at its
    /// declared total, and seed a zero-score ranking entry so new learners
    /// appear on the leaderboard right away.
    ///
    /// Registering again under the same id starts the learner over: the
    /// profile is replaced and the ranking entry reset to zero.
    pub async fn register(&self, id: &str, name: &str, grade: Value) -> Result<Profile, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }

        let mut guard = self.inner.write().await;
        let profile = Profile::new(id, name, grade, &self.topics);
        guard.profiles.insert(id.to_string(), profile.clone());
        guard.board.upsert(id, 0);
        self.persist(&guard).await;

        tracing::info!(learner = id, name, "registered learner");
        Ok(profile)
    }

    /// Record one completion in `topic` worth `delta` points, returning the
    /// learner's new total score.
    ///
    /// Capped per topic: once `completed` has reached the topic's total the
    /// event is ignored entirely - counters, ranking, and snapshot are all
    /// left untouched - and the unchanged total is returned. Scores saturate
    /// at `u64::MAX` rather than wrapping.
    pub async fn record_progress(
        &self,
        id: &str,
        topic: &str,
        delta: u64,
    ) -> Result<u64, StoreError> {
        let mut guard = self.inner.write().await;
        let total = {
            let Inner { profiles, board } = &mut *guard;
            let profile = profiles
                .get_mut(id)
                .ok_or_else(|| StoreError::LearnerNotFound(id.to_string()))?;
            let progress = profile
                .progress
                .get_mut(topic)
                .ok_or_else(|| StoreError::UnknownTopic(topic.to_string()))?;

            if progress.is_complete() {
                tracing::debug!(learner = id, topic, "topic complete, ignoring progress event");
                return Ok(profile.total_score);
            }

            progress.completed += 1;
            // Client deltas are unbounded; saturate instead of wrapping.
            progress.score = progress.score.saturating_add(delta);
            profile.total_score = profile.total_score.saturating_add(delta);
            board.upsert(id, profile.total_score);
            profile.total_score
        };
        self.persist(&guard).await;

        tracing::debug!(learner = id, topic, delta, total, "recorded progress");
        Ok(total)
    }

    /// A copy of the learner's profile.
    pub async fn profile(&self, id: &str) -> Result<Profile, StoreError> {
        let guard = self.inner.read().await;
        guard
            .profiles
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::LearnerNotFound(id.to_string()))
    }

    /// At most `n` leaderboard rows, highest score first, with display names
    /// joined from the profile map at read time.
    pub async fn top(&self, n: usize) -> Vec<RankedEntry> {
        let guard = self.inner.read().await;
        guard
            .board
            .top(n)
            .iter()
            .map(|entry| RankedEntry {
                id: entry.id.clone(),
                name: guard
                    .profiles
                    .get(&entry.id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                score: entry.score,
            })
            .collect()
    }

    /// Number of registered learners.
    pub async fn learner_count(&self) -> usize {
        self.inner.read().await.profiles.len()
    }

    /// Write the snapshot, if this store has one. Best effort: a failure is
    /// logged and swallowed, since the in-memory mutation has already
    /// happened and the next successful write will catch the file up.
    async fn persist(&self, inner: &Inner) {
        let Some(path) = &self.snapshot_path else {
            return;
        };
        let snapshot = Snapshot {
            profiles: inner.profiles.clone(),
            leaderboard: inner.board.clone(),
        };
        if let Err(e) = snapshot.write(path).await {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to write progress snapshot"
            );
        }
    }
}
