//! Score ranking over registered learners.

use serde::{Deserialize, Serialize};

/// One ranked learner, rank key only.
///
/// Display fields are deliberately absent: names live in the profile map and
/// are joined in when a display row is produced, so a profile edit can never
/// leave a stale copy here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Learner identifier.
    pub id: String,
    /// Mirror of the profile's total score.
    pub score: u64,
}

/// A display row for leaderboard responses: the entry plus the joined name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub id: String,
    pub name: String,
    pub score: u64,
}

/// Ranking over learner scores, kept in descending score order.
///
/// One entry per learner; `upsert` overwrites in place and re-sorts. The
/// sort is stable, so ties keep the order in which they were first ranked.
/// Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the learner's score, adding an entry if none exists, then restore
    /// descending order.
    pub fn upsert(&mut self, id: &str, score: u64) {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.score = score,
            None => self.entries.push(ScoreEntry {
                id: id.to_string(),
                score,
            }),
        }
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// At most `n` entries, highest score first.
    pub fn top(&self, n: usize) -> &[ScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Current score for a learner, if ranked.
    pub fn score_of(&self, id: &str) -> Option<u64> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.score)
    }

    /// Number of ranked learners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nobody has been ranked yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
