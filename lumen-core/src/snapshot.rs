//! Whole-state snapshot persistence.
//!
//! The snapshot is a single JSON file mirroring the in-memory collections
//! verbatim: a `profiles` map and the `leaderboard` array. It is read once
//! at startup and rewritten in full after every mutation. The write is not
//! atomic; a crash mid-write leaves a file that fails to parse and is
//! discarded on the next load.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::SnapshotError;
use crate::leaderboard::Leaderboard;
use crate::profile::Profile;

/// Full dump of the progress state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Learner profiles keyed by identifier.
    pub profiles: HashMap<String, Profile>,
    /// Score ranking, in stored (descending) order.
    pub leaderboard: Leaderboard,
}

impl Snapshot {
    /// Read a snapshot from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist. A file that cannot
    /// be read or parsed is an error; the caller decides whether to discard
    /// it.
    pub async fn read(path: &Path) -> Result<Option<Self>, SnapshotError> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SnapshotError::Read(e)),
        };
        let snapshot = serde_json::from_str(&content).map_err(SnapshotError::Corrupt)?;
        Ok(Some(snapshot))
    }

    /// Write the snapshot to `path`, creating parent directories as needed.
    ///
    /// Pretty-printed so the file stays hand-inspectable.
    pub async fn write(&self, path: &Path) -> Result<(), SnapshotError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(SnapshotError::Write)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(SnapshotError::Serialize)?;
        fs::write(path, content).await.map_err(SnapshotError::Write)
    }
}
