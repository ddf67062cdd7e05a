//! lumen-core: Core library for the lumen learning backend
//!
//! This crate provides the foundational components for lumen:
//!
//! - **Profiles** - [`Profile`] and [`TopicProgress`] for per-learner state
//! - **Ranking** - [`Leaderboard`] for the descending score view
//! - **Progress store** - [`ProgressStore`], the one lock around profiles and ranking
//! - **Reference content** - [`ContentStore`] for concept and scientist lookups
//! - **Snapshot** - [`Snapshot`] for best-effort whole-state persistence
//!
//! # Quick Start
//!
//! ```no_run
//! use lumen_core::{ProgressStore, TopicCatalog};
//! use serde_json::json;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     // Memory-only store over the stock curriculum
//!     let store = ProgressStore::in_memory(TopicCatalog::default());
//!
//!     let profile = store.register("sess-1", "Ava", json!(7)).await?;
//!     let total = store.record_progress(&profile.id, "motion", 10).await?;
//!     println!("total score: {total}");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                ProgressStore                │
//! │  ┌────────────────────┐  ┌───────────────┐  │
//! │  │  profiles          │  │  leaderboard  │  │
//! │  │  (id -> Profile)   │  │  (desc order) │  │
//! │  └────────────────────┘  └───────────────┘  │
//! │            one RwLock over both             │
//! └──────────────────────┬──────────────────────┘
//!                        │ rewrite after every mutation
//!                        ▼
//!                 progress.json
//! ```

pub mod content;
pub mod error;
pub mod leaderboard;
pub mod profile;
pub mod snapshot;
pub mod store;
pub mod topics;

// Re-export key types for convenience
pub use content::{CONCEPTS_FILE, ContentStore, SCIENTISTS_FILE};
pub use error::{ContentError, SnapshotError, StoreError};
pub use leaderboard::{Leaderboard, RankedEntry, ScoreEntry};
pub use profile::{Profile, TopicProgress};
pub use snapshot::Snapshot;
pub use store::{DEFAULT_SCORE_DELTA, ProgressStore};
pub use topics::TopicCatalog;
