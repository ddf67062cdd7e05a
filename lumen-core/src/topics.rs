//! The topic catalog: which topics exist and how many items each holds.

use std::collections::BTreeMap;

/// The set of topics a learner can make progress on, each with the number
/// of completable items it contains.
///
/// The catalog is fixed at startup. Profiles created against it carry their
/// own copy of each total, so editing the catalog never rewrites history for
/// learners who registered under the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCatalog {
    totals: BTreeMap<String, u32>,
}

impl TopicCatalog {
    /// Build a catalog from `(topic, total)` pairs.
    pub fn new<I, S>(topics: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            totals: topics.into_iter().map(|(t, n)| (t.into(), n)).collect(),
        }
    }

    /// Number of completable items in `topic`, if the topic exists.
    pub fn total(&self, topic: &str) -> Option<u32> {
        self.totals.get(topic).copied()
    }

    /// Whether `topic` is part of the catalog.
    pub fn contains(&self, topic: &str) -> bool {
        self.totals.contains_key(topic)
    }

    /// Iterate `(topic, total)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.totals.iter().map(|(t, n)| (t.as_str(), *n))
    }

    /// Number of topics in the catalog.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether the catalog has no topics at all.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

impl Default for TopicCatalog {
    /// The stock physics curriculum.
    fn default() -> Self {
        Self::new([
            ("motion", 6),
            ("energy", 5),
            ("electricity", 5),
            ("matter", 7),
            ("waves", 5),
        ])
    }
}
