//! High score leaderboard system
//!
//! Persisted as a plain JSON array (e.g. `[20,20,5]`), tracks the top 3 scores.
//! Equal scores are kept as separate results.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 3;

/// High score leaderboard (sorted descending)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<u32>,
}

impl HighScores {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "spaceRidersHighscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Scores, best first
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().copied()
    }

    /// Insert a finished run's score, keeping the best three.
    /// Returns the rank achieved (1-indexed) or None if it fell off the list.
    pub fn insert(&mut self, score: u32) -> Option<usize> {
        // Insert after any equal scores so earlier results keep their rank
        let pos = self
            .entries
            .iter()
            .position(|&e| score > e)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, score);
        self.entries.truncate(MAX_HIGH_SCORES);

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    /// Insert a score and persist the updated list
    pub fn commit(&mut self, score: u32, store: &mut impl KeyValueStore) -> Option<usize> {
        let rank = self.insert(score);
        self.save(store);
        rank
    }

    /// Parse a stored list. Anything that is not an array of non-negative
    /// integers yields an empty leaderboard.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<u32>>(json) {
            Ok(mut entries) => {
                entries.sort_unstable_by(|a, b| b.cmp(a));
                entries.truncate(MAX_HIGH_SCORES);
                Self { entries }
            }
            Err(e) => {
                log::warn!("Discarding malformed high scores: {e}");
                Self::new()
            }
        }
    }

    /// Load high scores from the store
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Some(json) => {
                let scores = Self::from_json(&json);
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            None => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save high scores to the store
    pub fn save(&self, store: &mut impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
            Err(e) => log::warn!("Failed to serialize high scores: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_keeps_top_three_with_duplicates() {
        let mut scores = HighScores::new();
        for s in [5, 20, 3, 20, 1] {
            scores.insert(s);
        }
        assert_eq!(scores.entries(), &[20, 20, 5]);
        assert_eq!(scores.top_score(), Some(20));
    }

    #[test]
    fn test_insert_reports_rank() {
        let mut scores = HighScores::new();
        assert_eq!(scores.insert(10), Some(1));
        assert_eq!(scores.insert(10), Some(2));
        assert_eq!(scores.insert(30), Some(1));
        assert_eq!(scores.insert(0), None);
        assert_eq!(scores.entries(), &[30, 10, 10]);
    }

    #[test]
    fn test_commit_persists_plain_array() {
        let mut store = MemoryStore::new();
        let mut scores = HighScores::new();
        scores.commit(7, &mut store);
        scores.commit(12, &mut store);

        assert_eq!(
            store.get(HighScores::STORAGE_KEY).as_deref(),
            Some("[12,7]")
        );
        assert_eq!(HighScores::load(&store), scores);
    }

    #[test]
    fn test_malformed_storage_is_empty() {
        for bad in ["", "null", "{\"a\":1}", "[1,\"x\"]", "[-4, 2]", "[1.5]", "oops"] {
            assert!(HighScores::from_json(bad).is_empty(), "{bad:?}");
        }
        assert!(HighScores::load(&MemoryStore::new()).is_empty());
    }

    #[test]
    fn test_load_normalizes_order_and_length() {
        let scores = HighScores::from_json("[1, 9, 4, 12]");
        assert_eq!(scores.entries(), &[12, 9, 4]);
    }

    proptest! {
        #[test]
        fn prop_ledger_is_sorted_top_three(commits in prop::collection::vec(0u32..500, 0..20)) {
            let mut scores = HighScores::new();
            for &s in &commits {
                scores.insert(s);
            }

            let mut expected = commits.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            expected.truncate(MAX_HIGH_SCORES);
            prop_assert_eq!(scores.entries(), expected.as_slice());
        }
    }
}
