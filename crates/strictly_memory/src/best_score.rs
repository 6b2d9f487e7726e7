//! Best-score persistence over a string key-value store.

use std::collections::HashMap;

use tracing::{debug, info, instrument, warn};

use crate::error::StoreError;
use crate::types::Difficulty;

/// Shown where a tier has no best score yet.
pub const NO_RECORD: &str = "—";

/// String key-value storage, shaped like browser local storage.
pub trait ScoreStore {
    /// Reads a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes a value. Deleting an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process store, lost on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Per-tier minimum move counts.
///
/// Values are stored as decimal text and always compared as integers.
/// Anything absent, unreadable or non-numeric counts as no record.
#[derive(Debug, Clone)]
pub struct BestScores<S> {
    store: S,
}

impl<S: ScoreStore> BestScores<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Best move count for a tier, if one was recorded.
    #[instrument(skip(self))]
    pub fn best(&self, difficulty: Difficulty) -> Option<u32> {
        let key = difficulty.storage_key();
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Could not read best score");
                return None;
            }
        };

        match raw.trim().parse::<u32>() {
            Ok(best) => Some(best),
            Err(_) => {
                warn!(key, value = %raw, "Ignoring malformed best score");
                None
            }
        }
    }

    /// Best score for a tier, or [`NO_RECORD`].
    pub fn display(&self, difficulty: Difficulty) -> String {
        self.best(difficulty)
            .map(|best| best.to_string())
            .unwrap_or_else(|| NO_RECORD.to_string())
    }

    /// Records a finished game. Returns true if it set a new best.
    ///
    /// The stored value changes only when `moves` is strictly lower than the
    /// current best or there is no usable record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the new best could not be written.
    #[instrument(skip(self))]
    pub fn record(&mut self, difficulty: Difficulty, moves: u32) -> Result<bool, StoreError> {
        let previous = self.best(difficulty);
        if let Some(best) = previous
            && moves >= best
        {
            debug!(best, "Not a new best");
            return Ok(false);
        }

        self.store
            .set(difficulty.storage_key(), &moves.to_string())?;
        info!(?previous, moves, "New best score");
        Ok(true)
    }

    /// Forgets the best score of every tier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a value could not be removed.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), StoreError> {
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            self.store.remove(difficulty.storage_key())?;
        }
        info!("Best scores cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_record_until_first_win() {
        let scores = BestScores::new(MemoryStore::new());
        assert_eq!(scores.best(Difficulty::Easy), None);
        assert_eq!(scores.display(Difficulty::Hard), NO_RECORD);
    }

    #[test]
    fn test_whitespace_around_value_is_tolerated() {
        let mut store = MemoryStore::new();
        store.set("bestEasy", " 14\n").expect("set");
        let scores = BestScores::new(store);
        assert_eq!(scores.best(Difficulty::Easy), Some(14));
    }
}
