//! Fuzzy deduplication accumulator.
//!
//! [`FuzzyIndex`] maps canonical keys to aggregates and keeps insertion order, which is what
//! makes tie-breaking between equally similar keys (and the final output order) reproducible.
//! Each upsert scores the new key against every existing key, so N items cost O(N²) ratio
//! computations; merge requests carry a handful of resumes, so that stays small.

use crate::similarity::best_match;
use tracing::trace;

/// Canonical form used for fuzzy comparison: trimmed and lower-cased.
pub fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// What happened to an item passed to [`FuzzyIndex::upsert`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Upsert {
    /// Folded into the aggregate at `index`.
    Merged { index: usize, score: f64 },
    /// Stored under a new canonical key at `index`.
    Inserted { index: usize },
}

#[derive(Debug, Clone)]
pub struct FuzzyIndex<T> {
    threshold: u8,
    keys: Vec<String>,
    values: Vec<T>,
}

impl<T> FuzzyIndex<T> {
    /// A threshold above 100 is kept as given, so nothing ever merges.
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Folds `item` into the most similar existing aggregate when that key scores at least
    /// the threshold, otherwise stores it under `key`.
    pub fn upsert<F>(&mut self, key: String, item: T, merge: F) -> Upsert
    where
        F: FnOnce(&mut T, T),
    {
        let best = best_match(&key, self.keys.iter().map(String::as_str));

        if let Some((index, score)) = best {
            if score >= f64::from(self.threshold) {
                trace!(key = %key, matched = %self.keys[index], score, "fuzzy duplicate");
                merge(&mut self.values[index], item);
                return Upsert::Merged { index, score };
            }
        }

        trace!(key = %key, "new canonical key");
        self.keys.push(key);
        self.values.push(item);
        Upsert::Inserted {
            index: self.values.len() - 1,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Aggregates in insertion order.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}
