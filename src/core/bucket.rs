//! Order-preserving length buckets
//!
//! The source list is assumed to be in descending frequency order; that
//! ranking is the only ordering the pipeline has, so each bucket keeps its
//! entries in exactly the order they arrived.

use std::ops::RangeInclusive;

/// Shortest word length the pipeline keeps
pub const MIN_WORD_LEN: usize = 5;

/// Longest word length the pipeline keeps
pub const MAX_WORD_LEN: usize = 8;

/// A partition of items by length over an inclusive range
///
/// Each item lands in at most one bucket (the one matching its exact
/// length); items outside the range are dropped. Insertion order is
/// preserved within every bucket.
#[derive(Debug, Clone)]
pub struct LengthBuckets<T> {
    min: usize,
    buckets: Vec<Vec<T>>,
}

impl<T> LengthBuckets<T> {
    /// Create empty buckets covering `range` (inclusive)
    ///
    /// # Panics
    /// Panics if the range is empty.
    #[must_use]
    pub fn new(range: RangeInclusive<usize>) -> Self {
        let (min, max) = (*range.start(), *range.end());
        assert!(min <= max, "empty length range {min}..={max}");
        Self {
            min,
            buckets: (min..=max).map(|_| Vec::new()).collect(),
        }
    }

    /// Buckets over the pipeline's standard 5..=8 range
    #[must_use]
    pub fn standard() -> Self {
        Self::new(MIN_WORD_LEN..=MAX_WORD_LEN)
    }

    /// Append `item` to the bucket for `length`
    ///
    /// Returns whether the item was kept; lengths outside the range are
    /// silently dropped.
    pub fn insert(&mut self, length: usize, item: T) -> bool {
        match self.index_of(length) {
            Some(i) => {
                self.buckets[i].push(item);
                true
            }
            None => false,
        }
    }

    /// Items in the bucket for `length`, in insertion order
    ///
    /// Empty for lengths outside the range.
    #[must_use]
    pub fn get(&self, length: usize) -> &[T] {
        self.index_of(length)
            .map_or(&[], |i| self.buckets[i].as_slice())
    }

    /// Number of items bucketed under `length`
    #[must_use]
    pub fn count(&self, length: usize) -> usize {
        self.get(length).len()
    }

    /// Total number of items across all buckets
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// The lengths this partition covers, ascending
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.min..=self.min + self.buckets.len() - 1
    }

    fn index_of(&self, length: usize) -> Option<usize> {
        length
            .checked_sub(self.min)
            .filter(|&i| i < self.buckets.len())
    }
}
