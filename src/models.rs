use core::fmt;

use serde::{Deserialize, Serialize};

/// A closed pair `[lo,hi]` of non-negative integers
///
/// Parsed intervals always satisfy `lo < hi`. Intervals are never mutated in place;
/// merging produces new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, uniffi::Record)]
pub struct Interval {
    pub lo: u64,
    pub hi: u64,
}

impl Interval {
    #[must_use]
    pub const fn new(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    /// Check whether `point` lies within `[lo, hi]`
    #[must_use]
    pub const fn contains(&self, point: u64) -> bool {
        point >= self.lo && point <= self.hi
    }

    /// Distance between the bounds
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.hi.saturating_sub(self.lo)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lo, self.hi)
    }
}

/// Render intervals as space-separated `[lo,hi]` tokens
#[must_use]
pub fn format_intervals(intervals: &[Interval]) -> String {
    intervals
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flat working sequence `[lo1, hi1, lo2, hi2, ...]` threaded through one merge run
///
/// The sequence is owned by value at every step; extraction and merging return new
/// sequences instead of editing a shared buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IntervalSequence {
    values: Vec<u64>,
}

impl IntervalSequence {
    /// Wrap a flat list of values without validating it
    #[must_use]
    pub const fn from_flat(values: Vec<u64>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<u64> {
        self.values
    }

    /// Number of flat values (twice the number of pairs)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate complete `(lo, hi)` pairs; a dangling trailing value is skipped
    pub fn pairs(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.values.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Collect the complete pairs as intervals
    #[must_use]
    pub fn intervals(&self) -> Vec<Interval> {
        self.pairs().map(|(lo, hi)| Interval::new(lo, hi)).collect()
    }
}

impl From<Vec<Interval>> for IntervalSequence {
    fn from(intervals: Vec<Interval>) -> Self {
        Self {
            values: intervals
                .into_iter()
                .flat_map(|interval| [interval.lo, interval.hi])
                .collect(),
        }
    }
}
