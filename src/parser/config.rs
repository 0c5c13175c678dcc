//! Validation limits applied while parsing

use serde::{Deserialize, Serialize};

/// Maximum number of pairs accepted by default
pub const DEFAULT_MAX_INTERVALS: u64 = 20;

/// Largest bound accepted by default
pub const DEFAULT_MAX_BOUND: u64 = 10_000;

/// Configuration for input validation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct ValidationConfig {
    /// Maximum number of `[lo,hi]` pairs in one input
    pub max_intervals: u64,
    /// Largest value either bound may take
    pub max_bound: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_intervals: DEFAULT_MAX_INTERVALS,
            max_bound: DEFAULT_MAX_BOUND,
        }
    }
}
