//! Merge driver orchestrating parse, extraction and absorption

use tracing::debug;

use super::{absorb_overlapping, extract_smallest};
use crate::{
    error::ParseResult,
    models::{Interval, IntervalSequence, format_intervals},
    parser::{IntervalParser, ValidationConfig},
};

/// Runs the extract-then-absorb loop over parsed input
#[derive(Debug, Clone, Default)]
pub struct MergeDriver {
    parser: IntervalParser,
}

impl MergeDriver {
    /// Create a driver with the default validation limits
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: IntervalParser::new(),
        }
    }

    /// Create a driver with custom validation limits
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self {
            parser: IntervalParser::with_config(config),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        self.parser.config()
    }

    /// Parse `input` and merge it, returning intervals in the order they were finalized
    ///
    /// Empty input produces an empty result.
    ///
    /// # Errors
    ///
    /// Returns the validation failure if `input` is rejected; no merging happens then.
    pub fn run(&self, input: &str) -> ParseResult<Vec<Interval>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let sequence = self.parser.parse(input)?;
        Ok(Self::merge_sequence(sequence))
    }

    /// Parse and merge `input`, rendering the result as `[lo,hi]` tokens
    ///
    /// # Errors
    ///
    /// Returns the validation failure if `input` is rejected
    pub fn merge(&self, input: &str) -> ParseResult<String> {
        self.run(input).map(|intervals| format_intervals(&intervals))
    }

    /// Merge an already parsed sequence
    ///
    /// Each round extracts the smallest interval, absorbs what it can in one sweep
    /// and continues with the unabsorbed remainder. Output order is extraction order.
    #[must_use]
    pub fn merge_sequence(sequence: IntervalSequence) -> Vec<Interval> {
        let mut merged = Vec::new();
        let mut working = sequence;

        while !working.is_empty() {
            let (lo, hi, residual) = extract_smallest(working);
            let (lo, hi, remaining) = absorb_overlapping(lo, hi, residual);

            let interval = Interval::new(lo, hi);
            debug!(%interval, remaining = remaining.len(), "finalized interval");
            merged.push(interval);

            working = remaining;
        }

        merged
    }
}
