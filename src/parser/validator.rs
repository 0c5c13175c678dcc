//! Grammar check, pair extraction and bound validation

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::ValidationConfig;
use crate::{
    error::{ParseError, ParseResult},
    models::IntervalSequence,
};

static GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\[[0-9]+,[0-9]+\] ?)+$").expect("grammar regex is valid"));

static PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([0-9]+),([0-9]+)\]").expect("pair regex is valid"));

/// Parser that turns interval text into a flat, validated sequence
#[derive(Debug, Clone, Default)]
pub struct IntervalParser {
    config: ValidationConfig,
}

impl IntervalParser {
    /// Create a parser with the default limits
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Create a parser with custom limits
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Parse `text` into `[lo1, hi1, lo2, hi2, ...]` in textual order
    ///
    /// # Errors
    ///
    /// Returns `Format` if the text does not match the grammar, `TooManyIntervals`
    /// if it holds more pairs than allowed, and for each pair in order
    /// `NumericParse`, `BoundExceeded` or `Ordering`.
    pub fn parse(&self, text: &str) -> ParseResult<IntervalSequence> {
        if !GRAMMAR.is_match(text) {
            debug!(input = text, "rejected input that does not match the grammar");
            return Err(ParseError::format(text));
        }

        let pairs: Vec<(&str, &str)> = PAIR
            .captures_iter(text)
            .map(|caps| {
                let (_, [lo, hi]) = caps.extract();
                (lo, hi)
            })
            .collect();

        let found = u64::try_from(pairs.len()).unwrap_or(u64::MAX);
        if found > self.config.max_intervals {
            debug!(found, limit = self.config.max_intervals, "too many pairs");
            return Err(ParseError::too_many_intervals(
                found,
                self.config.max_intervals,
            ));
        }

        let mut values = Vec::with_capacity(pairs.len() * 2);
        for (lo_literal, hi_literal) in pairs {
            let lo = parse_number(lo_literal)?;
            let hi = parse_number(hi_literal)?;
            self.check_pair(lo, hi)?;
            values.push(lo);
            values.push(hi);
        }

        Ok(IntervalSequence::from_flat(values))
    }

    fn check_pair(&self, lo: u64, hi: u64) -> ParseResult<()> {
        let limit = self.config.max_bound;
        if lo > limit || hi > limit {
            let value = lo.max(hi);
            debug!(value, limit, "bound exceeded");
            return Err(ParseError::bound_exceeded(value, limit));
        }

        if lo >= hi {
            debug!(lo, hi, "pair is not strictly ordered");
            return Err(ParseError::ordering(lo, hi));
        }

        Ok(())
    }
}

fn parse_number(literal: &str) -> ParseResult<u64> {
    literal
        .parse::<u64>()
        .map_err(|err| ParseError::numeric_parse(literal, err))
}
