//! Error types for the interval-merge library
//!
//! Every failure is a validation failure detected while parsing the input text.
//! Merging itself never fails.

use thiserror::Error;

/// Validation errors raised while turning input text into an interval sequence
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum ParseError {
    /// The text does not match the bracket-pair grammar; `input` holds the rejected text
    #[error("input format is invalid")]
    Format { input: String },

    /// More pairs than the configured limit
    #[error("no more than {limit} pairs are allowed, found {found}")]
    TooManyIntervals { found: u64, limit: u64 },

    /// A bound is larger than the configured maximum
    #[error("numbers cannot be bigger than {limit}, found {value}")]
    BoundExceeded { value: u64, limit: u64 },

    /// A pair whose lower bound is not strictly below its upper bound
    #[error("first number in the pair must be smaller than the second: [{lo},{hi}]")]
    Ordering { lo: u64, hi: u64 },

    /// A digit run that does not fit the integer type
    #[error("cannot represent {literal:?} as an integer: {reason}")]
    NumericParse { literal: String, reason: String },
}

impl ParseError {
    /// Create a format error for the rejected input
    pub fn format(input: impl Into<String>) -> Self {
        Self::Format {
            input: input.into(),
        }
    }

    /// Create a too-many-intervals error
    #[must_use]
    pub const fn too_many_intervals(found: u64, limit: u64) -> Self {
        Self::TooManyIntervals { found, limit }
    }

    /// Create a bound exceeded error
    #[must_use]
    pub const fn bound_exceeded(value: u64, limit: u64) -> Self {
        Self::BoundExceeded { value, limit }
    }

    /// Create an ordering error for the pair `[lo,hi]`
    #[must_use]
    pub const fn ordering(lo: u64, hi: u64) -> Self {
        Self::Ordering { lo, hi }
    }

    /// Create a numeric parse error
    pub fn numeric_parse(literal: impl Into<String>, reason: impl ToString) -> Self {
        Self::NumericParse {
            literal: literal.into(),
            reason: reason.to_string(),
        }
    }
}

macro_rules! impl_kind_predicates {
    ($($variant:ident),*) => {
        impl ParseError {
            paste::paste! {
                $(
                    #[must_use]
                    pub const fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self, Self::$variant { .. })
                    }
                )*
            }
        }
    };
}

impl_kind_predicates!(Format, TooManyIntervals, BoundExceeded, Ordering, NumericParse);

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_keeps_input_out_of_message() {
        let input = "x".repeat(10_000);
        let err = ParseError::format(input.clone());
        assert!(err.is_format());
        assert_eq!(err.to_string(), "input format is invalid");
        assert_eq!(err, ParseError::Format { input });
    }

    #[test]
    fn test_too_many_intervals_message() {
        let err = ParseError::too_many_intervals(21, 20);
        assert!(err.is_too_many_intervals());
        assert_eq!(err.to_string(), "no more than 20 pairs are allowed, found 21");
    }

    #[test]
    fn test_bound_exceeded_message() {
        let err = ParseError::bound_exceeded(10001, 10000);
        assert!(err.to_string().contains("10001"));
        assert!(!err.is_ordering());
    }

    #[test]
    fn test_ordering_message() {
        let err = ParseError::ordering(30, 25);
        assert!(err.is_ordering());
        assert!(err.to_string().contains("[30,25]"));
    }

    #[test]
    fn test_numeric_parse_from_parse_int_error() {
        let reason = "99999999999999999999".parse::<u64>().unwrap_err();
        let err = ParseError::numeric_parse("99999999999999999999", reason);
        assert!(err.is_numeric_parse());
        assert!(err.to_string().contains("99999999999999999999"));
    }
}
