//! Parsing and validation of bracket-pair interval lists
//!
//! The accepted grammar is one or more `[<digits>,<digits>]` tokens, each
//! optionally followed by a single space, with nothing else in the string.

pub mod config;
pub mod validator;

pub use config::{DEFAULT_MAX_BOUND, DEFAULT_MAX_INTERVALS, ValidationConfig};
pub use validator::IntervalParser;

use crate::{error::ParseResult, models::IntervalSequence};

/// Parse `text` with the default limits
///
/// # Errors
///
/// Returns the first validation failure found in the input
pub fn parse(text: &str) -> ParseResult<IntervalSequence> {
    IntervalParser::new().parse(text)
}
