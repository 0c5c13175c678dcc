#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

uniffi::setup_scaffolding!();

pub mod engine;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod models;
pub mod parser;

pub use engine::{MergeDriver, absorb_overlapping, extract_smallest};
pub use error::{ParseError, ParseResult};
pub use models::{Interval, IntervalSequence, format_intervals};
pub use parser::{IntervalParser, ValidationConfig, parse};

/// Merge `input` with the default limits and render the result
///
/// # Errors
///
/// Returns the validation failure if `input` is rejected
pub fn merge(input: &str) -> ParseResult<String> {
    MergeDriver::new().merge(input)
}
