//! `UniFFI` bindings for the merge engine
//!
//! Exposes the text and structured merge entry points to other platforms
//! (Kotlin, Swift, Python, etc.). Errors cross the boundary as `ParseError`.
#![allow(clippy::needless_pass_by_value)]

use crate::{
    engine::MergeDriver,
    error::ParseError,
    models::Interval,
    parser::ValidationConfig,
};

/// Merge `input` with the default limits and return the rendered result
///
/// # Errors
///
/// Returns the validation failure if `input` is rejected
#[uniffi::export]
pub fn merge_text(input: String) -> Result<String, ParseError> {
    MergeDriver::new().merge(&input)
}

/// Merge `input` with custom limits and return the intervals in finalization order
///
/// # Errors
///
/// Returns the validation failure if `input` is rejected
#[uniffi::export]
pub fn merge_text_with_config(
    input: String,
    config: ValidationConfig,
) -> Result<Vec<Interval>, ParseError> {
    MergeDriver::with_config(config).run(&input)
}

/// The limits used by `merge_text`
#[uniffi::export]
#[must_use]
pub fn default_validation_config() -> ValidationConfig {
    ValidationConfig::default()
}
