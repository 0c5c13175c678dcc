//! Merge engine: smallest-interval extraction, single-sweep absorption and the
//! driver loop that repeats both until the working sequence is empty.

pub mod driver;
pub mod extractor;
pub mod merger;

pub use driver::MergeDriver;
pub use extractor::extract_smallest;
pub use merger::absorb_overlapping;
