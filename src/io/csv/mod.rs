//! CSV format reading operations.

mod read;

pub use read::{current_results_from_str, previous_results_from_str, read_current_results, read_previous_results};
