//! IO module for reading election inputs and writing swingometer frames.
//!
//! # Format Modules
//!
//! - `csv` - previous-election tallies and current results
//! - `json` - party definitions and frame export
//! - `text` - seat filters, one district id per line
//!
//! The projection itself never touches the filesystem; these loaders only
//! build the snapshots it consumes.

mod csv;
mod json;
mod text;

pub use csv::{current_results_from_str, previous_results_from_str, read_current_results, read_previous_results};
pub use json::{parties_from_str, read_parties, write_frame, write_frame_to_file};
pub use text::{read_seat_filter, seat_filter_from_str};
