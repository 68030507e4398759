#![doc = "Swingometer public API"]
mod io;
mod swing;
mod types;

#[doc(inline)]
pub use types::{Color, CurrentResult, FocusPair, Party, PartyRegistry, PartyVotes};

#[doc(inline)]
pub use swing::*;

#[doc(inline)]
pub use io::{
    current_results_from_str, parties_from_str, previous_results_from_str, read_current_results,
    read_parties, read_previous_results, read_seat_filter, seat_filter_from_str, write_frame,
    write_frame_to_file,
};
