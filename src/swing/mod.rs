mod dots;
mod frame;
mod host;
mod labels;
mod list;
mod national;
mod projector;
mod state;

pub use dots::{Dot, dot_color, dot_position, dots};
pub use frame::{Needle, SwingometerFrame};
pub use host::{Refreshed, Swingometer};
pub use labels::{
    LABEL_HALF_WIDTH, OuterLabel, candidate_labels, filter_nearby_labels,
    increment_labels, majority_labels, outer_labels, zero_swing_label,
};
pub use list::{prior_winner, qualifying_districts, swing_list, total_votes, votes_for};
pub use national::{aggregate_votes, needle_value, share_changes, swing_between, swing_from_changes, vote_shares};
pub use projector::{
    LeadChange, SeatProjection, Side, lead_change, majority_of, seats_at_zero,
    swing_for_majority, swing_for_seats,
};
pub use state::{LabelIncrement, SwingState};
