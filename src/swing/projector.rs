use std::hash::Hash;

use serde::Serialize;

use crate::swing::{SwingState, list::{qualifying_districts, swing_list}};
use crate::types::{Color, FocusPair};

/// Side of the swingometer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// The point at which the trailing side takes the seat lead (or draws level).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadChange {
    /// Position on the shared scale; left-side swings are negated.
    pub position: f64,
    /// Side gaining seats as the needle reaches `position`.
    pub gaining: Side,
    /// Seats the gaining side holds at `position`.
    pub seats: usize,
    pub color: Color,
}

/// Seat-count order statistics for one focus pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatProjection {
    /// Sorted thresholds with the left party as focus.
    pub left_list: Vec<f64>,
    /// Sorted thresholds with the right party as focus.
    pub right_list: Vec<f64>,
    /// Districts won by either focus party in the prior election.
    pub qualifying: usize,
    pub majority: usize,
    pub left_seats: usize,
    pub right_seats: usize,
    /// Swing the left party needs for a majority (`+inf` if unreachable).
    pub left_to_win: f64,
    /// Swing the right party needs for a majority (`+inf` if unreachable).
    pub right_to_win: f64,
    pub lead_change: Option<LeadChange>,
}

/// Seats held without any swing: thresholds strictly below zero.
#[inline]
pub fn seats_at_zero(list: &[f64]) -> usize {
    list.iter().filter(|&&swing| swing < 0.0).count()
}

/// Smallest swing giving `seats` seats, `+inf` when the list is too short.
#[inline]
pub fn swing_for_seats(list: &[f64], seats: usize) -> f64 {
    seats.checked_sub(1)
        .and_then(|i| list.get(i))
        .copied()
        .unwrap_or(f64::INFINITY)
}

/// Minimum swing for one side to win `majority` of the qualifying seats.
#[inline]
pub fn swing_for_majority(list: &[f64], majority: usize) -> f64 {
    swing_for_seats(list, majority)
}

/// Majority of `qualifying` seats: more than half.
#[inline]
pub fn majority_of(qualifying: usize) -> usize { qualifying / 2 + 1 }

/// Where the currently trailing side catches up, or `None` when the seat counts are level.
/// The color is black when the catch-up point is a tie (even seat total),
/// otherwise the gaining party's color.
pub fn lead_change(left_seats: usize, right_seats: usize, left_list: &[f64], right_list: &[f64], focus: &FocusPair) -> Option<LeadChange> {
    if left_seats == right_seats { return None }

    let total = left_seats + right_seats;
    let seats = total.div_ceil(2);

    let (gaining, position, party_color) = if left_seats < right_seats {
        (Side::Left, -swing_for_seats(left_list, seats), focus.left.color)
    } else {
        (Side::Right, swing_for_seats(right_list, seats), focus.right.color)
    };

    let color = if total % 2 == 0 { Color::BLACK } else { party_color };

    Some(LeadChange { position, gaining, seats, color })
}

impl SeatProjection {
    /// Project seat counts for the state's focus pair from prior results.
    pub fn compute<D: Eq + Hash>(state: &SwingState<D>) -> Self {
        let focus = &state.focus;
        let left_list = swing_list(state.previous.values(), &focus.left, &focus.right);
        let right_list = swing_list(state.previous.values(), &focus.right, &focus.left);
        let qualifying = qualifying_districts(state.previous.values(), focus);
        let majority = majority_of(qualifying);

        let left_seats = seats_at_zero(&left_list);
        let right_seats = seats_at_zero(&right_list);

        let projection = Self {
            left_to_win: swing_for_majority(&left_list, majority),
            right_to_win: swing_for_majority(&right_list, majority),
            lead_change: lead_change(left_seats, right_seats, &left_list, &right_list, focus),
            left_list,
            right_list,
            qualifying,
            majority,
            left_seats,
            right_seats,
        };

        tracing::debug!(
            left = %focus.left.abbreviation,
            right = %focus.right.abbreviation,
            qualifying,
            majority,
            left_seats,
            right_seats,
            left_to_win = projection.left_to_win,
            right_to_win = projection.right_to_win,
            "[swing::projector] projected seats"
        );

        projection
    }

    /// Midpoint of the seats currently held by both sides (integer division).
    #[inline] pub fn midpoint(&self) -> usize { (self.left_seats + self.right_seats) / 2 }
}
