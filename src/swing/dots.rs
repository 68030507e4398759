use std::hash::Hash;

use serde::Serialize;

use crate::swing::{SwingState, list::qualifying_tally};
use crate::types::{Color, CurrentResult, Party, PartyVotes};

/// Marker for one district on the swingometer scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dot {
    pub position: f64,
    pub color: Color,
    pub highlighted: bool,
}

/// Current standing of a district won by either focus party: `0.5 * (focus - comp) / total`.
/// This is the negation of the district's swing threshold for `focus`.
pub fn dot_position(votes: &PartyVotes, focus: &Party, comp: &Party) -> Option<f64> {
    qualifying_tally(votes, focus, comp)
        .map(|(focus, comp, total)| 0.5 * (focus as f64 - comp as f64) / total as f64)
}

/// Color of a district's dot from its current result.
#[inline]
pub fn dot_color(result: &CurrentResult) -> Color {
    result.party().map_or(Color::NO_RESULT, |party| party.color)
}

/// One dot per district won by a focus party, ordered by position
/// (then unhighlighted first, then color, so the order never depends on map iteration).
pub fn dots<D: Eq + Hash>(state: &SwingState<D>) -> Vec<Dot> {
    let focus = &state.focus;
    let mut dots = state.previous.iter()
        .filter_map(|(district, votes)| {
            let position = dot_position(votes, &focus.left, &focus.right)?;
            Some(Dot {
                position,
                color: dot_color(state.current_result(district)),
                highlighted: state.is_highlighted(district),
            })
        })
        .collect::<Vec<_>>();

    dots.sort_by(|a, b| {
        a.position.total_cmp(&b.position)
            .then(a.highlighted.cmp(&b.highlighted))
            .then(a.color.cmp(&b.color))
    });
    dots
}
