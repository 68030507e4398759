use std::{collections::HashMap, hash::Hash};

use serde::Serialize;

use crate::swing::{Dot, OuterLabel, SeatProjection, SwingState, dots, national::needle_value, outer_labels};
use crate::types::{Color, FocusPair, Party};

/// Needle colors and position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Needle {
    pub left_color: Color,
    pub right_color: Color,
    /// Swing from the left party to the right party; positive points right.
    pub value: f64,
}

impl Needle {
    pub fn compute(national_swing: &HashMap<Party, f64>, focus: &FocusPair) -> Self {
        Self {
            left_color: focus.left.color,
            right_color: focus.right.color,
            value: needle_value(national_swing, focus),
        }
    }
}

/// Everything the swingometer widget renders, derived from one snapshot.
/// Unreachable swings are `+inf` and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwingometerFrame {
    pub needle: Needle,
    pub dots: Vec<Dot>,
    pub labels: Vec<OuterLabel>,
    pub left_to_win: f64,
    pub right_to_win: f64,
}

impl SwingometerFrame {
    /// Recompute every output from scratch.
    pub fn compute<D: Eq + Hash>(state: &SwingState<D>) -> Self {
        let projection = SeatProjection::compute(state);
        Self::from_projection(state, &projection)
    }

    pub(crate) fn from_projection<D: Eq + Hash>(state: &SwingState<D>, projection: &SeatProjection) -> Self {
        let frame = Self {
            needle: Needle::compute(&state.national_swing, &state.focus),
            dots: dots(state),
            labels: outer_labels(projection, &state.focus, state.label_increment),
            left_to_win: projection.left_to_win,
            right_to_win: projection.right_to_win,
        };

        tracing::debug!(
            dots = frame.dots.len(),
            labels = frame.labels.len(),
            needle = frame.needle.value,
            "[swing::frame] computed swingometer frame"
        );

        frame
    }
}
