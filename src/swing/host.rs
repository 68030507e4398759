//! Change-driven recomputation over successive input snapshots.

use std::hash::Hash;

use crate::swing::{Needle, SeatProjection, SwingState, SwingometerFrame, dots, outer_labels};

/// Which outputs were recomputed by the latest update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Refreshed {
    pub needle: bool,
    pub dots: bool,
    /// Outer labels and the left/right to-win thresholds.
    pub labels: bool,
}

impl Refreshed {
    const ALL: Refreshed = Refreshed { needle: true, dots: true, labels: true };

    #[inline] pub fn any(&self) -> bool { self.needle || self.dots || self.labels }
}

/// Holds the latest snapshot and frame, recomputing only outputs whose inputs changed.
/// Every refreshed output is derived from the snapshot passed to the same `update` call.
#[derive(Debug, Clone)]
pub struct Swingometer<D: Eq + Hash> {
    state: Option<SwingState<D>>,
    frame: Option<SwingometerFrame>,
}

impl<D: Eq + Hash> Default for Swingometer<D> {
    fn default() -> Self { Self { state: None, frame: None } }
}

impl<D: Eq + Hash> Swingometer<D> {
    pub fn new() -> Self { Self::default() }

    /// Latest frame, `None` before the first update.
    #[inline] pub fn frame(&self) -> Option<&SwingometerFrame> { self.frame.as_ref() }

    /// Latest snapshot, `None` before the first update.
    #[inline] pub fn state(&self) -> Option<&SwingState<D>> { self.state.as_ref() }

    /// Replace the input snapshot and recompute the affected outputs.
    pub fn update(&mut self, state: SwingState<D>) -> Refreshed {
        let (Some(previous), Some(frame)) = (self.state.as_ref(), self.frame.as_mut()) else {
            self.frame = Some(SwingometerFrame::compute(&state));
            self.state = Some(state);
            return Refreshed::ALL;
        };

        let projection_inputs = previous.previous != state.previous
            || previous.focus != state.focus
            || previous.seat_filter != state.seat_filter
            || previous.label_increment != state.label_increment;

        let refreshed = Refreshed {
            needle: previous.focus != state.focus || previous.national_swing != state.national_swing,
            dots: projection_inputs || previous.current != state.current,
            labels: projection_inputs,
        };

        if refreshed.labels {
            let projection = SeatProjection::compute(&state);
            frame.labels = outer_labels(&projection, &state.focus, state.label_increment);
            frame.left_to_win = projection.left_to_win;
            frame.right_to_win = projection.right_to_win;
        }
        if refreshed.dots {
            frame.dots = dots(&state);
        }
        if refreshed.needle {
            frame.needle = Needle::compute(&state.national_swing, &state.focus);
        }

        tracing::debug!(?refreshed, "[swing::host] applied snapshot");
        self.state = Some(state);
        refreshed
    }
}
