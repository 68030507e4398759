//! Outer scale labels: seat counts reached at given swings.

use serde::Serialize;
use smallvec::SmallVec;

use crate::swing::{LabelIncrement, SeatProjection};
use crate::types::{Color, FocusPair};

/// Half-width of the exclusion zone around each placed label.
pub const LABEL_HALF_WIDTH: f64 = 0.005;

/// A seat-count label on the outer scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OuterLabel {
    pub position: f64,
    pub color: Color,
    pub text: String,
}

impl OuterLabel {
    pub fn new(position: f64, color: Color, seats: usize) -> Self {
        Self { position, color, text: seats.to_string() }
    }
}

/// Label at zero swing showing the side currently ahead.
pub fn zero_swing_label(projection: &SeatProjection, focus: &FocusPair) -> OuterLabel {
    let (color, seats) = match projection.left_seats.cmp(&projection.right_seats) {
        std::cmp::Ordering::Greater => (focus.left.color, projection.left_seats),
        std::cmp::Ordering::Less => (focus.right.color, projection.right_seats),
        std::cmp::Ordering::Equal => (Color::NEUTRAL, projection.left_seats),
    };
    OuterLabel::new(0.0, color, seats)
}

/// Majority labels for both sides.
/// When both land on the same position, only the label on the side of the scale
/// that position lies on is kept; both are dropped at exactly zero.
pub fn majority_labels(projection: &SeatProjection, focus: &FocusPair) -> SmallVec<[OuterLabel; 2]> {
    let left = -projection.left_to_win;
    let right = projection.right_to_win;

    let mut labels = SmallVec::new();
    if left != right || left < 0.0 {
        labels.push(OuterLabel::new(left, focus.left.color, projection.majority));
    }
    if left != right || right > 0.0 {
        labels.push(OuterLabel::new(right, focus.right.color, projection.majority));
    }
    labels
}

/// Seat-count labels every `increment` seats beyond the current midpoint.
pub fn increment_labels(projection: &SeatProjection, focus: &FocusPair, increment: LabelIncrement) -> Vec<OuterLabel> {
    let Some(step) = increment.step() else { return Vec::new() };

    let midpoint = projection.midpoint();
    (0..=projection.qualifying).step_by(step)
        .filter(|&seats| seats > midpoint)
        .flat_map(|seats| {
            let left = projection.left_list.get(seats - 1)
                .map(|&swing| OuterLabel::new(-swing, focus.left.color, seats));
            let right = projection.right_list.get(seats - 1)
                .map(|&swing| OuterLabel::new(swing, focus.right.color, seats));
            left.into_iter().chain(right)
        })
        .collect()
}

/// Every candidate label in priority order, before filtering.
pub fn candidate_labels(projection: &SeatProjection, focus: &FocusPair, increment: LabelIncrement) -> Vec<OuterLabel> {
    let mut labels = vec![zero_swing_label(projection, focus)];
    labels.extend(majority_labels(projection, focus));
    labels.extend(projection.lead_change.as_ref()
        .map(|change| OuterLabel::new(change.position, change.color, change.seats)));
    labels.extend(increment_labels(projection, focus, increment));
    labels
}

/// Drop labels whose exclusion zone overlaps one already kept.
/// Earlier labels always win; labels at non-finite positions are never kept.
pub fn filter_nearby_labels(labels: impl IntoIterator<Item = OuterLabel>) -> Vec<OuterLabel> {
    let mut kept: Vec<OuterLabel> = Vec::new();
    for label in labels {
        if !label.position.is_finite() {
            tracing::trace!(position = label.position, text = %label.text, "[swing::labels] dropping unreachable label");
            continue;
        }
        let collides = kept.iter()
            .any(|other| (other.position - label.position).abs() < 2.0 * LABEL_HALF_WIDTH);
        if collides {
            tracing::trace!(position = label.position, text = %label.text, "[swing::labels] dropping crowded label");
            continue;
        }
        kept.push(label);
    }
    kept
}

/// Placed outer labels for a projection.
pub fn outer_labels(projection: &SeatProjection, focus: &FocusPair, increment: LabelIncrement) -> Vec<OuterLabel> {
    filter_nearby_labels(candidate_labels(projection, focus, increment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swing::LeadChange;
    use crate::swing::Side;
    use crate::types::Party;
    use proptest::prelude::*;

    fn pair() -> FocusPair {
        FocusPair::new(
            Party::new("Alpha", "A", Color::rgb(200, 0, 0)),
            Party::new("Beta", "B", Color::rgb(0, 0, 200)),
        )
    }

    fn projection(left_list: Vec<f64>, right_list: Vec<f64>, qualifying: usize) -> SeatProjection {
        let majority = qualifying / 2 + 1;
        let left_seats = left_list.iter().filter(|x| **x < 0.0).count();
        let right_seats = right_list.iter().filter(|x| **x < 0.0).count();
        SeatProjection {
            left_to_win: left_list.get(majority - 1).copied().unwrap_or(f64::INFINITY),
            right_to_win: right_list.get(majority - 1).copied().unwrap_or(f64::INFINITY),
            lead_change: None,
            left_list,
            right_list,
            qualifying,
            majority,
            left_seats,
            right_seats,
        }
    }

    fn positions(labels: &[OuterLabel]) -> Vec<f64> {
        labels.iter().map(|label| label.position).collect()
    }

    #[test]
    fn zero_label_follows_leader() {
        let focus = pair();
        let ahead = projection(vec![-0.1, -0.05, 0.2], vec![-0.2, 0.05, 0.1], 3);
        assert_eq!(zero_swing_label(&ahead, &focus), OuterLabel::new(0.0, focus.left.color, 2));

        let level = projection(vec![-0.1, 0.2], vec![-0.2, 0.1], 2);
        assert_eq!(zero_swing_label(&level, &focus), OuterLabel::new(0.0, Color::NEUTRAL, 1));
    }

    #[test]
    fn majority_labels_keep_both_when_apart() {
        let focus = pair();
        let mut p = projection(vec![], vec![], 4);
        p.majority = 3;
        p.left_to_win = 0.02;
        p.right_to_win = 0.04;

        let labels = majority_labels(&p, &focus);
        assert_eq!(positions(&labels), vec![-0.02, 0.04]);
        assert!(labels.iter().all(|label| label.text == "3"));
    }

    #[test]
    fn majority_labels_coincide_on_right() {
        let focus = pair();
        let mut p = projection(vec![], vec![], 5);
        p.left_to_win = -0.05;
        p.right_to_win = 0.05;

        let labels = majority_labels(&p, &focus);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].color, focus.right.color);
    }

    #[test]
    fn majority_labels_coincide_on_left() {
        let focus = pair();
        let mut p = projection(vec![], vec![], 5);
        p.left_to_win = 0.05;
        p.right_to_win = -0.05;

        let labels = majority_labels(&p, &focus);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].color, focus.left.color);
    }

    #[test]
    fn majority_labels_coincide_at_zero() {
        let focus = pair();
        let mut p = projection(vec![], vec![], 5);
        p.left_to_win = 0.0;
        p.right_to_win = 0.0;
        assert!(majority_labels(&p, &focus).is_empty());
    }

    #[test]
    fn increment_labels_skip_midpoint_and_out_of_range() {
        let focus = pair();
        let p = projection(vec![-0.1, -0.1, -0.05, 0.02, 0.2], vec![-0.2, -0.02, 0.05, 0.1], 5);
        // left_seats = 3, right_seats = 2, midpoint = 2
        let labels = increment_labels(&p, &focus, LabelIncrement::from(1));
        let texts = labels.iter().map(|l| l.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, vec!["3", "3", "4", "4", "5"]);
        assert_eq!(positions(&labels), vec![0.05, 0.05, -0.02, 0.1, -0.2]);
    }

    #[test]
    fn increment_labels_disabled() {
        let p = projection(vec![-0.1, 0.2], vec![-0.2, 0.1], 2);
        assert!(increment_labels(&p, &pair(), LabelIncrement::Disabled).is_empty());
    }

    #[test]
    fn increment_step_skips_seat_counts() {
        let focus = pair();
        let p = projection(vec![0.01, 0.02, 0.03, 0.04], vec![-0.04, -0.03, -0.02, -0.01], 4);
        // midpoint = 2, step 3 visits 0 and 3
        let labels = increment_labels(&p, &focus, LabelIncrement::from(3));
        assert_eq!(positions(&labels), vec![-0.03, -0.02]);
    }

    #[test]
    fn filter_keeps_first_of_colliding_labels() {
        let labels = vec![
            OuterLabel::new(0.0, Color::BLACK, 1),
            OuterLabel::new(0.009, Color::BLACK, 2),
            OuterLabel::new(-0.004, Color::BLACK, 3),
            OuterLabel::new(0.01, Color::BLACK, 4),
            OuterLabel::new(0.0195, Color::BLACK, 5),
        ];
        let kept = filter_nearby_labels(labels);
        let texts = kept.iter().map(|l| l.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, vec!["1", "4"]);
    }

    #[test]
    fn filter_drops_infinite_positions() {
        let labels = vec![
            OuterLabel::new(f64::NEG_INFINITY, Color::BLACK, 1),
            OuterLabel::new(f64::INFINITY, Color::BLACK, 1),
            OuterLabel::new(0.3, Color::BLACK, 2),
        ];
        assert_eq!(positions(&filter_nearby_labels(labels)), vec![0.3]);
    }

    #[test]
    fn lead_change_label_loses_to_majority_label() {
        let focus = pair();
        let mut p = projection(vec![-0.1, -0.1, -0.05, 0.02, 0.2], vec![-0.2, -0.02, 0.05, 0.1, 0.1], 5);
        p.lead_change = Some(LeadChange { position: 0.05, gaining: Side::Right, seats: 3, color: focus.right.color });

        let candidates = candidate_labels(&p, &focus, LabelIncrement::Disabled);
        assert_eq!(candidates.len(), 3);

        let labels = outer_labels(&p, &focus, LabelIncrement::Disabled);
        assert_eq!(positions(&labels), vec![0.0, 0.05]);
        assert_eq!(labels[1].color, focus.right.color);
    }

    #[test]
    fn empty_projection_has_only_zero_label() {
        let focus = pair();
        let p = projection(vec![], vec![], 0);
        let labels = outer_labels(&p, &focus, LabelIncrement::from(1));
        assert_eq!(labels, vec![OuterLabel::new(0.0, Color::NEUTRAL, 0)]);
    }

    proptest! {
        #[test]
        fn prop_filtered_labels_are_separated(positions in prop::collection::vec(-0.3f64..0.3, 0..60)) {
            let labels = positions.iter().map(|&p| OuterLabel::new(p, Color::BLACK, 0));
            let kept = filter_nearby_labels(labels);
            for (i, a) in kept.iter().enumerate() {
                for b in &kept[i + 1..] {
                    prop_assert!((a.position - b.position).abs() >= 2.0 * LABEL_HALF_WIDTH);
                }
            }
        }

        #[test]
        fn prop_first_label_always_survives(positions in prop::collection::vec(-0.3f64..0.3, 1..60)) {
            let labels = positions.iter().map(|&p| OuterLabel::new(p, Color::BLACK, 0)).collect::<Vec<_>>();
            let kept = filter_nearby_labels(labels.clone());
            prop_assert_eq!(&kept[0], &labels[0]);
        }
    }
}
