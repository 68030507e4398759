use std::{collections::{HashMap, HashSet}, hash::Hash, num::NonZeroUsize};

use crate::types::{CurrentResult, FocusPair, Party, PartyVotes};

/// Spacing of the seat-count labels along the outer scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LabelIncrement {
    #[default]
    Disabled,
    Every(NonZeroUsize),
}

impl LabelIncrement {
    /// Step between labelled seat counts, or `None` when disabled.
    #[inline]
    pub fn step(&self) -> Option<usize> {
        match self {
            LabelIncrement::Disabled => None,
            LabelIncrement::Every(n) => Some(n.get()),
        }
    }
}

impl From<usize> for LabelIncrement {
    /// Zero disables increment labels.
    fn from(step: usize) -> Self {
        NonZeroUsize::new(step).map_or(LabelIncrement::Disabled, LabelIncrement::Every)
    }
}

/// Immutable snapshot of every input the swingometer reads.
/// `D` identifies a district and is never interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct SwingState<D: Eq + Hash> {
    /// Prior-election vote tallies per district.
    pub previous: HashMap<D, PartyVotes>,
    /// Current-election results; districts absent here have no result.
    pub current: HashMap<D, CurrentResult>,
    pub focus: FocusPair,
    /// National change in vote share per party (fractions, not percentages).
    pub national_swing: HashMap<Party, f64>,
    /// Districts to highlight; `None` highlights every district.
    pub seat_filter: Option<HashSet<D>>,
    pub label_increment: LabelIncrement,
}

impl<D: Eq + Hash> SwingState<D> {
    /// Snapshot with no current results, no national swing, no filter and no increment labels.
    pub fn new(previous: HashMap<D, PartyVotes>, focus: FocusPair) -> Self {
        Self {
            previous,
            current: HashMap::new(),
            focus,
            national_swing: HashMap::new(),
            seat_filter: None,
            label_increment: LabelIncrement::Disabled,
        }
    }

    pub fn with_current(mut self, current: HashMap<D, CurrentResult>) -> Self {
        self.current = current;
        self
    }

    pub fn with_national_swing(mut self, national_swing: HashMap<Party, f64>) -> Self {
        self.national_swing = national_swing;
        self
    }

    pub fn with_seat_filter(mut self, seat_filter: Option<HashSet<D>>) -> Self {
        self.seat_filter = seat_filter;
        self
    }

    pub fn with_label_increment(mut self, label_increment: impl Into<LabelIncrement>) -> Self {
        self.label_increment = label_increment.into();
        self
    }

    /// Current result for a district, `NoResult` when none has been reported.
    #[inline]
    pub fn current_result(&self, district: &D) -> &CurrentResult {
        static NO_RESULT: CurrentResult = CurrentResult::NoResult;
        self.current.get(district).unwrap_or(&NO_RESULT)
    }

    /// Whether a district is highlighted by the seat filter.
    #[inline]
    pub fn is_highlighted(&self, district: &D) -> bool {
        self.seat_filter.as_ref().is_none_or(|filter| filter.contains(district))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn pair() -> FocusPair {
        FocusPair::new(Party::new("A", "A", Color::BLACK), Party::new("B", "B", Color::BLACK))
    }

    #[test]
    fn label_increment_from_usize() {
        assert_eq!(LabelIncrement::from(0), LabelIncrement::Disabled);
        assert_eq!(LabelIncrement::from(5).step(), Some(5));
        assert_eq!(LabelIncrement::Disabled.step(), None);
    }

    #[test]
    fn missing_current_result_is_no_result() {
        let state = SwingState::<&str>::new(HashMap::new(), pair());
        assert_eq!(state.current_result(&"nowhere"), &CurrentResult::NoResult);
    }

    #[test]
    fn no_filter_highlights_everything() {
        let state = SwingState::<&str>::new(HashMap::new(), pair());
        assert!(state.is_highlighted(&"anywhere"));

        let state = state.with_seat_filter(Some(HashSet::from(["here"])));
        assert!(state.is_highlighted(&"here"));
        assert!(!state.is_highlighted(&"there"));
    }
}
