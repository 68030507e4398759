use super::party::Party;

/// The declared (or partially counted) outcome of a district in the current election.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CurrentResult {
    #[default]
    NoResult,
    Leading(Party),
    Elected(Party),
}

impl CurrentResult {
    /// Party currently ahead, if any votes have been reported.
    #[inline]
    pub fn party(&self) -> Option<&Party> {
        match self {
            CurrentResult::NoResult => None,
            CurrentResult::Leading(party) | CurrentResult::Elected(party) => Some(party),
        }
    }

    #[inline] pub fn is_elected(&self) -> bool { matches!(self, CurrentResult::Elected(_)) }
}
