//! National vote shares and the swing between two elections.

use std::collections::HashMap;

use crate::types::{FocusPair, Party, PartyVotes};

/// Sum per-party votes across districts.
pub fn aggregate_votes<'a>(districts: impl IntoIterator<Item = &'a PartyVotes>) -> PartyVotes {
    let mut totals = PartyVotes::new();
    for votes in districts {
        for (party, &count) in votes {
            *totals.entry(party.clone()).or_default() += count;
        }
    }
    totals
}

/// Vote share per party as a fraction of all votes cast; empty when no votes were cast.
pub fn vote_shares(votes: &PartyVotes) -> HashMap<Party, f64> {
    let total = votes.values().sum::<u64>();
    if total == 0 { return HashMap::new() }

    votes.iter()
        .map(|(party, &count)| (party.clone(), count as f64 / total as f64))
        .collect()
}

/// Change in vote share per party between two tallies.
/// Parties missing from either side count as a zero share there.
pub fn share_changes(prior: &PartyVotes, current: &PartyVotes) -> HashMap<Party, f64> {
    let prior = vote_shares(prior);
    let current = vote_shares(current);

    prior.keys().chain(current.keys())
        .map(|party| {
            let before = prior.get(party).copied().unwrap_or(0.0);
            let after = current.get(party).copied().unwrap_or(0.0);
            (party.clone(), after - before)
        })
        .collect()
}

/// Two-party swing from `from` to `to`: half the difference of their share changes.
pub fn swing_between(prior: &PartyVotes, current: &PartyVotes, from: &Party, to: &Party) -> f64 {
    swing_from_changes(&share_changes(prior, current), from, to)
}

/// Two-party swing from precomputed share changes; missing parties count as unchanged.
pub fn swing_from_changes(changes: &HashMap<Party, f64>, from: &Party, to: &Party) -> f64 {
    let change = |party: &Party| changes.get(party).copied().unwrap_or(0.0);
    0.5 * (change(to) - change(from))
}

/// Needle position: the swing from the left focus party to the right one.
#[inline]
pub fn needle_value(national_swing: &HashMap<Party, f64>, focus: &FocusPair) -> f64 {
    swing_from_changes(national_swing, &focus.left, &focus.right)
}
