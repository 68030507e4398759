//! Per-district swing thresholds.
//!
//! A threshold is the uniform swing at which the focus party would exactly
//! tie the comparison party in one district. Sorted ascending, the list is an
//! order statistic: its k-th smallest value is the smallest swing at which the
//! focus party holds at least k of the qualifying seats.

use crate::types::{FocusPair, Party, PartyVotes};

/// Sum of all party votes in a district.
#[inline]
pub fn total_votes(votes: &PartyVotes) -> u64 {
    votes.values().sum()
}

/// Votes for one party in a district, zero when the party did not stand.
#[inline]
pub fn votes_for(votes: &PartyVotes, party: &Party) -> u64 {
    votes.get(party).copied().unwrap_or(0)
}

/// Prior-election winner of a district: the party with the most votes.
/// Exact ties on the top count go to the alphabetically first abbreviation.
/// Returns `None` when the district recorded no votes.
pub fn prior_winner(votes: &PartyVotes) -> Option<&Party> {
    if total_votes(votes) == 0 { return None }

    votes.iter()
        .max_by(|(a, va), (b, vb)| va.cmp(vb).then_with(|| b.abbreviation.cmp(&a.abbreviation)))
        .map(|(party, _)| party)
}

/// Vote totals for a district won by one of the focus parties, as `(focus, comp, total)`.
/// `None` for districts with no votes or won by a third party.
pub(crate) fn qualifying_tally(votes: &PartyVotes, focus: &Party, comp: &Party) -> Option<(u64, u64, u64)> {
    let winner = prior_winner(votes)?;
    if winner != focus && winner != comp { return None }

    Some((votes_for(votes, focus), votes_for(votes, comp), total_votes(votes)))
}

/// Swing needed for `focus` to tie `comp`: `0.5 * (comp - focus) / total`.
/// Negative when `focus` already leads.
#[inline]
pub(crate) fn threshold(focus: u64, comp: u64, total: u64) -> f64 {
    0.5 * (comp as f64 - focus as f64) / total as f64
}

/// Sorted swing thresholds for `focus` against `comp` over every district
/// won by either party in the prior election.
pub fn swing_list<'a>(districts: impl IntoIterator<Item = &'a PartyVotes>, focus: &Party, comp: &Party) -> Vec<f64> {
    let mut list = districts.into_iter()
        .filter_map(|votes| qualifying_tally(votes, focus, comp))
        .map(|(focus, comp, total)| threshold(focus, comp, total))
        .collect::<Vec<_>>();

    list.sort_by(f64::total_cmp);
    list
}

/// Number of districts won by either focus party in the prior election.
pub fn qualifying_districts<'a>(districts: impl IntoIterator<Item = &'a PartyVotes>, focus: &FocusPair) -> usize {
    districts.into_iter()
        .filter(|votes| prior_winner(votes).is_some_and(|winner| focus.contains(winner)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn parties() -> (Party, Party, Party) {
        (
            Party::new("Alpha", "A", Color::rgb(200, 0, 0)),
            Party::new("Beta", "B", Color::rgb(0, 0, 200)),
            Party::new("Gamma", "C", Color::rgb(200, 200, 0)),
        )
    }

    fn tally(entries: &[(&Party, u64)]) -> PartyVotes {
        entries.iter().map(|&(party, votes)| (party.clone(), votes)).collect()
    }

    #[test]
    fn winner_is_strict_maximum() {
        let (a, b, c) = parties();
        let votes = tally(&[(&a, 10), (&b, 30), (&c, 20)]);
        assert_eq!(prior_winner(&votes), Some(&b));
    }

    #[test]
    fn winner_tie_goes_to_first_abbreviation() {
        let (a, b, c) = parties();
        let votes = tally(&[(&c, 50), (&b, 50), (&a, 10)]);
        assert_eq!(prior_winner(&votes), Some(&b));
    }

    #[test]
    fn winner_of_empty_district_is_none() {
        let (a, b, _) = parties();
        assert_eq!(prior_winner(&PartyVotes::new()), None);
        assert_eq!(prior_winner(&tally(&[(&a, 0), (&b, 0)])), None);
    }

    #[test]
    fn swing_list_is_sorted_thresholds() {
        let (a, b, _) = parties();
        let districts = vec![
            tally(&[(&a, 70), (&b, 30)]),
            tally(&[(&a, 40), (&b, 60)]),
            tally(&[(&a, 55), (&b, 45)]),
        ];

        let list = swing_list(&districts, &a, &b);
        assert_eq!(list, vec![-0.2, -0.05, 0.1]);
    }

    #[test]
    fn swing_list_excludes_third_party_and_empty_districts() {
        let (a, b, c) = parties();
        let districts = vec![
            tally(&[(&a, 60), (&b, 40)]),
            tally(&[(&a, 20), (&b, 30), (&c, 50)]),
            tally(&[(&a, 0), (&b, 0)]),
        ];

        assert_eq!(swing_list(&districts, &a, &b), vec![-0.1]);
        assert_eq!(qualifying_districts(&districts, &FocusPair::new(a, b)), 1);
    }

    #[test]
    fn threshold_uses_total_including_third_parties() {
        let (a, b, c) = parties();
        let districts = vec![tally(&[(&a, 50), (&b, 30), (&c, 20)])];
        assert_eq!(swing_list(&districts, &b, &a), vec![0.1]);
    }

    #[test]
    fn kth_value_is_swing_for_k_seats() {
        let (a, b, _) = parties();
        let districts = vec![
            tally(&[(&a, 60), (&b, 40)]),
            tally(&[(&a, 45), (&b, 55)]),
            tally(&[(&a, 30), (&b, 70)]),
        ];
        let list = swing_list(&districts, &a, &b);

        // At each threshold, A ties exactly one more district.
        for (k, &swing) in list.iter().enumerate() {
            let held = districts.iter()
                .filter(|votes| {
                    let share = |p: &Party| votes_for(votes, p) as f64 / total_votes(votes) as f64;
                    share(&a) + swing >= share(&b) - swing - 1e-12
                })
                .count();
            assert_eq!(held, k + 1);
        }
    }
}
