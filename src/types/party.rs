use std::{collections::HashMap, sync::Arc};

use anyhow::{Result, ensure};
use serde::Serialize;

use super::color::{Color, golden_angle_color};

/// A party contesting the election.
/// Names are shared across every vote map, so keep them as `Arc<str>` rather than owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Party {
    pub name: Arc<str>,
    pub abbreviation: Arc<str>, // e.g., "LAB", "CON"
    pub color: Color,
}

impl Party {
    pub fn new(name: impl Into<Arc<str>>, abbreviation: impl Into<Arc<str>>, color: Color) -> Self {
        Self { name: name.into(), abbreviation: abbreviation.into(), color }
    }
}

/// Per-district vote tally: party -> votes.
pub type PartyVotes = HashMap<Party, u64>;

/// The ordered pair of parties a swingometer contrasts.
/// `left` gains seats moving left along the scale, `right` moving right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusPair {
    pub left: Party,
    pub right: Party,
}

impl FocusPair {
    pub fn new(left: Party, right: Party) -> Self { Self { left, right } }

    /// True if `party` is one of the two focus parties.
    #[inline]
    pub fn contains(&self, party: &Party) -> bool { *party == self.left || *party == self.right }
}

/// All parties known to an election, addressable by abbreviation.
#[derive(Debug, Clone, Default)]
pub struct PartyRegistry {
    parties: Vec<Party>,
    index: HashMap<Arc<str>, usize>,
}

impl PartyRegistry {
    pub fn new() -> Self { Self::default() }

    /// Register a party, assigning a fallback color when none is given.
    pub fn register(&mut self, name: &str, abbreviation: &str, color: Option<Color>) -> Result<&Party> {
        ensure!(!abbreviation.trim().is_empty(), "[types::party] Party '{name}' has an empty abbreviation");
        ensure!(!self.index.contains_key(abbreviation), "[types::party] Duplicate party abbreviation '{abbreviation}'");

        let color = color.unwrap_or_else(|| golden_angle_color(self.parties.len()));
        let party = Party::new(name, abbreviation, color);
        self.index.insert(party.abbreviation.clone(), self.parties.len());
        self.parties.push(party);

        Ok(&self.parties[self.parties.len() - 1])
    }

    /// Look up a party by abbreviation.
    #[inline]
    pub fn get(&self, abbreviation: &str) -> Option<&Party> {
        self.index.get(abbreviation).map(|&i| &self.parties[i])
    }

    #[inline] pub fn len(&self) -> usize { self.parties.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.parties.is_empty() }

    /// Parties in registration order.
    #[inline] pub fn iter(&self) -> impl Iterator<Item = &Party> { self.parties.iter() }
}
