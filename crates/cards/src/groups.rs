use super::hand::Hand;
use super::rank::Rank;
use std::collections::BTreeMap;

/// Rank multiplicities for one hand: one `(rank, count)` entry per
/// distinct rank, ascending by wire value.
///
/// Computed once per hand and shared by the classifier and the tie-break
/// ranker, so the two can never disagree about how the ranks group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups(Vec<(Rank, u8)>);

impl From<&Hand> for Groups {
    fn from(hand: &Hand) -> Self {
        let mut counts = BTreeMap::new();
        for card in hand.iter() {
            *counts.entry(card.rank()).or_insert(0u8) += 1;
        }
        Self(counts.into_iter().collect())
    }
}

impl Groups {
    /// Number of distinct ranks in the hand.
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// Largest multiplicity across all groups.
    pub fn largest(&self) -> u8 {
        self.0.iter().map(|&(_, n)| n).max().unwrap_or(0)
    }

    /// Decisive rank among groups of exactly `size` cards: the highest
    /// such group's Ace-high value, or 0 when no group has that size.
    pub fn decisive_of_size(&self, size: u8) -> u8 {
        self.0
            .iter()
            .filter(|&&(_, n)| n == size)
            .map(|&(rank, _)| rank.high())
            .max()
            .unwrap_or(0)
    }

    /// Spread of the distinct wire values (max - min). Five distinct
    /// ranks spanning exactly 4 are consecutive.
    pub fn span(&self) -> u8 {
        match (self.0.first(), self.0.last()) {
            (Some(&(lo, _)), Some(&(hi, _))) => hi.value() - lo.value(),
            _ => 0,
        }
    }

    /// The Ace-high broken straight {1, 10, 11, 12, 13}, i.e. 10-J-Q-K-A.
    pub fn is_royal(&self) -> bool {
        self.0.iter().map(|&(rank, _)| rank.value()).eq([1, 10, 11, 12, 13])
    }
}
