use super::category::Category;
use super::groups::Groups;
use super::hand::Hand;
use super::rank::Rank;
use super::strength::Strength;

/// Classifies a validated hand and computes its decisive tie-break rank.
///
/// The rank grouping is computed once at construction and drives both
/// classification and tie-breaking; suit analysis only ever has to answer
/// "is this one suit" because a legal hand has no duplicate cards.
pub struct Evaluator {
    hand: Hand,
    groups: Groups,
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        let groups = Groups::from(&hand);
        Self { hand, groups }
    }
}

impl Evaluator {
    pub fn strength(&self) -> Strength {
        let category = self.category();
        Strength::from((category, self.decisive(category)))
    }

    /// Decision tree on the number of distinct ranks. With no repeated
    /// rank the hand is in the straight/flush family; otherwise the group
    /// shape alone decides.
    pub fn category(&self) -> Category {
        match self.groups.distinct() {
            5 => match (self.is_flush(), self.groups.is_royal(), self.groups.span() == 4) {
                (true, true, _) => Category::RoyalFlush,
                (true, false, true) => Category::StraightFlush,
                (true, false, false) => Category::Flush,
                (false, true, _) | (false, _, true) => Category::Straight,
                (false, false, false) => Category::HighCard,
            },
            4 => Category::OnePair,
            3 => match self.groups.largest() {
                3 => Category::ThreeOfAKind,
                _ => Category::TwoPair,
            },
            2 => match self.groups.largest() {
                4 => Category::FourOfAKind,
                _ => Category::FullHouse,
            },
            _ => unreachable!("validated hands span at least two ranks"),
        }
    }

    /// The single rank that orders hands of equal category, 0..=14.
    ///
    /// Pairs and bigger groups contribute their highest group's rank with
    /// Ace counted as 14. Straights take the top card, with the broken
    /// 10-J-Q-K-A sequence counting as Ace-high. Flushes and high cards
    /// take the top card with Ace always high. A royal flush needs no
    /// further tie-break, so no group applies and the rank is 0.
    pub fn decisive(&self, category: Category) -> u8 {
        match category {
            Category::OnePair | Category::TwoPair => self.groups.decisive_of_size(2),
            Category::ThreeOfAKind | Category::FullHouse => self.groups.decisive_of_size(3),
            Category::FourOfAKind => self.groups.decisive_of_size(4),
            Category::Straight | Category::StraightFlush => match self.groups.is_royal() {
                true => Rank::Ace.high(),
                false => self.highest(),
            },
            Category::Flush | Category::HighCard => self.highest_ace_high(),
            Category::RoyalFlush => 0,
        }
    }

    fn is_flush(&self) -> bool {
        let suit = self.hand.cards()[0].suit();
        self.hand.iter().all(|card| card.suit() == suit)
    }

    /// Numeric maximum of the five wire values; Ace stays 1 here.
    fn highest(&self) -> u8 {
        self.hand
            .iter()
            .map(|card| card.rank().value())
            .max()
            .unwrap_or(0)
    }

    /// Maximum under the Ace-high convention.
    fn highest_ace_high(&self) -> u8 {
        self.hand
            .iter()
            .map(|card| card.rank().high())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(text: &str) -> Category {
        Evaluator::from(Hand::try_from(text).unwrap()).category()
    }

    fn strength(text: &str) -> Strength {
        Strength::from(&Hand::try_from(text).unwrap())
    }

    #[test]
    fn high_card() {
        assert_eq!(category("s2, h5, d7, c9, s12"), Category::HighCard);
    }

    #[test]
    fn one_pair() {
        assert_eq!(category("s2, h2, d7, c9, s12"), Category::OnePair);
    }

    #[test]
    fn two_pair() {
        assert_eq!(category("s2, h2, d9, c9, s12"), Category::TwoPair);
    }

    #[test]
    fn three_oak() {
        assert_eq!(category("s2, h2, d2, c9, s12"), Category::ThreeOfAKind);
    }

    #[test]
    fn straight() {
        assert_eq!(category("s3, h4, d5, c6, s7"), Category::Straight);
    }

    #[test]
    fn broken_straight() {
        // 10-J-Q-K-A in mixed suits is a straight, not a royal flush
        assert_eq!(category("s1, h10, d11, c12, s13"), Category::Straight);
    }

    #[test]
    fn wheel_straight() {
        assert_eq!(category("s1, h2, d3, c4, s5"), Category::Straight);
    }

    #[test]
    fn flush() {
        assert_eq!(category("s2, s5, s7, s9, s12"), Category::Flush);
    }

    #[test]
    fn full_house() {
        assert_eq!(category("s2, h2, d2, c9, s9"), Category::FullHouse);
    }

    #[test]
    fn four_oak() {
        assert_eq!(category("s2, h2, d2, c2, s9"), Category::FourOfAKind);
    }

    #[test]
    fn straight_flush() {
        assert_eq!(category("s2, s3, s4, s5, s6"), Category::StraightFlush);
    }

    #[test]
    fn same_ranks_mixed_suits_is_only_a_straight() {
        assert_eq!(category("s2, s3, s4, s5, s6"), Category::StraightFlush);
        assert_eq!(category("s2, h3, d4, c5, s6"), Category::Straight);
    }

    #[test]
    fn royal_flush() {
        assert_eq!(category("s1, s10, s11, s12, s13"), Category::RoyalFlush);
    }

    #[test]
    fn near_royal_is_a_flush() {
        // one suit, ace high, but 9 breaks the sequence
        assert_eq!(category("s1, s9, s11, s12, s13"), Category::Flush);
    }

    #[test]
    fn ace_does_not_bridge_king_and_two() {
        // Q-K-A-2-3 is no straight in this engine
        assert_eq!(category("s12, h13, d1, c2, s3"), Category::HighCard);
    }

    #[test]
    fn pair_decisive_is_the_pair_rank() {
        assert_eq!(strength("s13, h13, d4, c7, s9").decisive(), 13);
    }

    #[test]
    fn ace_pair_decisive_outranks_king_pair() {
        let aces = strength("s1, h1, d4, c7, s9");
        let kings = strength("s13, h13, d4, c7, s9");
        assert_eq!(aces.decisive(), 14);
        assert_eq!(kings.decisive(), 13);
    }

    #[test]
    fn two_pair_decisive_is_the_higher_pair() {
        assert_eq!(strength("s4, h4, d9, c9, s12").decisive(), 9);
        assert_eq!(strength("s1, h1, d9, c9, s12").decisive(), 14);
    }

    #[test]
    fn full_house_decisive_is_the_triple() {
        assert_eq!(strength("s5, h5, d5, c9, s9").decisive(), 5);
    }

    #[test]
    fn four_oak_decisive_is_the_quad() {
        assert_eq!(strength("s2, h2, d2, c2, s9").decisive(), 2);
        assert_eq!(strength("s1, h1, d1, c1, s9").decisive(), 14);
    }

    #[test]
    fn straight_decisive_is_the_top_card() {
        assert_eq!(strength("s3, h4, d5, c6, s7").decisive(), 7);
    }

    #[test]
    fn wheel_decisive_counts_ace_low() {
        assert_eq!(strength("s1, h2, d3, c4, s5").decisive(), 5);
    }

    #[test]
    fn broken_straight_decisive_counts_ace_high() {
        assert_eq!(strength("s1, h10, d11, c12, s13").decisive(), 14);
    }

    #[test]
    fn flush_decisive_counts_ace_high() {
        assert_eq!(strength("s1, s9, s11, s12, s13").decisive(), 14);
        assert_eq!(strength("s2, s9, s11, s12, s13").decisive(), 13);
    }

    #[test]
    fn high_card_decisive_counts_ace_high() {
        assert_eq!(strength("s1, h5, d7, c9, s12").decisive(), 14);
    }

    #[test]
    fn royal_flush_needs_no_tie_break() {
        let royal = strength("s1, s10, s11, s12, s13");
        assert_eq!(royal.category(), Category::RoyalFlush);
        assert_eq!(royal.decisive(), 0);
    }

    #[test]
    fn score_ladder() {
        assert_eq!(strength("s2, h5, d7, c9, s12").score(), 1);
        assert_eq!(strength("s2, h2, d7, c9, s12").score(), 2);
        assert_eq!(strength("s2, h2, d9, c9, s12").score(), 3);
        assert_eq!(strength("s2, h2, d2, c9, s12").score(), 4);
        assert_eq!(strength("s3, h4, d5, c6, s7").score(), 5);
        assert_eq!(strength("s2, s5, s7, s9, s12").score(), 6);
        assert_eq!(strength("s2, h2, d2, c9, s9").score(), 7);
        assert_eq!(strength("s2, h2, d2, c2, s9").score(), 8);
        assert_eq!(strength("s2, s3, s4, s5, s6").score(), 9);
        assert_eq!(strength("s1, s10, s11, s12, s13").score(), 10);
    }
}
