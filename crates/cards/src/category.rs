/// The ten standard poker hand categories, weakest to strongest.
///
/// A genuine closed sum type: the classifier and scorer match on it
/// exhaustively, so an unrecognized category cannot exist. The `Display`
/// name is the category's identity in JSON responses and persistence;
/// the score from `u8::from` is only a derived comparison key.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

/// u8 injection: the category score, 1..=10
impl From<Category> for u8 {
    fn from(category: Category) -> u8 {
        match category {
            Category::HighCard => 1,
            Category::OnePair => 2,
            Category::TwoPair => 3,
            Category::ThreeOfAKind => 4,
            Category::Straight => 5,
            Category::Flush => 6,
            Category::FullHouse => 7,
            Category::FourOfAKind => 8,
            Category::StraightFlush => 9,
            Category::RoyalFlush => 10,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::HighCard => "HighCard",
                Category::OnePair => "OnePair",
                Category::TwoPair => "TwoPair",
                Category::ThreeOfAKind => "ThreeOfAKind",
                Category::Straight => "Straight",
                Category::Flush => "Flush",
                Category::FullHouse => "FullHouse",
                Category::FourOfAKind => "FourOfAKind",
                Category::StraightFlush => "StraightFlush",
                Category::RoyalFlush => "RoyalFlush",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    #[test]
    fn scores_cover_one_through_ten() {
        let scores = ALL.map(u8::from);
        assert_eq!(scores, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn score_agrees_with_declaration_order() {
        for pair in ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(u8::from(pair[0]) < u8::from(pair[1]));
        }
    }
}
