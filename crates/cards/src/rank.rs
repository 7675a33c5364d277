use super::error::HandError;

/// A card rank in the service's numeric notation: 1 denotes Ace,
/// 11/12/13 denote Jack/Queen/King.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// Wire value, 1..=13.
    pub fn value(&self) -> u8 {
        *self as u8
    }
    /// Comparison value under the engine's Ace-high convention: Ace is
    /// worth 14, everything else its wire value.
    pub fn high(&self) -> u8 {
        match self {
            Rank::Ace => 14,
            _ => self.value(),
        }
    }
}

/// u8 injection, partial on [1, 13]
impl TryFrom<u8> for Rank {
    type Error = HandError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Rank::Ace),
            2 => Ok(Rank::Two),
            3 => Ok(Rank::Three),
            4 => Ok(Rank::Four),
            5 => Ok(Rank::Five),
            6 => Ok(Rank::Six),
            7 => Ok(Rank::Seven),
            8 => Ok(Rank::Eight),
            9 => Ok(Rank::Nine),
            10 => Ok(Rank::Ten),
            11 => Ok(Rank::Jack),
            12 => Ok(Rank::Queen),
            13 => Ok(Rank::King),
            _ => Err(HandError::InvalidCard),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
