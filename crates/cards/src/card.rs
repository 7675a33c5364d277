use super::error::HandError;
use super::rank::Rank;
use super::suit::Suit;
use super::token::Token;

/// A playing card. Immutable once parsed; equality is by (suit, rank).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl From<(Suit, Rank)> for Card {
    fn from((suit, rank): (Suit, Rank)) -> Self {
        Self { suit, rank }
    }
}

/// Token conversion, partial: this is where suit/rank legality is decided.
impl TryFrom<&Token> for Card {
    type Error = HandError;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        Ok(Self {
            suit: Suit::try_from(token.suit())?,
            rank: Rank::try_from(token.rank())?,
        })
    }
}

/// str isomorphism, via Token
impl TryFrom<&str> for Card {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::try_from(&Token::from(s))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}
