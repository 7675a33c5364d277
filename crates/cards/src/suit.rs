use super::error::HandError;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

/// str isomorphism
///
/// The canonical symbol set is {s, h, d, c}. Anything else, including the
/// stray `k` seen in some historical payloads, is an invalid card.
impl TryFrom<&str> for Suit {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "c" => Ok(Suit::Club),
            "d" => Ok(Suit::Diamond),
            "h" => Ok(Suit::Heart),
            "s" => Ok(Suit::Spade),
            _ => Err(HandError::InvalidCard),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for symbol in ["c", "d", "h", "s"] {
            let suit = Suit::try_from(symbol).unwrap();
            assert_eq!(suit.to_string(), symbol);
        }
    }

    #[test]
    fn illegal_symbols() {
        assert_eq!(Suit::try_from("k"), Err(HandError::InvalidCard));
        assert_eq!(Suit::try_from("x"), Err(HandError::InvalidCard));
        assert_eq!(Suit::try_from(""), Err(HandError::InvalidCard));
    }
}
