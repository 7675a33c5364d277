use super::card::Card;
use super::error::HandError;
use super::token::Token;

/// Exactly five cards, kept in submitted order.
///
/// Constructing a `Hand` from text is the validation step: the result is
/// either a legal hand or exactly one [`HandError`], never both. Illegal
/// states are unrepresentable past this point, so the classifier never
/// has to re-check what the validator already enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; 5]);

impl Hand {
    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }
}

/// str conversion: split on the literal `", "` delimiter, then validate.
///
/// Error precedence, first match wins:
/// 1. `InvalidHandLength` — not five tokens, or any empty suit
/// 2. `InvalidSameCards`  — two identical tokens
/// 3. `InvalidCard`       — unrecognized suit symbol or rank outside 1..=13
/// 4. `InvalidSameRank`   — all five cards share one rank
impl TryFrom<&str> for Hand {
    type Error = HandError;
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let tokens = text.split(", ").map(Token::from).collect::<Vec<_>>();
        if tokens.len() != 5 || tokens.iter().any(|t| t.suit().is_empty()) {
            return Err(HandError::InvalidHandLength);
        }
        if (1..tokens.len()).any(|i| tokens[..i].contains(&tokens[i])) {
            return Err(HandError::InvalidSameCards);
        }
        let cards = tokens
            .iter()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let cards = <[Card; 5]>::try_from(cards).map_err(|_| HandError::InvalidHandLength)?;
        if cards.iter().all(|c| c.rank() == cards[0].rank()) {
            return Err(HandError::InvalidSameRank);
        }
        Ok(Self(cards))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, card) in self.iter().enumerate() {
            match i {
                0 => write!(f, "{}", card)?,
                _ => write!(f, ", {}", card)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        let text = "s1, h10, d11, c12, s13";
        let hand = Hand::try_from(text).unwrap();
        assert_eq!(hand.to_string(), text);
    }

    #[test]
    fn order_is_preserved() {
        let hand = Hand::try_from("c12, s1, h10, s13, d11").unwrap();
        assert_eq!(hand.cards()[0], Card::try_from("c12").unwrap());
        assert_eq!(hand.cards()[4], Card::try_from("d11").unwrap());
    }

    #[test]
    fn too_few_cards() {
        assert_eq!(
            Hand::try_from("s1, s2, s3, s4"),
            Err(HandError::InvalidHandLength)
        );
    }

    #[test]
    fn too_many_cards() {
        assert_eq!(
            Hand::try_from("s1, s2, s3, s4, s5, s6"),
            Err(HandError::InvalidHandLength)
        );
    }

    #[test]
    fn empty_token() {
        assert_eq!(
            Hand::try_from("s1, , s3, s4, s5"),
            Err(HandError::InvalidHandLength)
        );
    }

    #[test]
    fn empty_text() {
        assert_eq!(Hand::try_from(""), Err(HandError::InvalidHandLength));
    }

    #[test]
    fn duplicate_card() {
        assert_eq!(
            Hand::try_from("s5, s5, h2, h3, h4"),
            Err(HandError::InvalidSameCards)
        );
    }

    #[test]
    fn unrecognized_suit() {
        assert_eq!(
            Hand::try_from("k5, s6, h2, h3, h4"),
            Err(HandError::InvalidCard)
        );
    }

    #[test]
    fn rank_out_of_range() {
        assert_eq!(
            Hand::try_from("s14, s6, h2, h3, h4"),
            Err(HandError::InvalidCard)
        );
        assert_eq!(
            Hand::try_from("s0, s6, h2, h3, h4"),
            Err(HandError::InvalidCard)
        );
    }

    #[test]
    fn duplicates_reported_before_invalid_cards() {
        // both defects present; the duplicate wins by precedence
        assert_eq!(
            Hand::try_from("x9, x9, h2, h3, h4"),
            Err(HandError::InvalidSameCards)
        );
    }

    #[test]
    fn wrong_delimiter_is_a_length_error() {
        // splitting strictly on ", " leaves one giant token
        assert_eq!(
            Hand::try_from("s1,s2,s3,s4,s5"),
            Err(HandError::InvalidHandLength)
        );
    }
}
