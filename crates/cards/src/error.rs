/// Why a submitted hand was rejected.
///
/// Exactly one error is reported per illegal hand, chosen by the
/// validation precedence in [`Hand::try_from`](crate::Hand): length and
/// empty tokens first, then duplicate cards, then unrecognized cards,
/// then the all-one-rank degenerate case. The `Display` strings are the
/// messages surfaced to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HandError {
    #[error("a hand must contain exactly five cards")]
    InvalidHandLength,
    #[error("the same card was entered more than once")]
    InvalidSameCards,
    #[error("the hand contains an invalid card")]
    InvalidCard,
    #[error("at most four cards may share the same rank")]
    InvalidSameRank,
}
