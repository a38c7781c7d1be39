use thiserror::Error;

/// Everything that can abort an equity calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    #[error("duplicate or unknown card: {0}")]
    DuplicateOrUnknownCard(String),
    #[error("expected {expected} cards, got {actual}")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("cannot draw {requested} cards from a deck of {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("trial count must be between 1 and {max}, got {0}", max = crate::calculator::MAX_TRIALS)]
    InvalidTrialCount(i64),
    #[error("board holds at most 5 cards, got {0}")]
    OverfilledBoard(usize),
    #[error("at least one hand is required")]
    NoHands,
}
