use thiserror::Error;

/// Everything that can go wrong while reading or comparing hands.
///
/// Nothing here is transient. Callers decide whether a bad line aborts
/// a batch or gets skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid rank symbol {0:?}")]
    InvalidRank(char),

    #[error("invalid rank ordinal {0}, expected 2..=14")]
    InvalidOrdinal(u8),

    #[error("card token {0:?} is not two characters")]
    MalformedCard(String),

    #[error("a hand needs 5 cards, got {0}")]
    CardCount(usize),

    #[error("a line needs 10 cards, got {0}")]
    MalformedLine(usize),

    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(&'static str),

    #[error("least common multiple overflows u64 at {0}")]
    Overflow(u64),
}
