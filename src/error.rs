use thiserror::Error;

/// Configuration-time errors.
///
/// The engine itself never raises an error at runtime (see the crate-level
/// docs) — these are only returned while constructing an [`Alphabet`](crate::Alphabet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than two symbols were given. A single-symbol alphabet would
    /// force the sibling assigner's suffix width to grow without bound.
    #[error("alphabet must have at least 2 symbols, got {len}")]
    TooFewSymbols {
        /// The number of symbols actually given.
        len: usize,
    },
    /// The same symbol appeared more than once in the input sequence.
    #[error("duplicate alphabet symbol: {0:?}")]
    DuplicateSymbol(char),
}
