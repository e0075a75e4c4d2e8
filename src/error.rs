//! Error types for table configuration and play.

use thiserror::Error;

/// Errors raised while validating configuration at the boundary or while
/// constructing a [`Table`](crate::Table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The round count is outside the supported range.
    #[error("invalid number of rounds")]
    InvalidRounds,
    /// The player count is not one of the supported values.
    #[error("invalid number of players")]
    InvalidPlayers,
    /// The player count is accepted by the parser but leaves no cards to
    /// deal.
    #[error("too few playing cards in the deck")]
    TooFewCards,
}

impl ConfigError {
    /// Process exit code associated with this failure.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InvalidRounds => 26,
            Self::InvalidPlayers => 27,
            Self::TooFewCards => 28,
        }
    }
}

/// Errors raised while dealing cards during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck ran out of cards. Unreachable as long as the reshuffle rule
    /// is honored before every deal.
    #[error("no cards left in the deck")]
    EmptyDeck,
}
