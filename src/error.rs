//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Numeric rank outside 1..=13.
    #[error("invalid rank: {0}")]
    InvalidRank(u8),
    /// Rank symbol not in the thirteen-rank table.
    #[error("invalid rank symbol")]
    InvalidSymbol,
}

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The shoe holds zero decks and cannot be refilled.
    #[error("shoe is configured with zero decks")]
    EmptyShoe,
}

/// Errors that can occur during betting and the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet is below the table minimum.
    #[error("bet is below the minimum of {minimum}")]
    BelowMinimum {
        /// The table minimum.
        minimum: usize,
    },
    /// Bet is above the table maximum.
    #[error("bet is above the maximum of {maximum}")]
    AboveMaximum {
        /// The table maximum.
        maximum: usize,
    },
    /// Bet exceeds the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The shoe could not supply a card.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The shoe could not supply a card.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during the dealer turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The shoe could not supply a card.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Malformed interactive input. Always recoverable by asking again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Bet is not a whole number.
    #[error("please enter a valid number")]
    NotANumber,
    /// Bet is below the table minimum.
    #[error("minimum bet is ${minimum}")]
    BelowMinimum {
        /// The table minimum.
        minimum: usize,
    },
    /// Bet is above the table maximum.
    #[error("maximum bet is ${maximum}")]
    AboveMaximum {
        /// The table maximum.
        maximum: usize,
    },
    /// Bet is larger than the bankroll.
    #[error("you don't have enough money for that bet")]
    ExceedsBankroll,
    /// Neither hit nor stand.
    #[error("please enter 'H' to hit or 'S' to stand")]
    UnrecognizedAction,
}
