//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a session against a dealer
//! who draws to a fixed threshold: betting, the deal, player hit/stand,
//! dealer play, and settlement. The pieces it is built from ([`Shoe`],
//! [`Hand`], [`DealerPolicy`], [`resolve`]) are usable on their own.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.bet(10).unwrap();
//!
//! if game.state() == GameState::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! if game.state() == GameState::DealerTurn {
//!     game.dealer_play().unwrap();
//! }
//!
//! let result = game.showdown().unwrap();
//! assert_eq!(result.bankroll, game.bankroll());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod policy;
pub mod resolver;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, CardError, InputError, ShoeError, ShowdownError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use input::{BetInput, PlayerAction};
pub use options::{GameOptions, MAX_BET, MIN_BET};
pub use policy::{DealerPolicy, DealerState};
pub use resolver::resolve;
pub use result::{Resolution, RoundOutcome, RoundResult};
pub use shoe::{LOW_WATER_MARK, Shoe};
