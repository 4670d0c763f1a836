//! Session controller and round flow.

use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::{GameOptions, MIN_BET};
use crate::policy::DealerPolicy;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack session.
///
/// The game owns the shoe, both hands, and the bankroll. Each round runs
/// `AwaitingBet → PlayerTurn → DealerTurn → Resolved`; naturals and player
/// busts jump straight to `Resolved`. [`Game::showdown`] settles the round
/// and reopens betting.
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    shoe: Shoe<R>,
    options: GameOptions,
    policy: DealerPolicy,
    state: GameState,
    bankroll: usize,
    current_bet: usize,
    player_hand: Hand,
    dealer_hand: Hand,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::AwaitingBet);
    /// assert_eq!(game.bankroll(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a new game shuffling with `rng`.
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        Self::with_shoe(options, Shoe::new(options.decks, rng))
    }

    /// Creates a new game around an existing shoe.
    ///
    /// The shoe's deck count takes precedence over `options.decks`.
    pub fn with_shoe(options: GameOptions, shoe: Shoe<R>) -> Self {
        let options = options.with_decks(shoe.deck_count());
        let state = if options.bankroll < MIN_BET {
            GameState::GameOver
        } else {
            GameState::AwaitingBet
        };

        Self {
            shoe,
            policy: options.dealer_policy(),
            options,
            state,
            bankroll: options.bankroll,
            current_bet: 0,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
        }
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current bankroll.
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the bet for the round in progress (0 between rounds).
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns whether the bankroll still covers the minimum bet.
    pub const fn can_continue(&self) -> bool {
        self.bankroll >= MIN_BET
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the dealer's face-up card.
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer_hand.up_card()
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns whether the shoe was reshuffled since the last call.
    pub const fn take_reshuffle_notice(&mut self) -> bool {
        self.shoe.take_reshuffle_notice()
    }

    /// Ends the session early. No further bets are accepted.
    pub fn quit(&mut self) {
        tracing::info!(bankroll = self.bankroll, "player left the table");
        self.current_bet = 0;
        self.state = GameState::GameOver;
    }
}
