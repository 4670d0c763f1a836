use alloc::vec::Vec;

use rand::RngCore;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::options::MIN_BET;
use crate::resolver::resolve;
use crate::result::RoundResult;

use super::{Game, GameState};

impl<R: RngCore> Game<R> {
    /// Dealer plays their hand according to the stand threshold.
    ///
    /// Returns the cards drawn by the dealer, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let drawn = self.policy.play(&mut self.dealer_hand, &mut self.shoe)?;
        self.state = GameState::Resolved;

        Ok(drawn)
    }

    /// Settles the round and applies the result to the bankroll.
    ///
    /// Betting reopens afterwards unless the bankroll no longer covers the
    /// minimum bet. Both hands stay readable until the next deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Resolved {
            return Err(ShowdownError::InvalidState);
        }

        let bet = self.current_bet;
        let resolution = resolve(&self.player_hand, &self.dealer_hand, bet);
        self.bankroll = self.bankroll.saturating_add_signed(resolution.delta);
        self.current_bet = 0;

        self.state = if self.bankroll < MIN_BET {
            GameState::GameOver
        } else {
            GameState::AwaitingBet
        };

        tracing::info!(
            outcome = ?resolution.outcome,
            delta = resolution.delta,
            bankroll = self.bankroll,
            "round settled"
        );

        Ok(RoundResult {
            outcome: resolution.outcome,
            bet,
            delta: resolution.delta,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            bankroll: self.bankroll,
        })
    }
}
