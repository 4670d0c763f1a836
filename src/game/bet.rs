use rand::RngCore;

use crate::error::BetError;
use crate::hand::Hand;
use crate::options::{MAX_BET, MIN_BET};

use super::{Game, GameState};

impl<R: RngCore> Game<R> {
    /// Places a bet and deals the opening cards.
    ///
    /// Cards go player, dealer, player, dealer. A player natural ends the
    /// round on the spot (state `Resolved`, no dealer draw); otherwise play
    /// passes to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a bet, the amount is
    /// outside the table limits or above the bankroll, or the shoe cannot
    /// deal.
    pub fn bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::AwaitingBet {
            return Err(BetError::InvalidState);
        }
        if amount < MIN_BET {
            return Err(BetError::BelowMinimum { minimum: MIN_BET });
        }
        if amount > MAX_BET {
            return Err(BetError::AboveMaximum { maximum: MAX_BET });
        }
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        self.deal()?;
        self.current_bet = amount;

        if self.player_hand.is_blackjack() {
            tracing::debug!("player natural, skipping turns");
            self.state = GameState::Resolved;
        } else {
            self.state = GameState::PlayerTurn;
        }

        Ok(())
    }

    fn deal(&mut self) -> Result<(), BetError> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        for _ in 0..2 {
            player.add_card(self.shoe.draw()?);
            dealer.add_card(self.shoe.draw()?);
        }

        tracing::debug!(
            player = %player,
            dealer_up = ?dealer.up_card(),
            "dealt"
        );

        self.player_hand = player;
        self.dealer_hand = dealer;
        Ok(())
    }
}
