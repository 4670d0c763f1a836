use rand::RngCore;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;

use super::{Game, GameState};

impl<R: RngCore> Game<R> {
    /// Player action: Hit (draw a card).
    ///
    /// A bust resolves the round immediately and the dealer does not play. A
    /// total of exactly 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.shoe.draw()?;
        self.player_hand.add_card(card);

        let value = self.player_hand.value();
        if value > BLACKJACK {
            self.state = GameState::Resolved;
        } else if value == BLACKJACK {
            self.state = GameState::DealerTurn;
        }

        tracing::debug!(%card, value, state = ?self.state, "player hits");
        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        tracing::debug!(value = self.player_hand.value(), "player stands");
        self.state = GameState::DealerTurn;
        Ok(())
    }
}
