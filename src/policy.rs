//! The dealer's fixed drawing rule.

use alloc::vec::Vec;

use rand::RngCore;

use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::shoe::Shoe;

/// Where the dealer stands in playing out a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    /// Below the stand threshold; the dealer must draw.
    Playing,
    /// At or above the threshold and not bust.
    Standing,
    /// Over 21.
    Busted,
}

/// Draw-to-threshold dealer policy.
///
/// The dealer draws while the hand is below the threshold and stands on
/// anything at or above it. Soft and hard totals are treated alike, so a soft
/// 17 stands under the default threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerPolicy {
    stand_threshold: u8,
}

impl DealerPolicy {
    /// Default stand threshold.
    pub const STAND_ON: u8 = 17;

    /// Creates a policy that stands at `stand_threshold`.
    #[must_use]
    pub const fn new(stand_threshold: u8) -> Self {
        Self { stand_threshold }
    }

    /// The total at which the dealer stands.
    #[must_use]
    pub const fn stand_threshold(&self) -> u8 {
        self.stand_threshold
    }

    /// Classifies a dealer hand.
    #[must_use]
    pub fn state(&self, hand: &Hand) -> DealerState {
        if hand.is_bust() {
            DealerState::Busted
        } else if hand.value() >= u32::from(self.stand_threshold) {
            DealerState::Standing
        } else {
            DealerState::Playing
        }
    }

    /// Draws into `hand` until it stands or busts.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe cannot supply a card while the dealer
    /// must draw.
    pub fn play<R: RngCore>(
        &self,
        hand: &mut Hand,
        shoe: &mut Shoe<R>,
    ) -> Result<Vec<Card>, ShoeError> {
        let mut drawn = Vec::new();

        while self.state(hand) == DealerState::Playing {
            let card = shoe.draw()?;
            hand.add_card(card);
            drawn.push(card);
            tracing::debug!(%card, value = hand.value(), "dealer draws");
        }

        tracing::debug!(value = hand.value(), state = ?self.state(hand), "dealer done");
        Ok(drawn)
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new(Self::STAND_ON)
    }
}
