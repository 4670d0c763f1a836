//! The multi-deck shoe.

use alloc::vec::Vec;

use rand::RngCore;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// Remaining-card count below which a draw resets the whole shoe first.
pub const LOW_WATER_MARK: usize = 10;

/// A shoe of one or more 52-card decks, reshuffled as a single unit.
///
/// The top of the shoe is the end of the internal vector.
#[derive(Debug, Clone)]
pub struct Shoe<R = ChaCha8Rng> {
    cards: Vec<Card>,
    deck_count: u8,
    rng: R,
    reshuffle_pending: bool,
}

impl Shoe<ChaCha8Rng> {
    /// Creates a shuffled shoe seeded from `seed`.
    #[must_use]
    pub fn seeded(deck_count: u8, seed: u64) -> Self {
        Self::new(deck_count, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Shoe<R> {
    /// Creates a full, shuffled shoe drawing randomness from `rng`.
    #[must_use]
    pub fn new(deck_count: u8, rng: R) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            deck_count,
            rng,
            reshuffle_pending: false,
        };
        shoe.fill();
        shoe
    }

    /// Creates a shoe whose next draws are `draws`, in order.
    ///
    /// Only the first [`capacity`](Self::capacity) cards are kept, so a
    /// zero-deck shoe starts empty. Once the stacked cards fall below [`LOW_WATER_MARK`] the shoe resets
    /// to a full shuffled set like any other shoe.
    #[must_use]
    pub fn stacked(deck_count: u8, draws: &[Card], rng: R) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            deck_count,
            rng,
            reshuffle_pending: false,
        };
        let capacity = shoe.capacity();
        shoe.cards.extend(draws.iter().take(capacity).rev().copied());
        shoe
    }

    fn fill(&mut self) {
        self.cards.clear();
        self.cards.reserve(self.capacity());

        for _ in 0..self.deck_count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }

        self.cards.shuffle(&mut self.rng);
    }

    /// Rebuilds the full shoe and shuffles it, discarding every card left.
    pub fn reset(&mut self) {
        self.fill();
        self.reshuffle_pending = true;
    }

    /// Draws the top card.
    ///
    /// If fewer than [`LOW_WATER_MARK`] cards remain, the shoe is reset
    /// before the card is taken and a reshuffle notice is raised.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::EmptyShoe`] if the shoe holds zero decks.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        if self.cards.len() < LOW_WATER_MARK {
            tracing::info!(
                remaining = self.cards.len(),
                decks = self.deck_count,
                "reshuffling shoe"
            );
            self.reset();
        }

        self.cards.pop().ok_or(ShoeError::EmptyShoe)
    }

    /// Returns whether the shoe was reset since the last call, clearing the
    /// notice.
    pub const fn take_reshuffle_notice(&mut self) -> bool {
        let pending = self.reshuffle_pending;
        self.reshuffle_pending = false;
        pending
    }

    /// Number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Number of decks the shoe is built from.
    #[must_use]
    pub const fn deck_count(&self) -> u8 {
        self.deck_count
    }

    /// Full size of the shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.deck_count as usize * DECK_SIZE
    }
}
