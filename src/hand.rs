//! Hand representation and value arithmetic.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest non-bust total.
pub const BLACKJACK: u32 = 21;

/// A hand of cards with a cached, soft-ace-aware value.
///
/// Every Ace enters the hand counted as 11 and is demoted to 1, one at a
/// time, while the total exceeds 21.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order received.
    cards: Vec<Card>,
    /// Best total not exceeding 21, or the bust total once no Ace is left soft.
    value: u32,
    /// Aces still counted as 11.
    soft_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
            soft_aces: 0,
        }
    }

    /// Adds a card to the hand and updates the cached value.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.value += u32::from(card.point_value());
        if card.is_ace() {
            self.soft_aces += 1;
        }

        while self.value > BLACKJACK && self.soft_aces > 0 {
            self.value -= 10;
            self.soft_aces -= 1;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, the dealer's up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the cached value.
    ///
    /// Values above 21 mean the hand is bust.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Number of Aces currently counted as 11.
    #[must_use]
    pub const fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value == BLACKJACK
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.value > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Renders the cards as space-separated rank+suit tokens.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.add_card(card);
        }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut hand = Self::new();
        hand.extend(iter);
        hand
    }
}
