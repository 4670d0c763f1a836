//! Game configuration options.

use crate::policy::DealerPolicy;

/// Smallest accepted bet.
pub const MIN_BET: usize = 5;

/// Largest accepted bet. A natural's 3:2 win on it still fits in `isize`.
pub const MAX_BET: usize = (isize::MAX as usize / 3) * 2;

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_stand_threshold(17)
///     .with_bankroll(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Total at which the dealer stands.
    pub stand_threshold: u8,
    /// Starting bankroll.
    pub bankroll: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            stand_threshold: DealerPolicy::STAND_ON,
            bankroll: 1000,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the dealer's stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_threshold(18);
    /// assert_eq!(options.stand_threshold, 18);
    /// ```
    #[must_use]
    pub const fn with_stand_threshold(mut self, threshold: u8) -> Self {
        self.stand_threshold = threshold;
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_bankroll(250);
    /// assert_eq!(options.bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_bankroll(mut self, bankroll: usize) -> Self {
        self.bankroll = bankroll;
        self
    }

    /// The dealer policy these options describe.
    #[must_use]
    pub const fn dealer_policy(&self) -> DealerPolicy {
        DealerPolicy::new(self.stand_threshold)
    }
}
