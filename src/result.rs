//! Round result types for showdown.

use core::fmt;

/// How a round ended, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player's natural beats a non-natural dealer hand; pays 3:2.
    PlayerBlackjack,
    /// Player went over 21. The dealer never plays.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player's total beats the dealer's.
    PlayerWin,
    /// Dealer's total beats the player's.
    DealerWin,
    /// Tie, including two naturals. The bet is returned.
    Push,
}

impl RoundOutcome {
    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin
        )
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBlackjack => "Blackjack! You win 1.5x your bet!",
            Self::PlayerBust => "You bust! You lose your bet.",
            Self::DealerBust => "Dealer busts! You win!",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "Dealer wins!",
            Self::Push => "It's a push! Your bet is returned.",
        })
    }
}

/// Outcome and bankroll change computed for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// Bankroll change (positive = profit, negative = loss).
    pub delta: isize,
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The bet amount for the round.
    pub bet: usize,
    /// Bankroll change applied.
    pub delta: isize,
    /// The player's final hand value.
    pub player_value: u32,
    /// The dealer's final hand value.
    pub dealer_value: u32,
    /// Bankroll after settlement.
    pub bankroll: usize,
}
