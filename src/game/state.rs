//! Game state types.

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next bet.
    AwaitingBet,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be settled.
    Resolved,
    /// Bankroll is below the minimum bet; no further rounds.
    GameOver,
}
