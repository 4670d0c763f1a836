//! Parsing of line-based player input.
//!
//! Every error here is recoverable: the caller reports it and asks again.

use crate::error::InputError;
use crate::options::{MAX_BET, MIN_BET};

/// A parsed answer to the bet prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetInput {
    /// Bet this amount.
    Amount(usize),
    /// Leave the table.
    Quit,
}

/// A parsed answer to the hit-or-stand prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// Parses a bet line. `0` quits.
///
/// # Errors
///
/// Returns an error if the line is not a whole number, is outside
/// [`MIN_BET`]..=[`MAX_BET`], or exceeds `bankroll`.
pub fn parse_bet(line: &str, bankroll: usize) -> Result<BetInput, InputError> {
    let amount: usize = line.trim().parse().map_err(|_| InputError::NotANumber)?;

    if amount == 0 {
        return Ok(BetInput::Quit);
    }
    if amount < MIN_BET {
        return Err(InputError::BelowMinimum { minimum: MIN_BET });
    }
    if amount > MAX_BET {
        return Err(InputError::AboveMaximum { maximum: MAX_BET });
    }
    if amount > bankroll {
        return Err(InputError::ExceedsBankroll);
    }

    Ok(BetInput::Amount(amount))
}

/// Parses a hit-or-stand line, ignoring case.
///
/// # Errors
///
/// Returns [`InputError::UnrecognizedAction`] for anything other than
/// `h`, `hit`, `s`, or `stand`.
pub fn parse_action(line: &str) -> Result<PlayerAction, InputError> {
    let token = line.trim();
    if token.eq_ignore_ascii_case("h") || token.eq_ignore_ascii_case("hit") {
        Ok(PlayerAction::Hit)
    } else if token.eq_ignore_ascii_case("s") || token.eq_ignore_ascii_case("stand") {
        Ok(PlayerAction::Stand)
    } else {
        Err(InputError::UnrecognizedAction)
    }
}

/// Returns whether a yes/no line is a yes.
#[must_use]
pub fn parse_yes(line: &str) -> bool {
    let token = line.trim();
    token.eq_ignore_ascii_case("y") || token.eq_ignore_ascii_case("yes")
}
