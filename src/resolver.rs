//! Round settlement.

use crate::hand::Hand;
use crate::options::MAX_BET;
use crate::result::{Resolution, RoundOutcome};

/// Computes the outcome and bankroll change of a finished round.
///
/// A player natural is settled before anything else: it pushes against a
/// dealer natural and otherwise pays `floor(bet * 1.5)`. A natural can only
/// exist on the two dealt cards, so a 21 reached by hitting is an ordinary
/// total here. Otherwise the checks run in order: player bust, dealer bust,
/// then the higher total.
///
/// Bets above [`MAX_BET`] are settled as [`MAX_BET`], so the change always
/// fits in `isize`.
///
/// Pure: no I/O, no state.
///
/// # Example
///
/// ```
/// use bjsolo::{Card, Hand, Rank, RoundOutcome, Suit, resolve};
///
/// let player: Hand = [Card::new(Suit::Spades, Rank::Ace), Card::new(Suit::Hearts, Rank::King)]
///     .into_iter()
///     .collect();
/// let dealer: Hand = [Card::new(Suit::Clubs, Rank::Ten), Card::new(Suit::Clubs, Rank::Nine)]
///     .into_iter()
///     .collect();
///
/// let resolution = resolve(&player, &dealer, 10);
/// assert_eq!(resolution.outcome, RoundOutcome::PlayerBlackjack);
/// assert_eq!(resolution.delta, 15);
/// ```
#[must_use]
pub fn resolve(player: &Hand, dealer: &Hand, bet: usize) -> Resolution {
    let bet = bet.min(MAX_BET);
    let stake = to_delta(bet);

    let (outcome, delta) = if player.is_blackjack() {
        if dealer.is_blackjack() {
            (RoundOutcome::Push, 0)
        } else {
            let payout = bet.checked_mul(3).map_or(usize::MAX, |n| n / 2);
            (RoundOutcome::PlayerBlackjack, to_delta(payout))
        }
    } else if player.is_bust() {
        (RoundOutcome::PlayerBust, -stake)
    } else if dealer.is_bust() {
        (RoundOutcome::DealerBust, stake)
    } else if player.value() > dealer.value() {
        (RoundOutcome::PlayerWin, stake)
    } else if player.value() < dealer.value() {
        (RoundOutcome::DealerWin, -stake)
    } else {
        (RoundOutcome::Push, 0)
    };

    Resolution { outcome, delta }
}

fn to_delta(amount: usize) -> isize {
    isize::try_from(amount).unwrap_or(isize::MAX)
}
