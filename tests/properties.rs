//! Property tests for hand arithmetic, the dealer policy, and settlement.

use bjsolo::{Card, DealerPolicy, DealerState, Hand, Shoe, Suit, resolve};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 1u8..=13)
        .prop_map(|(suit, rank)| Card::from_number(Suit::ALL[suit], rank).unwrap())
}

fn non_ace_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 2u8..=13)
        .prop_map(|(suit, rank)| Card::from_number(Suit::ALL[suit], rank).unwrap())
}

/// Best total over every 1-or-11 assignment of the aces, computed from scratch.
fn best_total(cards: &[Card]) -> u32 {
    let hard: u32 = cards
        .iter()
        .map(|c| if c.is_ace() { 1 } else { u32::from(c.point_value()) })
        .sum();
    let aces = cards.iter().filter(|c| c.is_ace()).count();

    (0..=aces)
        .map(|soft| hard + 10 * soft as u32)
        .filter(|&total| total <= 21)
        .max()
        .unwrap_or(hard)
}

proptest! {
    #[test]
    fn value_without_aces_is_plain_sum(cards in prop::collection::vec(non_ace_card(), 0..8)) {
        let hand: Hand = cards.iter().copied().collect();
        let sum: u32 = cards.iter().map(|c| u32::from(c.point_value())).sum();
        prop_assert_eq!(hand.value(), sum);
        prop_assert_eq!(hand.soft_aces(), 0);
    }

    #[test]
    fn incremental_value_matches_full_evaluation(cards in prop::collection::vec(any_card(), 0..8)) {
        let hand: Hand = cards.iter().copied().collect();
        prop_assert_eq!(hand.value(), best_total(&cards));
        if hand.is_bust() {
            prop_assert_eq!(hand.soft_aces(), 0);
        }
    }

    #[test]
    fn blackjack_needs_exactly_two_cards(cards in prop::collection::vec(any_card(), 0..6)) {
        let hand: Hand = cards.iter().copied().collect();
        prop_assert_eq!(hand.is_blackjack(), cards.len() == 2 && hand.value() == 21);
    }

    #[test]
    fn resolve_is_antisymmetric(
        first in prop::collection::vec(any_card(), 2..=3),
        second in prop::collection::vec(any_card(), 2..=3),
        bet in 5usize..1000,
    ) {
        let first: Hand = first.into_iter().collect();
        let second: Hand = second.into_iter().collect();
        prop_assume!(!first.is_blackjack() && !second.is_blackjack());
        prop_assume!(!first.is_bust() && !second.is_bust());

        prop_assert_eq!(
            resolve(&first, &second, bet).delta,
            -resolve(&second, &first, bet).delta
        );
    }

    #[test]
    fn dealer_always_finishes(
        opening in prop::collection::vec(any_card(), 2..=2),
        seed in any::<u64>(),
        threshold in 12u8..=21,
    ) {
        let policy = DealerPolicy::new(threshold);
        let mut hand: Hand = opening.into_iter().collect();
        let threshold_total = u32::from(threshold);
        let started_below = hand.value() < threshold_total;
        let mut shoe = Shoe::seeded(1, seed);

        let drawn = policy.play(&mut hand, &mut shoe).unwrap();

        prop_assert!(drawn.len() <= 21);
        prop_assert_eq!(!drawn.is_empty(), started_below);
        match policy.state(&hand) {
            DealerState::Standing => {
                prop_assert!(hand.value() >= threshold_total && hand.value() <= 21);
            }
            DealerState::Busted => {
                prop_assert!(hand.value() > 21);
            }
            DealerState::Playing => {
                prop_assert!(false, "dealer stopped below threshold");
            }
        }
    }
}
