//! Deterministic dealing: 24 cards into four hands of five plus the widow.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS, WIDOW_SIZE};
use crate::domain::{Card, Rank, Suit};

/// The full 24-card deck in canonical order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Shuffle and deal: four sorted 5-card hands and the 4-card widow.
///
/// Deterministic for a given seed, which makes deals replayable in tests.
pub fn deal(seed: u64) -> ([Vec<Card>; PLAYERS], Vec<Card>) {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (seat, hand) in hands.iter_mut().enumerate() {
        let start = seat * HAND_SIZE;
        let mut cards = deck[start..start + HAND_SIZE].to_vec();
        cards.sort();
        *hand = cards;
    }
    let widow = deck[PLAYERS * HAND_SIZE..].to_vec();
    debug_assert_eq!(widow.len(), WIDOW_SIZE);

    (hands, widow)
}
