//! The legality oracle: which cards may be played onto the current trick.

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

fn best_points_of_suit(cards: &[Card], suit: Suit) -> Option<u16> {
    cards
        .iter()
        .filter(|c| c.suit == suit)
        .map(|c| c.points())
        .max()
}

/// Decide whether `candidate` may legally be played, given the lead card,
/// the player's full hand, the cards already on the table (in play order,
/// lead included), and the active trump suit.
///
/// Rules, in priority order:
/// 1. An empty table accepts any card.
/// 2. A lead-suit candidate must out-rank the best lead-suit card on the
///    table, unless no other lead-suit card in hand could.
/// 3. Holding any lead-suit card forbids everything else.
/// 4. Void in the lead suit, a trump holder must play trump while their best
///    trump can still beat the best trump on the table; once it cannot, any
///    card goes.
/// 5. Holding neither lead suit nor trump, any card goes.
pub fn can_play(
    candidate: Card,
    lead: Card,
    hand: &[Card],
    table: &[Card],
    trump: Option<Suit>,
) -> bool {
    if table.is_empty() {
        return true;
    }

    // Highest lead-suit points already on the table. The lead card is itself
    // on the table in valid play; fall back to its own points otherwise.
    let min_required = best_points_of_suit(table, lead.suit).unwrap_or_else(|| lead.points());

    if candidate.suit == lead.suit {
        if candidate.points() > min_required {
            return true;
        }
        // Forced-legal only when no other lead-suit card in hand out-ranks.
        return !hand
            .iter()
            .any(|c| *c != candidate && c.suit == lead.suit && c.points() > min_required);
    }

    if hand_has_suit(hand, lead.suit) {
        return false;
    }

    let Some(trump_suit) = trump else {
        return true;
    };
    let Some(own_best_trump) = best_points_of_suit(hand, trump_suit) else {
        return true;
    };

    match best_points_of_suit(table, trump_suit) {
        // Concession: the hand cannot win with trump either, so any card goes.
        Some(table_best) if own_best_trump <= table_best => true,
        _ => candidate.suit == trump_suit,
    }
}
