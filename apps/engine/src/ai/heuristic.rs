//! Greedy bot - a deterministic baseline that is materially stronger than
//! random play.
//!
//! Bidding: estimate the hand's worth (card points plus held King+Queen
//! meld values) and raise while the next step stays within it.
//! Distribution: dump the lowest cards, opponents first.
//! Play: lead a meldable Queen when possible, otherwise try to win the
//! trick cheaply; when the trick cannot be won, shed the cheapest card.

use super::trait_def::{AuctionAction, BotError, BotPlayer};
use crate::domain::player_view::UserContext;
use crate::domain::state::Seat;
use crate::domain::{Card, Rank, Suit};

#[derive(Debug, Clone, Default)]
pub struct GreedyBot;

impl GreedyBot {
    pub const NAME: &'static str = "greedy";

    pub fn new() -> Self {
        Self
    }

    /// Rough worth of a hand: raw card points plus the bonus of every
    /// King+Queen pair it holds.
    fn hand_estimate(hand: &[Card]) -> u16 {
        let points: u16 = hand.iter().map(|c| c.points()).sum();
        let melds: u16 = Suit::ALL
            .iter()
            .filter(|&&s| {
                hand.contains(&Card::new(Rank::Queen, s))
                    && hand.contains(&Card::new(Rank::King, s))
            })
            .map(|s| s.meld_value())
            .sum();
        points + melds
    }

    /// A Queen whose King is also in hand, if any.
    fn meldable_queen(hand: &[Card]) -> Option<Card> {
        hand.iter()
            .copied()
            .filter(|c| c.rank == Rank::Queen)
            .find(|c| hand.contains(&Card::new(Rank::King, c.suit)))
    }

    /// Whether playing `candidate` now would take the lead in the trick.
    fn wins_currently(candidate: Card, view: &UserContext) -> bool {
        let table: Vec<Card> = view.game.table.iter().map(|(_, c)| *c).collect();
        let lead_suit = table[0].suit;
        let trump = view.game.trump;

        let best_is_trump =
            trump.is_some_and(|t| table.iter().any(|c| c.suit == t) && t != lead_suit)
                || trump == Some(lead_suit);
        let deciding = match trump {
            Some(t) if table.iter().any(|c| c.suit == t) => t,
            _ => lead_suit,
        };
        let table_best = table
            .iter()
            .filter(|c| c.suit == deciding)
            .map(|c| c.points())
            .max()
            .unwrap_or(0);

        if candidate.suit == deciding {
            return candidate.points() > table_best;
        }
        // A trump candidate beats any non-trump table.
        !best_is_trump && trump == Some(candidate.suit)
    }
}

impl BotPlayer for GreedyBot {
    fn choose_auction(&self, view: &UserContext) -> Result<AuctionAction, BotError> {
        if !view.may_bid() {
            return Err(BotError::InvalidMove("not our auction turn".into()));
        }
        let estimate = 100 + Self::hand_estimate(&view.hand);
        let raise = view.min_raise();
        if raise <= estimate {
            Ok(AuctionAction::Raise(raise))
        } else {
            Ok(AuctionAction::Pass)
        }
    }

    fn choose_distribution(&self, view: &UserContext) -> Result<(Card, Seat), BotError> {
        let targets = view.distribution_targets();
        if targets.is_empty() || view.hand.is_empty() {
            return Err(BotError::InvalidMove("nothing to distribute".into()));
        }
        let card = view
            .hand
            .iter()
            .copied()
            .min_by_key(|c| c.points())
            .ok_or_else(|| BotError::InvalidMove("empty hand".into()))?;
        // Opponents sit at odd offsets from us; feed them the junk first.
        let target = targets
            .iter()
            .copied()
            .find(|t| (t + view.seat) % 2 == 1)
            .unwrap_or(targets[0]);
        Ok((card, target))
    }

    fn choose_play(&self, view: &UserContext) -> Result<Card, BotError> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Err(BotError::InvalidMove("no legal plays".into()));
        }
        if view.game.table.is_empty() {
            // On lead: announce a meld when we can, else push our best card.
            if let Some(queen) = Self::meldable_queen(&view.hand) {
                return Ok(queen);
            }
            return legal
                .iter()
                .copied()
                .max_by_key(|c| c.points())
                .ok_or_else(|| BotError::InvalidMove("no legal plays".into()));
        }

        let winning = legal
            .iter()
            .copied()
            .filter(|&c| Self::wins_currently(c, view))
            .min_by_key(|c| c.points());
        match winning {
            Some(card) => Ok(card),
            None => legal
                .iter()
                .copied()
                .min_by_key(|c| c.points())
                .ok_or_else(|| BotError::InvalidMove("no legal plays".into())),
        }
    }
}
