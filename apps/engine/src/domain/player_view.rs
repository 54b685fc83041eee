//! Player views of room state: what a seat is allowed to see.
//!
//! `GameContext` is the public snapshot broadcast after every action;
//! `UserContext` adds one seat's private hand plus the legal-move helpers
//! that bots and UIs should use instead of re-implementing the rules.

use serde::Serialize;

use crate::domain::cards_logic::can_play;
use crate::domain::rules::{BID_STEP, PLAYERS, PLAYING_HAND_SIZE, TEAMS};
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::{Card, Suit};

pub use crate::domain::scoring::{RoundSummary, TeamRoundSummary};

/// Public facts about one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatInfo {
    pub name: String,
    pub is_bot: bool,
    /// Number of cards in hand; the cards themselves are private.
    pub card_count: usize,
    pub connected: bool,
}

/// Everything every player at the table can see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameContext {
    pub phase: Phase,
    pub round_no: u32,
    pub bet: u16,
    /// Seat expected to act; None in Start/GameOver.
    pub turn: Option<Seat>,
    pub trump: Option<Suit>,
    /// Cards on the table in play order.
    pub table: Vec<(Seat, Card)>,
    pub passed: [bool; PLAYERS],
    pub auction_winner: Option<Seat>,
    /// Winner of the trick on display, during ShowTable.
    pub trick_winner: Option<Seat>,
    /// Suits melded per team this round. Public once announced.
    pub melds: [Vec<Suit>; TEAMS],
    pub seats: Vec<SeatInfo>,
    /// Latest running totals per team.
    pub totals: [i32; TEAMS],
    /// Running totals after each completed round, per team.
    pub score_history: [Vec<i32>; TEAMS],
}

impl GameContext {
    pub fn from_state(state: &GameState) -> Self {
        let seats = state
            .players
            .iter()
            .map(|p| SeatInfo {
                name: p.name.clone(),
                is_bot: p.is_bot,
                card_count: p.hand.len(),
                connected: !state.disconnected.contains(&p.id),
            })
            .collect();
        Self {
            phase: state.phase,
            round_no: state.round_no,
            bet: state.round.bet,
            turn: state.turn,
            trump: state.round.trump,
            table: state.round.table.clone(),
            passed: state.round.passed,
            auction_winner: state.round.auction_winner,
            trick_winner: state.round.trick_winner,
            melds: state.round.melds.clone(),
            seats,
            totals: state.totals(),
            score_history: state.score_history.clone(),
        }
    }
}

/// One seat's complete view: the public context plus that seat's hand.
///
/// This is the interface between the engine and decision makers. Bots
/// receive it in every [`crate::ai::BotPlayer`] method; use the helper
/// methods rather than re-deriving legality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserContext {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub game: GameContext,
}

impl UserContext {
    pub fn for_seat(state: &GameState, seat: Seat) -> Self {
        Self {
            seat,
            hand: state.players[seat as usize].hand.clone(),
            game: GameContext::from_state(state),
        }
    }

    fn is_my_turn(&self) -> bool {
        self.game.turn == Some(self.seat)
    }

    /// Smallest raise acceptable right now.
    pub fn min_raise(&self) -> u16 {
        self.game.bet + BID_STEP
    }

    /// Whether this seat may still raise (Auction on our turn, or the
    /// winner's one-shot raise in IncreaseBet).
    pub fn may_bid(&self) -> bool {
        matches!(self.game.phase, Phase::Auction | Phase::IncreaseBet) && self.is_my_turn()
    }

    /// Cards this seat may legally play right now. Empty when it is not our
    /// turn or the room is not in trick play.
    pub fn legal_plays(&self) -> Vec<Card> {
        if self.game.phase != Phase::Playing || !self.is_my_turn() {
            return Vec::new();
        }
        let Some(&(_, lead)) = self.game.table.first() else {
            return self.hand.clone();
        };
        let table_cards: Vec<Card> = self.game.table.iter().map(|(_, c)| *c).collect();
        self.hand
            .iter()
            .copied()
            .filter(|&c| can_play(c, lead, &self.hand, &table_cards, self.game.trump))
            .collect()
    }

    /// Seats the distributor may still give a card to: everyone else whose
    /// hand is not yet full.
    pub fn distribution_targets(&self) -> Vec<Seat> {
        if self.game.phase != Phase::CardDistribution || !self.is_my_turn() {
            return Vec::new();
        }
        self.game
            .seats
            .iter()
            .enumerate()
            .filter(|(seat, info)| {
                *seat != self.seat as usize && info.card_count < PLAYING_HAND_SIZE
            })
            .map(|(seat, _)| seat as Seat)
            .collect()
    }
}
