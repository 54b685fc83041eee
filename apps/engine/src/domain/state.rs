//! Room state: seats, teams, phases, per-round and per-game containers.

use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::rules::{PLAYERS, STARTING_BET, TEAMS};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

pub type Seat = u8; // 0..=3, fixed for the whole game

/// The two fixed teams; seats 0/2 are One, seats 1/3 are Two.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }

    pub fn other(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

pub fn team_of(seat: Seat) -> Team {
    if seat % 2 == 0 {
        Team::One
    } else {
        Team::Two
    }
}

/// Seat math over the fixed 4-seat ring. Clockwise is positive.
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    ((seat as i16 + delta as i16).rem_euclid(PLAYERS as i16)) as Seat
}

/// Next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// The seat directly across: same team.
#[inline]
pub fn teammate(seat: Seat) -> Seat {
    seat_offset(seat, 2)
}

/// Room progression phases. Exactly one of the five mid-game phases is
/// active during a round; `GameOver` is terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// Room created but cards not yet dealt.
    Start,
    /// Players raise or pass until three have passed.
    Auction,
    /// The auction winner, widow in hand, may raise once more or decline.
    IncreaseBet,
    /// The winner gives one card to each other player.
    CardDistribution,
    /// Trick play.
    Playing,
    /// Four cards on the table; waiting for the driver to resolve the trick.
    ShowTable,
    /// A team reached ±1000.
    GameOver,
}

/// One seated player.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Stable identity, used for reconnection.
    pub id: Uuid,
    pub name: String,
    /// Always kept sorted.
    pub hand: Vec<Card>,
    pub is_bot: bool,
}

/// Per-deal state, discarded at round end.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Current bet. Starts at 100, only raised within a round.
    pub bet: u16,
    /// Seat that opened this round's auction; rotates by one each round.
    pub round_leader: Seat,
    /// Cards on the table in play order, with the seat that played each.
    pub table: Vec<(Seat, Card)>,
    /// Live trump suit, if any.
    pub trump: Option<Suit>,
    /// Melded trump waiting to go live at the next trick.
    pub queued_trump: Option<Suit>,
    /// The widow; emptied into the auction winner's hand.
    pub widow: Vec<Card>,
    /// Who has passed this auction.
    pub passed: [bool; PLAYERS],
    pub auction_winner: Option<Seat>,
    /// Cards each team has taken in resolved tricks this round.
    pub taken: [Vec<Card>; TEAMS],
    /// Trick points accumulated per team this round.
    pub trick_points: [u16; TEAMS],
    /// Whether each team has won at least one trick this round.
    pub took_trick: [bool; TEAMS],
    /// Suits melded per team this round (bonus eligibility).
    pub melds: [Vec<Suit>; TEAMS],
    /// Winner of the trick currently on display (ShowTable only).
    pub trick_winner: Option<Seat>,
}

impl RoundState {
    pub fn new(round_leader: Seat) -> Self {
        Self {
            bet: STARTING_BET,
            round_leader,
            table: Vec::with_capacity(PLAYERS),
            trump: None,
            queued_trump: None,
            widow: Vec::new(),
            passed: [false; PLAYERS],
            auction_winner: None,
            taken: Default::default(),
            trick_points: [0; TEAMS],
            took_trick: [false; TEAMS],
            melds: Default::default(),
            trick_winner: None,
        }
    }

    pub fn pass_count(&self) -> usize {
        self.passed.iter().filter(|p| **p).count()
    }

    /// The single seat still bidding, once the other three have passed.
    pub fn sole_active_seat(&self) -> Option<Seat> {
        if self.pass_count() != PLAYERS - 1 {
            return None;
        }
        self.passed
            .iter()
            .position(|p| !*p)
            .map(|seat| seat as Seat)
    }

    /// Cards on the table without the seats, in play order.
    pub fn table_cards(&self) -> Vec<Card> {
        self.table.iter().map(|(_, c)| *c).collect()
    }
}

/// Entire per-room state, sufficient for all pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub players: [PlayerState; PLAYERS],
    /// Seat expected to act; None in Start/GameOver.
    pub turn: Option<Seat>,
    /// 1-based once the first deal happens.
    pub round_no: u32,
    pub round: RoundState,
    /// Running totals per team, append-only, most recent last.
    pub score_history: [Vec<i32>; TEAMS],
    /// Currently disconnected player ids. Informational: operations are not
    /// blocked while it is non-empty.
    pub disconnected: HashSet<Uuid>,
}

impl GameState {
    pub fn new(players: [PlayerState; PLAYERS]) -> Self {
        Self {
            phase: Phase::Start,
            players,
            turn: None,
            round_no: 0,
            round: RoundState::new(0),
            score_history: Default::default(),
            disconnected: HashSet::new(),
        }
    }

    pub fn seat_of(&self, player_id: Uuid) -> Option<Seat> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .map(|seat| seat as Seat)
    }

    /// Latest running totals, [Team::One, Team::Two].
    pub fn totals(&self) -> [i32; TEAMS] {
        [
            self.score_history[0].last().copied().unwrap_or(0),
            self.score_history[1].last().copied().unwrap_or(0),
        ]
    }

    /// Total cards tracked by the round; 24 at all times during a round.
    pub fn card_count(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum::<usize>()
            + self.round.table.len()
            + self.round.widow.len()
            + self.round.taken.iter().map(Vec::len).sum::<usize>()
    }

    pub fn require_turn(&self) -> Result<Seat, DomainError> {
        self.turn
            .ok_or_else(|| DomainError::invalid_state("no seat to move in the current phase"))
    }

    pub fn require_auction_winner(&self) -> Result<Seat, DomainError> {
        self.round
            .auction_winner
            .ok_or_else(|| DomainError::invalid_state("auction winner undefined"))
    }
}
