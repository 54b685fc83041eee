//! Round lifecycle: starting the game and rolling over to the next round.

use crate::domain::dealing::deal;
use crate::domain::state::{next_seat, GameState, Phase, RoundState, Seat};
use crate::errors::domain::{DomainError, RuleViolationKind};

/// Deal the first round. Seat 0 opens the first auction.
pub fn start_game(state: &mut GameState, seed: u64) -> Result<(), DomainError> {
    if state.phase != Phase::Start {
        return Err(DomainError::rule(
            RuleViolationKind::PhaseMismatch,
            "game already started",
        ));
    }
    begin_round(state, 0, seed);
    Ok(())
}

/// Roll over after a completed round: seating rotates by one, so the auction
/// opener is the seat after the previous round's opener.
pub fn begin_next_round(state: &mut GameState, seed: u64) {
    let leader = next_seat(state.round.round_leader);
    begin_round(state, leader, seed);
}

fn begin_round(state: &mut GameState, leader: Seat, seed: u64) {
    let (hands, widow) = deal(seed);
    for (player, hand) in state.players.iter_mut().zip(hands) {
        player.hand = hand;
    }
    let mut round = RoundState::new(leader);
    round.widow = widow;
    state.round = round;
    state.round_no += 1;
    state.phase = Phase::Auction;
    state.turn = Some(leader);
}
