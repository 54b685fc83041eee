//! The auction and the winner's follow-up raise.

use crate::domain::rules::{valid_raise, PLAYERS};
use crate::domain::state::{next_seat, GameState, Phase, Seat};
use crate::errors::domain::{DomainError, RuleViolationKind};

/// Raise the bet. In the auction any non-passed player may raise on their
/// turn; in IncreaseBet the winner's raise is final and moves the room
/// straight to card distribution.
pub fn place_bid(state: &mut GameState, seat: Seat, amount: u16) -> Result<(), DomainError> {
    match state.phase {
        Phase::Auction => {
            check_turn(state, seat)?;
            check_raise(state.round.bet, amount)?;
            state.round.bet = amount;
            state.turn = Some(next_active_seat(state, seat)?);
            Ok(())
        }
        Phase::IncreaseBet => {
            check_turn(state, seat)?;
            check_raise(state.round.bet, amount)?;
            state.round.bet = amount;
            // A raise is the final answer here, not a repeatable loop.
            begin_distribution(state, seat);
            Ok(())
        }
        _ => Err(DomainError::rule(
            RuleViolationKind::PhaseMismatch,
            "bidding is closed",
        )),
    }
}

/// Pass. In the auction the third pass ends it and hands the widow to the
/// remaining player; in IncreaseBet a pass declines the extra raise.
pub fn pass_bid(state: &mut GameState, seat: Seat) -> Result<(), DomainError> {
    match state.phase {
        Phase::Auction => {
            check_turn(state, seat)?;
            state.round.passed[seat as usize] = true;
            if let Some(winner) = state.round.sole_active_seat() {
                finish_auction(state, winner);
            } else {
                state.turn = Some(next_active_seat(state, seat)?);
            }
            Ok(())
        }
        Phase::IncreaseBet => {
            check_turn(state, seat)?;
            begin_distribution(state, seat);
            Ok(())
        }
        _ => Err(DomainError::rule(
            RuleViolationKind::PhaseMismatch,
            "bidding is closed",
        )),
    }
}

fn check_turn(state: &GameState, seat: Seat) -> Result<(), DomainError> {
    let turn = state.require_turn()?;
    if turn != seat {
        return Err(DomainError::not_your_turn(format!(
            "seat {turn} is to act, not seat {seat}"
        )));
    }
    Ok(())
}

fn check_raise(current_bet: u16, amount: u16) -> Result<(), DomainError> {
    if !valid_raise(current_bet, amount) {
        return Err(DomainError::rule(
            RuleViolationKind::InvalidBid,
            format!("bid {amount} must exceed {current_bet} in steps of 10"),
        ));
    }
    Ok(())
}

/// Next seat clockwise that has not passed.
fn next_active_seat(state: &GameState, from: Seat) -> Result<Seat, DomainError> {
    let mut seat = from;
    for _ in 0..PLAYERS {
        seat = next_seat(seat);
        if !state.round.passed[seat as usize] {
            return Ok(seat);
        }
    }
    Err(DomainError::invalid_state("all four seats have passed"))
}

/// Three passes in: the remaining player takes the widow and may raise once.
fn finish_auction(state: &mut GameState, winner: Seat) {
    state.round.auction_winner = Some(winner);
    let widow: Vec<_> = state.round.widow.drain(..).collect();
    let hand = &mut state.players[winner as usize].hand;
    hand.extend(widow);
    hand.sort();
    state.phase = Phase::IncreaseBet;
    state.turn = Some(winner);
}

fn begin_distribution(state: &mut GameState, winner: Seat) {
    state.phase = Phase::CardDistribution;
    state.turn = Some(winner);
}
