//! Widow distribution: the auction winner gives three cards away.

use crate::domain::rules::{PLAYERS, PLAYING_HAND_SIZE};
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::Card;
use crate::errors::domain::{DomainError, NotFoundKind, RuleViolationKind};

/// Give one card from the distributor's 9-card hand to another player.
/// Play begins automatically once the distributor is down to six cards.
pub fn distribute_card(
    state: &mut GameState,
    seat: Seat,
    card: Card,
    target: Seat,
) -> Result<(), DomainError> {
    if state.phase != Phase::CardDistribution {
        return Err(DomainError::rule(
            RuleViolationKind::PhaseMismatch,
            "not distributing cards",
        ));
    }
    let turn = state.require_turn()?;
    if turn != seat {
        return Err(DomainError::not_your_turn(format!(
            "seat {turn} is distributing, not seat {seat}"
        )));
    }
    if target as usize >= PLAYERS {
        return Err(DomainError::not_found(
            NotFoundKind::Target,
            format!("seat {target} does not exist"),
        ));
    }
    if target == seat {
        return Err(DomainError::rule(
            RuleViolationKind::SelfGift,
            "cannot give a card to yourself",
        ));
    }
    if state.players[target as usize].hand.len() >= PLAYING_HAND_SIZE {
        return Err(DomainError::rule(
            RuleViolationKind::TargetHandFull,
            format!("seat {target} already holds {PLAYING_HAND_SIZE} cards"),
        ));
    }

    let pos = state.players[seat as usize]
        .hand
        .iter()
        .position(|c| *c == card)
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Card, format!("{card} is not in hand"))
        })?;
    let given = state.players[seat as usize].hand.remove(pos);
    let target_hand = &mut state.players[target as usize].hand;
    target_hand.push(given);
    target_hand.sort();

    if state.players[seat as usize].hand.len() == PLAYING_HAND_SIZE {
        // Every hand must now hold six cards.
        if state.players.iter().any(|p| p.hand.len() != PLAYING_HAND_SIZE) {
            return Err(DomainError::invalid_state(
                "uneven hands after widow distribution",
            ));
        }
        state.phase = Phase::Playing;
        // The auction winner leads the first trick.
        state.turn = Some(seat);
    }
    Ok(())
}
