//! The inline bot loop: after any applied action, keep applying bot turns
//! until a human is to move, the room pauses in ShowTable, or the game ends.
//!
//! A misbehaving bot gets a bounded number of retries, then a forced safe
//! action (pass / first valid give / first legal play). Only when even the
//! forced action fails does the loop stop, since that means the state
//! machine itself is broken.

use tracing::{debug, error, info, warn};

use super::{GameFlowService, StateUpdate};
use crate::ai::{AuctionAction, BotPlayer};
use crate::domain::player_view::UserContext;
use crate::domain::rules::PLAYING_HAND_SIZE;
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::{bidding, distribution, tricks};
use crate::errors::domain::DomainError;
use crate::services::rooms::GameSession;

const MAX_RETRIES_PER_ACTION: usize = 3;

impl GameFlowService {
    /// Apply bot turns until a human is to move or the round pauses.
    /// Pushes one update per applied action.
    pub(super) fn run_bot_turns(&self, session: &mut GameSession, updates: &mut Vec<StateUpdate>) {
        loop {
            if !matches!(
                session.state.phase,
                Phase::Auction | Phase::IncreaseBet | Phase::CardDistribution | Phase::Playing
            ) {
                return;
            }
            let Some(seat) = session.state.turn else {
                return;
            };
            let Some(bot) = session.bots[seat as usize].as_deref() else {
                debug!(room = %session.code, seat, "human to move, bot loop done");
                return;
            };

            if !apply_one_bot_turn(&session.code, &mut session.state, seat, bot) {
                return;
            }
            updates.push(StateUpdate::of(&session.state, None));
        }
    }
}

/// One bot decision, applied. Returns false when the room is wedged.
fn apply_one_bot_turn(code: &str, state: &mut GameState, seat: Seat, bot: &dyn BotPlayer) -> bool {
    for attempt in 0..MAX_RETRIES_PER_ACTION {
        match decide_and_apply(state, seat, bot) {
            Ok(action) => {
                info!(room = %code, seat, action, attempt, "bot acted");
                return true;
            }
            Err(e) => {
                warn!(room = %code, seat, attempt, %e, "bot action failed");
            }
        }
    }

    warn!(room = %code, seat, "bot retries exhausted, forcing a safe action");
    match force_safe_action(state, seat) {
        Ok(action) => {
            info!(room = %code, seat, action, "forced action applied");
            true
        }
        Err(e) => {
            error!(room = %code, seat, %e, "forced action failed, room is wedged");
            false
        }
    }
}

fn decide_and_apply(
    state: &mut GameState,
    seat: Seat,
    bot: &dyn BotPlayer,
) -> Result<&'static str, DomainError> {
    let view = UserContext::for_seat(state, seat);
    match state.phase {
        Phase::Auction | Phase::IncreaseBet => match bot.choose_auction(&view)? {
            AuctionAction::Raise(amount) => {
                bidding::place_bid(state, seat, amount)?;
                Ok("raise")
            }
            AuctionAction::Pass => {
                bidding::pass_bid(state, seat)?;
                Ok("pass")
            }
        },
        Phase::CardDistribution => {
            let (card, target) = bot.choose_distribution(&view)?;
            distribution::distribute_card(state, seat, card, target)?;
            Ok("give")
        }
        Phase::Playing => {
            let card = bot.choose_play(&view)?;
            tricks::play_card(state, seat, card)?;
            Ok("play")
        }
        _ => Err(DomainError::invalid_state(
            "bot turn outside an actionable phase",
        )),
    }
}

/// The always-legal fallback for a seat that must act.
fn force_safe_action(state: &mut GameState, seat: Seat) -> Result<&'static str, DomainError> {
    match state.phase {
        Phase::Auction | Phase::IncreaseBet => {
            bidding::pass_bid(state, seat)?;
            Ok("pass")
        }
        Phase::CardDistribution => {
            let card = *state.players[seat as usize]
                .hand
                .first()
                .ok_or_else(|| DomainError::invalid_state("distributor with an empty hand"))?;
            let target = (0..4u8)
                .find(|&t| {
                    t != seat && state.players[t as usize].hand.len() < PLAYING_HAND_SIZE
                })
                .ok_or_else(|| DomainError::invalid_state("no open distribution target"))?;
            distribution::distribute_card(state, seat, card, target)?;
            Ok("give")
        }
        Phase::Playing => {
            let moves = tricks::legal_moves(state, seat);
            let card = *moves
                .first()
                .ok_or_else(|| DomainError::invalid_state("player to move has no legal card"))?;
            tricks::play_card(state, seat, card)?;
            Ok("play")
        }
        _ => Err(DomainError::invalid_state(
            "forced action outside an actionable phase",
        )),
    }
}
