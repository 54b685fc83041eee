//! The human-facing mutations: each validates, applies one domain
//! operation, then lets the bot coordinator act until a human is to move.

use tracing::{info, warn};
use uuid::Uuid;

use super::{GameFlowService, StateUpdate};
use crate::domain::state::Seat;
use crate::domain::{bidding, distribution, lifecycle, tricks, Card};
use crate::errors::domain::{DomainError, NotFoundKind};

impl GameFlowService {
    /// Deal the first round and let any leading bots act.
    pub fn start_game(&self, code: &str) -> Result<Vec<StateUpdate>, DomainError> {
        let session = self.rooms.get(code)?;
        let mut session = session.lock();
        let seed = session.next_seed();
        lifecycle::start_game(&mut session.state, seed)?;
        info!(room = %code, "game started");

        let mut updates = vec![StateUpdate::of(&session.state, None)];
        self.run_bot_turns(&mut session, &mut updates);
        Ok(updates)
    }

    pub fn place_bid(
        &self,
        code: &str,
        player_id: Uuid,
        amount: u16,
    ) -> Result<Vec<StateUpdate>, DomainError> {
        let session = self.rooms.get(code)?;
        let mut session = session.lock();
        let seat = session.require_seat(player_id)?;
        bidding::place_bid(&mut session.state, seat, amount).inspect_err(|e| {
            warn!(room = %code, seat, amount, %e, "bid rejected");
        })?;
        info!(room = %code, seat, amount, "bid placed");

        let mut updates = vec![StateUpdate::of(&session.state, None)];
        self.run_bot_turns(&mut session, &mut updates);
        Ok(updates)
    }

    pub fn pass_bid(&self, code: &str, player_id: Uuid) -> Result<Vec<StateUpdate>, DomainError> {
        let session = self.rooms.get(code)?;
        let mut session = session.lock();
        let seat = session.require_seat(player_id)?;
        bidding::pass_bid(&mut session.state, seat).inspect_err(|e| {
            warn!(room = %code, seat, %e, "pass rejected");
        })?;
        info!(room = %code, seat, "passed");

        let mut updates = vec![StateUpdate::of(&session.state, None)];
        self.run_bot_turns(&mut session, &mut updates);
        Ok(updates)
    }

    /// Give one widow card away. `card_code` is the two-character card code;
    /// the target is addressed by player id.
    pub fn distribute_card(
        &self,
        code: &str,
        player_id: Uuid,
        card_code: &str,
        target_player_id: Uuid,
    ) -> Result<Vec<StateUpdate>, DomainError> {
        let session = self.rooms.get(code)?;
        let mut session = session.lock();
        let seat = session.require_seat(player_id)?;
        let card: Card = card_code.parse()?;
        let target: Seat = session.state.seat_of(target_player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Target,
                format!("player {target_player_id} is not seated in room {code}"),
            )
        })?;
        distribution::distribute_card(&mut session.state, seat, card, target).inspect_err(|e| {
            warn!(room = %code, seat, %card, target, %e, "distribution rejected");
        })?;
        info!(room = %code, seat, %card, target, "card distributed");

        let mut updates = vec![StateUpdate::of(&session.state, None)];
        self.run_bot_turns(&mut session, &mut updates);
        Ok(updates)
    }

    pub fn play_card(
        &self,
        code: &str,
        player_id: Uuid,
        card_code: &str,
    ) -> Result<Vec<StateUpdate>, DomainError> {
        let session = self.rooms.get(code)?;
        let mut session = session.lock();
        let seat = session.require_seat(player_id)?;
        let card: Card = card_code.parse()?;
        tricks::play_card(&mut session.state, seat, card).inspect_err(|e| {
            warn!(room = %code, seat, %card, %e, "play rejected");
        })?;
        info!(room = %code, seat, %card, "card played");

        let mut updates = vec![StateUpdate::of(&session.state, None)];
        self.run_bot_turns(&mut session, &mut updates);
        Ok(updates)
    }
}
