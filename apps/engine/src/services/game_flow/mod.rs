//! Game flow orchestration - bridges the pure domain layer with the room
//! registry and processes automated turns inline.
//!
//! Every accepted mutation yields one [`StateUpdate`] per applied action
//! (the caller's own action plus each bot action that followed), in order,
//! so a transport layer can push them verbatim. The loop stops whenever a
//! human is to move, the room pauses in ShowTable, or the game ends; pacing
//! of `complete_take` is the external driver's concern.

mod bot_coordinator;
mod player_actions;
#[cfg(test)]
mod tests_flow;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::player_view::{GameContext, RoundSummary, UserContext};
use crate::domain::state::{GameState, Phase};
use crate::errors::domain::DomainError;
use crate::services::rooms::{NewPlayer, RoomManager};

/// One emitted state change: the public context after an applied action,
/// plus the round settlement when that action ended a round.
#[derive(Debug, Clone, Serialize)]
pub struct StateUpdate {
    pub context: GameContext,
    pub summary: Option<RoundSummary>,
}

impl StateUpdate {
    fn of(state: &GameState, summary: Option<RoundSummary>) -> Self {
        Self {
            context: GameContext::from_state(state),
            summary,
        }
    }
}

/// Game flow service: the single entry point for everything a transport
/// layer does to a room.
#[derive(Default)]
pub struct GameFlowService {
    rooms: RoomManager,
}

impl GameFlowService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooms(&self) -> &RoomManager {
        &self.rooms
    }

    /// Create a room and return its join code. A fixed `seed` makes the
    /// room's entire deal stream reproducible.
    pub fn create_room(
        &self,
        players: Vec<NewPlayer>,
        seed: Option<u64>,
    ) -> Result<String, DomainError> {
        self.rooms.create_room(players, seed)
    }

    /// Mark a player disconnected. Purely informational: the game is not
    /// blocked and the seat keeps acting (or being acted for) as before.
    pub fn pause_game(&self, code: &str, player_id: Uuid) -> Result<StateUpdate, DomainError> {
        let session = self.rooms.get(code)?;
        let mut session = session.lock();
        session.require_seat(player_id)?;
        session.state.disconnected.insert(player_id);
        info!(room = %code, %player_id, "player paused");
        Ok(StateUpdate::of(&session.state, None))
    }

    /// Clear a player's disconnected flag. The second value is true once no
    /// player remains disconnected, i.e. the room is truly resumed.
    pub fn try_resume_game(
        &self,
        code: &str,
        player_id: Uuid,
    ) -> Result<(StateUpdate, bool), DomainError> {
        let session = self.rooms.get(code)?;
        let mut session = session.lock();
        session.require_seat(player_id)?;
        session.state.disconnected.remove(&player_id);
        let resumed = session.state.disconnected.is_empty();
        info!(room = %code, %player_id, resumed, "player reconnected");
        Ok((StateUpdate::of(&session.state, None), resumed))
    }

    /// A player leaves for good: their identity is scrubbed and the seat is
    /// taken over by a bot. The room is torn down once no humans remain.
    pub fn abandon_game(
        &self,
        code: &str,
        player_id: Uuid,
    ) -> Result<Vec<StateUpdate>, DomainError> {
        let session = self.rooms.get(code)?;
        let mut session = session.lock();
        let seat = session.require_seat(player_id)?;
        session.seat_to_bot(seat, Box::new(crate::ai::RandomBot::new(None)));
        info!(room = %code, seat, "seat abandoned and handed to a bot");

        if !session.has_humans() {
            drop(session);
            self.rooms.remove(code);
            debug!(room = %code, "no humans left, room torn down");
            return Ok(Vec::new());
        }

        let mut updates = vec![StateUpdate::of(&session.state, None)];
        self.run_bot_turns(&mut session, &mut updates);
        Ok(updates)
    }

    /// Public projection of a room's state.
    pub fn game_context(&self, code: &str) -> Result<GameContext, DomainError> {
        let session = self.rooms.get(code)?;
        let session = session.lock();
        Ok(GameContext::from_state(&session.state))
    }

    /// One player's private projection: own hand plus public counts.
    pub fn user_context(&self, code: &str, player_id: Uuid) -> Result<UserContext, DomainError> {
        let session = self.rooms.get(code)?;
        let session = session.lock();
        let seat = session.require_seat(player_id)?;
        Ok(UserContext::for_seat(&session.state, seat))
    }

    /// Resolve the trick on display. Called by the external driver that
    /// owns the ShowTable pacing delay.
    pub fn complete_take(&self, code: &str) -> Result<Vec<StateUpdate>, DomainError> {
        let session = self.rooms.get(code)?;
        let mut session = session.lock();
        let seed = session.next_seed();
        let outcome = crate::domain::tricks::complete_take(&mut session.state, seed)?;
        info!(
            room = %code,
            winner = outcome.winner,
            points = outcome.points,
            round_over = outcome.summary.is_some(),
            "trick taken"
        );
        let mut updates = vec![StateUpdate::of(&session.state, outcome.summary)];
        if session.state.phase == Phase::GameOver {
            return Ok(updates);
        }
        self.run_bot_turns(&mut session, &mut updates);
        Ok(updates)
    }
}
