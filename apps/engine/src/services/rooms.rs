//! Room registry: one `GameSession` per room code, owned by a single
//! `RoomManager` with an explicit create/get/remove lifecycle.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;
use uuid::Uuid;

use crate::ai::{create_bot, BotPlayer};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, PlayerState, Seat};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::utils::join_code::generate_join_code;

/// A player joining a new room. `bot` names a bot kind from
/// [`crate::ai::create_bot`]; None seats a human.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub id: Uuid,
    pub name: String,
    pub bot: Option<String>,
}

impl NewPlayer {
    pub fn human(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            bot: None,
        }
    }

    pub fn bot(name: &str, kind: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            bot: Some(kind.to_string()),
        }
    }
}

/// One room's complete mutable state. All access goes through the per-room
/// mutex handed out by [`RoomManager`]; nothing here is internally
/// reentrant-safe.
pub struct GameSession {
    pub code: String,
    pub state: GameState,
    /// Decision maker per seat; None for humans.
    pub bots: [Option<Box<dyn BotPlayer>>; PLAYERS],
    /// Per-room RNG feeding deal seeds, so a seeded room replays exactly.
    seed_rng: ChaCha8Rng,
}

impl GameSession {
    fn new(code: String, players: Vec<NewPlayer>, seed: u64) -> Result<Self, DomainError> {
        let players: [NewPlayer; PLAYERS] = players.try_into().map_err(|v: Vec<NewPlayer>| {
            DomainError::invalid_state(format!("a room needs exactly 4 players, got {}", v.len()))
        })?;

        let mut bots: [Option<Box<dyn BotPlayer>>; PLAYERS] = Default::default();
        for (seat, spec) in players.iter().enumerate() {
            if let Some(kind) = &spec.bot {
                let bot = create_bot(kind, Some(seed ^ seat as u64)).ok_or_else(|| {
                    DomainError::not_found(NotFoundKind::Player, format!("unknown bot kind {kind}"))
                })?;
                bots[seat] = Some(bot);
            }
        }

        let seats = players.map(|p| PlayerState {
            id: p.id,
            name: p.name,
            hand: Vec::new(),
            is_bot: p.bot.is_some(),
        });

        Ok(Self {
            code,
            state: GameState::new(seats),
            bots,
            seed_rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Next deal seed from the room's own RNG stream.
    pub fn next_seed(&mut self) -> u64 {
        self.seed_rng.next_u64()
    }

    /// Seat of a player id, or `NotFound`.
    pub fn require_seat(&self, player_id: Uuid) -> Result<Seat, DomainError> {
        self.state.seat_of(player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("player {player_id} is not seated in room {}", self.code),
            )
        })
    }

    /// Whether any human seat remains.
    pub fn has_humans(&self) -> bool {
        self.state.players.iter().any(|p| !p.is_bot)
    }

    /// Replace a seat's occupant with a bot, scrubbing the old identity.
    pub fn seat_to_bot(&mut self, seat: Seat, bot: Box<dyn BotPlayer>) {
        let player = &mut self.state.players[seat as usize];
        let old_id = player.id;
        player.id = Uuid::new_v4();
        player.name = format!("bot-{seat}");
        player.is_bot = true;
        self.bots[seat as usize] = Some(bot);
        self.state.disconnected.remove(&old_id);
    }
}

pub type SharedSession = Arc<Mutex<GameSession>>;

/// The process-wide room registry. Rooms are inserted on creation and
/// removed when the last human leaves.
#[derive(Default)]
pub struct RoomManager {
    rooms: DashMap<String, SharedSession>,
}

impl RoomManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a room for exactly four players and return its join code.
    /// `seed` fixes the room's whole deal stream for replayable games.
    pub fn create_room(
        &self,
        players: Vec<NewPlayer>,
        seed: Option<u64>,
    ) -> Result<String, DomainError> {
        let seed = seed.unwrap_or_else(rand::random);
        // Regenerate on the off chance of a code collision.
        let code = loop {
            let candidate = generate_join_code();
            if !self.rooms.contains_key(&candidate) {
                break candidate;
            }
        };
        let session = GameSession::new(code.clone(), players, seed)?;
        info!(room = %code, "room created");
        self.rooms.insert(code.clone(), Arc::new(Mutex::new(session)));
        Ok(code)
    }

    pub fn get(&self, code: &str) -> Result<SharedSession, DomainError> {
        self.rooms
            .get(code)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Room, format!("no room with code {code}"))
            })
    }

    /// Tear a room down. Idempotent.
    pub fn remove(&self, code: &str) {
        if self.rooms.remove(code).is_some() {
            info!(room = %code, "room removed");
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
