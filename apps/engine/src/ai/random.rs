//! Random bot - makes random legal moves.
//!
//! Reference implementation of the [`BotPlayer`](super::BotPlayer) trait:
//! thread-safe interior mutability via `Mutex<StdRng>`, deterministic when
//! seeded, and always legal because every choice comes from the view's
//! legal-move helpers.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AuctionAction, BotError, BotPlayer};
use crate::domain::player_view::UserContext;
use crate::domain::state::Seat;
use crate::domain::Card;

/// Bids kept below this stay out of hopeless contracts.
const RAISE_CEILING: u16 = 200;

/// Bot that chooses uniformly at random among legal moves.
pub struct RandomBot {
    /// Trait methods take `&self`, so the RNG sits behind a mutex.
    rng: Mutex<StdRng>,
}

impl RandomBot {
    pub const NAME: &'static str = "random";

    /// `Some(seed)` gives reproducible behavior for tests; `None` draws from
    /// system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn rng(&self) -> Result<std::sync::MutexGuard<'_, StdRng>, BotError> {
        self.rng
            .lock()
            .map_err(|e| BotError::Internal(format!("rng lock poisoned: {e}")))
    }
}

impl BotPlayer for RandomBot {
    fn choose_auction(&self, view: &UserContext) -> Result<AuctionAction, BotError> {
        if !view.may_bid() {
            return Err(BotError::InvalidMove("not our auction turn".into()));
        }
        let raise = view.min_raise();
        if raise > RAISE_CEILING {
            return Ok(AuctionAction::Pass);
        }
        let mut rng = self.rng()?;
        if rng.gen_bool(1.0 / 3.0) {
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
        let mut rng = self.rng()?;
        let card = view.hand[rng.gen_range(0..view.hand.len())];
        let target = targets[rng.gen_range(0..targets.len())];
        Ok((card, target))
    }

    fn choose_play(&self, view: &UserContext) -> Result<Card, BotError> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Err(BotError::InvalidMove("no legal plays".into()));
        }
        let mut rng = self.rng()?;
        Ok(legal[rng.gen_range(0..legal.len())])
    }
}
