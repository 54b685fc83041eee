//! Bot player trait definition.

use std::fmt;

use crate::domain::player_view::UserContext;
use crate::domain::state::Seat;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// What a bot wants to do on its auction turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionAction {
    Raise(u16),
    Pass,
}

/// Errors that can occur during bot decision-making.
#[derive(Debug)]
pub enum BotError {
    /// The bot hit an internal error.
    Internal(String),
    /// The bot produced or faced an invalid move set.
    InvalidMove(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::Internal(msg) => write!(f, "bot internal error: {msg}"),
            BotError::InvalidMove(msg) => write!(f, "bot invalid move: {msg}"),
        }
    }
}

impl std::error::Error for BotError {}

impl From<BotError> for DomainError {
    fn from(err: BotError) -> Self {
        DomainError::invalid_state(err.to_string())
    }
}

/// Trait for automated players.
///
/// Implementations receive the same per-seat view a human client would and
/// must choose a legal action. Query the view's helpers (`legal_plays()`,
/// `min_raise()`, `distribution_targets()`) instead of re-deriving rules.
///
/// Methods take `&self`; stateful bots use interior mutability so one
/// instance can serve a seat for a whole game.
pub trait BotPlayer: Send + Sync {
    /// Decide whether to raise or pass (Auction and IncreaseBet turns).
    fn choose_auction(&self, view: &UserContext) -> Result<AuctionAction, BotError>;

    /// Pick a card from the 9-card hand and a seat to give it to.
    fn choose_distribution(&self, view: &UserContext) -> Result<(Card, Seat), BotError>;

    /// Pick a card to play onto the trick.
    fn choose_play(&self, view: &UserContext) -> Result<Card, BotError>;
}
