//! Domain-level error type used across the engine.
//!
//! This error type is transport-agnostic. Every public operation returns
//! `Result<_, DomainError>`; a rejected operation leaves room state
//! untouched. `InvalidState` marks an internal invariant break and should be
//! treated as fatal for the room rather than retried.

use thiserror::Error;

/// Rule violations: the caller attempted something the game rules forbid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuleViolationKind {
    /// Bid not above the current bet, or not on the bid step.
    InvalidBid,
    /// Card play rejected by the legality oracle.
    IllegalPlay,
    /// Operation not valid in the room's current phase.
    PhaseMismatch,
    /// Distributor tried to give a card to themselves.
    SelfGift,
    /// Distribution target already holds a full hand.
    TargetHandFull,
    /// Only the auction winner may act here.
    NotAuctionWinner,
}

/// Missing resources, in domain terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
    Player,
    Card,
    Target,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Illegal bid, card play, or wrong phase for the attempted operation.
    #[error("rule violation ({kind:?}): {detail}")]
    Rule {
        kind: RuleViolationKind,
        detail: String,
    },

    /// The acting player is not the player to move.
    #[error("not your turn: {0}")]
    NotYourTurn(String),

    /// Room, player, card, or target missing.
    #[error("not found ({kind:?}): {detail}")]
    NotFound {
        kind: NotFoundKind,
        detail: String,
    },

    /// Internal consistency failure; a bug, fatal for the room.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn rule(kind: RuleViolationKind, detail: impl Into<String>) -> Self {
        Self::Rule {
            kind,
            detail: detail.into(),
        }
    }

    pub fn not_your_turn(detail: impl Into<String>) -> Self {
        Self::NotYourTurn(detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            detail: detail.into(),
        }
    }

    pub fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }

    /// Whether this error indicates an engine bug rather than caller misuse.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}
