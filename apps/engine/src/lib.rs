#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for the four-player, two-team "Thousand" (Tysiac) card game:
//! auction bidding, widow distribution, trick play with trump melds, and
//! cumulative team scoring to ±1000.
//!
//! The `domain` layer is pure and synchronous; the `services` layer owns the
//! per-room registry and drives automated (bot) turns inline. Callers must
//! serialize operations per room — the per-room mutex handed out by
//! [`services::rooms::RoomManager`] is that guard.

pub mod ai;
pub mod domain;
pub mod errors;
pub mod services;
pub mod utils;


// Re-exports for public API
pub use domain::player_view::{GameContext, RoundSummary, UserContext};
pub use domain::{Card, Rank, Suit, Team};
pub use errors::DomainError;
pub use services::game_flow::{GameFlowService, StateUpdate};
pub use services::rooms::{NewPlayer, RoomManager};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
