//! Bot player module - handles automated game decisions.
//!
//! This module provides:
//! - the `BotPlayer` trait for pluggable bot implementations
//! - `RandomBot`: random legal moves (seedable for tests)
//! - `GreedyBot`: a deterministic point-chasing baseline
//! - a small factory keyed by bot kind string

mod heuristic;
mod random;
mod trait_def;

pub use heuristic::GreedyBot;
pub use random::RandomBot;
pub use trait_def::{AuctionAction, BotError, BotPlayer};

/// Create a bot from its kind string.
///
/// Supported kinds: `"random"` (optionally seeded) and `"greedy"`.
/// Returns None for unrecognized kinds.
pub fn create_bot(kind: &str, seed: Option<u64>) -> Option<Box<dyn BotPlayer>> {
    match kind {
        RandomBot::NAME => Some(Box::new(RandomBot::new(seed))),
        GreedyBot::NAME => Some(Box::new(GreedyBot::new())),
        _ => None,
    }
}
