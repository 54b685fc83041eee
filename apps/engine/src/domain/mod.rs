//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod distribution;
pub mod lifecycle;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;


#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{can_play, hand_has_suit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal, full_deck};
pub use state::{next_seat, team_of, teammate, GameState, Phase, Seat, Team};
pub use tricks::{legal_moves, PlayOutcome, TakeOutcome};
