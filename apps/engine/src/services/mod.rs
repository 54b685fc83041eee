//! Service layer: the room registry and the game flow orchestration that
//! drives bot turns inline.

pub mod game_flow;
pub mod rooms;
