//! Fixed numeric rules of the game.

pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;

pub const DECK_SIZE: usize = 24;
/// Cards dealt to each player before the auction.
pub const HAND_SIZE: usize = 5;
/// Cards set aside for the auction winner.
pub const WIDOW_SIZE: usize = DECK_SIZE - PLAYERS * HAND_SIZE;
/// Hand size everyone holds once the winner has distributed the widow.
pub const PLAYING_HAND_SIZE: usize = 6;

/// Every auction opens here; the opening value needs no explicit bid.
pub const STARTING_BET: u16 = 100;
/// Bids move in fixed steps.
pub const BID_STEP: u16 = 10;

/// A team wins at `+WINNING_TARGET` and loses at `-WINNING_TARGET`.
pub const WINNING_TARGET: i32 = 1000;
/// A defending team at or above this running total no longer collects
/// round points.
pub const DANGER_THRESHOLD: i32 = 900;

/// Round to the nearest multiple of 10, halves up (integer arithmetic).
pub fn round_to_ten(points: u16) -> u16 {
    ((points + 5) / 10) * 10
}

/// Whether `amount` is an acceptable raise over the current bet.
pub fn valid_raise(current_bet: u16, amount: u16) -> bool {
    amount > current_bet && amount % BID_STEP == 0
}
