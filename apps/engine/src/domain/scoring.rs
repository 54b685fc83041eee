//! End-of-round scoring and the running score history.

use serde::Serialize;

use crate::domain::rules::{round_to_ten, DANGER_THRESHOLD, TEAMS, WINNING_TARGET};
use crate::domain::state::{team_of, GameState, Team};
use crate::errors::domain::DomainError;

/// Meld bonus a team earned this round. Zero until the team has won a trick.
pub fn meld_bonus(state: &GameState, team: Team) -> u16 {
    if !state.round.took_trick[team.index()] {
        return 0;
    }
    state.round.melds[team.index()]
        .iter()
        .map(|s| s.meld_value())
        .sum()
}

/// The settled result of one round, per team and overall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub round_no: u32,
    pub bet: u16,
    pub bidding_team: Team,
    /// Trick points each team actually collected.
    pub trick_points: [u16; TEAMS],
    /// Meld bonuses that counted (trick-gated).
    pub meld_bonus: [u16; TEAMS],
    /// Whether the bidding team covered its bet.
    pub bet_made: bool,
    /// Signed score change applied to each team.
    pub delta: [i32; TEAMS],
    /// Running totals after this round.
    pub totals: [i32; TEAMS],
    pub game_over: bool,
    /// Set when the game ended: the team at +1000, or the opponents of the
    /// team that fell to -1000.
    pub winning_team: Option<Team>,
}

impl RoundSummary {
    /// The summary reshaped for one team's point of view.
    pub fn for_team(&self, team: Team) -> TeamRoundSummary {
        let us = team.index();
        let them = team.other().index();
        TeamRoundSummary {
            round_no: self.round_no,
            bet: self.bet,
            we_bid: self.bidding_team == team,
            bet_made: self.bet_made,
            our_trick_points: self.trick_points[us],
            their_trick_points: self.trick_points[them],
            our_meld_bonus: self.meld_bonus[us],
            our_delta: self.delta[us],
            our_total: self.totals[us],
            their_total: self.totals[them],
            game_over: self.game_over,
            we_won: self.winning_team == Some(team),
        }
    }
}

/// `RoundSummary` from one team's perspective, as shown to that team's
/// players and bots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRoundSummary {
    pub round_no: u32,
    pub bet: u16,
    pub we_bid: bool,
    pub bet_made: bool,
    pub our_trick_points: u16,
    pub their_trick_points: u16,
    pub our_meld_bonus: u16,
    pub our_delta: i32,
    pub our_total: i32,
    pub their_total: i32,
    pub game_over: bool,
    pub we_won: bool,
}

/// Settle the round: the bidding team banks its realized points (trick
/// points plus eligible melds) when they cover the bet and forfeits the
/// full bet when they do not; defenders collect their rounded points unless
/// already at the danger threshold. Pushes the new totals onto the score
/// history and reports whether the game ended.
pub fn score_round(state: &mut GameState) -> Result<RoundSummary, DomainError> {
    let winner = state.require_auction_winner()?;
    let bidding_team = team_of(winner);
    let defending_team = bidding_team.other();
    let bet = state.round.bet;

    let bonuses = [
        meld_bonus(state, Team::One),
        meld_bonus(state, Team::Two),
    ];
    let trick_points = state.round.trick_points;

    let bidders = bidding_team.index();
    let defenders = defending_team.index();

    let realized = i32::from(trick_points[bidders]) + i32::from(bonuses[bidders]);
    let bet_made = realized >= i32::from(bet);

    let mut delta = [0i32; TEAMS];
    // The bet is a contract floor: making it banks the realized points,
    // missing it forfeits the whole bet.
    delta[bidders] = if bet_made { realized } else { -i32::from(bet) };

    let totals_before = state.totals();
    // A defending team already at 900 or more scores nothing this round.
    if totals_before[defenders] < DANGER_THRESHOLD {
        delta[defenders] =
            i32::from(round_to_ten(trick_points[defenders])) + i32::from(bonuses[defenders]);
    }

    let totals = [
        totals_before[0] + delta[0],
        totals_before[1] + delta[1],
    ];
    state.score_history[0].push(totals[0]);
    state.score_history[1].push(totals[1]);

    let winning_team = if totals[0] >= WINNING_TARGET || totals[1] <= -WINNING_TARGET {
        Some(Team::One)
    } else if totals[1] >= WINNING_TARGET || totals[0] <= -WINNING_TARGET {
        Some(Team::Two)
    } else {
        None
    };

    Ok(RoundSummary {
        round_no: state.round_no,
        bet,
        bidding_team,
        trick_points,
        meld_bonus: bonuses,
        bet_made,
        delta,
        totals,
        game_over: winning_team.is_some(),
        winning_team,
    })
}
