//! Trick play: card legality, meld announcements, and trick resolution.

use crate::domain::cards_logic::can_play;
use crate::domain::lifecycle::begin_next_round;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{score_round, RoundSummary};
use crate::domain::state::{next_seat, team_of, GameState, Phase, Seat, Team};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, NotFoundKind, RuleViolationKind};

/// What a single `play_card` call changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Set when this play announced or queued a trump meld.
    pub meld: Option<(Team, Suit)>,
    /// Set when this was the fourth card: the room is now in ShowTable and
    /// this seat won the trick on display.
    pub trick_winner: Option<Seat>,
}

/// What `complete_take` resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeOutcome {
    pub winner: Seat,
    pub points: u16,
    /// Present when this take emptied all hands and ended the round.
    pub summary: Option<RoundSummary>,
}

/// Compute the cards a seat may legally play right now. Empty outside the
/// Playing phase. Turn enforcement is left to `play_card`.
pub fn legal_moves(state: &GameState, seat: Seat) -> Vec<Card> {
    if state.phase != Phase::Playing {
        return Vec::new();
    }
    let hand = &state.players[seat as usize].hand;
    let Some(&(_, lead)) = state.round.table.first() else {
        return hand.clone();
    };
    let table_cards = state.round.table_cards();
    hand.iter()
        .copied()
        .filter(|&c| can_play(c, lead, hand, &table_cards, state.round.trump))
        .collect()
}

/// Play a card onto the table, enforcing phase, turn, and the legality
/// oracle; detects melds; pauses the room in ShowTable on the fourth card.
pub fn play_card(state: &mut GameState, seat: Seat, card: Card) -> Result<PlayOutcome, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::rule(
            RuleViolationKind::PhaseMismatch,
            "not in trick play",
        ));
    }
    let turn = state.require_turn()?;
    if turn != seat {
        return Err(DomainError::not_your_turn(format!(
            "seat {turn} is to play, not seat {seat}"
        )));
    }

    let hand = &state.players[seat as usize].hand;
    let pos = hand.iter().position(|c| *c == card).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Card, format!("{card} is not in hand"))
    })?;

    if let Some(&(_, lead)) = state.round.table.first() {
        let table_cards = state.round.table_cards();
        if !can_play(card, lead, hand, &table_cards, state.round.trump) {
            return Err(DomainError::rule(
                RuleViolationKind::IllegalPlay,
                format!("{card} is not a legal play"),
            ));
        }
    }

    let meld = detect_meld(state, seat, card);

    state.players[seat as usize].hand.remove(pos);
    if let Some((team, suit)) = meld {
        let melds = &mut state.round.melds[team.index()];
        if !melds.contains(&suit) {
            melds.push(suit);
        }
        // Leading the Queen announces trump for this very trick, unless a
        // trump is already live; a King completion always waits a trick.
        if state.round.table.is_empty() && state.round.trump.is_none() {
            state.round.trump = Some(suit);
        } else {
            state.round.queued_trump = Some(suit);
        }
    }
    state.round.table.push((seat, card));

    if state.round.table.len() == PLAYERS {
        // Winner determination uses the trump live during this trick; the
        // queued suit only applies at `complete_take`.
        let winner = determine_take_winner(&state.round.table, state.round.trump)?;
        state.round.trick_winner = Some(winner);
        state.phase = Phase::ShowTable;
        // The turn queue is deliberately not advanced here.
        return Ok(PlayOutcome {
            meld,
            trick_winner: Some(winner),
        });
    }

    state.turn = Some(next_seat(seat));
    Ok(PlayOutcome {
        meld,
        trick_winner: None,
    })
}

/// A meld is announced by leading a Queen while holding the same-suit King,
/// or by playing a King directly onto another player's same-suit Queen.
fn detect_meld(state: &GameState, seat: Seat, card: Card) -> Option<(Team, Suit)> {
    let hand = &state.players[seat as usize].hand;
    if state.round.table.is_empty() {
        let king = Card::new(Rank::King, card.suit);
        if card.rank == Rank::Queen && hand.contains(&king) {
            return Some((team_of(seat), card.suit));
        }
    } else if let Some(&(_, last)) = state.round.table.last() {
        if card.rank == Rank::King && last.rank == Rank::Queen && last.suit == card.suit {
            return Some((team_of(seat), card.suit));
        }
    }
    None
}

/// Winner of a complete trick: the highest-point trump if any trump was
/// played, otherwise the highest-point card of the suit led. Ties cannot
/// occur in a single 24-card deck.
pub fn determine_take_winner(
    table: &[(Seat, Card)],
    trump: Option<Suit>,
) -> Result<Seat, DomainError> {
    if table.len() != PLAYERS {
        return Err(DomainError::invalid_state(format!(
            "trick resolution with {} cards on the table",
            table.len()
        )));
    }
    let deciding_suit = match trump {
        Some(t) if table.iter().any(|(_, c)| c.suit == t) => t,
        _ => table[0].1.suit,
    };
    table
        .iter()
        .filter(|(_, c)| c.suit == deciding_suit)
        .max_by_key(|(_, c)| c.points())
        .map(|(seat, _)| *seat)
        .ok_or_else(|| DomainError::invalid_state("trick contains no card of the deciding suit"))
}

/// Resolve the trick on display: credit the winner's team, promote the
/// queued trump, clear the table, and either continue play from the winner
/// or — once all hands are empty — score the round and roll over.
///
/// `next_round_seed` feeds the next deal when the round ends without ending
/// the game.
pub fn complete_take(state: &mut GameState, next_round_seed: u64) -> Result<TakeOutcome, DomainError> {
    if state.phase != Phase::ShowTable {
        return Err(DomainError::rule(
            RuleViolationKind::PhaseMismatch,
            "no trick is waiting to be taken",
        ));
    }
    let winner = state
        .round
        .trick_winner
        .ok_or_else(|| DomainError::invalid_state("ShowTable without a resolved winner"))?;
    if state.round.table.len() != PLAYERS {
        return Err(DomainError::invalid_state(
            "ShowTable with an incomplete trick",
        ));
    }

    let points: u16 = state.round.table.iter().map(|(_, c)| c.points()).sum();
    let team = team_of(winner);
    state.round.trick_points[team.index()] += points;
    state.round.took_trick[team.index()] = true;

    if let Some(suit) = state.round.queued_trump.take() {
        state.round.trump = Some(suit);
    }
    // The trick moves into the winning team's taken pile; nothing leaves
    // the round until it is scored.
    let trick: Vec<Card> = state.round.table.drain(..).map(|(_, c)| c).collect();
    state.round.taken[team.index()].extend(trick);
    state.round.trick_winner = None;

    let hands_empty = state.players.iter().all(|p| p.hand.is_empty());
    if !hands_empty {
        state.phase = Phase::Playing;
        state.turn = Some(winner);
        return Ok(TakeOutcome {
            winner,
            points,
            summary: None,
        });
    }

    let summary = score_round(state)?;
    if summary.game_over {
        state.phase = Phase::GameOver;
        state.turn = None;
    } else {
        begin_next_round(state, next_round_seed);
    }
    Ok(TakeOutcome {
        winner,
        points,
        summary: Some(summary),
    })
}
