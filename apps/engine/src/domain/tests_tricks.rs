use crate::domain::state::{GameState, Phase, Seat, Team};
use crate::domain::test_state_helpers::{card, cards, fresh_game};
use crate::domain::tricks::{complete_take, determine_take_winner, legal_moves, play_card};
use crate::domain::{Rank, Suit};
use crate::errors::domain::{DomainError, RuleViolationKind};

/// A mid-round Playing state with hand-picked hands. The leader is also
/// recorded as auction winner so end-of-round scoring works.
fn playing_state(hands: [&str; 4], leader: Seat) -> GameState {
    let mut state = fresh_game();
    for (seat, spec) in hands.iter().enumerate() {
        state.players[seat].hand = cards(spec);
        state.players[seat].hand.sort();
    }
    state.round_no = 1;
    state.round.auction_winner = Some(leader);
    state.phase = Phase::Playing;
    state.turn = Some(leader);
    state
}

#[test]
fn leader_may_play_anything() {
    let state = playing_state(["9H AS", "JH 9C", "9S 9D", "TH JC"], 0);
    let moves = legal_moves(&state, 0);
    assert_eq!(moves.len(), 2);
}

#[test]
fn follower_must_out_rank_the_table() {
    let mut state = playing_state(["JH AS", "9H AH", "9S 9D", "TH JC"], 0);
    play_card(&mut state, 0, card("JH")).unwrap();

    // 9H cannot out-rank the jack while AH can.
    assert_eq!(legal_moves(&state, 1), cards("AH"));
    let err = play_card(&mut state, 1, card("9H")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Rule {
            kind: RuleViolationKind::IllegalPlay,
            ..
        }
    ));
    play_card(&mut state, 1, card("AH")).unwrap();
    assert_eq!(state.turn, Some(2));
}

#[test]
fn fourth_card_freezes_the_table() {
    let mut state = playing_state(["9H AS", "JH 9C", "9S 9D", "TH JC"], 0);
    play_card(&mut state, 0, card("9H")).unwrap();
    play_card(&mut state, 1, card("JH")).unwrap();
    play_card(&mut state, 2, card("9S")).unwrap();
    let outcome = play_card(&mut state, 3, card("TH")).unwrap();

    assert_eq!(state.phase, Phase::ShowTable);
    assert_eq!(outcome.trick_winner, Some(3));
    assert_eq!(state.round.trick_winner, Some(3));
    assert_eq!(state.round.table.len(), 4);
    // Nobody may play while the trick is on display.
    assert!(legal_moves(&state, 3).is_empty());
    let err = play_card(&mut state, 3, card("JC")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Rule {
            kind: RuleViolationKind::PhaseMismatch,
            ..
        }
    ));
}

#[test]
fn take_credits_the_winning_team_and_continues() {
    let mut state = playing_state(["9H AS", "JH 9C", "9S 9D", "TH JC"], 0);
    play_card(&mut state, 0, card("9H")).unwrap();
    play_card(&mut state, 1, card("JH")).unwrap();
    play_card(&mut state, 2, card("9S")).unwrap();
    play_card(&mut state, 3, card("TH")).unwrap();

    let outcome = complete_take(&mut state, 99).unwrap();
    assert_eq!(outcome.winner, 3);
    assert_eq!(outcome.points, 12);
    assert!(outcome.summary.is_none());

    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.turn, Some(3));
    assert!(state.round.table.is_empty());
    assert_eq!(state.round.trick_points[Team::Two.index()], 12);
    assert!(state.round.took_trick[Team::Two.index()]);
    assert!(!state.round.took_trick[Team::One.index()]);
}

#[test]
fn take_moves_the_trick_into_the_taken_pile() {
    let mut state = playing_state(["9H AS", "JH 9C", "9S 9D", "TH JC"], 0);
    assert_eq!(state.card_count(), 8);

    play_card(&mut state, 0, card("9H")).unwrap();
    play_card(&mut state, 1, card("JH")).unwrap();
    play_card(&mut state, 2, card("9S")).unwrap();
    play_card(&mut state, 3, card("TH")).unwrap();
    complete_take(&mut state, 99).unwrap();

    // Resolved cards stay accounted for: they move to the winners' pile
    // rather than leaving the round.
    assert_eq!(state.card_count(), 8);
    assert_eq!(state.round.taken[Team::Two.index()], cards("9H JH 9S TH"));
    assert!(state.round.taken[Team::One.index()].is_empty());
}

#[test]
fn take_requires_show_table() {
    let mut state = playing_state(["9H AS", "JH 9C", "9S 9D", "TH JC"], 0);
    let err = complete_take(&mut state, 99).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Rule {
            kind: RuleViolationKind::PhaseMismatch,
            ..
        }
    ));
}

#[test]
fn queen_lead_with_king_in_hand_sets_trump_immediately() {
    let mut state = playing_state(["QH KH", "JH 9C", "9S 9D", "TH JC"], 0);
    let outcome = play_card(&mut state, 0, card("QH")).unwrap();

    assert_eq!(outcome.meld, Some((Team::One, Suit::Hearts)));
    assert_eq!(state.round.trump, Some(Suit::Hearts));
    assert_eq!(state.round.queued_trump, None);
    assert_eq!(state.round.melds[Team::One.index()], vec![Suit::Hearts]);
}

#[test]
fn queen_lead_with_live_trump_queues_the_new_suit() {
    let mut state = playing_state(["QH KH", "JH 9C", "9S 9D", "TH JC"], 0);
    state.round.trump = Some(Suit::Spades);
    let outcome = play_card(&mut state, 0, card("QH")).unwrap();

    assert_eq!(outcome.meld, Some((Team::One, Suit::Hearts)));
    assert_eq!(state.round.trump, Some(Suit::Spades));
    assert_eq!(state.round.queued_trump, Some(Suit::Hearts));
}

#[test]
fn queen_lead_without_the_king_is_no_meld() {
    let mut state = playing_state(["QH AS", "JH 9C", "9S 9D", "TH JC"], 0);
    let outcome = play_card(&mut state, 0, card("QH")).unwrap();
    assert_eq!(outcome.meld, None);
    assert_eq!(state.round.trump, None);
}

#[test]
fn king_on_queen_melds_for_the_king_player_and_waits_a_trick() {
    // Seat 0 leads the bare queen; seat 1 answers with the king.
    let mut state = playing_state(["QH 9S", "KH 9C", "9D TS", "TH JC"], 0);
    play_card(&mut state, 0, card("QH")).unwrap();
    let outcome = play_card(&mut state, 1, card("KH")).unwrap();

    assert_eq!(outcome.meld, Some((Team::Two, Suit::Hearts)));
    assert_eq!(state.round.trump, None);
    assert_eq!(state.round.queued_trump, Some(Suit::Hearts));
    assert_eq!(state.round.melds[Team::Two.index()], vec![Suit::Hearts]);

    play_card(&mut state, 2, card("9D")).unwrap();
    play_card(&mut state, 3, card("TH")).unwrap();
    // Hearts were not trump during this trick: the ten of hearts wins it.
    assert_eq!(state.round.trick_winner, Some(3));

    complete_take(&mut state, 99).unwrap();
    // The meld goes live for the next trick.
    assert_eq!(state.round.trump, Some(Suit::Hearts));
    assert_eq!(state.round.queued_trump, None);
}

#[test]
fn trick_winner_prefers_trump_over_lead() {
    let table = [
        (0, card("AH")),
        (1, card("9S")),
        (2, card("TH")),
        (3, card("JH")),
    ];
    assert_eq!(determine_take_winner(&table, None).unwrap(), 0);
    assert_eq!(determine_take_winner(&table, Some(Suit::Spades)).unwrap(), 1);
    assert_eq!(determine_take_winner(&table, Some(Suit::Clubs)).unwrap(), 0);
}

#[test]
fn trick_winner_rejects_incomplete_tables() {
    let table = [(0, card("AH")), (1, card("9S"))];
    assert!(determine_take_winner(&table, None).is_err());
}

#[test]
fn last_take_scores_the_round() {
    let mut state = playing_state(["9H AS", "JH 9C", "9S 9D", "TH JC"], 0);
    // Trick 1: hearts, won by seat 3 with the ten.
    play_card(&mut state, 0, card("9H")).unwrap();
    play_card(&mut state, 1, card("JH")).unwrap();
    play_card(&mut state, 2, card("9S")).unwrap();
    play_card(&mut state, 3, card("TH")).unwrap();
    complete_take(&mut state, 99).unwrap();

    // Trick 2: seat 3 leads clubs and keeps it.
    play_card(&mut state, 3, card("JC")).unwrap();
    play_card(&mut state, 0, card("AS")).unwrap();
    play_card(&mut state, 1, card("9C")).unwrap();
    play_card(&mut state, 2, card("9D")).unwrap();
    let outcome = complete_take(&mut state, 99).unwrap();

    assert_eq!(outcome.winner, 3);
    let summary = outcome.summary.expect("round must be scored");
    // Bidders (team One, seat 0) took nothing: they lose the full 100 bet.
    assert_eq!(summary.bidding_team, Team::One);
    assert!(!summary.bet_made);
    assert_eq!(summary.delta[Team::One.index()], -100);
    // Defenders collected 12 + 13 points, rounded to 30.
    assert_eq!(summary.delta[Team::Two.index()], 30);
    assert!(!summary.game_over);

    // The next round is already dealt; the opener rotated.
    assert_eq!(state.phase, Phase::Auction);
    assert_eq!(state.round_no, 2);
    assert_eq!(state.totals(), [-100, 30]);
}

#[test]
fn card_rank_within_suit_follows_points() {
    // Sanity on the trick ordering backing determine_take_winner.
    assert!(Rank::Ten.points() > Rank::King.points());
    assert!(Rank::Ace.points() > Rank::Ten.points());
}
