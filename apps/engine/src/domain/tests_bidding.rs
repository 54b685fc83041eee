use crate::domain::bidding::{pass_bid, place_bid};
use crate::domain::lifecycle::start_game;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::fresh_game;
use crate::errors::domain::{DomainError, RuleViolationKind};

#[test]
fn auction_rotates_clockwise_between_raises() {
    let mut state = fresh_game();
    start_game(&mut state, 1).unwrap();

    assert_eq!(state.turn, Some(0));
    place_bid(&mut state, 0, 110).unwrap();
    assert_eq!(state.turn, Some(1));
    place_bid(&mut state, 1, 120).unwrap();
    assert_eq!(state.turn, Some(2));
    pass_bid(&mut state, 2).unwrap();
    assert_eq!(state.turn, Some(3));
    // Seat 2 is out; after seat 3 the turn skips back to seat 0.
    place_bid(&mut state, 3, 130).unwrap();
    assert_eq!(state.turn, Some(0));
    pass_bid(&mut state, 0).unwrap();
    assert_eq!(state.turn, Some(1));
    assert_eq!(state.round.bet, 130);
    assert_eq!(state.phase, Phase::Auction);
}

#[test]
fn out_of_turn_bid_is_rejected() {
    let mut state = fresh_game();
    start_game(&mut state, 1).unwrap();

    let err = place_bid(&mut state, 2, 110).unwrap_err();
    assert!(matches!(err, DomainError::NotYourTurn(_)));
    let err = pass_bid(&mut state, 3).unwrap_err();
    assert!(matches!(err, DomainError::NotYourTurn(_)));
}

#[test]
fn raises_must_exceed_in_steps_of_ten() {
    let mut state = fresh_game();
    start_game(&mut state, 1).unwrap();

    for bad in [100, 90, 105, 111] {
        let err = place_bid(&mut state, 0, bad).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Rule {
                kind: RuleViolationKind::InvalidBid,
                ..
            }
        ));
    }
    place_bid(&mut state, 0, 110).unwrap();
    // A jump over several steps is fine.
    place_bid(&mut state, 1, 200).unwrap();
}

#[test]
fn three_passes_hand_the_widow_to_the_survivor() {
    let mut state = fresh_game();
    start_game(&mut state, 1).unwrap();

    pass_bid(&mut state, 0).unwrap();
    pass_bid(&mut state, 1).unwrap();
    pass_bid(&mut state, 2).unwrap();

    // Seat 3 never had to bid: it wins at the opening 100.
    assert_eq!(state.phase, Phase::IncreaseBet);
    assert_eq!(state.round.auction_winner, Some(3));
    assert_eq!(state.turn, Some(3));
    assert_eq!(state.round.bet, 100);
    assert_eq!(state.players[3].hand.len(), 9);
    assert!(state.round.widow.is_empty());
    // Merged hand stays sorted.
    let mut sorted = state.players[3].hand.clone();
    sorted.sort();
    assert_eq!(state.players[3].hand, sorted);
}

#[test]
fn winner_may_raise_once_then_distributes() {
    let mut state = fresh_game();
    start_game(&mut state, 1).unwrap();

    place_bid(&mut state, 0, 120).unwrap();
    pass_bid(&mut state, 1).unwrap();
    pass_bid(&mut state, 2).unwrap();
    pass_bid(&mut state, 3).unwrap();
    assert_eq!(state.phase, Phase::IncreaseBet);
    assert_eq!(state.round.auction_winner, Some(0));

    place_bid(&mut state, 0, 150).unwrap();
    assert_eq!(state.phase, Phase::CardDistribution);
    assert_eq!(state.round.bet, 150);
    assert_eq!(state.turn, Some(0));
}

#[test]
fn winner_may_decline_the_extra_raise() {
    let mut state = fresh_game();
    start_game(&mut state, 1).unwrap();

    pass_bid(&mut state, 0).unwrap();
    pass_bid(&mut state, 1).unwrap();
    pass_bid(&mut state, 2).unwrap();
    pass_bid(&mut state, 3).unwrap();

    assert_eq!(state.phase, Phase::CardDistribution);
    assert_eq!(state.round.bet, 100);
    assert_eq!(state.turn, Some(3));
}

#[test]
fn lowering_the_bet_in_increase_bet_is_rejected() {
    let mut state = fresh_game();
    start_game(&mut state, 1).unwrap();

    place_bid(&mut state, 0, 140).unwrap();
    pass_bid(&mut state, 1).unwrap();
    pass_bid(&mut state, 2).unwrap();
    pass_bid(&mut state, 3).unwrap();

    let err = place_bid(&mut state, 0, 130).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Rule {
            kind: RuleViolationKind::InvalidBid,
            ..
        }
    ));
    // Still allowed to decline instead.
    pass_bid(&mut state, 0).unwrap();
    assert_eq!(state.phase, Phase::CardDistribution);
    assert_eq!(state.round.bet, 140);
}

#[test]
fn bidding_is_closed_outside_auction_phases() {
    let mut state = fresh_game();
    let err = place_bid(&mut state, 0, 110).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Rule {
            kind: RuleViolationKind::PhaseMismatch,
            ..
        }
    ));

    start_game(&mut state, 1).unwrap();
    for seat in 0..3 {
        pass_bid(&mut state, seat).unwrap();
    }
    pass_bid(&mut state, 3).unwrap();
    // CardDistribution now; further bids are rejected.
    let err = place_bid(&mut state, 3, 200).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Rule {
            kind: RuleViolationKind::PhaseMismatch,
            ..
        }
    ));
}
