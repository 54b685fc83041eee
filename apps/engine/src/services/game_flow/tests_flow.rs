use uuid::Uuid;

use crate::domain::state::Phase;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::services::game_flow::GameFlowService;
use crate::services::rooms::NewPlayer;

fn bot_room(service: &GameFlowService) -> String {
    let players = vec![
        NewPlayer::bot("bot-a", "greedy"),
        NewPlayer::bot("bot-b", "random"),
        NewPlayer::bot("bot-c", "greedy"),
        NewPlayer::bot("bot-d", "random"),
    ];
    service.create_room(players, Some(42)).unwrap()
}

fn mixed_room(service: &GameFlowService) -> (String, Uuid) {
    let human = NewPlayer::human("alice");
    let human_id = human.id;
    let players = vec![
        human,
        NewPlayer::bot("bot-b", "greedy"),
        NewPlayer::bot("bot-c", "random"),
        NewPlayer::bot("bot-d", "greedy"),
    ];
    (service.create_room(players, Some(7)).unwrap(), human_id)
}

#[test]
fn all_bot_room_never_stalls() {
    let service = GameFlowService::new();
    let code = bot_room(&service);

    let updates = service.start_game(&code).unwrap();
    assert!(!updates.is_empty());

    // With four bots the room can only ever rest in ShowTable or GameOver.
    for _ in 0..600 {
        let ctx = service.game_context(&code).unwrap();
        match ctx.phase {
            Phase::ShowTable => {
                let updates = service.complete_take(&code).unwrap();
                assert!(!updates.is_empty());
            }
            Phase::GameOver => break,
            other => panic!("bot room stalled in {other:?}"),
        }
        // Card conservation holds between driver steps.
        let session = service.rooms().get(&code).unwrap();
        let session = session.lock();
        if !matches!(session.state.phase, Phase::GameOver) {
            assert_eq!(session.state.card_count(), 24);
        }
    }
}

#[test]
fn bot_loop_stops_at_the_human_turn() {
    let service = GameFlowService::new();
    let (code, human_id) = mixed_room(&service);

    // The human opens the first auction: exactly one update, no bot moved.
    let updates = service.start_game(&code).unwrap();
    assert_eq!(updates.len(), 1);
    let ctx = &updates[0].context;
    assert_eq!(ctx.phase, Phase::Auction);
    assert_eq!(ctx.turn, Some(0));

    // After the human passes, bots act until the room needs the human again
    // (their trick-play turn) or pauses in ShowTable.
    let updates = service.pass_bid(&code, human_id).unwrap();
    assert!(updates.len() > 1, "bots should have acted inline");
    let last = &updates.last().unwrap().context;
    match last.phase {
        Phase::Playing => assert_eq!(last.turn, Some(0)),
        Phase::ShowTable => {}
        other => panic!("unexpected resting phase {other:?}"),
    }
}

#[test]
fn unknown_room_and_player_are_not_found() {
    let service = GameFlowService::new();
    let err = service.start_game("ZZZZZZ").unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound {
            kind: NotFoundKind::Room,
            ..
        }
    ));

    let (code, _) = mixed_room(&service);
    let err = service.pass_bid(&code, Uuid::new_v4()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound {
            kind: NotFoundKind::Player,
            ..
        }
    ));
}

#[test]
fn malformed_card_codes_are_rejected() {
    let service = GameFlowService::new();
    let (code, human_id) = mixed_room(&service);
    service.start_game(&code).unwrap();

    let err = service.play_card(&code, human_id, "ZX").unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound {
            kind: NotFoundKind::Card,
            ..
        }
    ));
}

#[test]
fn pause_and_resume_toggle_the_connected_flag() {
    let service = GameFlowService::new();
    let (code, human_id) = mixed_room(&service);
    service.start_game(&code).unwrap();

    let update = service.pause_game(&code, human_id).unwrap();
    assert!(!update.context.seats[0].connected);

    let (update, resumed) = service.try_resume_game(&code, human_id).unwrap();
    assert!(update.context.seats[0].connected);
    assert!(resumed);
}

#[test]
fn pause_does_not_block_operations() {
    let service = GameFlowService::new();
    let (code, human_id) = mixed_room(&service);
    service.start_game(&code).unwrap();
    service.pause_game(&code, human_id).unwrap();

    // The disconnected flag is informational; the paused player can still act.
    assert!(service.pass_bid(&code, human_id).is_ok());
}

#[test]
fn abandoning_the_last_human_tears_the_room_down() {
    let service = GameFlowService::new();
    let (code, human_id) = mixed_room(&service);
    service.start_game(&code).unwrap();

    let updates = service.abandon_game(&code, human_id).unwrap();
    assert!(updates.is_empty());
    assert!(service.rooms().get(&code).is_err());
    assert!(service.rooms().is_empty());
}

#[test]
fn abandoning_one_of_two_humans_seats_a_bot() {
    let service = GameFlowService::new();
    let alice = NewPlayer::human("alice");
    let bob = NewPlayer::human("bob");
    let alice_id = alice.id;
    let bob_id = bob.id;
    let players = vec![
        alice,
        bob,
        NewPlayer::bot("bot-c", "greedy"),
        NewPlayer::bot("bot-d", "greedy"),
    ];
    let code = service.create_room(players, Some(9)).unwrap();
    service.start_game(&code).unwrap();

    let updates = service.abandon_game(&code, alice_id).unwrap();
    assert!(!updates.is_empty());
    let ctx = service.game_context(&code).unwrap();
    assert!(ctx.seats[0].is_bot);
    assert_ne!(ctx.seats[0].name, "alice");

    // The scrubbed identity no longer resolves; the remaining human does.
    assert!(service.user_context(&code, alice_id).is_err());
    assert!(service.user_context(&code, bob_id).is_ok());
    assert!(service.rooms().get(&code).is_ok());
}

#[test]
fn user_context_is_scoped_to_the_caller() {
    let service = GameFlowService::new();
    let (code, human_id) = mixed_room(&service);
    service.start_game(&code).unwrap();

    let view = service.user_context(&code, human_id).unwrap();
    assert_eq!(view.seat, 0);
    assert_eq!(view.hand.len(), 5);
    for seat in &view.game.seats {
        assert_eq!(seat.card_count, 5);
    }
}
