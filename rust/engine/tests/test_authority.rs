use runfast_engine::cards::Card;
use runfast_engine::engine::Engine;
use runfast_engine::errors::GameError;
use runfast_engine::rules::GameSettings;

fn started(seats: usize, seed: u64) -> Engine {
    let mut engine = Engine::new(GameSettings::default(), Some(seed));
    for seat in 0..seats {
        engine.register_seat(seat, format!("p{seat}")).unwrap();
    }
    engine.start_game().unwrap();
    engine.drain_events();
    engine
}

struct Snapshot {
    hands: Vec<Vec<Card>>,
    turn: usize,
    leading: Option<runfast_engine::hand::Hand>,
    leader: Option<usize>,
    actions: usize,
}

fn snapshot(engine: &Engine) -> Snapshot {
    let state = engine.state().unwrap();
    Snapshot {
        hands: state
            .seated()
            .iter()
            .map(|&s| state.hand_of(s).unwrap().to_vec())
            .collect(),
        turn: state.current_turn(),
        leading: state.leading_hand().cloned(),
        leader: state.round_leader(),
        actions: engine.record().unwrap().actions.len(),
    }
}

fn assert_unchanged(before: &Snapshot, engine: &mut Engine) {
    let after = snapshot(engine);
    assert_eq!(before.hands, after.hands);
    assert_eq!(before.turn, after.turn);
    assert_eq!(before.leading, after.leading);
    assert_eq!(before.leader, after.leader);
    assert_eq!(before.actions, after.actions);
    assert!(engine.drain_events().is_empty(), "rejections must not broadcast");
}

#[test]
fn card_not_in_hand_is_rejected_without_side_effects() {
    let mut engine = started(3, 5);
    let turn = engine.state().unwrap().current_turn();
    let other = (turn + 1) % 3;
    let foreign = engine.state().unwrap().hand_of(other).unwrap()[0];

    let before = snapshot(&engine);
    assert_eq!(
        engine.play_cards(turn, &[foreign]),
        Err(GameError::CardNotOwned {
            seat: turn,
            card: foreign
        })
    );
    assert_unchanged(&before, &mut engine);
}

#[test]
fn same_physical_card_twice_cannot_fake_a_pair() {
    let mut engine = started(3, 8);
    let turn = engine.state().unwrap().current_turn();
    let hand = engine.state().unwrap().hand_of(turn).unwrap().to_vec();
    // a card whose rank appears once in the hand
    let lonely = hand
        .iter()
        .copied()
        .find(|c| hand.iter().filter(|h| h.rank == c.rank).count() == 1);
    let Some(card) = lonely else {
        return;
    };

    let before = snapshot(&engine);
    assert_eq!(
        engine.play_cards(turn, &[card, card]),
        Err(GameError::CardNotOwned { seat: turn, card })
    );
    assert_unchanged(&before, &mut engine);
}

#[test]
fn out_of_turn_commands_are_rejected() {
    let mut engine = started(3, 13);
    let turn = engine.state().unwrap().current_turn();
    let other = (turn + 2) % 3;
    let own = engine.state().unwrap().hand_of(other).unwrap()[0];

    let before = snapshot(&engine);
    assert_eq!(
        engine.play_cards(other, &[own]),
        Err(GameError::NotPlayersTurn {
            expected: turn,
            actual: other
        })
    );
    assert_eq!(
        engine.pass(other),
        Err(GameError::NotPlayersTurn {
            expected: turn,
            actual: other
        })
    );
    assert_unchanged(&before, &mut engine);
}

#[test]
fn unknown_seat_is_rejected() {
    let mut engine = started(2, 21);
    let before = snapshot(&engine);
    assert_eq!(engine.pass(7), Err(GameError::SeatNotRegistered { seat: 7 }));
    assert_unchanged(&before, &mut engine);
}

#[test]
fn invalid_shape_from_own_hand_is_rejected() {
    let mut engine = started(3, 34);
    let turn = engine.state().unwrap().current_turn();
    let hand = engine.state().unwrap().hand_of(turn).unwrap().to_vec();
    let low = hand.iter().copied().min_by_key(|c| c.rank).unwrap();
    let high = hand.iter().copied().max_by_key(|c| c.rank).unwrap();
    if low.rank == high.rank {
        return;
    }

    let before = snapshot(&engine);
    assert_eq!(engine.play_cards(turn, &[low, high]), Err(GameError::InvalidMove));
    assert_unchanged(&before, &mut engine);
}
