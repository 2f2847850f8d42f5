//! Next and future.

use crate::common::*;
use lifeboard::{BoardId, Error};

#[test]
fn next_flips_blinker_and_persists() {
    let boards = memory_service();
    let id = boards.upload(&blinker()).unwrap();

    let board = boards.next(&id).unwrap();
    assert_eq!(board.to_record(), vertical_blinker());
    assert_eq!(boards.get(&id).unwrap(), board);

    boards.next(&id).unwrap();
    assert_eq!(stored_rows(&boards, &id), "000,111,000");
}

#[test]
fn next_keeps_still_life() {
    let boards = memory_service();
    let id = boards.upload(&block()).unwrap();
    let board = boards.next(&id).unwrap();
    assert_eq!(board.to_record(), block());
}

#[test]
fn next_does_not_wrap_at_edges() {
    let boards = memory_service();
    let id = boards.upload(&record("10001,10001,10001")).unwrap();
    boards.next(&id).unwrap();
    assert_eq!(stored_rows(&boards, &id), "00000,11011,00000");
}

#[test]
fn future_matches_repeated_next() {
    let stepped = memory_service();
    let jumped = memory_service();
    let a = stepped.upload(&glider()).unwrap();
    let b = jumped.upload(&glider()).unwrap();

    for _ in 0..7 {
        stepped.next(&a).unwrap();
    }
    let board = jumped.future(&b, 7).unwrap();

    assert_eq!(board.state(), stepped.get(&a).unwrap().state());
    assert_eq!(jumped.get(&b).unwrap().state(), board.state());
}

#[test]
fn future_on_oscillator_follows_parity() {
    let boards = memory_service();
    let id = boards.upload(&blinker()).unwrap();
    assert_eq!(boards.future(&id, 3).unwrap().to_record(), vertical_blinker());
    assert_eq!(boards.future(&id, 2).unwrap().to_record(), vertical_blinker());
    assert_eq!(boards.future(&id, 1).unwrap().to_record(), blinker());
}

#[test]
fn future_rejects_non_positive_steps_and_leaves_board() {
    let boards = memory_service();
    let id = boards.upload(&blinker()).unwrap();
    for steps in [0, -1, -100] {
        let err = boards.future(&id, steps).unwrap_err();
        assert!(matches!(err, Error::InvalidSteps(s) if s == steps));
    }
    assert_eq!(boards.get(&id).unwrap().to_record(), blinker());
}

#[test]
fn evolving_unknown_board_is_not_found_and_creates_nothing() {
    let boards = memory_service();
    let id = BoardId::new();

    assert!(boards.next(&id).unwrap_err().is_not_found());
    assert!(boards.future(&id, 3).unwrap_err().is_not_found());
    assert!(boards.final_state(&id).unwrap_err().is_not_found());
    assert!(boards.list().unwrap().is_empty());
}
