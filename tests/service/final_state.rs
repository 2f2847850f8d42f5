//! Final-state search through the service.

use crate::common::*;
use lifeboard::{Error, Lifeboard, Outcome};

#[test]
fn still_life_is_its_own_final_state() {
    let boards = memory_service();
    let id = boards.upload(&block()).unwrap();
    let (board, outcome) = boards.final_state(&id).unwrap();
    assert_eq!(outcome, Outcome::Stable);
    assert_eq!(board.to_record(), block());
}

#[test]
fn glider_settles_into_block_and_is_persisted() {
    let boards = memory_service();
    let id = boards.upload(&glider()).unwrap();

    let (board, outcome) = boards.final_state(&id).unwrap();
    assert_eq!(outcome, Outcome::Stable);
    assert_eq!(
        board.state().fingerprint().as_str(),
        "00000,00000,00000,00011,00011"
    );
    assert_eq!(boards.get(&id).unwrap(), board);
}

#[test]
fn lonely_cell_dies_out() {
    let boards = memory_service();
    let id = boards.upload(&record("000,010,000")).unwrap();
    let (board, outcome) = boards.final_state(&id).unwrap();
    assert_eq!(outcome, Outcome::Stable);
    assert_eq!(board.population(), 0);
}

#[test]
fn oscillator_reports_cycle() {
    let boards = memory_service();
    let id = boards.upload(&blinker()).unwrap();
    let (board, outcome) = boards.final_state(&id).unwrap();
    assert_eq!(outcome, Outcome::Cycle);
    assert_eq!(board.to_record(), blinker());
}

#[test]
fn repeated_final_state_is_idempotent() {
    let boards = memory_service();
    let id = boards.upload(&glider()).unwrap();
    let (first, _) = boards.final_state(&id).unwrap();
    let (second, outcome) = boards.final_state(&id).unwrap();
    assert_eq!(outcome, Outcome::Stable);
    assert_eq!(first, second);
}

#[test]
fn exhausted_search_persists_nothing() {
    let boards = Lifeboard::builder().max_final_attempts(5).open().unwrap();
    let id = boards.upload(&glider()).unwrap();

    let err = boards.final_state(&id).unwrap_err();
    assert!(err.is_not_stabilized());
    assert!(matches!(err, Error::NotStabilized { attempts: 5 }));
    assert_eq!(boards.get(&id).unwrap().to_record(), glider());
}

#[test]
fn budget_of_two_is_enough_for_blinker() {
    let boards = Lifeboard::builder().max_final_attempts(2).open().unwrap();
    let id = boards.upload(&blinker()).unwrap();
    let (_, outcome) = boards.final_state(&id).unwrap();
    assert_eq!(outcome, Outcome::Cycle);
}

#[test]
fn budget_of_one_exhausts_on_blinker() {
    let boards = Lifeboard::builder().max_final_attempts(1).open().unwrap();
    let id = boards.upload(&blinker()).unwrap();
    let err = boards.final_state(&id).unwrap_err();
    assert!(matches!(err, Error::NotStabilized { attempts: 1 }));
    assert_eq!(boards.get(&id).unwrap().to_record(), blinker());
}
