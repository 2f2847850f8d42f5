//! Per-board serialization under concurrent callers.

use std::sync::{Arc, Barrier};
use std::thread;

use crate::common::*;
use lifeboard::Fingerprint;
use lifeboard_engine::advance;

/// Concurrent `next` calls on one board must each apply exactly one
/// generation. A glider drifts one cell diagonally every four generations,
/// so any lost update shows up as a displaced glider.
#[test]
fn concurrent_next_on_same_board_loses_no_generation() {
    const THREADS: usize = 8;
    const STEPS_PER_THREAD: usize = 4;

    let start = "01000000000000000000,00100000000000000000,11100000000000000000"
        .to_string()
        + &",00000000000000000000".repeat(17);
    let boards = Arc::new(memory_service());
    let id = boards.upload(&record(&start)).unwrap();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let boards = Arc::clone(&boards);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..STEPS_PER_THREAD {
                    boards.next(&id).unwrap();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let initial = Fingerprint::parse_grid(&start).unwrap();
    let expected = advance(&initial, (THREADS * STEPS_PER_THREAD) as u32);
    assert_eq!(boards.get(&id).unwrap().state(), &expected);
}

#[test]
fn concurrent_future_calls_compose() {
    const THREADS: usize = 4;

    let boards = Arc::new(memory_service());
    let id = boards.upload(&blinker()).unwrap();
    let barrier = Arc::new(Barrier::new(THREADS));

    // 4 callers each advancing 3: 12 generations total, an even count.
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let boards = Arc::clone(&boards);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                boards.future(&id, 3).unwrap();
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(boards.get(&id).unwrap().to_record(), blinker());
}

#[test]
fn different_boards_evolve_independently() {
    const THREADS: usize = 8;

    let boards = Arc::new(memory_service());
    let ids: Vec<_> = (0..THREADS)
        .map(|_| boards.upload(&blinker()).unwrap())
        .collect();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = ids
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let boards = Arc::clone(&boards);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                // Thread i advances its own board i + 1 times.
                for _ in 0..=i {
                    boards.next(&id).unwrap();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    for (i, id) in ids.iter().enumerate() {
        let expected = if (i + 1) % 2 == 0 {
            blinker()
        } else {
            vertical_blinker()
        };
        assert_eq!(boards.get(id).unwrap().to_record(), expected, "board {i}");
    }
}

#[test]
fn final_state_and_next_interleave_safely() {
    let boards = Arc::new(memory_service());
    let id = boards.upload(&glider()).unwrap();
    let barrier = Arc::new(Barrier::new(2));

    let searcher = {
        let boards = Arc::clone(&boards);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            boards.final_state(&id).unwrap()
        })
    };
    let stepper = {
        let boards = Arc::clone(&boards);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..5 {
                boards.next(&id).unwrap();
            }
        })
    };

    stepper.join().unwrap();
    searcher.join().unwrap();

    // Whatever the order, the glider ends as the corner block.
    assert_eq!(
        stored_rows(&boards, &id),
        "00000,00000,00000,00011,00011"
    );
}
