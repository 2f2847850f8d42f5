//! Caller-supplied store through the builder.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::common::*;
use lifeboard::{Board, BoardId, BoardStore, Lifeboard, MemoryStore};
use lifeboard_storage::Result;

/// Memory store that counts saves.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    saves: AtomicUsize,
}

impl CountingStore {
    fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl BoardStore for CountingStore {
    fn load(&self, id: &BoardId) -> Result<Board> {
        self.inner.load(id)
    }

    fn save(&self, board: &Board) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(board)
    }

    fn delete(&self, id: &BoardId) -> Result<bool> {
        self.inner.delete(id)
    }

    fn ids(&self) -> Result<Vec<BoardId>> {
        self.inner.ids()
    }
}

fn counting_service(max_final_attempts: u32) -> (Arc<CountingStore>, Lifeboard) {
    let store = Arc::new(CountingStore::default());
    let boards = Lifeboard::builder()
        .store(store.clone())
        .max_final_attempts(max_final_attempts)
        .open()
        .unwrap();
    (store, boards)
}

#[test]
fn each_evolving_call_saves_once() {
    let (store, boards) = counting_service(100);
    let id = boards.upload(&glider()).unwrap();
    assert_eq!(store.saves(), 1);

    boards.next(&id).unwrap();
    boards.future(&id, 10).unwrap();
    boards.final_state(&id).unwrap();
    assert_eq!(store.saves(), 4);
}

#[test]
fn failures_never_save() {
    let (store, boards) = counting_service(2);
    let id = boards.upload(&glider()).unwrap();

    assert!(boards.final_state(&id).unwrap_err().is_not_stabilized());
    assert!(boards.future(&id, 0).unwrap_err().is_validation());
    assert!(boards.next(&BoardId::new()).unwrap_err().is_not_found());
    assert!(boards.upload(&lifeboard::BoardRecord::new(0, 0, Vec::new())).is_err());
    assert_eq!(store.saves(), 1);
}

#[test]
fn reads_do_not_save() {
    let (store, boards) = counting_service(100);
    let id = boards.upload(&block()).unwrap();
    boards.get(&id).unwrap();
    boards.list().unwrap();
    assert_eq!(store.saves(), 1);
}
