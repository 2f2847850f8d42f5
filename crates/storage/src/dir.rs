//! Directory-backed board store
//!
//! One file per board, named `<storage key>.json`, holding the encoded
//! record. Saves write a sibling temp file and `rename` it over the target,
//! so a reader never observes a half-written record.

use lifeboard_core::{Board, BoardId};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

use crate::error::{Result, StorageError};
use crate::format::{decode_board, encode_board, storage_key};
use crate::traits::BoardStore;

const RECORD_EXTENSION: &str = "json";

/// [`BoardStore`] persisting each board as a JSON file in a directory.
#[derive(Debug)]
pub struct DirStore {
    root: PathBuf,
    /// Disambiguates temp files of concurrent saves
    next_tmp: AtomicU64,
}

impl DirStore {
    /// Open (creating if needed) a store rooted at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        debug!("Opened board directory {}", root.display());
        Ok(Self {
            root,
            next_tmp: AtomicU64::new(0),
        })
    }

    /// Directory holding the board files
    pub fn path(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, id: &BoardId) -> PathBuf {
        self.root
            .join(format!("{}.{}", storage_key(id), RECORD_EXTENSION))
    }

    fn tmp_path(&self, id: &BoardId) -> PathBuf {
        let n = self.next_tmp.fetch_add(1, Ordering::Relaxed);
        self.root
            .join(format!(".{}.{}.{}.tmp", storage_key(id), std::process::id(), n))
    }
}

impl BoardStore for DirStore {
    fn load(&self, id: &BoardId) -> Result<Board> {
        let bytes = match fs::read(self.record_path(id)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StorageError::NotFound(*id)),
            Err(e) => return Err(e.into()),
        };
        decode_board(*id, &bytes)
    }

    fn save(&self, board: &Board) -> Result<()> {
        let bytes = encode_board(board)?;
        let tmp = self.tmp_path(&board.id());
        let written = fs::write(&tmp, &bytes)
            .and_then(|()| fs::rename(&tmp, self.record_path(&board.id())));
        if let Err(e) = written {
            // A failed write can leave a partial temp file; never keep it.
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        trace!(board_id = %board.id(), bytes = bytes.len(), "saved board");
        Ok(())
    }

    fn delete(&self, id: &BoardId) -> Result<bool> {
        match fs::remove_file(self.record_path(id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn contains(&self, id: &BoardId) -> Result<bool> {
        Ok(self.record_path(id).is_file())
    }

    fn ids(&self) -> Result<Vec<BoardId>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match stem.parse::<BoardId>() {
                Ok(id) => ids.push(id),
                Err(_) => debug!("Skipping foreign file {}", path.display()),
            }
        }
        ids.sort();
        Ok(ids)
    }
}
