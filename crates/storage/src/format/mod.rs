//! Persisted record format
//!
//! A board is stored as the JSON encoding of its
//! [`BoardRecord`](lifeboard_core::BoardRecord) under a key derived from its
//! id. The id itself never appears in the record body:
//!
//! ```text
//! key:   "3f1c...-...-a9"
//! value: {"rows":3,"columns":3,"state":[[false,false,false],[true,true,true],[false,false,false]]}
//! ```

use lifeboard_core::{Board, BoardId, BoardRecord};

use crate::error::{Result, StorageError};

/// Storage key for a board.
pub fn storage_key(id: &BoardId) -> String {
    id.to_string()
}

/// Encode a board's record body.
pub fn encode_board(board: &Board) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&board.to_record())?)
}

/// Decode a record body stored under `id`.
///
/// Undecodable bytes yield [`StorageError::Serialization`]; a record that
/// decodes but fails board validation yields [`StorageError::Corrupt`].
pub fn decode_board(id: BoardId, bytes: &[u8]) -> Result<Board> {
    let record: BoardRecord = serde_json::from_slice(bytes)?;
    board_from_record(id, &record)
}

/// Rebuild a board from an already-decoded record.
pub fn board_from_record(id: BoardId, record: &BoardRecord) -> Result<Board> {
    Board::from_record(id, record).map_err(|e| StorageError::Corrupt {
        id,
        reason: e.to_string(),
    })
}
