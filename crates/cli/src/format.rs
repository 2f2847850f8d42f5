//! Output rendering for human and JSON modes.

use lifeboard::{Board, BoardId, Error, Outcome};
use serde_json::{json, Value};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// What a successful command produced.
pub enum Output {
    Uploaded(BoardId),
    Board(Board),
    Final(Board, Outcome),
    Ids(Vec<BoardId>),
    Deleted(bool),
}

/// Render a command result.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format_human(output),
        OutputMode::Json => to_json(output).to_string(),
    }
}

/// Render a service error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    format_error_message(&err.to_string(), mode)
}

/// Render a CLI-level error that never reached the service.
pub fn format_error_message(msg: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", msg),
        OutputMode::Json => json!({ "error": msg }).to_string(),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Uploaded(id) => id.to_string(),
        Output::Board(board) => render_board(board),
        Output::Final(board, outcome) => format!("{}\n({})", render_board(board), outcome),
        Output::Ids(ids) if ids.is_empty() => "(empty list)".to_string(),
        Output::Ids(ids) => ids
            .iter()
            .enumerate()
            .map(|(i, id)| format!("{}) {}", i + 1, id))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Deleted(true) => "(integer) 1".to_string(),
        Output::Deleted(false) => "(integer) 0".to_string(),
    }
}

/// `id RxC (N alive)` header, then one line per row with `#` alive and `.` dead.
fn render_board(board: &Board) -> String {
    let mut out = format!(
        "{} {}x{} ({} alive)",
        board.id(),
        board.rows(),
        board.columns(),
        board.population()
    );
    for row in board.state().iter_rows() {
        out.push('\n');
        out.extend(row.iter().map(|&alive| if alive { '#' } else { '.' }));
    }
    out
}

fn board_json(board: &Board) -> Value {
    json!({
        "id": board.id().to_string(),
        "rows": board.rows(),
        "columns": board.columns(),
        "state": board.state().to_rows(),
    })
}

fn to_json(output: &Output) -> Value {
    match output {
        Output::Uploaded(id) => json!({ "id": id.to_string() }),
        Output::Board(board) => board_json(board),
        Output::Final(board, outcome) => {
            let mut value = board_json(board);
            value["outcome"] = json!(outcome.to_string());
            value
        }
        Output::Ids(ids) => Value::Array(ids.iter().map(|id| json!(id.to_string())).collect()),
        Output::Deleted(deleted) => json!({ "deleted": deleted }),
    }
}
