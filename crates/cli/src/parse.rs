//! ArgMatches → CliCommand conversion.
//!
//! Translates clap's parsed arguments into a [`CliCommand`]. Board input may
//! come inline (`--rows`, `--columns`, `--state`) or from a JSON file.

use clap::ArgMatches;
use lifeboard::{BoardId, BoardRecord, Fingerprint};

/// One operation against the board service.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Upload(BoardRecord),
    Get(BoardId),
    Next(BoardId),
    Future { id: BoardId, steps: i64 },
    Final(BoardId),
    List,
    Delete(BoardId),
}

/// Convert clap ArgMatches into a CliCommand.
pub fn matches_to_command(matches: &ArgMatches) -> Result<CliCommand, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "upload" => parse_upload(m).map(CliCommand::Upload),
        "get" => Ok(CliCommand::Get(board_id(m)?)),
        "next" => Ok(CliCommand::Next(board_id(m)?)),
        "future" => {
            let id = board_id(m)?;
            let steps = *m
                .get_one::<i64>("steps")
                .ok_or("Missing STEPS argument")?;
            Ok(CliCommand::Future { id, steps })
        }
        "final" => Ok(CliCommand::Final(board_id(m)?)),
        "list" => Ok(CliCommand::List),
        "delete" => Ok(CliCommand::Delete(board_id(m)?)),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn board_id(m: &ArgMatches) -> Result<BoardId, String> {
    let raw = m.get_one::<String>("id").ok_or("Missing ID argument")?;
    raw.parse::<BoardId>().map_err(|e| e.to_string())
}

fn parse_upload(m: &ArgMatches) -> Result<BoardRecord, String> {
    if let Some(path) = m.get_one::<String>("file") {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path, e))?;
        return parse_record_json(&text);
    }

    let rows = *m.get_one::<i64>("rows").ok_or("Missing --rows")?;
    let columns = *m.get_one::<i64>("columns").ok_or("Missing --columns")?;
    let raw = m.get_one::<String>("state").ok_or("Missing --state")?;
    let grid = Fingerprint::parse_grid(raw).map_err(|e| format!("Invalid state: {}", e))?;

    // Dimensions are checked by the service so bad input reports the same
    // validation error as a JSON upload.
    Ok(BoardRecord {
        rows,
        columns,
        state: grid.to_rows(),
    })
}

/// Parse a `{"rows", "columns", "state"}` JSON document.
pub fn parse_record_json(text: &str) -> Result<BoardRecord, String> {
    serde_json::from_str(text).map_err(|e| format!("Invalid board JSON: {}", e))
}
