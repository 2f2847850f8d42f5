//! Lifeboard CLI.
//!
//! Two modes:
//! - **Shell mode**: `lifeboard [flags] COMMAND`: run one command, then exit
//! - **Pipe mode**: `echo "next <id>" | lifeboard`: one command per stdin line

mod commands;
mod format;
mod parse;
mod pipe;

use std::io::IsTerminal;
use std::process;

use lifeboard::{Config, Lifeboard};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_error_message, format_output, Output, OutputMode};
use parse::{matches_to_command, CliCommand};

fn main() {
    init_tracing();

    let cli = build_cli();
    let matches = cli.get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let boards = match open_boards(&matches) {
        Ok(boards) => boards,
        Err(e) => {
            eprintln!("{}", format_error_message(&e, output_mode));
            process::exit(1);
        }
    };

    if matches.subcommand().is_some() {
        let exit_code = match matches_to_command(&matches) {
            Ok(cmd) => run_command(&boards, cmd, output_mode),
            Err(e) => {
                eprintln!("{}", format_error_message(&e, output_mode));
                1
            }
        };
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        eprintln!("{}", format_error_message("No command provided (see --help)", output_mode));
        process::exit(1);
    } else {
        process::exit(pipe::run_stdin(&boards, output_mode));
    }
}

/// Log to stderr, `warn` unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_boards(matches: &clap::ArgMatches) -> Result<Lifeboard, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::load(path).map_err(|e| e.to_string())?,
        None => Config::default(),
    };

    if let Some(dir) = matches.get_one::<String>("db") {
        config.data_dir = Some(dir.into());
    } else if config.data_dir.is_none() {
        config.data_dir = Some(".lifeboard".into());
    }
    if let Some(&attempts) = matches.get_one::<u32>("max-attempts") {
        config.max_final_attempts = attempts;
    }

    debug!(
        data_dir = ?config.data_dir,
        max_final_attempts = config.max_final_attempts,
        "Opening board store"
    );
    Lifeboard::builder()
        .config(config)
        .open()
        .map_err(|e| format!("Failed to open board store: {}", e))
}

/// Execute one command and print its result. Returns the exit code.
pub(crate) fn run_command(boards: &Lifeboard, cmd: CliCommand, mode: OutputMode) -> i32 {
    let result = match cmd {
        CliCommand::Upload(record) => boards.upload(&record).map(Output::Uploaded),
        CliCommand::Get(id) => boards.get(&id).map(Output::Board),
        CliCommand::Next(id) => boards.next(&id).map(Output::Board),
        CliCommand::Future { id, steps } => boards.future(&id, steps).map(Output::Board),
        CliCommand::Final(id) => boards
            .final_state(&id)
            .map(|(board, outcome)| Output::Final(board, outcome)),
        CliCommand::List => boards.list().map(Output::Ids),
        CliCommand::Delete(id) => boards.delete(&id).map(Output::Deleted),
    };

    match result {
        Ok(output) => {
            println!("{}", format_output(&output, mode));
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}
