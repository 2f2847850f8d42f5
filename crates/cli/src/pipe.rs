//! Pipe mode: one command per stdin line.

use std::io::{self, BufRead};

use lifeboard::Lifeboard;

use crate::commands::build_cli;
use crate::format::{format_error_message, OutputMode};
use crate::parse::matches_to_command;

/// Run every non-blank, non-comment line of `input` as a command.
///
/// Keeps going after failures. Returns 1 if any line failed, else 0.
pub fn run_pipe(boards: &Lifeboard, input: impl BufRead, mode: OutputMode) -> i32 {
    let mut exit_code = 0;

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{}", format_error_message(&e.to_string(), mode));
                return 1;
            }
        };
        if run_line(boards, &line, mode) != 0 {
            exit_code = 1;
        }
    }

    exit_code
}

/// Run stdin through [`run_pipe`].
pub fn run_stdin(boards: &Lifeboard, mode: OutputMode) -> i32 {
    run_pipe(boards, io::stdin().lock(), mode)
}

fn run_line(boards: &Lifeboard, line: &str, mode: OutputMode) -> i32 {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return 0;
    }

    let Some(words) = shlex::split(trimmed) else {
        eprintln!("{}", format_error_message("Unbalanced quotes", mode));
        return 1;
    };

    let argv = std::iter::once("lifeboard".to_string()).chain(words);
    let matches = match build_cli().try_get_matches_from(argv) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", format_error_message(e.to_string().trim_end(), mode));
            return 1;
        }
    };

    match matches_to_command(&matches) {
        Ok(cmd) => crate::run_command(boards, cmd, mode),
        Err(e) => {
            eprintln!("{}", format_error_message(&e, mode));
            1
        }
    }
}
