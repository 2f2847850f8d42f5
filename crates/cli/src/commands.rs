//! clap command tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn board_id_arg() -> Arg {
    Arg::new("id")
        .value_name("ID")
        .help("Board identifier returned by upload")
        .required(true)
}

/// Build the full `lifeboard` command tree.
pub fn build_cli() -> Command {
    Command::new("lifeboard")
        .about("Stored Game of Life boards")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("DIR")
                .help("Board directory (default: .lifeboard)")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file")
                .global(true),
        )
        .arg(
            Arg::new("max-attempts")
                .long("max-attempts")
                .value_name("N")
                .help("Ceiling on transitions explored by `final`")
                .value_parser(value_parser!(u32).range(1..))
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("upload")
                .about("Upload a new board and print its id")
                .arg(
                    Arg::new("rows")
                        .long("rows")
                        .short('r')
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true)
                        .required_unless_present("file"),
                )
                .arg(
                    Arg::new("columns")
                        .long("columns")
                        .short('c')
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true)
                        .required_unless_present("file"),
                )
                .arg(
                    Arg::new("state")
                        .long("state")
                        .short('s')
                        .value_name("ROWS")
                        .help("Rows of 1/0 separated by commas, e.g. 010,010,010")
                        .required_unless_present("file"),
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .short('f')
                        .value_name("FILE")
                        .help("JSON record {\"rows\", \"columns\", \"state\"}")
                        .conflicts_with_all(["rows", "columns", "state"]),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Show a board without evolving it")
                .arg(board_id_arg()),
        )
        .subcommand(
            Command::new("next")
                .about("Advance a board one generation")
                .arg(board_id_arg()),
        )
        .subcommand(
            Command::new("future")
                .about("Advance a board by STEPS generations")
                .arg(board_id_arg())
                .arg(
                    Arg::new("steps")
                        .value_name("STEPS")
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("final")
                .about("Evolve a board to its fixed point or cycle")
                .arg(board_id_arg()),
        )
        .subcommand(Command::new("list").about("List stored board ids"))
        .subcommand(
            Command::new("delete")
                .about("Delete a board")
                .arg(board_id_arg()),
        )
}
