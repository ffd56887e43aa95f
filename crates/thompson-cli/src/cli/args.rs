//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Inline expression (positional).
pub fn expr_arg() -> Arg {
    Arg::new("expr")
        .value_name("EXPR")
        .help("Regular expression using literals, '|', '*' and parentheses")
}

/// Expression file (-f/--file).
pub fn expr_file_arg() -> Arg {
    Arg::new("expr_file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the expression from a file (use \"-\" for stdin)")
}

/// Strings to test (positional, zero or more).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .num_args(0..)
        .action(ArgAction::Append)
        .help("Strings to test (read from stdin, one per line, if omitted)")
}

/// Single string to trace (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .help("String to simulate")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Append construction events (--events).
pub fn events_arg() -> Arg {
    Arg::new("events")
        .long("events")
        .action(ArgAction::SetTrue)
        .help("Also list the construction rules applied, in order")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Output the recorded trace as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the recorded steps as JSON instead of text")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}
