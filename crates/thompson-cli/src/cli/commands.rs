//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Expression input shared by every command.
///
/// Apply before any other positional: clap indexes positionals in
/// definition order, and EXPR is always the first one.
fn with_expr_args(cmd: Command) -> Command {
    cmd.arg(expr_arg())
        .arg(expr_file_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("thompson")
        .about("Compile regular expressions to NFAs with Thompson's construction")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(graph_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Validate an expression.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate an expression")
        .override_usage(
            "\
  thompson check <EXPR>
  thompson check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  thompson check '(a|b)*c'      # silent on success
  thompson check '(a'           # reports the unclosed parenthesis
  thompson check -f expr.txt    # expression from a file"#,
        );

    with_expr_args(cmd)
}

/// Show intermediate forms and the compiled automaton.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the explicit, postfix, and automaton forms of an expression")
        .override_usage(
            "\
  thompson dump <EXPR> [--events]
  thompson dump -f <FILE> [--events]",
        )
        .after_help(
            r#"EXAMPLES:
  thompson dump 'a*b'               # states and statistics
  thompson dump 'a*b' --events      # plus construction rules"#,
        );

    with_expr_args(cmd).arg(events_arg())
}

/// Export the automaton graph as JSON.
pub fn graph_command() -> Command {
    let cmd = Command::new("graph")
        .about("Export the automaton as a JSON graph with statistics")
        .override_usage(
            "\
  thompson graph <EXPR> [--compact]
  thompson graph -f <FILE> [--compact]",
        )
        .after_help(
            r#"EXAMPLES:
  thompson graph '(a|b)*c'
  thompson graph '(a|b)*c' --compact | jq '.stats'"#,
        );

    with_expr_args(cmd).arg(compact_arg())
}

/// Test strings against an expression.
///
/// With `-f`, every positional is an input.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Test strings against an expression")
        .override_usage(
            "\
  thompson exec <EXPR> [INPUT]...
  thompson exec -f <FILE> [INPUT]...",
        )
        .after_help(
            r#"EXAMPLES:
  thompson exec 'a*b' b ab ba        # accept/reject per input
  thompson exec -f expr.txt aab      # expression from a file
  cat words.txt | thompson exec 'a*b'"#,
        );

    with_expr_args(cmd).arg(inputs_arg())
}

/// Show every configuration of a simulation.
///
/// With `-f`, the single positional is the input.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace the active state sets while simulating one input")
        .override_usage(
            "\
  thompson trace <EXPR> <INPUT> [-v|-vv]
  thompson trace -f <FILE> <INPUT> [-v|-vv]",
        )
        .after_help(
            r#"EXAMPLES:
  thompson trace 'a*b' aab           # settled set per character
  thompson trace 'a*b' aab -v        # plus move and closure sub-steps
  thompson trace 'a*b' aab --json    # steps for external animation"#,
        );

    with_expr_args(cmd)
        .arg(input_arg())
        .arg(verbose_arg())
        .arg(json_arg())
}
