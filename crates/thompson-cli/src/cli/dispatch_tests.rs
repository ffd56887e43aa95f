//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Positional shifting: -f turns EXPR into an input for exec/trace
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Verbosity and color mapping

use std::path::PathBuf;

use thompson_vm::Verbosity;

use super::*;
use crate::cli::commands::{
    check_command, dump_command, exec_command, graph_command, trace_command,
};
use crate::commands::trace::TraceArgs;

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}

#[test]
fn check_inline_expression() {
    let m = check_command()
        .try_get_matches_from(["check", "(a|b)*c"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.expr_text.as_deref(), Some("(a|b)*c"));
    assert_eq!(params.expr_file, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_expression_file() {
    let m = check_command()
        .try_get_matches_from(["check", "-f", "expr.re", "--color", "never"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.expr_text, None);
    assert_eq!(params.expr_file, Some(PathBuf::from("expr.re")));
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn color_rejects_unknown_value() {
    let result = check_command().try_get_matches_from(["check", "a", "--color", "sometimes"]);

    assert!(result.is_err());
}

#[test]
fn dump_events_flag() {
    let m = dump_command()
        .try_get_matches_from(["dump", "a*b", "--events"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert!(params.events);
    assert_eq!(params.expr_text.as_deref(), Some("a*b"));
}

#[test]
fn graph_compact_flag() {
    let m = graph_command()
        .try_get_matches_from(["graph", "a|b", "--compact", "--color", "always"])
        .unwrap();
    let params = GraphParams::from_matches(&m);

    assert!(params.compact);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn exec_collects_inputs() {
    let m = exec_command()
        .try_get_matches_from(["exec", "a*b", "b", "ab", ""])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.expr_text.as_deref(), Some("a*b"));
    assert_eq!(params.inputs, vec!["b", "ab", ""]);
}

#[test]
fn exec_without_inputs() {
    let m = exec_command().try_get_matches_from(["exec", "a*b"]).unwrap();
    let params = ExecParams::from_matches(&m);

    assert!(params.inputs.is_empty());
}

#[test]
fn exec_file_shifts_positionals_to_inputs() {
    let m = exec_command()
        .try_get_matches_from(["exec", "-f", "expr.re", "aab", "ba"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.expr_text, None);
    assert_eq!(params.expr_file, Some(PathBuf::from("expr.re")));
    assert_eq!(params.inputs, vec!["aab", "ba"]);
}

#[test]
fn trace_inline() {
    let m = trace_command()
        .try_get_matches_from(["trace", "a*b", "aab"])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.expr_text.as_deref(), Some("a*b"));
    assert_eq!(params.input.as_deref(), Some("aab"));
    assert_eq!(params.verbose, 0);
    assert!(!params.json);
}

#[test]
fn trace_file_shifts_positional_to_input() {
    let m = trace_command()
        .try_get_matches_from(["trace", "-f", "expr.re", "aab"])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.expr_text, None);
    assert_eq!(params.input.as_deref(), Some("aab"));
}

#[test]
fn trace_verbosity_levels() {
    let verbosity = |flags: &[&str]| {
        let mut argv = vec!["trace", "a", "a"];
        argv.extend_from_slice(flags);
        let m = trace_command().try_get_matches_from(argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();
        args.verbosity
    };

    assert_eq!(verbosity(&[]), Verbosity::Default);
    assert_eq!(verbosity(&["-v"]), Verbosity::Verbose);
    assert_eq!(verbosity(&["-vv"]), Verbosity::VeryVerbose);
    assert_eq!(verbosity(&["-vvv"]), Verbosity::VeryVerbose);
}

#[test]
fn trace_missing_input_is_empty_string() {
    let m = trace_command().try_get_matches_from(["trace", "a*"]).unwrap();
    let args: TraceArgs = TraceParams::from_matches(&m).into();

    assert_eq!(args.input, "");
    assert!(!args.json);
}

#[test]
fn trace_json_flag() {
    let m = trace_command()
        .try_get_matches_from(["trace", "a*", "aa", "--json"])
        .unwrap();

    assert!(TraceParams::from_matches(&m).json);
}
