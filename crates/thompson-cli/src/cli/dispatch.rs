//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Positional shifting for exec/trace (`-f` shifts EXPR to the inputs)

use std::path::PathBuf;

use clap::ArgMatches;
use thompson_vm::Verbosity;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::expr_loader::ExprInput;
use crate::commands::graph::GraphArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub expr_text: Option<String>,
    pub expr_file: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr_text: m.get_one::<String>("expr").cloned(),
            expr_file: m.get_one::<PathBuf>("expr_file").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            expr: ExprInput::new(p.expr_text, p.expr_file),
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub expr_text: Option<String>,
    pub expr_file: Option<PathBuf>,
    pub events: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr_text: m.get_one::<String>("expr").cloned(),
            expr_file: m.get_one::<PathBuf>("expr_file").cloned(),
            events: m.get_flag("events"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            expr: ExprInput::new(p.expr_text, p.expr_file),
            events: p.events,
            color: p.color.should_colorize(),
        }
    }
}

pub struct GraphParams {
    pub expr_text: Option<String>,
    pub expr_file: Option<PathBuf>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl GraphParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr_text: m.get_one::<String>("expr").cloned(),
            expr_file: m.get_one::<PathBuf>("expr_file").cloned(),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<GraphParams> for GraphArgs {
    fn from(p: GraphParams) -> Self {
        Self {
            expr: ExprInput::new(p.expr_text, p.expr_file),
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub expr_text: Option<String>,
    pub expr_file: Option<PathBuf>,
    pub inputs: Vec<String>,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let expr_text = m.get_one::<String>("expr").cloned();
        let expr_file = m.get_one::<PathBuf>("expr_file").cloned();
        let mut inputs: Vec<String> = m
            .get_many::<String>("inputs")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        // With -f the first positional is an input, not an expression.
        let expr_text = match (expr_file.is_some(), expr_text) {
            (true, Some(first)) => {
                inputs.insert(0, first);
                None
            }
            (_, text) => text,
        };

        Self {
            expr_text,
            expr_file,
            inputs,
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            expr: ExprInput::new(p.expr_text, p.expr_file),
            inputs: p.inputs,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub expr_text: Option<String>,
    pub expr_file: Option<PathBuf>,
    pub input: Option<String>,
    pub verbose: u8,
    pub json: bool,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let expr_text = m.get_one::<String>("expr").cloned();
        let expr_file = m.get_one::<PathBuf>("expr_file").cloned();
        let input = m.get_one::<String>("input").cloned();

        let (expr_text, input) =
            shift_positional_to_input(expr_file.is_some(), expr_text, input);

        Self {
            expr_text,
            expr_file,
            input,
            verbose: m.get_count("verbose"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            expr: ExprInput::new(p.expr_text, p.expr_file),
            input: p.input.unwrap_or_default(),
            verbosity,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// When -f is used with a single positional, shift it from EXPR to INPUT.
/// This enables: `thompson trace -f expr.txt aab`
fn shift_positional_to_input(
    has_expr_file: bool,
    expr_text: Option<String>,
    input: Option<String>,
) -> (Option<String>, Option<String>) {
    if has_expr_file && expr_text.is_some() && input.is_none() {
        (None, expr_text)
    } else {
        (expr_text, input)
    }
}
