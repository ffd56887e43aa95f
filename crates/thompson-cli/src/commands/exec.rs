use std::io::{self, BufRead};

use thiserror::Error;

use thompson_core::Colors;
use thompson_vm::Simulator;

use super::expr_loader::ExprInput;
use super::run_common::{compile_or_exit, load_or_exit};

pub struct ExecArgs {
    pub expr: ExprInput,
    /// Read from stdin, one per line, when empty.
    pub inputs: Vec<String>,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    let pending = PendingInputs::new(&args.expr, args.inputs).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    // Stdin is only touched once the expression is known to compile.
    let source = load_or_exit(&args.expr);
    let compilation = compile_or_exit(&source, false, args.color);
    let simulator = Simulator::new(compilation.nfa());
    let colors = Colors::new(args.color);

    let inputs = pending.resolve(io::stdin().lock()).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let mut all_accepted = true;
    for input in &inputs {
        let accepted = simulator.accepts(input);
        all_accepted &= accepted;
        println!("{}", format_verdict(input, accepted, colors));
    }

    if !all_accepted {
        std::process::exit(1);
    }
}

#[derive(Debug, Error)]
pub enum InputsError {
    #[error("expression and inputs cannot both be from stdin")]
    StdinConflict,
    #[error("failed to read stdin: {0}")]
    Read(#[source] io::Error),
}

/// Inputs to simulate, decided before anything is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingInputs {
    Given(Vec<String>),
    /// One input per line, read by [`PendingInputs::resolve`].
    Lines,
}

impl PendingInputs {
    pub fn new(expr: &ExprInput, inputs: Vec<String>) -> Result<Self, InputsError> {
        if !inputs.is_empty() {
            return Ok(Self::Given(inputs));
        }
        if expr.is_stdin() {
            return Err(InputsError::StdinConflict);
        }
        Ok(Self::Lines)
    }

    /// Take the given inputs, or read lines from `reader`, dropping a trailing `\r`.
    pub fn resolve<R: BufRead>(self, reader: R) -> Result<Vec<String>, InputsError> {
        match self {
            Self::Given(inputs) => Ok(inputs),
            Self::Lines => reader
                .lines()
                .map(|line| {
                    line.map(|l| l.trim_end_matches('\r').to_owned())
                        .map_err(InputsError::Read)
                })
                .collect(),
        }
    }
}

/// `accept  "ab"` or `reject  "ba"`.
pub fn format_verdict(input: &str, accepted: bool, colors: Colors) -> String {
    let (color, word) = if accepted {
        (colors.green, "accept")
    } else {
        (colors.red, "reject")
    };
    format!("{color}{word}{}  {input:?}", colors.reset)
}
