//! JSON export of the compiled automaton for external renderers.

use serde::Serialize;
use thompson_core::{GraphExport, Nfa, NfaStats};

use super::expr_loader::ExprInput;
use super::run_common::{compile_or_exit, load_or_exit};

pub struct GraphArgs {
    pub expr: ExprInput,
    pub compact: bool,
    pub color: bool,
}

#[derive(Serialize)]
pub struct GraphOutput<'a> {
    pub expression: &'a str,
    pub graph: GraphExport,
    pub stats: NfaStats,
}

impl<'a> GraphOutput<'a> {
    pub fn new(expression: &'a str, nfa: &Nfa) -> Self {
        let graph = GraphExport::from_nfa(nfa);
        let stats = NfaStats::from_export(&graph, nfa);
        Self {
            expression,
            graph,
            stats,
        }
    }

    pub fn to_json(&self, compact: bool) -> serde_json::Result<String> {
        if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        }
    }
}

pub fn run(args: GraphArgs) {
    let source = load_or_exit(&args.expr);
    let compilation = compile_or_exit(&source, false, args.color);

    let output = GraphOutput::new(&source.text, compilation.nfa());
    match output.to_json(args.compact) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: failed to serialize graph: {}", e);
            std::process::exit(2);
        }
    }
}
