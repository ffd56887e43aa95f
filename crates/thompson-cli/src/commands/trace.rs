//! Trace a simulation for debugging and external animation.

use thompson_vm::{PrintTracer, Simulator, Verbosity};

use super::expr_loader::ExprInput;
use super::run_common::{compile_or_exit, load_or_exit};

pub struct TraceArgs {
    pub expr: ExprInput,
    pub input: String,
    pub verbosity: Verbosity,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let source = load_or_exit(&args.expr);
    let compilation = compile_or_exit(&source, false, args.color);
    let simulator = Simulator::new(compilation.nfa());

    let accepted = if args.json {
        let trace = simulator.trace(&args.input);
        match serde_json::to_string_pretty(&trace) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize trace: {}", e);
                std::process::exit(2);
            }
        }
        trace.accepted
    } else {
        let mut tracer = PrintTracer::builder()
            .verbosity(args.verbosity)
            .colored(args.color)
            .build();
        let accepted = simulator.run_with(&args.input, &mut tracer);
        tracer.print();
        accepted
    };

    if !accepted {
        std::process::exit(1);
    }
}
