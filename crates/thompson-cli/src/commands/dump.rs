use thompson_core::Colors;

use super::expr_loader::ExprInput;
use super::run_common::{compile_or_exit, load_or_exit};

pub struct DumpArgs {
    pub expr: ExprInput,
    pub events: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let source = load_or_exit(&args.expr);
    let compilation = compile_or_exit(&source, args.events, args.color);
    let colors = Colors::new(args.color);

    print!("{}", compilation.dump_colored(args.color));
    println!();
    println!("{}stats{}", colors.dim, colors.reset);
    print!("{}", compilation.dump_stats());

    if args.events {
        println!();
        println!("{}events{}", colors.dim, colors.reset);
        print!("{}", compilation.dump_events());
    }
}
