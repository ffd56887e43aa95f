use super::expr_loader::ExprInput;
use super::run_common::{compile_or_exit, load_or_exit};

pub struct CheckArgs {
    pub expr: ExprInput,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = load_or_exit(&args.expr);
    compile_or_exit(&source, false, args.color);

    // Silent on success (like cargo check)
}
