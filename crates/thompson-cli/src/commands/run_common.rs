//! Shared logic for every command: load, then compile or exit.

use thompson_compiler::{Compilation, Compiler};

use super::expr_loader::{ExprInput, ExprSource, load_expression};

/// Load the expression or exit with status 1.
pub fn load_or_exit(input: &ExprInput) -> ExprSource {
    load_expression(input).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

/// Compile the expression or print the diagnostic and exit with status 1.
pub fn compile_or_exit(source: &ExprSource, record_events: bool, color: bool) -> Compilation<'_> {
    let compiler = Compiler::builder(&source.text)
        .record_events(record_events)
        .build();

    match compiler.compile() {
        Ok(compilation) => compilation,
        Err(e) => {
            let mut printer = e.printer().source(&source.text).colored(color);
            if let Some(path) = &source.path {
                printer = printer.path(path);
            }
            eprint!("{}", printer.render());
            std::process::exit(1);
        }
    }
}
