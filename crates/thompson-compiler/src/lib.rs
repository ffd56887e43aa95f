//! Thompson compiler: lexer, preprocessor, postfix translator, and NFA builder.
//!
//! This crate provides the compilation pipeline for regular expressions:
//! - `lexer` - span-carrying tokens
//! - `preprocess` - explicit concatenation markers
//! - `postfix` - shunting-yard translation to postfix order
//! - `build` - Thompson construction over a fragment stack
//! - `compile` - the `Compiler` facade tying the stages together
//! - `diagnostics` - error rendering against the source expression
//! - `dump` - human-readable listings for tests and the CLI
//!
//! # Example
//!
//! ```
//! let nfa = thompson_compiler::compile("(a|b)*c").expect("valid expression");
//! assert_eq!(nfa.start(), 6);
//! assert_eq!(nfa.accept(), 9);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod build;
pub mod compile;
pub mod diagnostics;
pub mod dump;
pub mod lexer;
pub mod postfix;
pub mod preprocess;

mod error;

#[cfg(test)]
mod build_tests;
#[cfg(test)]
mod diagnostics_tests;

pub use build::{BuildCtx, BuildEvent, Fragment};
pub use compile::{Compilation, Compiler, CompilerBuilder, compile};
pub use diagnostics::ErrorPrinter;
pub use dump::{NfaPrinter, format_stats};
pub use error::{Error, InvalidReason};
pub use lexer::{Token, TokenKind, TokenStream, lex};
pub use postfix::to_postfix;
pub use preprocess::{add_explicit_concat, insert_concat};

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
