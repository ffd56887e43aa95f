#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for Thompson automata.
//!
//! Three layers:
//! - **Model**: states, symbols, and the immutable [`Nfa`] arena
//! - **Export**: breadth-first graph view for external renderers
//! - **Stats**: summary figures derived from the export view

mod automaton;
mod colors;
mod export;
mod stats;

#[cfg(test)]
mod automaton_tests;

pub use automaton::{EPSILON_LABEL, Nfa, State, StateId, StateSet, Symbol};
pub use colors::Colors;
pub use export::{ExportEdge, ExportNode, GraphExport};
pub use stats::{Complexity, NfaStats};
