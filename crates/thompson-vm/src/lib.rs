//! Simulator for compiled Thompson automata.
//!
//! This crate runs an [`Nfa`](thompson_core::Nfa) against input strings by
//! tracking the set of active states, expanding epsilon closures after every
//! consumed character.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    NoopTracer, PrintTracer, PrintTracerBuilder, Simulator, Step, StepKind, Trace,
    TraceRecorder, Tracer, Verbosity, epsilon_closure, move_on,
};
