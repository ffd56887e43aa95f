//! Runtime engine for simulating compiled automata.
//!
//! The simulator keeps a set of active states, always epsilon-closed between
//! reads, and reports every configuration change to a [`Tracer`].

mod closure;
mod sim;
mod step;
mod trace;


pub use closure::{epsilon_closure, move_on};
pub use sim::Simulator;
pub use step::{Step, StepKind, Trace, TraceRecorder};
pub use trace::{NoopTracer, PrintTracer, PrintTracerBuilder, Tracer, Verbosity};
