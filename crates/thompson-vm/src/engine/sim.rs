//! Subset-tracking simulation.

use thompson_core::{Nfa, StateSet};

use super::closure::{epsilon_closure, move_on};
use super::step::{Trace, TraceRecorder};
use super::trace::{NoopTracer, Tracer};

/// Runs one automaton against any number of inputs.
///
/// Holds only a shared reference: simulation never mutates the automaton,
/// and every run starts from a fresh configuration.
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'a> {
    nfa: &'a Nfa,
}

impl<'a> Simulator<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self { nfa }
    }

    pub fn nfa(&self) -> &'a Nfa {
        self.nfa
    }

    /// Epsilon closure of `{start}`.
    pub fn initial(&self) -> StateSet {
        epsilon_closure(self.nfa, &StateSet::from([self.nfa.start()]))
    }

    /// Whether the whole of `input` is matched.
    pub fn accepts(&self, input: &str) -> bool {
        self.run_with(input, &mut NoopTracer)
    }

    /// Full ordered record of configurations, produced eagerly.
    pub fn trace(&self, input: &str) -> Trace {
        let mut recorder = TraceRecorder::new();
        self.run_with(input, &mut recorder);
        recorder.finish()
    }

    /// Simulate `input`, reporting every configuration change to `tracer`.
    ///
    /// Per character: move, then close. An empty move result rejects
    /// immediately; no later character can revive a configuration.
    pub fn run_with<T: Tracer>(&self, input: &str, tracer: &mut T) -> bool {
        let seed = StateSet::from([self.nfa.start()]);
        let mut active = epsilon_closure(self.nfa, &seed);
        tracer.trace_closure(0, &seed, &active);

        for (i, c) in input.chars().enumerate() {
            let consumed = i + 1;
            let moved = move_on(self.nfa, &active, c);
            tracer.trace_move(consumed, c, &active, &moved);

            if moved.is_empty() {
                active = moved;
                break;
            }

            let closed = epsilon_closure(self.nfa, &moved);
            tracer.trace_closure(consumed, &moved, &closed);
            active = closed;
        }

        let accepted = active.contains(&self.nfa.accept());
        tracer.trace_verdict(accepted, &active);
        accepted
    }
}
