//! Recorded simulation steps for external stepping and animation.

use serde::Serialize;
use thompson_core::{StateSet, Symbol};

use super::trace::Tracer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Epsilon expansion of the previous set.
    Closure,
    /// One character consumed, epsilon edges not followed.
    Move,
}

/// One configuration change.
///
/// `symbol` is epsilon for closure steps and the consumed character for
/// move steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub kind: StepKind,
    pub symbol: Symbol,
    pub previous: StateSet,
    pub current: StateSet,
    /// Characters consumed once this step is applied.
    pub consumed: usize,
}

/// Ordered record of a simulation and its verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub steps: Vec<Step>,
    pub accepted: bool,
}

impl Trace {
    /// Active set after the last step.
    pub fn final_states(&self) -> Option<&StateSet> {
        self.steps.last().map(|s| &s.current)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Tracer that records every step into a [`Trace`].
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<Step>,
    accepted: bool,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Trace {
        Trace {
            steps: self.steps,
            accepted: self.accepted,
        }
    }
}

impl Tracer for TraceRecorder {
    fn trace_closure(&mut self, consumed: usize, from: &StateSet, to: &StateSet) {
        self.steps.push(Step {
            kind: StepKind::Closure,
            symbol: Symbol::Epsilon,
            previous: from.clone(),
            current: to.clone(),
            consumed,
        });
    }

    fn trace_move(&mut self, consumed: usize, c: char, from: &StateSet, to: &StateSet) {
        self.steps.push(Step {
            kind: StepKind::Move,
            symbol: Symbol::Char(c),
            previous: from.clone(),
            current: to.clone(),
            consumed,
        });
    }

    fn trace_verdict(&mut self, accepted: bool, _active: &StateSet) {
        self.accepted = accepted;
    }
}
