//! States, symbols, and the compiled automaton.
//!
//! States live in a flat arena and reference each other by `StateId`, so the
//! loop edges introduced by Kleene star never form ownership cycles.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Index into `Nfa::states`. Assigned from zero per compilation.
pub type StateId = u32;

/// Duplicate-free set of active states with deterministic iteration order.
pub type StateSet = BTreeSet<StateId>;

/// Display label for epsilon transitions.
pub const EPSILON_LABEL: &str = "ε";

/// Transition label.
///
/// `Epsilon` sorts before every character, so ordered collections list
/// epsilon edges first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Taken without consuming input.
    Epsilon,
    /// Consumes exactly this character.
    Char(char),
}

impl Symbol {
    pub fn is_epsilon(self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            Symbol::Epsilon => None,
            Symbol::Char(c) => Some(c),
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

/// Serialized as its display label, e.g. `"a"` or `"ε"`.
impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Epsilon => f.write_str(EPSILON_LABEL),
            Symbol::Char(c) => write!(f, "{c}"),
        }
    }
}

/// A node in the automaton.
///
/// Transitions keep insertion order per symbol, and targets keep the order
/// in which edges were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    id: StateId,
    accepting: bool,
    transitions: IndexMap<Symbol, Vec<StateId>>,
}

impl State {
    /// Create a non-accepting state with no transitions.
    pub fn new(id: StateId) -> Self {
        Self {
            id,
            accepting: false,
            transitions: IndexMap::new(),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    pub fn set_accepting(&mut self, accepting: bool) {
        self.accepting = accepting;
    }

    /// Add an edge. Parallel edges on the same symbol are kept.
    pub fn add_transition(&mut self, symbol: Symbol, target: StateId) {
        self.transitions.entry(symbol).or_default().push(target);
    }

    /// Targets reachable on `symbol`, in insertion order.
    pub fn targets(&self, symbol: Symbol) -> &[StateId] {
        self.transitions
            .get(&symbol)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over `(symbol, targets)` groups in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (Symbol, &[StateId])> {
        self.transitions.iter().map(|(s, t)| (*s, t.as_slice()))
    }

    /// Total number of outgoing edges, counting parallel ones.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(Vec::len).sum()
    }
}

/// A compiled automaton. Immutable once built.
///
/// Owns every state created during its compilation; `start` and `accept`
/// are the designated entry and the single accepting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
    accept: StateId,
}

impl Nfa {
    /// Freeze an arena of states into an automaton.
    ///
    /// # Panics
    ///
    /// If a state's id differs from its index, if `start` or `accept` is out
    /// of range, or if `accept` is not the only accepting state.
    pub fn from_states(states: Vec<State>, start: StateId, accept: StateId) -> Self {
        assert!(
            states.iter().enumerate().all(|(i, s)| s.id as usize == i),
            "state ids must match arena indices"
        );
        assert!(
            (start as usize) < states.len() && (accept as usize) < states.len(),
            "start and accept must name states in the arena"
        );
        assert!(
            states
                .iter()
                .all(|s| s.accepting == (s.id == accept)),
            "exactly one accepting state expected"
        );
        Self {
            states,
            start,
            accept,
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// Get state by ID.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    /// Iterate over all states in id order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn targets(&self, id: StateId, symbol: Symbol) -> &[StateId] {
        self.state(id).targets(symbol)
    }

    pub fn is_accepting(&self, id: StateId) -> bool {
        self.state(id).is_accepting()
    }

    /// States reachable from `start`, in breadth-first discovery order.
    pub fn reachable(&self) -> Vec<StateId> {
        let mut seen = vec![false; self.states.len()];
        let mut order = Vec::with_capacity(self.states.len());
        let mut queue = VecDeque::from([self.start]);
        seen[self.start as usize] = true;

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for (_, targets) in self.state(id).transitions() {
                for &t in targets {
                    if !seen[t as usize] {
                        seen[t as usize] = true;
                        queue.push_back(t);
                    }
                }
            }
        }

        order
    }

    /// Non-epsilon characters used by any transition, sorted.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.states
            .iter()
            .flat_map(|s| s.transitions().filter_map(|(sym, _)| sym.as_char()))
            .collect()
    }
}
