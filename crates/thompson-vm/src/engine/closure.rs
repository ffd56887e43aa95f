//! Set primitives: epsilon closure and single-symbol move.

use thompson_core::{Nfa, StateId, StateSet, Symbol};

/// All states reachable from `states` through epsilon edges alone,
/// including `states` themselves.
///
/// Work-list with a visited set, so epsilon cycles introduced by `*`
/// terminate.
pub fn epsilon_closure(nfa: &Nfa, states: &StateSet) -> StateSet {
    let mut closure = states.clone();
    let mut stack: Vec<StateId> = states.iter().copied().collect();

    while let Some(id) = stack.pop() {
        for &next in nfa.targets(id, Symbol::Epsilon) {
            if closure.insert(next) {
                stack.push(next);
            }
        }
    }

    closure
}

/// States reachable from `states` by exactly one edge labelled `c`.
///
/// Never follows epsilon edges; the caller closes the result.
pub fn move_on(nfa: &Nfa, states: &StateSet, c: char) -> StateSet {
    states
        .iter()
        .flat_map(|&id| nfa.targets(id, Symbol::Char(c)).iter().copied())
        .collect()
}
