use crate::{Nfa, State, StateId, Symbol};

/// Hand-built automaton for `a|b`:
/// S4 =ε=> S0 -a-> S1 =ε=> S5, S4 =ε=> S2 -b-> S3 =ε=> S5.
fn union_ab() -> Nfa {
    let mut states: Vec<State> = (0..6).map(State::new).collect();
    states[0].add_transition(Symbol::Char('a'), 1);
    states[2].add_transition(Symbol::Char('b'), 3);
    states[4].add_transition(Symbol::Epsilon, 0);
    states[4].add_transition(Symbol::Epsilon, 2);
    states[1].add_transition(Symbol::Epsilon, 5);
    states[3].add_transition(Symbol::Epsilon, 5);
    states[5].set_accepting(true);
    Nfa::from_states(states, 4, 5)
}

#[test]
fn symbol_display() {
    assert_eq!(Symbol::Epsilon.to_string(), "ε");
    assert_eq!(Symbol::Char('x').to_string(), "x");
    assert_eq!(Symbol::from('é').to_string(), "é");
}

#[test]
fn symbol_epsilon_sorts_first() {
    let mut symbols = vec![Symbol::Char('b'), Symbol::Epsilon, Symbol::Char('a')];
    symbols.sort();
    assert_eq!(
        symbols,
        vec![Symbol::Epsilon, Symbol::Char('a'), Symbol::Char('b')]
    );
}

#[test]
fn symbol_as_char() {
    assert_eq!(Symbol::Char('q').as_char(), Some('q'));
    assert_eq!(Symbol::Epsilon.as_char(), None);
    assert!(Symbol::Epsilon.is_epsilon());
    assert!(!Symbol::Char('q').is_epsilon());
}

#[test]
fn state_keeps_parallel_edges() {
    let mut s = State::new(0);
    s.add_transition(Symbol::Char('a'), 1);
    s.add_transition(Symbol::Char('a'), 2);
    s.add_transition(Symbol::Epsilon, 3);

    assert_eq!(s.targets(Symbol::Char('a')), &[1, 2]);
    assert_eq!(s.targets(Symbol::Epsilon), &[3]);
    assert_eq!(s.targets(Symbol::Char('z')), &[] as &[StateId]);
    assert_eq!(s.transition_count(), 3);
}

#[test]
fn state_transitions_in_insertion_order() {
    let mut s = State::new(7);
    s.add_transition(Symbol::Char('z'), 1);
    s.add_transition(Symbol::Epsilon, 2);
    s.add_transition(Symbol::Char('z'), 3);

    let groups: Vec<_> = s.transitions().map(|(sym, t)| (sym, t.to_vec())).collect();
    assert_eq!(
        groups,
        vec![
            (Symbol::Char('z'), vec![1, 3]),
            (Symbol::Epsilon, vec![2]),
        ]
    );
}

#[test]
fn state_accepting_flag() {
    let mut s = State::new(0);
    assert!(!s.is_accepting());
    s.set_accepting(true);
    assert!(s.is_accepting());
    s.set_accepting(false);
    assert!(!s.is_accepting());
}

#[test]
fn nfa_accessors() {
    let nfa = union_ab();

    assert_eq!(nfa.start(), 4);
    assert_eq!(nfa.accept(), 5);
    assert_eq!(nfa.len(), 6);
    assert!(!nfa.is_empty());
    assert!(nfa.is_accepting(5));
    assert!(!nfa.is_accepting(4));
    assert_eq!(nfa.targets(4, Symbol::Epsilon), &[0, 2]);
    assert_eq!(nfa.state(0).id(), 0);
}

#[test]
fn nfa_reachable_is_breadth_first() {
    let nfa = union_ab();
    assert_eq!(nfa.reachable(), vec![4, 0, 2, 1, 3, 5]);
}

#[test]
fn nfa_reachable_handles_cycles() {
    let mut states: Vec<State> = (0..2).map(State::new).collect();
    states[0].add_transition(Symbol::Epsilon, 1);
    states[1].add_transition(Symbol::Epsilon, 0);
    states[1].add_transition(Symbol::Epsilon, 1);
    states[1].set_accepting(true);
    let nfa = Nfa::from_states(states, 0, 1);

    assert_eq!(nfa.reachable(), vec![0, 1]);
}

#[test]
fn nfa_alphabet_sorted() {
    let nfa = union_ab();
    let alphabet: Vec<char> = nfa.alphabet().into_iter().collect();
    assert_eq!(alphabet, vec!['a', 'b']);
}

#[test]
fn symbol_serializes_as_label() {
    assert_eq!(serde_json::to_string(&Symbol::Epsilon).unwrap(), r#""ε""#);
    assert_eq!(serde_json::to_string(&Symbol::Char('a')).unwrap(), r#""a""#);
}

#[test]
#[should_panic(expected = "state ids must match arena indices")]
fn from_states_rejects_misnumbered_arena() {
    let mut states = vec![State::new(0), State::new(2)];
    states[1].set_accepting(true);

    Nfa::from_states(states, 0, 2);
}

#[test]
#[should_panic(expected = "start and accept must name states in the arena")]
fn from_states_rejects_start_out_of_range() {
    let mut states: Vec<State> = (0..2).map(State::new).collect();
    states[1].set_accepting(true);

    Nfa::from_states(states, 7, 1);
}

#[test]
#[should_panic(expected = "exactly one accepting state expected")]
fn from_states_rejects_second_accepting_state() {
    let mut states: Vec<State> = (0..2).map(State::new).collect();
    states[0].set_accepting(true);
    states[1].set_accepting(true);

    Nfa::from_states(states, 0, 1);
}
