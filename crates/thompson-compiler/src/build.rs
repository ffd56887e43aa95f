//! Thompson construction over a stack of fragments.
//!
//! States are stored in a flat arena owned by [`BuildCtx`] and referenced by
//! `StateId`. A fresh context starts numbering at zero, so every compilation
//! gets ids that are stable and comparable within its own automaton.
//!
//! Every live fragment has exactly one accepting state: its `end`. Each
//! combinator clears the flag on the ends it absorbs and marks only its own
//! new end.

use std::fmt;

use thompson_core::{Nfa, State, StateId, Symbol};

use crate::error::{Error, InvalidReason};
use crate::lexer::{Token, TokenKind, TokenStream};
use crate::Result;

/// An automaton piece with a single entry and a single accepting exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub end: StateId,
}

impl Fragment {
    pub fn new(start: StateId, end: StateId) -> Self {
        Self { start, end }
    }
}

/// Construction rule applied, recorded for explanatory consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEvent {
    /// `start -c-> end`.
    Char {
        symbol: char,
        start: StateId,
        end: StateId,
    },
    /// Epsilon link from the left fragment's end to the right one's start.
    Concat { from: StateId, to: StateId },
    /// New branch and join states around two alternatives.
    Union { start: StateId, end: StateId },
    /// New entry and exit around a repeated fragment.
    Star { start: StateId, end: StateId },
}

impl fmt::Display for BuildEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char { symbol, start, end } => {
                write!(f, "char '{symbol}': S{start} → S{end}")
            }
            Self::Concat { from, to } => write!(f, "concat: S{from} → S{to}"),
            Self::Union { start, end } => write!(f, "union: S{start} (start), S{end} (accept)"),
            Self::Star { start, end } => write!(f, "star: S{start} (start), S{end} (accept)"),
        }
    }
}

/// Per-compilation arena and id counter.
#[derive(Debug, Default)]
pub struct BuildCtx {
    states: Vec<State>,
    events: Option<Vec<BuildEvent>>,
}

impl BuildCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that records a [`BuildEvent`] per applied rule.
    pub fn with_events() -> Self {
        Self {
            states: Vec::new(),
            events: Some(Vec::new()),
        }
    }

    /// Number of states allocated so far (also the next id).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    pub fn events(&self) -> &[BuildEvent] {
        self.events.as_deref().unwrap_or(&[])
    }

    /// Allocate a non-accepting state, returning its ID.
    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(State::new(id));
        id
    }

    fn add_accepting_state(&mut self) -> StateId {
        let id = self.add_state();
        self.set_accepting(id, true);
        id
    }

    fn set_accepting(&mut self, id: StateId, accepting: bool) {
        self.states[id as usize].set_accepting(accepting);
    }

    /// Add an edge `from -symbol-> to`.
    pub fn connect(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        self.states[from as usize].add_transition(symbol, to);
    }

    fn record(&mut self, event: BuildEvent) {
        if let Some(events) = &mut self.events {
            events.push(event);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fragment Combinators
    // ─────────────────────────────────────────────────────────────────────

    /// Single character: `start -c-> end`.
    pub fn char_fragment(&mut self, c: char) -> Fragment {
        let start = self.add_state();
        let end = self.add_accepting_state();
        self.connect(start, Symbol::Char(c), end);

        self.record(BuildEvent::Char {
            symbol: c,
            start,
            end,
        });
        Fragment::new(start, end)
    }

    /// Sequence: `left` then `right`.
    ///
    /// ```text
    /// left.start ─→ … ─→ left.end ─ε→ right.start ─→ … ─→ right.end
    /// ```
    pub fn concat(&mut self, left: Fragment, right: Fragment) -> Fragment {
        self.set_accepting(left.end, false);
        self.connect(left.end, Symbol::Epsilon, right.start);

        self.record(BuildEvent::Concat {
            from: left.end,
            to: right.start,
        });
        Fragment::new(left.start, right.end)
    }

    /// Alternation: `left | right`.
    ///
    /// ```text
    ///          ┌─ε→ left ──ε─┐
    /// start ───┤             ├──→ end
    ///          └─ε→ right ─ε─┘
    /// ```
    pub fn union(&mut self, left: Fragment, right: Fragment) -> Fragment {
        let start = self.add_state();
        let end = self.add_accepting_state();

        self.connect(start, Symbol::Epsilon, left.start);
        self.connect(start, Symbol::Epsilon, right.start);

        self.set_accepting(left.end, false);
        self.set_accepting(right.end, false);

        self.connect(left.end, Symbol::Epsilon, end);
        self.connect(right.end, Symbol::Epsilon, end);

        self.record(BuildEvent::Union { start, end });
        Fragment::new(start, end)
    }

    /// Zero or more: `inner*`.
    ///
    /// ```text
    ///                ┌────ε────┐
    ///                ↓         │
    /// start ─ε→ inner.start … inner.end ─ε→ end
    ///   │                                    ↑
    ///   └──────────────────ε─────────────────┘
    /// ```
    pub fn star(&mut self, inner: Fragment) -> Fragment {
        let start = self.add_state();
        let end = self.add_accepting_state();

        self.connect(start, Symbol::Epsilon, inner.start);
        self.connect(start, Symbol::Epsilon, end);

        self.set_accepting(inner.end, false);
        self.connect(inner.end, Symbol::Epsilon, inner.start);
        self.connect(inner.end, Symbol::Epsilon, end);

        self.record(BuildEvent::Star { start, end });
        Fragment::new(start, end)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Postfix evaluation
    // ─────────────────────────────────────────────────────────────────────

    /// Reduce a postfix stream to a single fragment.
    ///
    /// Fails when an operator lacks operands, a parenthesis survived
    /// translation, or the stack does not end with exactly one fragment.
    pub fn assemble(&mut self, postfix: &TokenStream<'_>) -> Result<Fragment> {
        let mut stack: Vec<Fragment> = Vec::new();

        for token in postfix.iter() {
            match token.kind {
                TokenKind::Literal => {
                    let c = postfix
                        .literal(token)
                        .expect("lexer yields exactly one character per literal token");
                    let fragment = self.char_fragment(c);
                    stack.push(fragment);
                }
                TokenKind::Star => {
                    let inner = pop_operand(&mut stack, token)?;
                    let fragment = self.star(inner);
                    stack.push(fragment);
                }
                TokenKind::Concat => {
                    let (left, right) = pop_operands(&mut stack, token)?;
                    let fragment = self.concat(left, right);
                    stack.push(fragment);
                }
                TokenKind::Union => {
                    let (left, right) = pop_operands(&mut stack, token)?;
                    let fragment = self.union(left, right);
                    stack.push(fragment);
                }
                TokenKind::ParenOpen => {
                    return Err(Error::invalid(InvalidReason::UnclosedParen, token.span));
                }
                TokenKind::ParenClose => {
                    return Err(Error::invalid(InvalidReason::UnmatchedParen, token.span));
                }
            }
        }

        match stack.as_slice() {
            [fragment] => Ok(*fragment),
            [] => Err(Error::invalid(InvalidReason::Empty, postfix.full_span())),
            rest => Err(Error::invalid(
                InvalidReason::Unconnected(rest.len()),
                postfix.full_span(),
            )),
        }
    }

    /// Freeze the arena into an automaton rooted at `fragment`.
    ///
    /// Returns the recorded events alongside (empty unless enabled).
    pub fn finish(mut self, fragment: Fragment) -> (Nfa, Vec<BuildEvent>) {
        self.set_accepting(fragment.end, true);
        let events = self.events.take().unwrap_or_default();
        let nfa = Nfa::from_states(self.states, fragment.start, fragment.end);
        (nfa, events)
    }
}

fn pop_operand(stack: &mut Vec<Fragment>, op: &Token) -> Result<Fragment> {
    stack
        .pop()
        .ok_or_else(|| Error::invalid(InvalidReason::MissingOperand(op.kind), op.span))
}

/// Pop the right operand, then the left one.
fn pop_operands(stack: &mut Vec<Fragment>, op: &Token) -> Result<(Fragment, Fragment)> {
    let right = pop_operand(stack, op)?;
    let left = pop_operand(stack, op)?;
    Ok((left, right))
}
