//! Summary figures for a compiled automaton.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::automaton::Nfa;
use crate::export::GraphExport;

/// Coarse size class based on `states + transitions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn from_size(size: usize) -> Self {
        if size > 20 {
            Complexity::High
        } else if size > 10 {
            Complexity::Medium
        } else {
            Complexity::Low
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NfaStats {
    /// Reachable states.
    pub states: usize,
    /// Deduplicated edges, as listed by [`GraphExport`].
    pub transitions: usize,
    pub alphabet: BTreeSet<char>,
    pub complexity: Complexity,
}

impl NfaStats {
    pub fn from_nfa(nfa: &Nfa) -> Self {
        Self::from_export(&GraphExport::from_nfa(nfa), nfa)
    }

    pub fn from_export(export: &GraphExport, nfa: &Nfa) -> Self {
        let states = export.nodes.len();
        let transitions = export.edges.len();
        Self {
            states,
            transitions,
            alphabet: nfa.alphabet(),
            complexity: Complexity::from_size(states + transitions),
        }
    }

    /// Alphabet as `a, b, c`, or `None` when only epsilon edges exist.
    pub fn alphabet_label(&self) -> String {
        if self.alphabet.is_empty() {
            return "None".to_string();
        }
        self.alphabet
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
