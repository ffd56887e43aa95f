//! Graph view of an automaton for external renderers.
//!
//! Nodes are listed in breadth-first order from the start state. Parallel
//! edges between the same two states collapse into one edge carrying every
//! label, in first-seen order.

use indexmap::IndexMap;
use serde::Serialize;

use crate::automaton::{Nfa, StateId};

/// A state as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportNode {
    pub id: StateId,
    pub label: String,
    pub start: bool,
    pub accept: bool,
}

/// One or more transitions between the same pair of states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportEdge {
    pub from: StateId,
    pub to: StateId,
    /// Individual symbols, `ε` for epsilon.
    pub labels: Vec<String>,
}

impl ExportEdge {
    /// Combined label, e.g. `a, b`.
    pub fn label(&self) -> String {
        self.labels.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphExport {
    pub start: StateId,
    pub accept: StateId,
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<ExportEdge>,
}

impl GraphExport {
    pub fn from_nfa(nfa: &Nfa) -> Self {
        let order = nfa.reachable();

        let nodes = order
            .iter()
            .map(|&id| ExportNode {
                id,
                label: format!("S{id}"),
                start: id == nfa.start(),
                accept: id == nfa.accept(),
            })
            .collect();

        let mut edges: IndexMap<(StateId, StateId), Vec<String>> = IndexMap::new();
        for &id in &order {
            for (symbol, targets) in nfa.state(id).transitions() {
                let label = symbol.to_string();
                for &to in targets {
                    let labels = edges.entry((id, to)).or_default();
                    if !labels.contains(&label) {
                        labels.push(label.clone());
                    }
                }
            }
        }

        Self {
            start: nfa.start(),
            accept: nfa.accept(),
            nodes,
            edges: edges
                .into_iter()
                .map(|((from, to), labels)| ExportEdge { from, to, labels })
                .collect(),
        }
    }
}
