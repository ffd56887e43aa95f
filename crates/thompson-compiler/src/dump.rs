//! Dump helpers for automaton inspection and testing.
//!
//! Provides formatted output for `Nfa` and `Compilation` suitable for
//! snapshot testing and the CLI.

use std::fmt::Write;

use thompson_core::{Colors, Nfa, NfaStats, State, StateId, Symbol};

use crate::compile::Compilation;

/// Printer for `Nfa` listing every state in id order.
///
/// ```text
/// S2 (start): ε → S0, S3
/// S5 (accept): ∅
/// ```
pub struct NfaPrinter<'a> {
    nfa: &'a Nfa,
    colors: Colors,
}

impl<'a> NfaPrinter<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        for state in self.nfa.states() {
            self.format_state(w, state)?;
            writeln!(w)?;
        }
        Ok(())
    }

    fn format_state(&self, w: &mut String, state: &State) -> std::fmt::Result {
        let c = self.colors;
        write!(w, "{}S{}{}", c.blue, state.id(), c.reset)?;
        if state.id() == self.nfa.start() {
            write!(w, " {}(start){}", c.dim, c.reset)?;
        }
        if state.is_accepting() {
            write!(w, " {}(accept){}", c.green, c.reset)?;
        }
        w.push(':');

        if state.transition_count() == 0 {
            return write!(w, " {}∅{}", c.dim, c.reset);
        }

        for (i, (symbol, targets)) in state.transitions().enumerate() {
            if i > 0 {
                w.push(';');
            }
            w.push(' ');
            self.format_symbol(w, symbol)?;
            write!(w, " → ")?;
            self.format_targets(w, targets)?;
        }
        Ok(())
    }

    fn format_symbol(&self, w: &mut String, symbol: Symbol) -> std::fmt::Result {
        match symbol {
            Symbol::Epsilon => write!(w, "{}{}{}", self.colors.dim, symbol, self.colors.reset),
            Symbol::Char(_) => write!(w, "{symbol}"),
        }
    }

    fn format_targets(&self, w: &mut String, targets: &[StateId]) -> std::fmt::Result {
        for (i, t) in targets.iter().enumerate() {
            if i > 0 {
                write!(w, ", ")?;
            }
            write!(w, "{}S{}{}", self.colors.blue, t, self.colors.reset)?;
        }
        Ok(())
    }
}

/// Render summary figures, one per line.
pub fn format_stats(stats: &NfaStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("states: {}\n", stats.states));
    out.push_str(&format!("transitions: {}\n", stats.transitions));
    out.push_str(&format!("alphabet: {}\n", stats.alphabet_label()));
    out.push_str(&format!("complexity: {}\n", stats.complexity));
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Compilation dump methods
// ─────────────────────────────────────────────────────────────────────────────

impl Compilation<'_> {
    /// Intermediate forms followed by the state listing.
    pub fn dump(&self) -> String {
        self.dump_colored(false)
    }

    pub fn dump_colored(&self, colored: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("explicit: {}\n", self.explicit()));
        out.push_str(&format!("postfix: {}\n", self.postfix()));
        out.push('\n');
        out.push_str(&NfaPrinter::new(self.nfa()).colored(colored).dump());
        out
    }

    /// Construction rules in the order they were applied.
    pub fn dump_events(&self) -> String {
        let mut out = String::new();
        for (i, event) in self.events().iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, event));
        }
        out
    }

    pub fn dump_stats(&self) -> String {
        format_stats(&self.stats())
    }
}
