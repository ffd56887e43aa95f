//! Tracing infrastructure for simulation runs.
//!
//! The simulator reports every configuration change through [`Tracer`].
//! `NoopTracer` has `#[inline(always)]` empty methods, so plain acceptance
//! checks pay nothing for the hooks. Tracing-only state (such as the
//! character awaiting its closure line) lives in the tracer, never in the
//! simulator.

use std::fmt::Write;

use thompson_core::{Colors, StateSet};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: settled configuration per character, then the verdict.
    #[default]
    Default,
    /// Verbose (-v): adds move and closure sub-lines.
    Verbose,
    /// Very verbose (-vv): sub-lines also show the set they started from.
    VeryVerbose,
}

/// Simulation instrumentation.
///
/// `consumed` counts characters read once the reported change is applied.
/// - `trace_closure` - after epsilon-closing a set (initial or post-move)
/// - `trace_move` - after consuming one character
/// - `trace_verdict` - once, after the last step
pub trait Tracer {
    fn trace_closure(&mut self, consumed: usize, from: &StateSet, to: &StateSet);

    fn trace_move(&mut self, consumed: usize, c: char, from: &StateSet, to: &StateSet);

    fn trace_verdict(&mut self, accepted: bool, active: &StateSet);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_closure(&mut self, _consumed: usize, _from: &StateSet, _to: &StateSet) {}

    #[inline(always)]
    fn trace_move(&mut self, _consumed: usize, _c: char, _from: &StateSet, _to: &StateSet) {}

    #[inline(always)]
    fn trace_verdict(&mut self, _accepted: bool, _active: &StateSet) {}
}

/// Tracer that collects human-readable lines.
///
/// ```text
/// start      {S0, S2, S3, S4}
/// 'a' @1     {S0, S1, S3, S4}
/// 'b' @2     {S5}
/// accept
/// ```
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    /// Collected trace lines.
    lines: Vec<String>,
    /// Move awaiting its closure; printed under the closed set's line.
    pending: Option<PendingMove>,
}

struct PendingMove {
    c: char,
    from: StateSet,
    to: StateSet,
}

/// Builder for `PrintTracer`.
#[derive(Default)]
pub struct PrintTracerBuilder {
    verbosity: Verbosity,
    colored: bool,
}

impl PrintTracerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn build(self) -> PrintTracer {
        PrintTracer {
            verbosity: self.verbosity,
            colors: Colors::new(self.colored),
            lines: Vec::new(),
            pending: None,
        }
    }
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
            pending: None,
        }
    }

    pub fn builder() -> PrintTracerBuilder {
        PrintTracerBuilder::new()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joined lines, each newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn verbose(&self) -> bool {
        self.verbosity != Verbosity::Default
    }

    fn format_set(&self, set: &StateSet) -> String {
        let c = self.colors;
        if set.is_empty() {
            return format!("{}∅{}", c.red, c.reset);
        }
        let mut out = String::from("{");
        for (i, id) in set.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write!(out, "{}S{}{}", c.blue, id, c.reset).expect("String write never fails");
        }
        out.push('}');
        out
    }

    fn add_line(&mut self, label: String, set: &StateSet) {
        let set = self.format_set(set);
        self.lines.push(format!("{label:<10} {set}"));
    }

    fn add_subline(&mut self, label: &str, from: &StateSet, to: &StateSet) {
        let c = self.colors;
        let to = self.format_set(to);
        let line = if self.verbosity == Verbosity::VeryVerbose {
            let from = self.format_set(from);
            format!("  {}{label:<8}{} {from} → {to}", c.dim, c.reset)
        } else {
            format!("  {}{label:<8}{} {to}", c.dim, c.reset)
        };
        self.lines.push(line);
    }
}

impl Tracer for PrintTracer {
    fn trace_closure(&mut self, consumed: usize, from: &StateSet, to: &StateSet) {
        match self.pending.take() {
            Some(PendingMove { c, from: before, to: moved }) => {
                self.add_line(format!("{c:?} @{consumed}"), to);
                if self.verbose() {
                    self.add_subline("move", &before, &moved);
                }
            }
            None => self.add_line("start".to_string(), to),
        }
        if self.verbose() {
            self.add_subline("ε", from, to);
        }
    }

    fn trace_move(&mut self, consumed: usize, c: char, from: &StateSet, to: &StateSet) {
        if !to.is_empty() {
            self.pending = Some(PendingMove {
                c,
                from: from.clone(),
                to: to.clone(),
            });
            return;
        }
        self.add_line(format!("{c:?} @{consumed}"), to);
        if self.verbose() {
            self.add_subline("move", from, to);
        }
    }

    fn trace_verdict(&mut self, accepted: bool, _active: &StateSet) {
        let c = self.colors;
        let line = if accepted {
            format!("{}accept{}", c.green, c.reset)
        } else {
            format!("{}reject{}", c.red, c.reset)
        };
        self.lines.push(line);
    }
}
