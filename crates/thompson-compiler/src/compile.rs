//! Compiler facade: lex → preprocess → postfix → build.

use thompson_core::{Nfa, NfaStats};

use crate::Result;
use crate::build::{BuildCtx, BuildEvent};
use crate::lexer::{TokenStream, lex};
use crate::postfix::to_postfix;
use crate::preprocess::insert_concat;

/// Compile an expression into an automaton.
pub fn compile(source: &str) -> Result<Nfa> {
    Compiler::new(source)
        .compile()
        .map(Compilation::into_nfa)
}

/// One compilation run over one expression.
///
/// Each call to [`Compiler::compile`] owns a fresh [`BuildCtx`], so state
/// ids restart at zero and repeated runs produce identical automata.
pub struct Compiler<'src> {
    source: &'src str,
    record_events: bool,
}

/// Builder for `Compiler`.
pub struct CompilerBuilder<'src> {
    source: &'src str,
    record_events: bool,
}

impl<'src> CompilerBuilder<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            record_events: false,
        }
    }

    /// Record the construction rules applied, in order.
    pub fn record_events(mut self, value: bool) -> Self {
        self.record_events = value;
        self
    }

    pub fn build(self) -> Compiler<'src> {
        Compiler {
            source: self.source,
            record_events: self.record_events,
        }
    }
}

impl<'src> Compiler<'src> {
    pub fn new(source: &'src str) -> Self {
        CompilerBuilder::new(source).build()
    }

    pub fn builder(source: &'src str) -> CompilerBuilder<'src> {
        CompilerBuilder::new(source)
    }

    pub fn compile(&self) -> Result<Compilation<'src>> {
        let explicit = insert_concat(lex(self.source));
        let postfix = to_postfix(&explicit);

        let mut ctx = if self.record_events {
            BuildCtx::with_events()
        } else {
            BuildCtx::new()
        };
        let fragment = ctx.assemble(&postfix)?;
        let (nfa, events) = ctx.finish(fragment);

        Ok(Compilation {
            source: self.source,
            explicit,
            postfix,
            nfa,
            events,
        })
    }
}

/// Result of a successful compilation, with its intermediate forms.
#[derive(Debug, Clone)]
pub struct Compilation<'src> {
    source: &'src str,
    explicit: TokenStream<'src>,
    postfix: TokenStream<'src>,
    nfa: Nfa,
    events: Vec<BuildEvent>,
}

impl<'src> Compilation<'src> {
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Infix form with explicit concatenation.
    pub fn explicit(&self) -> &TokenStream<'src> {
        &self.explicit
    }

    pub fn postfix(&self) -> &TokenStream<'src> {
        &self.postfix
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// Construction rules applied, empty unless recording was enabled.
    pub fn events(&self) -> &[BuildEvent] {
        &self.events
    }

    pub fn stats(&self) -> NfaStats {
        NfaStats::from_nfa(&self.nfa)
    }

    pub fn into_nfa(self) -> Nfa {
        self.nfa
    }
}
