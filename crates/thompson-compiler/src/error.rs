//! Errors that can occur during compilation.

use std::fmt;

use rowan::TextRange;

use crate::lexer::TokenKind;

/// Compilation error.
///
/// Lexing, preprocessing, and postfix translation never fail; every
/// malformation surfaces here, raised by the builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The postfix stream cannot be reduced to exactly one fragment.
    #[error("invalid expression: {reason}")]
    InvalidExpression {
        reason: InvalidReason,
        /// Byte range in the source expression that triggered the error.
        span: TextRange,
    },
}

impl Error {
    pub fn invalid(reason: InvalidReason, span: TextRange) -> Self {
        Self::InvalidExpression { reason, span }
    }

    pub fn reason(&self) -> InvalidReason {
        match self {
            Self::InvalidExpression { reason, .. } => *reason,
        }
    }

    pub fn span(&self) -> TextRange {
        match self {
            Self::InvalidExpression { span, .. } => *span,
        }
    }
}

/// Why an expression was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// No operands at all, e.g. `` or `()`.
    Empty,
    /// An operator found fewer fragments than it consumes.
    MissingOperand(TokenKind),
    /// `(` without a matching `)`.
    UnclosedParen,
    /// `)` without a matching `(`.
    UnmatchedParen,
    /// More than one fragment left after the last token.
    Unconnected(usize),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("expression is empty"),
            Self::MissingOperand(TokenKind::Star) => f.write_str("`*` has nothing to repeat"),
            Self::MissingOperand(TokenKind::Union) => {
                f.write_str("`|` needs an expression on both sides")
            }
            Self::MissingOperand(_) => f.write_str("concatenation is missing an operand"),
            Self::UnclosedParen => f.write_str("unclosed `(`"),
            Self::UnmatchedParen => f.write_str("unmatched `)`"),
            Self::Unconnected(n) => write!(f, "expression leaves {n} disconnected parts"),
        }
    }
}
