//! Explicit concatenation insertion.
//!
//! Juxtaposition is implicit in the surface syntax (`ab` means `a` then
//! `b`). The postfix translator needs a real operator, so this pass inserts a
//! `Concat` token wherever one operand ends and the next begins.

use rowan::TextRange;

use crate::lexer::{Token, TokenKind, TokenStream, lex};

/// Whether a concatenation belongs between `prev` and `next`.
///
/// An operand ends at a literal, `)` or `*`; one begins at a literal or `(`.
fn needs_concat(prev: TokenKind, next: TokenKind) -> bool {
    let ends_operand = matches!(
        prev,
        TokenKind::Literal | TokenKind::ParenClose | TokenKind::Star
    );
    let starts_operand = matches!(next, TokenKind::Literal | TokenKind::ParenOpen);
    ends_operand && starts_operand
}

/// Insert `Concat` markers into an infix stream.
///
/// Single left-to-right pass. Performs no validation: unbalanced parentheses
/// and dangling operators pass through unchanged for the builder to reject.
pub fn insert_concat(infix: TokenStream<'_>) -> TokenStream<'_> {
    let source = infix.source();
    let tokens = infix.tokens();
    let mut out = Vec::with_capacity(tokens.len() * 2);

    for (i, &token) in tokens.iter().enumerate() {
        out.push(token);
        if let Some(next) = tokens.get(i + 1)
            && needs_concat(token.kind, next.kind)
        {
            out.push(Token::new(
                TokenKind::Concat,
                TextRange::empty(next.span.start()),
            ));
        }
    }

    TokenStream::new(source, out)
}

/// Lex `source` and insert explicit concatenation.
///
/// ```
/// use thompson_compiler::add_explicit_concat;
///
/// assert_eq!(add_explicit_concat("ab").to_string(), "a.b");
/// assert_eq!(add_explicit_concat("a|b").to_string(), "a|b");
/// assert_eq!(add_explicit_concat("a*b").to_string(), "a*.b");
/// ```
pub fn add_explicit_concat(source: &str) -> TokenStream<'_> {
    insert_concat(lex(source))
}
