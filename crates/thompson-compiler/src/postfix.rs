//! Infix to postfix translation (shunting-yard).
//!
//! Precedence: `*` > concatenation > `|`. Equal precedence pops, which makes
//! the binary operators left-associative.
//!
//! The translator never fails. Unmatched parentheses are kept in the output
//! instead of being dropped: a stray `)` is emitted where it occurs and an
//! unclosed `(` is emitted when the stack drains. The builder rejects both
//! with the parenthesis' own span. Well-formed input yields no parentheses.

use crate::lexer::{Token, TokenKind, TokenStream};

pub fn to_postfix<'src>(infix: &TokenStream<'src>) -> TokenStream<'src> {
    let mut output: Vec<Token> = Vec::with_capacity(infix.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in infix.iter() {
        match token.kind {
            TokenKind::Literal => output.push(token),
            TokenKind::ParenOpen => stack.push(token),
            TokenKind::ParenClose => loop {
                match stack.pop() {
                    Some(top) if top.kind == TokenKind::ParenOpen => break,
                    Some(top) => output.push(top),
                    None => {
                        output.push(token);
                        break;
                    }
                }
            },
            TokenKind::Union | TokenKind::Star | TokenKind::Concat => {
                let precedence = token.kind.precedence();
                while let Some(&top) = stack.last() {
                    if top.kind == TokenKind::ParenOpen || top.kind.precedence() < precedence {
                        break;
                    }
                    output.push(top);
                    stack.pop();
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        output.push(top);
    }

    TokenStream::new(infix.source(), output)
}
