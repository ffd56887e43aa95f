//! Lexer for regular expressions.
//!
//! Produces span-based tokens without storing text; literal text is sliced
//! from the source only when needed.
//!
//! Every Unicode scalar that is not `|`, `*`, `(` or `)` is a literal, so the
//! lexer never fails. A `.` typed by the user is a literal too: the explicit
//! concatenation marker is its own token kind and only the preprocessor
//! creates it.

use std::fmt;
use std::ops::Range;

use logos::Logos;
use rowan::TextRange;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("|")]
    Union,

    #[token("*")]
    Star,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[regex(r"[^|*()]")]
    Literal,

    /// Explicit concatenation. Synthesized by the preprocessor, never lexed.
    Concat,
}

impl TokenKind {
    /// Binary and unary operators: `|`, `*`, and concatenation.
    pub fn is_operator(self) -> bool {
        matches!(self, Self::Union | Self::Star | Self::Concat)
    }

    pub fn is_paren(self) -> bool {
        matches!(self, Self::ParenOpen | Self::ParenClose)
    }

    /// Binding strength. Parentheses and literals have none.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Star => 3,
            Self::Concat => 2,
            Self::Union => 1,
            Self::ParenOpen | Self::ParenClose | Self::Literal => 0,
        }
    }

    /// Fixed spelling for non-literal kinds.
    pub fn spelling(self) -> Option<&'static str> {
        match self {
            Self::Union => Some("|"),
            Self::Star => Some("*"),
            Self::ParenOpen => Some("("),
            Self::ParenClose => Some(")"),
            Self::Concat => Some("."),
            Self::Literal => None,
        }
    }
}

/// Zero-copy token: kind + span, text retrieved via [`TokenStream::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Tokens together with the source they point into.
///
/// Displays as the expression it encodes, with concatenation shown as `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<'src> {
    source: &'src str,
    tokens: Vec<Token>,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self { source, tokens }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Retrieves the source slice for a token. Empty for concatenation.
    #[inline]
    pub fn text(&self, token: &Token) -> &'src str {
        &self.source[Range::<usize>::from(token.span)]
    }

    /// The character a literal token stands for.
    pub fn literal(&self, token: &Token) -> Option<char> {
        match token.kind {
            TokenKind::Literal => self.text(token).chars().next(),
            _ => None,
        }
    }

    /// Byte range covering the whole source.
    pub fn full_span(&self) -> TextRange {
        TextRange::up_to((self.source.len() as u32).into())
    }

    /// Kinds only, for assertions and debugging.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl fmt::Display for TokenStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token.kind.spelling() {
                Some(s) => f.write_str(s)?,
                None => f.write_str(self.text(token))?,
            }
        }
        Ok(())
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes an expression into span-based tokens.
///
/// Yields one token per character.
pub fn lex(source: &str) -> TokenStream<'_> {
    let mut tokens = Vec::with_capacity(source.len());
    let mut lexer = TokenKind::lexer(source);

    loop {
        match lexer.next() {
            Some(Ok(kind)) => tokens.push(Token::new(kind, range_to_text_range(lexer.span()))),
            // Safeguard only: `Literal` matches every scalar that is not an
            // operator, so logos never reports an error here.
            Some(Err(())) => {
                let span = lexer.span();
                for (offset, c) in source[span.clone()].char_indices() {
                    let start = span.start + offset;
                    tokens.push(Token::new(
                        TokenKind::Literal,
                        range_to_text_range(start..start + c.len_utf8()),
                    ));
                }
            }
            None => break,
        }
    }

    TokenStream::new(source, tokens)
}
