//! Token source contract consumed by the statement parser
//!
//! The parser only ever peeks one token ahead and consumes forward. Any
//! tokenizer can drive it by implementing [`TokenSource`]; [`TokenStream`]
//! adapts a plain token iterator (the bundled [`Lexer`](super::Lexer) or a
//! pre-tokenized `Vec<Token>`).

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::token_kind::TokenKind;
use crate::base::{Position, Span};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Token text; string arguments arrive already unquoted
    pub text: SmolStr,
    pub span: Span,
    pub range: TextRange,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<SmolStr>, span: Span, range: TextRange) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            range,
        }
    }

    /// The end-of-input marker placed at `span`/`offset`
    pub fn eof(span: Span, offset: TextSize) -> Self {
        Self::new(TokenKind::EOF, "", span, TextRange::empty(offset))
    }

    pub fn position(&self) -> Position {
        self.span.start
    }

    /// Token description for diagnostics: `'leaf'`, `string "abc"`, `end of input`
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOF => "end of input".to_string(),
            TokenKind::STRING => format!("string \"{}\"", self.text),
            TokenKind::IDENT => format!("identifier '{}'", self.text),
            _ => format!("'{}'", self.text),
        }
    }
}

/// Ordered, finite token supply with one token of lookahead
pub trait TokenSource {
    /// The next token without consuming it. Returns an `EOF` token once the
    /// input is exhausted.
    fn peek(&self) -> &Token;

    /// Consume and return the next token. Keeps returning `EOF` at the end.
    fn advance(&mut self) -> Token;

    /// Source position of the next token
    fn position(&self) -> Position {
        self.peek().position()
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::EOF
    }
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn peek(&self) -> &Token {
        (**self).peek()
    }

    fn advance(&mut self) -> Token {
        (**self).advance()
    }

    fn position(&self) -> Position {
        (**self).position()
    }

    fn is_at_end(&self) -> bool {
        (**self).is_at_end()
    }
}

/// Adapts any token iterator into a [`TokenSource`] with one-token lookahead
#[derive(Debug, Clone)]
pub struct TokenStream<I: Iterator<Item = Token>> {
    tokens: I,
    lookahead: Token,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        let mut tokens = tokens.into_iter();
        let lookahead = tokens
            .next()
            .unwrap_or_else(|| Token::eof(Span::default(), TextSize::new(0)));
        Self { tokens, lookahead }
    }
}

impl<I: Iterator<Item = Token>> TokenSource for TokenStream<I> {
    fn peek(&self) -> &Token {
        &self.lookahead
    }

    fn advance(&mut self) -> Token {
        if self.lookahead.kind == TokenKind::EOF {
            return self.lookahead.clone();
        }
        let end = Span::empty(self.lookahead.span.end);
        let end_offset = self.lookahead.range.end();
        let next = self
            .tokens
            .next()
            .unwrap_or_else(|| Token::eof(end, end_offset));
        std::mem::replace(&mut self.lookahead, next)
    }
}
