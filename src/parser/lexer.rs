//! Logos-based lexer for YANG
//!
//! Fast tokenization using the logos crate. Logos splits the input into raw
//! words, quoted strings and punctuation; the [`Lexer`] iterator then
//! classifies words by position. A word in statement position is a keyword
//! (or an identifier for extension statements); any other word is an
//! unquoted string argument. `range 1..10;` therefore lexes `1..10` as a
//! string and `leaf type { ... }` lexes `type` as the leaf's name.

use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::token_kind::TokenKind;
use super::token_source::{Token, TokenStream};
use crate::base::{LineIndex, Span};

/// Lexer wrapping the logos-generated tokenizer.
///
/// Yields significant tokens only (trivia is dropped) and ends with a
/// single `EOF` token.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    index: LineIndex<'a>,
    statement_position: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            index: LineIndex::new(input),
            statement_position: true,
            finished: false,
        }
    }

    fn classify(&mut self, raw: Result<LogosToken, ()>, slice: &'a str) -> Option<(TokenKind, SmolStr)> {
        let classified = match raw {
            Ok(LogosToken::Whitespace | LogosToken::LineComment | LogosToken::BlockComment) => {
                return None;
            }
            Ok(LogosToken::Semicolon) => {
                self.statement_position = true;
                (TokenKind::SEMICOLON, SmolStr::new_static(";"))
            }
            Ok(LogosToken::LBrace) => {
                self.statement_position = true;
                (TokenKind::L_BRACE, SmolStr::new_static("{"))
            }
            Ok(LogosToken::RBrace) => {
                self.statement_position = true;
                (TokenKind::R_BRACE, SmolStr::new_static("}"))
            }
            Ok(LogosToken::Plus) => (TokenKind::PLUS, SmolStr::new_static("+")),
            Ok(LogosToken::Word) if self.statement_position => {
                self.statement_position = false;
                let kind = TokenKind::from_keyword(slice).unwrap_or(TokenKind::IDENT);
                (kind, SmolStr::new(slice))
            }
            Ok(LogosToken::Word) => (TokenKind::STRING, SmolStr::new(slice)),
            Ok(LogosToken::DoubleQuoted) => {
                self.statement_position = false;
                (TokenKind::STRING, SmolStr::new(unescape(&slice[1..slice.len() - 1])))
            }
            Ok(LogosToken::SingleQuoted) => {
                self.statement_position = false;
                (TokenKind::STRING, SmolStr::new(&slice[1..slice.len() - 1]))
            }
            Err(()) => (TokenKind::ERROR, SmolStr::new(slice)),
        };
        Some(classified)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let Some(raw) = self.inner.next() else {
                self.finished = true;
                let end = TextSize::new(self.inner.source().len() as u32);
                let position = self.index.position(end);
                return Some(Token::eof(Span::empty(position), end));
            };
            let slice = self.inner.slice();
            let span = self.inner.span();
            let range = TextRange::new(TextSize::new(span.start as u32), TextSize::new(span.end as u32));
            if let Some((kind, text)) = self.classify(raw, slice) {
                return Some(Token::new(kind, text, self.index.span(range), range));
            }
        }
    }
}

/// Tokenize an entire string into a Vec (trailing `EOF` included)
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// A ready-to-parse token source over `input`
pub fn token_stream(input: &str) -> TokenStream<Lexer<'_>> {
    TokenStream::new(Lexer::new(input))
}

/// Resolve the escapes allowed inside double-quoted YANG strings
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Skip to the closing `*/`; an unterminated comment is a lexical error
fn block_comment(lex: &mut logos::Lexer<'_, LogosToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

/// Logos token enum - raw tokens before positional classification
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token(";")]
    Semicolon,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("+", priority = 3)]
    Plus,

    // =========================================================================
    // STRINGS AND WORDS
    // =========================================================================
    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleQuoted,

    #[regex(r"'[^']*'")]
    SingleQuoted,

    /// Keyword, identifier or unquoted string. A `/` inside a word may not
    /// open a comment.
    #[regex(r#"([^ \t\r\n\f;{}"'/]|/[^ \t\r\n\f;{}"'/*])+|/"#)]
    Word,
}
