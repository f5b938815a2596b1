//! Recursive descent parser for YANG
//!
//! Builds an owned [`StatementNode`] tree from a [`TokenSource`]. Syntax
//! errors abort the parse at the offending token. Cardinality violations are
//! collected as each block closes and returned together once the unit is
//! complete, unless [`ParseOptions::fail_fast`] is set.

use tracing::debug;

use super::errors::{ErrorCode, ParseError, StructuralError, SyntaxError};
use super::grammar::{self, PResult, StatementParser};
use super::lexer;
use super::options::ParseOptions;
use super::token_kind::TokenKind;
use super::token_source::{Token, TokenSource};
use crate::syntax::{StatementKind, StatementNode};

/// Parse a `module` from `tokens`
pub fn parse_module<S: TokenSource>(tokens: S) -> Result<StatementNode, ParseError> {
    parse_module_with_options(tokens, &ParseOptions::default())
}

pub fn parse_module_with_options<S: TokenSource>(
    tokens: S,
    options: &ParseOptions,
) -> Result<StatementNode, ParseError> {
    Parser::new(tokens, options).parse_top(Some(StatementKind::Module))
}

/// Parse a `submodule` from `tokens`
pub fn parse_submodule<S: TokenSource>(tokens: S) -> Result<StatementNode, ParseError> {
    parse_submodule_with_options(tokens, &ParseOptions::default())
}

pub fn parse_submodule_with_options<S: TokenSource>(
    tokens: S,
    options: &ParseOptions,
) -> Result<StatementNode, ParseError> {
    Parser::new(tokens, options).parse_top(Some(StatementKind::Submodule))
}

/// Parse whichever of `module` or `submodule` the tokens start with
pub fn parse_yang_unit<S: TokenSource>(tokens: S) -> Result<StatementNode, ParseError> {
    parse_yang_unit_with_options(tokens, &ParseOptions::default())
}

pub fn parse_yang_unit_with_options<S: TokenSource>(
    tokens: S,
    options: &ParseOptions,
) -> Result<StatementNode, ParseError> {
    Parser::new(tokens, options).parse_top(None)
}

/// Tokenize and parse YANG source text
pub fn parse_str(input: &str) -> Result<StatementNode, ParseError> {
    parse_str_with_options(input, &ParseOptions::default())
}

pub fn parse_str_with_options(
    input: &str,
    options: &ParseOptions,
) -> Result<StatementNode, ParseError> {
    parse_yang_unit_with_options(lexer::token_stream(input), options)
}

struct Parser<'o, S> {
    tokens: S,
    options: &'o ParseOptions,
    structural: Vec<StructuralError>,
}

impl<'o, S: TokenSource> Parser<'o, S> {
    fn new(tokens: S, options: &'o ParseOptions) -> Self {
        Self {
            tokens,
            options,
            structural: Vec::new(),
        }
    }

    fn parse_top(mut self, expected: Option<StatementKind>) -> Result<StatementNode, ParseError> {
        let kind = match (self.current_kind(), expected) {
            (TokenKind::MODULE_KW, None | Some(StatementKind::Module)) => StatementKind::Module,
            (TokenKind::SUBMODULE_KW, None | Some(StatementKind::Submodule)) => {
                StatementKind::Submodule
            }
            _ => return Err(self.unexpected_top(expected).into()),
        };
        let unit = grammar::parse_unit(&mut self, kind)?;

        if !self.at(TokenKind::EOF) {
            let message = format!(
                "unexpected input after the end of {} '{}'",
                kind,
                unit.argument().unwrap_or_default()
            );
            return Err(self
                .error_here(ErrorCode::E0204, message)
                .with_expected(["end of input"])
                .into());
        }
        self.finish(unit)
    }

    fn finish(self, unit: StatementNode) -> Result<StatementNode, ParseError> {
        if self.structural.is_empty() {
            debug!(
                "[PARSE] {} '{}' parsed with {} top-level statements",
                unit.kind(),
                unit.argument().unwrap_or_default(),
                unit.children().len()
            );
            Ok(unit)
        } else {
            debug!(
                "[PARSE] {} '{}' has {} structural errors",
                unit.kind(),
                unit.argument().unwrap_or_default(),
                self.structural.len()
            );
            Err(ParseError::Structural(self.structural))
        }
    }

    fn unexpected_top(&self, expected: Option<StatementKind>) -> SyntaxError {
        let (message, accepted): (_, &[&str]) = match expected {
            Some(StatementKind::Submodule) => (
                "expected 'submodule' at the start of input",
                &["'submodule'"][..],
            ),
            Some(_) => ("expected 'module' at the start of input", &["'module'"][..]),
            None => (
                "expected 'module' or 'submodule' at the start of input",
                &["'module'", "'submodule'"][..],
            ),
        };
        self.error_here(ErrorCode::E0307, message)
            .with_expected(accepted.iter().copied())
    }
}

impl<S: TokenSource> StatementParser for Parser<'_, S> {
    fn current(&self) -> &Token {
        self.tokens.peek()
    }

    fn bump(&mut self) -> Token {
        self.tokens.advance()
    }

    fn options(&self) -> &ParseOptions {
        self.options
    }

    fn report(&mut self, errors: Vec<StructuralError>) -> PResult<()> {
        if errors.is_empty() {
            return Ok(());
        }
        if self.options.fail_fast {
            return Err(ParseError::Structural(errors));
        }
        self.structural.extend(errors);
        Ok(())
    }
}
