//! Grammar table and statement parsing functions
//!
//! This module contains the YANG statement grammar, organized as:
//! - `table` - Static per-kind rules: argument form, body form, permitted
//!   substatements and their cardinality
//! - `argument` - String argument assembly (`"a" + "b"`)
//! - `body` - Generic statement and block parsing driven by the table
//! - `header` - `module`/`submodule` bodies with their ordered regions
//! - `type_body` - The mutually exclusive restriction shapes of `type`
//!
//! The parsing functions are generic over [`StatementParser`] so they can be
//! driven by any parser implementation.

mod argument;
mod body;
mod header;
mod table;
mod type_body;

pub use table::{permitted_children, rule, unit_regions};
pub use type_body::{TypeBodyShape, type_body_shape};

pub(crate) use header::parse_unit;

use super::errors::{ErrorCode, ParseError, StructuralError, SyntaxError};
use super::options::ParseOptions;
use super::token_kind::TokenKind;
use super::token_source::Token;
use crate::syntax::StatementKind;

/// Result type of grammar functions: syntax errors and fail-fast structural
/// errors both abort the parse
pub(crate) type PResult<T> = Result<T, ParseError>;

/// How many times a substatement may appear under one parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    ExactlyOne,
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
}

impl Cardinality {
    pub fn is_required(self) -> bool {
        matches!(self, Self::ExactlyOne | Self::OneOrMore)
    }

    pub fn is_single(self) -> bool {
        matches!(self, Self::ExactlyOne | Self::ZeroOrOne)
    }

    pub fn admits(self, count: usize) -> bool {
        match self {
            Self::ExactlyOne => count == 1,
            Self::ZeroOrOne => count <= 1,
            Self::ZeroOrMore => true,
            Self::OneOrMore => count >= 1,
        }
    }
}

/// One permitted substatement of a parent kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildRule {
    pub kind: StatementKind,
    pub cardinality: Cardinality,
}

/// Whether a statement takes an argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentForm {
    Required,
    /// Extension statements: `ext:flag;` and `ext:label "x";` are both valid
    Optional,
    /// `input` and `output`
    None,
}

/// How a statement may terminate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyForm {
    /// `;` or `{` at most one extension statement `}`
    Terminator,
    /// `;` or `{ substatements }`
    Optional,
    /// `{ substatements }` only
    Block,
    /// `{ substatements }` holding at least one substatement
    NonEmptyBlock,
}

impl BodyForm {
    pub fn allows_semicolon(self) -> bool {
        matches!(self, Self::Terminator | Self::Optional)
    }
}

/// Grammar rule for one statement kind
#[derive(Debug)]
pub struct StatementRule {
    pub kind: StatementKind,
    pub argument: ArgumentForm,
    pub body: BodyForm,
    pub children: &'static [ChildRule],
}

impl StatementRule {
    pub fn cardinality_of(&self, kind: StatementKind) -> Option<Cardinality> {
        find_rule(self.children, kind).map(|rule| rule.cardinality)
    }

    pub fn permits(&self, kind: StatementKind) -> bool {
        self.cardinality_of(kind).is_some()
    }
}

/// A region of a module/submodule body
#[derive(Debug)]
pub struct Region {
    pub name: &'static str,
    pub kinds: &'static [StatementKind],
}

impl Region {
    pub fn contains(&self, kind: StatementKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// True for kinds whose body opens with an ordered header prelude
pub fn is_ordered_prelude(kind: StatementKind) -> bool {
    kind.is_unit()
}

pub(crate) fn find_rule(rules: &[ChildRule], kind: StatementKind) -> Option<&ChildRule> {
    rules.iter().find(|rule| rule.kind == kind)
}

/// Parser operations the grammar functions need
pub(crate) trait StatementParser {
    // Token inspection
    fn current(&self) -> &Token;

    fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    // Token consumption
    fn bump(&mut self) -> Token;

    fn options(&self) -> &ParseOptions;

    /// Record the cardinality violations of one closed block
    fn report(&mut self, errors: Vec<StructuralError>) -> PResult<()>;

    /// Error at the current token. Lexer error tokens always report E0101
    /// and the end of input always reports E0203.
    fn error_here(&self, code: ErrorCode, message: impl Into<String>) -> SyntaxError {
        let token = self.current();
        let (code, message) = match token.kind {
            TokenKind::ERROR => (ErrorCode::E0101, format!("invalid token '{}'", token.text)),
            TokenKind::EOF => (
                ErrorCode::E0203,
                format!("unexpected end of input: {}", message.into()),
            ),
            _ => (code, message.into()),
        };
        SyntaxError::new(code, message, token.span).with_found(token.describe())
    }
}
