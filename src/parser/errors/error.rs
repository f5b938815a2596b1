//! Parse error types
//!
//! Two kinds of failure:
//! - [`SyntaxError`]: the next token is not a legal alternative. Fatal to
//!   the statement being parsed; propagates straight up.
//! - [`StructuralError`]: a closed block breaks a cardinality bound. All
//!   violations of a block are collected, and the parse fails with the full
//!   set once the unit is complete.

use thiserror::Error;

use super::codes::ErrorCode;
use crate::base::Span;
use crate::syntax::StatementKind;

/// A syntax error with location, expected set, and the token found
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code} at {span}: {message}")]
pub struct SyntaxError {
    /// Categorized error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Location of the offending token
    pub span: Span,
    /// What would have been accepted here
    pub expected: Vec<String>,
    /// Description of the offending token
    pub found: String,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

impl SyntaxError {
    /// Create a new syntax error with minimal information
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            expected: Vec::new(),
            found: String::new(),
            hint: None,
        }
    }

    /// Set the expected alternatives
    pub fn with_expected<I, S>(mut self, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected = expected.into_iter().map(Into::into).collect();
        self
    }

    /// Set the description of the token found
    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = found.into();
        self
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check if this error has a hint
    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// Format the error for display, hint included
    pub fn format(&self) -> String {
        let mut result = self.to_string();
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

/// How a block broke a substatement's cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// An exactly-one or one-or-more substatement never appeared
    Missing,
    /// A substatement appeared `found` times where at most one is allowed
    TooMany { found: usize },
    /// A block that must hold at least one substatement was empty
    EmptyBlock,
}

/// A cardinality violation inside one closed block
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code} at {span}: {message}")]
pub struct StructuralError {
    pub code: ErrorCode,
    pub message: String,
    /// Statement whose block broke the rule
    pub parent: StatementKind,
    /// Argument of the parent statement, for locating it in messages
    pub parent_argument: Option<String>,
    /// Substatement kind the rule is about (`None` for [`Violation::EmptyBlock`])
    pub child: Option<StatementKind>,
    pub violation: Violation,
    /// Span of the parent statement
    pub span: Span,
}

impl StructuralError {
    fn build(
        code: ErrorCode,
        parent: StatementKind,
        parent_argument: Option<&str>,
        child: Option<StatementKind>,
        violation: Violation,
        span: Span,
    ) -> Self {
        let parent_label = match parent_argument {
            Some(argument) => format!("{} '{}'", parent, argument),
            None => parent.to_string(),
        };
        let child_name = child.map(StatementKind::display_name).unwrap_or("substatement");
        let message = match violation {
            Violation::Missing => format!("{} is missing mandatory '{}'", parent_label, child_name),
            Violation::TooMany { found } => format!(
                "{} allows at most one '{}', found {}",
                parent_label, child_name, found
            ),
            Violation::EmptyBlock => format!("{} requires at least one substatement", parent_label),
        };
        Self {
            code,
            message,
            parent,
            parent_argument: parent_argument.map(str::to_string),
            child,
            violation,
            span,
        }
    }

    pub fn missing(
        parent: StatementKind,
        parent_argument: Option<&str>,
        child: StatementKind,
        span: Span,
    ) -> Self {
        Self::build(
            ErrorCode::E0401,
            parent,
            parent_argument,
            Some(child),
            Violation::Missing,
            span,
        )
    }

    pub fn too_many(
        parent: StatementKind,
        parent_argument: Option<&str>,
        child: StatementKind,
        found: usize,
        span: Span,
    ) -> Self {
        Self::build(
            ErrorCode::E0402,
            parent,
            parent_argument,
            Some(child),
            Violation::TooMany { found },
            span,
        )
    }

    pub fn empty_block(parent: StatementKind, parent_argument: Option<&str>, span: Span) -> Self {
        Self::build(
            ErrorCode::E0403,
            parent,
            parent_argument,
            None,
            Violation::EmptyBlock,
            span,
        )
    }
}

/// Failure of a whole parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("{}", format_structural(.0))]
    Structural(Vec<StructuralError>),
}

impl ParseError {
    /// The syntax error, if this parse failed on one
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(error) => Some(error),
            Self::Structural(_) => None,
        }
    }

    /// Collected structural errors (empty for syntax failures)
    pub fn structural_errors(&self) -> &[StructuralError] {
        match self {
            Self::Syntax(_) => &[],
            Self::Structural(errors) => errors,
        }
    }

    /// Error codes of every diagnostic carried by this failure
    pub fn codes(&self) -> Vec<ErrorCode> {
        match self {
            Self::Syntax(error) => vec![error.code],
            Self::Structural(errors) => errors.iter().map(|e| e.code).collect(),
        }
    }
}

fn format_structural(errors: &[StructuralError]) -> String {
    let mut out = format!("{} structural error(s)", errors.len());
    for error in errors {
        out.push_str(&format!("\n  {}", error));
    }
    out
}
