//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Delimiter errors (terminators, braces, end of input)
//! - E03xx: Statement errors (placement, arguments, type bodies)
//! - E04xx: Cardinality errors (missing or repeated substatements)

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Invalid character or unterminated string in source
    E0101,

    // =========================================================================
    // E02xx: Delimiter errors
    // =========================================================================
    /// Expected `;` or `{` after a statement argument
    E0201,
    /// Expected `}` to close a block
    E0202,
    /// Unexpected end of input
    E0203,
    /// Input continues after the top-level statement
    E0204,
    /// Statement requires a `{ ... }` block
    E0205,

    // =========================================================================
    // E03xx: Statement errors
    // =========================================================================
    /// Missing statement argument
    E0301,
    /// Invalid `+` concatenation
    E0302,
    /// Statement not permitted inside its parent
    E0303,
    /// Statement out of order
    E0304,
    /// Conflicting restrictions in a type body
    E0305,
    /// Invalid `deviate` argument
    E0306,
    /// Expected `module` or `submodule`
    E0307,

    // =========================================================================
    // E04xx: Cardinality errors
    // =========================================================================
    /// Mandatory substatement missing
    E0401,
    /// Substatement repeated beyond its cardinality
    E0402,
    /// Block requires at least one substatement
    E0403,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "E0101",
            // Delimiter
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            // Statement
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            Self::E0307 => "E0307",
            // Cardinality
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 => {
                "delimiter error"
            }
            Self::E0301
            | Self::E0302
            | Self::E0303
            | Self::E0304
            | Self::E0305
            | Self::E0306
            | Self::E0307 => "statement error",
            Self::E0401 | Self::E0402 | Self::E0403 => "cardinality error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "invalid token",
            // Delimiter
            Self::E0201 => "expected ';' or '{'",
            Self::E0202 => "expected '}'",
            Self::E0203 => "unexpected end of input",
            Self::E0204 => "unexpected input after top-level statement",
            Self::E0205 => "missing statement block",
            // Statement
            Self::E0301 => "missing argument",
            Self::E0302 => "expected string after '+'",
            Self::E0303 => "statement not permitted here",
            Self::E0304 => "statement out of order",
            Self::E0305 => "conflicting type restrictions",
            Self::E0306 => "invalid deviate argument",
            Self::E0307 => "expected 'module' or 'submodule'",
            // Cardinality
            Self::E0401 => "missing mandatory substatement",
            Self::E0402 => "too many substatements",
            Self::E0403 => "empty block",
        }
    }

    /// Check if this is a cardinality error (collected, not fatal on sight)
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::E0401 | Self::E0402 | Self::E0403)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
