//! # yang-parser
//!
//! Statement-grammar parser for YANG (RFC 6020) modules and submodules.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Logos lexer, grammar table, recursive-descent parser, errors
//!   ↓
//! syntax    → StatementKind, StatementNode tree, visitor
//!   ↓
//! base      → Primitives (Position, Span, LineIndex, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use yang_parser::{StatementKind, parse_str};
//!
//! let module = parse_str(
//!     r#"module m { namespace "urn:m"; prefix m; leaf x { type string; } }"#,
//! )
//! .unwrap();
//! assert_eq!(module.namespace(), Some("urn:m"));
//! assert_eq!(module.children_of_kind(StatementKind::Leaf).count(), 1);
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser)
// ============================================================================

/// Foundation types: Position, Span, LineIndex, TextRange
pub mod base;

/// Syntax: statement kinds, the statement tree, traversal
pub mod syntax;

/// Parser: Logos lexer, grammar table, recursive-descent parser
pub mod parser;

// Re-export foundation types
pub use base::{LineIndex, Position, Span, TextRange, TextSize};

// Re-export the statement tree
pub use syntax::{StatementKind, StatementNode, StatementVisitor, Walk, walk};

// Re-export parser entry points
pub use parser::{
    ErrorCode, ParseError, ParseOptions, StructuralError, SyntaxError, Token, TokenKind,
    TokenSource, TokenStream, parse_module, parse_sources, parse_str, parse_submodule,
    parse_yang_unit,
};
