//! Recursive descent parser for YANG
//!
//! This module turns YANG source text into a [`StatementNode`](crate::syntax::StatementNode)
//! tree using:
//! - **logos** for fast lexing
//! - a static grammar table for statement repertoires and cardinalities
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! TokenSource → one token of lookahead
//!     ↓
//! Parser + grammar table → StatementNode tree
//!     ↓
//! Cardinality check per closed block → StructuralError
//! ```
//!
//! Any tokenizer can drive the parser by implementing [`TokenSource`].

mod batch;
mod errors;
pub mod grammar;
mod lexer;
mod options;
#[allow(clippy::module_inception)]
mod parser;
mod token_kind;
mod token_source;

pub use batch::{parse_sources, parse_sources_with_options};
pub use errors::{ErrorCode, ParseError, StructuralError, SyntaxError, Violation};
pub use lexer::{Lexer, token_stream, tokenize};
pub use options::ParseOptions;
pub use parser::{
    parse_module, parse_module_with_options, parse_str, parse_str_with_options, parse_submodule,
    parse_submodule_with_options, parse_yang_unit, parse_yang_unit_with_options,
};
pub use token_kind::TokenKind;
pub use token_source::{Token, TokenSource, TokenStream};
