//! Parser error handling module
//!
//! This module provides error handling for the YANG statement parser:
//! - Categorized error codes for filtering and documentation
//! - Syntax errors carrying the expected set and the token found
//! - Structural (cardinality) errors collected per block

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{ParseError, StructuralError, SyntaxError, Violation};
