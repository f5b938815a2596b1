//! Foundation types for the YANG parser.
//!
//! This module provides source-position primitives used throughout the crate:
//! - [`Position`], [`Span`] - Line/column positions for tokens and statements
//! - [`LineIndex`] - Byte offset to line/column conversion
//! - [`TextRange`], [`TextSize`] - Byte offsets
//!
//! This module has NO dependencies on other crate modules.

mod position;

pub use position::{LineIndex, Position, Span};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
