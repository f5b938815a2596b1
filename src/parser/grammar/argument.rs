//! Statement arguments
//!
//! ```text
//! argument = (STRING | IDENT) ("+" STRING)*
//! ```
//!
//! Concatenated pieces are joined with no separator.

use super::{PResult, StatementParser};
use crate::parser::errors::ErrorCode;
use crate::parser::token_kind::TokenKind;

/// True if the current token can start an argument
pub(crate) fn at_argument<P: StatementParser>(p: &P) -> bool {
    p.current_kind().is_argument()
}

/// Parse the argument of the statement whose keyword `owner` was just consumed
pub(crate) fn parse_argument<P: StatementParser>(p: &mut P, owner: &str) -> PResult<String> {
    if !at_argument(p) {
        let message = format!("'{}' requires an argument", owner);
        return Err(p
            .error_here(ErrorCode::E0301, message)
            .with_expected(["string"])
            .into());
    }
    let mut value = p.bump().text.to_string();
    while p.at(TokenKind::PLUS) {
        p.bump();
        if !p.at(TokenKind::STRING) {
            return Err(p
                .error_here(ErrorCode::E0302, "expected a string after '+'")
                .with_expected(["string"])
                .with_hint("'+' joins two quoted strings")
                .into());
        }
        value.push_str(&p.bump().text);
    }
    Ok(value)
}
