//! `module` and `submodule` bodies
//!
//! ```text
//! module    = "module" argument "{" module-header linkage meta revision* body "}"
//! submodule = "submodule" argument "{" submodule-header linkage meta revision* body "}"
//! module-header    = yang-version? namespace prefix
//! submodule-header = yang-version? belongs-to
//! linkage = (import | include)*
//! meta    = (organization | contact | description | reference)*
//! ```
//!
//! Regions come in a fixed order; within each region statements may appear
//! in any order, except the header which (under
//! [`ParseOptions::strict_header_order`](crate::parser::ParseOptions)) must
//! follow the order above.

use tracing::{debug, trace};

use super::argument::parse_argument;
use super::body::{Block, expected_keywords, parse_statement};
use super::{BodyForm, PResult, Region, StatementParser, is_ordered_prelude, unit_regions};
use crate::parser::errors::{ErrorCode, SyntaxError};
use crate::parser::token_kind::TokenKind;
use crate::syntax::{StatementKind, StatementNode};

/// Parse a whole `module` or `submodule` statement
pub(crate) fn parse_unit<P: StatementParser>(
    p: &mut P,
    kind: StatementKind,
) -> PResult<StatementNode> {
    let rule = super::rule(kind);
    let keyword = p.bump();
    let name = parse_argument(p, kind.display_name())?;
    match p.current_kind() {
        TokenKind::L_BRACE => {
            p.bump();
        }
        TokenKind::SEMICOLON => {
            let message = format!("'{}' requires a '{{ ... }}' block", kind.display_name());
            return Err(p
                .error_here(ErrorCode::E0205, message)
                .with_expected(["'{'"])
                .into());
        }
        _ => {
            return Err(super::body::expected_terminator(p, kind, BodyForm::Block).into());
        }
    }
    debug!("[UNIT] parsing {} '{}'", kind, name);

    let regions = unit_regions(kind);
    let mut block = Block::new(kind, Some(name.as_str()));
    for (index, region) in regions.iter().enumerate() {
        trace!("[UNIT] region={}", region.name);
        if index == 0 && is_ordered_prelude(kind) {
            parse_header(p, &mut block, region)?;
        } else {
            parse_region(p, &mut block, region)?;
        }
    }

    if !p.at(TokenKind::R_BRACE) {
        return Err(unexpected_in_unit(p, &block, regions).into());
    }
    let close = p.bump();
    let span = keyword.span.cover(close.span);
    p.report(block.violations(rule.children, false, span))?;
    Ok(StatementNode::new(kind, keyword.text, Some(name), block.into_children(), span))
}

fn region_kind(token: TokenKind, region: &Region) -> Option<StatementKind> {
    token.statement_kind().filter(|kind| region.contains(*kind))
}

/// Header statements, in declaration order when strict
fn parse_header<P: StatementParser>(p: &mut P, block: &mut Block, region: &Region) -> PResult<()> {
    let rank = |kind: StatementKind| region.kinds.iter().position(|k| *k == kind);
    let mut highest: Option<StatementKind> = None;
    while let Some(kind) = region_kind(p.current_kind(), region) {
        if let Some(previous) = highest {
            if p.options().strict_header_order && rank(kind) < rank(previous) {
                let message = format!(
                    "'{}' must come before '{}' in the {} header",
                    kind.keyword(),
                    previous.keyword(),
                    block.label()
                );
                return Err(p
                    .error_here(ErrorCode::E0304, message)
                    .with_hint(header_order_hint(region))
                    .into());
            }
        }
        if highest.is_none_or(|previous| rank(kind) > rank(previous)) {
            highest = Some(kind);
        }
        let node = parse_statement(p, kind)?;
        block.push(node);
    }
    Ok(())
}

fn header_order_hint(region: &Region) -> String {
    let order: Vec<&str> = region.kinds.iter().map(|kind| kind.keyword()).collect();
    format!("header statements go in the order: {}", order.join(", "))
}

fn parse_region<P: StatementParser>(p: &mut P, block: &mut Block, region: &Region) -> PResult<()> {
    while let Some(kind) = region_kind(p.current_kind(), region) {
        let node = parse_statement(p, kind)?;
        block.push(node);
    }
    Ok(())
}

/// The token after the last region is neither `}` nor a body statement
fn unexpected_in_unit<P: StatementParser>(
    p: &P,
    block: &Block,
    regions: &[Region],
) -> SyntaxError {
    let token = p.current_kind();
    let last = regions.len() - 1;
    let expected = expected_keywords(super::permitted_children(block.parent()));

    if let Some(index) = regions[..last]
        .iter()
        .position(|region| region_kind(token, region).is_some())
    {
        let region = &regions[index];
        let message = format!(
            "'{}' is out of order in {}: {} statements must precede {} statements",
            p.current().text,
            block.label(),
            region.name,
            regions[index + 1].name
        );
        return p
            .error_here(ErrorCode::E0304, message)
            .with_expected(expected);
    }

    if token == TokenKind::EOF {
        let message = format!("unclosed block of {}", block.label());
        return p
            .error_here(ErrorCode::E0203, message)
            .with_expected(["'}'"]);
    }

    let message = if token.is_keyword() {
        format!("'{}' is not permitted inside {}", p.current().text, block.label())
    } else {
        format!("expected a substatement or '}}' inside {}", block.label())
    };
    p.error_here(ErrorCode::E0303, message)
        .with_expected(expected)
}
