//! Generic statement parsing
//!
//! ```text
//! statement = keyword argument? (";" | "{" statement* "}")
//! ```
//!
//! Every kind except `module`, `submodule` and `type` is parsed here from
//! its [`StatementRule`]: the rule decides whether an argument is taken,
//! which terminators are legal and which substatements a block admits.
//! Cardinality is checked once the block closes.

use rustc_hash::FxHashMap;
use tracing::trace;

use super::argument::{at_argument, parse_argument};
use super::{ArgumentForm, BodyForm, ChildRule, PResult, StatementParser, StatementRule, find_rule};
use crate::base::Span;
use crate::parser::errors::{ErrorCode, StructuralError, SyntaxError};
use crate::parser::token_kind::TokenKind;
use crate::parser::token_source::Token;
use crate::syntax::{StatementKind, StatementNode};

/// Substatements collected inside one `{ ... }` block
pub(crate) struct Block {
    parent: StatementKind,
    argument: Option<String>,
    counts: FxHashMap<StatementKind, usize>,
    children: Vec<StatementNode>,
}

impl Block {
    pub(crate) fn new(parent: StatementKind, argument: Option<&str>) -> Self {
        Self {
            parent,
            argument: argument.map(str::to_string),
            counts: FxHashMap::default(),
            children: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, node: StatementNode) {
        *self.counts.entry(node.kind()).or_insert(0) += 1;
        self.children.push(node);
    }

    pub(crate) fn parent(&self) -> StatementKind {
        self.parent
    }

    pub(crate) fn count(&self, kind: StatementKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// `leaf 'foo'`, or just `input` for statements without an argument
    pub(crate) fn label(&self) -> String {
        match &self.argument {
            Some(argument) => format!("{} '{}'", self.parent.display_name(), argument),
            None => self.parent.display_name().to_string(),
        }
    }

    /// Cardinality violations of the closed block, in rule order
    pub(crate) fn violations(
        &self,
        rules: &[ChildRule],
        non_empty: bool,
        span: Span,
    ) -> Vec<StructuralError> {
        let argument = self.argument.as_deref();
        let mut errors = Vec::new();
        if non_empty && self.children.is_empty() {
            errors.push(StructuralError::empty_block(self.parent, argument, span));
        }
        for rule in rules {
            let count = self.count(rule.kind);
            if count == 0 && rule.cardinality.is_required() {
                errors.push(StructuralError::missing(self.parent, argument, rule.kind, span));
            } else if count > 1 && rule.cardinality.is_single() {
                errors.push(StructuralError::too_many(
                    self.parent,
                    argument,
                    rule.kind,
                    count,
                    span,
                ));
            }
        }
        errors
    }

    pub(crate) fn into_children(self) -> Vec<StatementNode> {
        self.children
    }
}

/// Parse one statement of `kind`; the current token is its keyword
pub(crate) fn parse_statement<P: StatementParser>(
    p: &mut P,
    kind: StatementKind,
) -> PResult<StatementNode> {
    match kind {
        StatementKind::Module | StatementKind::Submodule => super::header::parse_unit(p, kind),
        StatementKind::Type => super::type_body::parse_type(p),
        kind if kind.is_deviate() => parse_deviate(p),
        kind => parse_simple(p, super::rule(kind)),
    }
}

fn parse_simple<P: StatementParser>(p: &mut P, rule: &'static StatementRule) -> PResult<StatementNode> {
    let keyword = p.bump();
    let argument = match rule.argument {
        ArgumentForm::Required => Some(parse_argument(p, rule.kind.display_name())?),
        ArgumentForm::Optional if at_argument(p) => {
            Some(parse_argument(p, rule.kind.display_name())?)
        }
        ArgumentForm::Optional | ArgumentForm::None => None,
    };
    trace!(
        "[STATEMENT] kind={} keyword='{}' argument={:?}",
        rule.kind, keyword.text, argument
    );
    parse_tail(p, rule, keyword, argument)
}

/// `deviate` picks its repertoire from its argument
fn parse_deviate<P: StatementParser>(p: &mut P) -> PResult<StatementNode> {
    let keyword = p.bump();
    let argument_span = p.current().span;
    let argument = parse_argument(p, "deviate")?;
    let Some(kind) = StatementKind::from_deviate_argument(&argument) else {
        return Err(SyntaxError::new(
            ErrorCode::E0306,
            format!("invalid deviate argument '{}'", argument),
            argument_span,
        )
        .with_expected(["not-supported", "add", "replace", "delete"])
        .with_found(format!("string \"{}\"", argument))
        .into());
    };
    trace!("[STATEMENT] kind={} argument='{}'", kind, argument);
    parse_tail(p, super::rule(kind), keyword, Some(argument))
}

/// Parse what follows the argument: `;` or a block, as the rule allows
fn parse_tail<P: StatementParser>(
    p: &mut P,
    rule: &'static StatementRule,
    keyword: Token,
    argument: Option<String>,
) -> PResult<StatementNode> {
    let kind = rule.kind;
    match p.current_kind() {
        TokenKind::SEMICOLON if rule.body.allows_semicolon() => {
            let end = p.bump();
            let span = keyword.span.cover(end.span);
            Ok(StatementNode::new(kind, keyword.text, argument, Vec::new(), span))
        }
        TokenKind::SEMICOLON => {
            let message = format!("'{}' requires a '{{ ... }}' block", kind.display_name());
            Err(p
                .error_here(ErrorCode::E0205, message)
                .with_expected(["'{'"])
                .into())
        }
        TokenKind::L_BRACE => {
            p.bump();
            let mut block = Block::new(kind, argument.as_deref());
            parse_block_items(p, &mut block, rule.children)?;
            let close = p.bump();
            let span = keyword.span.cover(close.span);
            let non_empty = rule.body == BodyForm::NonEmptyBlock;
            p.report(block.violations(rule.children, non_empty, span))?;
            Ok(StatementNode::new(kind, keyword.text, argument, block.into_children(), span))
        }
        _ => Err(expected_terminator(p, kind, rule.body).into()),
    }
}

/// Parse substatements up to (not including) the closing `}`
pub(crate) fn parse_block_items<P: StatementParser>(
    p: &mut P,
    block: &mut Block,
    rules: &[ChildRule],
) -> PResult<()> {
    loop {
        match p.current_kind() {
            TokenKind::R_BRACE => return Ok(()),
            TokenKind::EOF => {
                let message = format!("unclosed block of {}", block.label());
                return Err(p
                    .error_here(ErrorCode::E0203, message)
                    .with_expected(["'}'"])
                    .into());
            }
            token => {
                let Some(kind) = dispatch(token, rules).or_else(|| extension_content(block, token))
                else {
                    return Err(not_permitted(p, block, rules).into());
                };
                let node = parse_statement(p, kind)?;
                block.push(node);
            }
        }
    }
}

/// The statement kind `token` starts, if `rules` admit it. A `deviate`
/// token maps to one of the deviate kinds; [`parse_statement`] resolves
/// the concrete form from the argument.
pub(crate) fn dispatch(token: TokenKind, rules: &[ChildRule]) -> Option<StatementKind> {
    if token == TokenKind::DEVIATE_KW {
        return rules
            .iter()
            .map(|rule| rule.kind)
            .find(|kind| kind.is_deviate());
    }
    token
        .statement_kind()
        .filter(|kind| find_rule(rules, *kind).is_some())
}

/// Inside an extension block any statement, core keyword or not, is
/// opaque extension content
fn extension_content(block: &Block, token: TokenKind) -> Option<StatementKind> {
    let is_statement = token.is_keyword() || token == TokenKind::IDENT;
    (block.parent() == StatementKind::UnknownExtension && is_statement)
        .then_some(StatementKind::UnknownExtension)
}

/// E0303 for a token the enclosing block does not admit
pub(crate) fn not_permitted<P: StatementParser>(
    p: &P,
    block: &Block,
    rules: &[ChildRule],
) -> SyntaxError {
    let token = p.current();
    let message = if token.kind.is_keyword() || token.kind == TokenKind::IDENT {
        format!("'{}' is not permitted inside {}", token.text, block.label())
    } else {
        format!("expected a substatement or '}}' inside {}", block.label())
    };
    p.error_here(ErrorCode::E0303, message)
        .with_expected(expected_keywords(rules))
}

/// Expected-set description of a block's repertoire
pub(crate) fn expected_keywords(rules: &[ChildRule]) -> Vec<String> {
    let mut expected: Vec<String> = Vec::with_capacity(rules.len() + 1);
    for rule in rules {
        let entry = match rule.kind {
            StatementKind::UnknownExtension => "extension statement".to_string(),
            kind => format!("'{}'", kind.keyword()),
        };
        if !expected.contains(&entry) {
            expected.push(entry);
        }
    }
    expected.push("'}'".to_string());
    expected
}

pub(crate) fn expected_terminator<P: StatementParser>(
    p: &P,
    kind: StatementKind,
    body: BodyForm,
) -> SyntaxError {
    if body.allows_semicolon() {
        let message = format!("expected ';' or '{{' after '{}' statement", kind.display_name());
        p.error_here(ErrorCode::E0201, message)
            .with_expected(["';'", "'{'"])
    } else {
        let message = format!("expected '{{' after '{}' statement", kind.display_name());
        p.error_here(ErrorCode::E0201, message)
            .with_expected(["'{'"])
    }
}
