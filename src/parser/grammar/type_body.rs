//! `type` statement bodies
//!
//! A type body holds exactly one restriction shape:
//!
//! ```text
//! numerical          = range
//! decimal64          = fraction-digits range?      (either order)
//! string             = length? pattern*
//! enumeration        = enum+
//! leafref            = path
//! identityref        = base
//! instance-identifier = require-instance?
//! bits               = bit+
//! union              = type+
//! ```
//!
//! The first restriction keyword picks the shape. Extension statements may
//! appear anywhere and an empty `{}` is accepted.

use tracing::trace;

use super::argument::parse_argument;
use super::body::{Block, expected_terminator, not_permitted, parse_statement};
use super::{BodyForm, Cardinality, ChildRule, PResult, StatementParser, find_rule};
use crate::parser::errors::ErrorCode;
use crate::parser::token_kind::TokenKind;
use crate::syntax::{StatementKind, StatementNode};

/// Restriction shape of a `type` body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeBodyShape {
    Numerical,
    Decimal64,
    String,
    Enumeration,
    Leafref,
    Identityref,
    InstanceIdentifier,
    Bits,
    Union,
}

const fn child(kind: StatementKind, cardinality: Cardinality) -> ChildRule {
    ChildRule { kind, cardinality }
}

const EXTENSIONS: ChildRule = child(StatementKind::UnknownExtension, Cardinality::ZeroOrMore);

static NUMERICAL: [ChildRule; 2] = [child(StatementKind::Range, Cardinality::ExactlyOne), EXTENSIONS];
static DECIMAL64: [ChildRule; 3] = [
    child(StatementKind::FractionDigits, Cardinality::ExactlyOne),
    child(StatementKind::Range, Cardinality::ZeroOrOne),
    EXTENSIONS,
];
static STRING: [ChildRule; 3] = [
    child(StatementKind::Length, Cardinality::ZeroOrOne),
    child(StatementKind::Pattern, Cardinality::ZeroOrMore),
    EXTENSIONS,
];
static ENUMERATION: [ChildRule; 2] = [child(StatementKind::Enum, Cardinality::OneOrMore), EXTENSIONS];
static LEAFREF: [ChildRule; 2] = [child(StatementKind::Path, Cardinality::ExactlyOne), EXTENSIONS];
static IDENTITYREF: [ChildRule; 2] = [child(StatementKind::Base, Cardinality::ExactlyOne), EXTENSIONS];
static INSTANCE_IDENTIFIER: [ChildRule; 2] = [
    child(StatementKind::RequireInstance, Cardinality::ZeroOrOne),
    EXTENSIONS,
];
static BITS: [ChildRule; 2] = [child(StatementKind::Bit, Cardinality::OneOrMore), EXTENSIONS];
static UNION: [ChildRule; 2] = [child(StatementKind::Type, Cardinality::OneOrMore), EXTENSIONS];
static EMPTY: [ChildRule; 1] = [EXTENSIONS];

impl TypeBodyShape {
    /// The shape a body takes when `kind` is its first restriction
    pub fn from_first(kind: StatementKind) -> Option<Self> {
        match kind {
            StatementKind::Range => Some(Self::Numerical),
            StatementKind::FractionDigits => Some(Self::Decimal64),
            StatementKind::Length | StatementKind::Pattern => Some(Self::String),
            StatementKind::Enum => Some(Self::Enumeration),
            StatementKind::Path => Some(Self::Leafref),
            StatementKind::Base => Some(Self::Identityref),
            StatementKind::RequireInstance => Some(Self::InstanceIdentifier),
            StatementKind::Bit => Some(Self::Bits),
            StatementKind::Type => Some(Self::Union),
            _ => None,
        }
    }

    /// Substatements and cardinalities of this shape
    pub fn rules(self) -> &'static [ChildRule] {
        match self {
            Self::Numerical => &NUMERICAL,
            Self::Decimal64 => &DECIMAL64,
            Self::String => &STRING,
            Self::Enumeration => &ENUMERATION,
            Self::Leafref => &LEAFREF,
            Self::Identityref => &IDENTITYREF,
            Self::InstanceIdentifier => &INSTANCE_IDENTIFIER,
            Self::Bits => &BITS,
            Self::Union => &UNION,
        }
    }

    pub fn permits(self, kind: StatementKind) -> bool {
        find_rule(self.rules(), kind).is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Numerical => "numerical restrictions",
            Self::Decimal64 => "decimal64 specification",
            Self::String => "string restrictions",
            Self::Enumeration => "enumeration specification",
            Self::Leafref => "leafref specification",
            Self::Identityref => "identityref specification",
            Self::InstanceIdentifier => "instance-identifier specification",
            Self::Bits => "bits specification",
            Self::Union => "union specification",
        }
    }

    /// Shape after `kind` follows a body of this shape; `None` on conflict
    fn extend(self, kind: StatementKind) -> Option<Self> {
        match self {
            Self::Numerical if kind == StatementKind::FractionDigits => Some(Self::Decimal64),
            shape if shape.permits(kind) => Some(shape),
            _ => None,
        }
    }
}

/// Shape of a parsed `type` statement's body, `None` for `type t;`, an
/// empty body, or a body holding only extension statements
pub fn type_body_shape(node: &StatementNode) -> Option<TypeBodyShape> {
    if node.kind() != StatementKind::Type {
        return None;
    }
    node.children()
        .iter()
        .filter(|child| !child.is_extension())
        .try_fold(None, |shape: Option<TypeBodyShape>, child| match shape {
            None => TypeBodyShape::from_first(child.kind()).map(Some),
            Some(shape) => shape.extend(child.kind()).map(Some),
        })
        .flatten()
}

/// Parse `type name ;` or `type name { ... }`
pub(crate) fn parse_type<P: StatementParser>(p: &mut P) -> PResult<StatementNode> {
    let keyword = p.bump();
    let argument = parse_argument(p, StatementKind::Type.display_name())?;
    match p.current_kind() {
        TokenKind::SEMICOLON => {
            let end = p.bump();
            let span = keyword.span.cover(end.span);
            Ok(StatementNode::new(
                StatementKind::Type,
                keyword.text,
                Some(argument),
                Vec::new(),
                span,
            ))
        }
        TokenKind::L_BRACE => {
            p.bump();
            let mut block = Block::new(StatementKind::Type, Some(argument.as_str()));
            let shape = parse_type_items(p, &mut block)?;
            let close = p.bump();
            let span = keyword.span.cover(close.span);
            trace!("[TYPE] '{}' shape={:?}", argument, shape);
            let rules = shape.map_or(&EMPTY[..], TypeBodyShape::rules);
            p.report(block.violations(rules, false, span))?;
            Ok(StatementNode::new(
                StatementKind::Type,
                keyword.text,
                Some(argument),
                block.into_children(),
                span,
            ))
        }
        _ => Err(expected_terminator(p, StatementKind::Type, BodyForm::Optional).into()),
    }
}

fn parse_type_items<P: StatementParser>(
    p: &mut P,
    block: &mut Block,
) -> PResult<Option<TypeBodyShape>> {
    let all = super::permitted_children(StatementKind::Type);
    let mut shape: Option<TypeBodyShape> = None;
    loop {
        let token = p.current_kind();
        match token {
            TokenKind::R_BRACE => return Ok(shape),
            TokenKind::EOF => {
                let message = format!("unclosed block of {}", block.label());
                return Err(p
                    .error_here(ErrorCode::E0203, message)
                    .with_expected(["'}'"])
                    .into());
            }
            TokenKind::IDENT => {
                let node = parse_statement(p, StatementKind::UnknownExtension)?;
                block.push(node);
            }
            _ => {
                let Some(kind) = token
                    .statement_kind()
                    .filter(|kind| find_rule(all, *kind).is_some())
                else {
                    return Err(not_permitted(p, block, all).into());
                };
                shape = match shape {
                    None => TypeBodyShape::from_first(kind),
                    Some(current) => match current.extend(kind) {
                        Some(next) => Some(next),
                        None => {
                            let message = format!(
                                "'{}' cannot be combined with the {} of {}",
                                kind.keyword(),
                                current.name(),
                                block.label()
                            );
                            return Err(p
                                .error_here(ErrorCode::E0305, message)
                                .with_expected(expected_for(current))
                                .into());
                        }
                    },
                };
                let node = parse_statement(p, kind)?;
                block.push(node);
            }
        }
    }
}

fn expected_for(shape: TypeBodyShape) -> Vec<String> {
    let mut expected: Vec<String> = shape
        .rules()
        .iter()
        .filter(|rule| rule.kind != StatementKind::UnknownExtension)
        .map(|rule| format!("'{}'", rule.kind.keyword()))
        .collect();
    if shape == TypeBodyShape::Numerical {
        expected.push("'fraction-digits'".to_string());
    }
    expected.push("extension statement".to_string());
    expected.push("'}'".to_string());
    expected
}
