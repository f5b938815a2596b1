//! The statement tree produced by the parser.
//!
//! A [`StatementNode`] owns its children exclusively, so a parsed unit is a
//! plain tree with no sharing. Nodes are built bottom-up by the parser and
//! expose read-only accessors only; once a parse returns the tree cannot be
//! mutated.

use smol_str::SmolStr;

use super::kind::StatementKind;
use crate::base::Span;

/// A single YANG statement: keyword, optional argument, substatements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementNode {
    kind: StatementKind,
    keyword: SmolStr,
    argument: Option<String>,
    children: Vec<StatementNode>,
    span: Span,
}

impl StatementNode {
    pub(crate) fn new(
        kind: StatementKind,
        keyword: SmolStr,
        argument: Option<String>,
        children: Vec<StatementNode>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            keyword,
            argument,
            children,
            span,
        }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Keyword as written: the canonical keyword for core statements, the
    /// raw `prefix:name` text for extension statements.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The fully assembled argument (`"a" + "b"` yields `ab`)
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    pub fn children(&self) -> &[StatementNode] {
        &self.children
    }

    /// Children of one kind, in source order.
    ///
    /// The iterator is `Clone`, so a consumer can restart it without
    /// re-querying the node.
    pub fn children_of_kind(
        &self,
        kind: StatementKind,
    ) -> impl Iterator<Item = &StatementNode> + Clone + '_ {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// First child of `kind`, if any
    pub fn first_child(&self, kind: StatementKind) -> Option<&StatementNode> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// Argument of the first child of `kind`
    pub fn child_argument(&self, kind: StatementKind) -> Option<&str> {
        self.first_child(kind).and_then(StatementNode::argument)
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_extension(&self) -> bool {
        self.kind == StatementKind::UnknownExtension
    }

    /// All statements below this one in pre-order (document order)
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    // =========================================================================
    // Header accessors for module/submodule units
    // =========================================================================

    /// `namespace` argument of a module
    pub fn namespace(&self) -> Option<&str> {
        self.child_argument(StatementKind::Namespace)
    }

    /// `prefix` of a module, or the `prefix` inside a submodule's `belongs-to`
    pub fn prefix(&self) -> Option<&str> {
        self.child_argument(StatementKind::Prefix).or_else(|| {
            self.first_child(StatementKind::BelongsTo)
                .and_then(|belongs_to| belongs_to.child_argument(StatementKind::Prefix))
        })
    }

    /// Name of the module a submodule belongs to
    pub fn belongs_to(&self) -> Option<&str> {
        self.child_argument(StatementKind::BelongsTo)
    }

    /// `yang-version` argument, if declared
    pub fn yang_version(&self) -> Option<&str> {
        self.child_argument(StatementKind::YangVersion)
    }

    /// Revision dates in source order
    pub fn revisions(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.children_of_kind(StatementKind::Revision)
            .filter_map(StatementNode::argument)
    }
}

/// Pre-order iterator over a statement's descendants
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a StatementNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a StatementNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
