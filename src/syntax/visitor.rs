//! Visitor pattern for statement tree traversal.

use super::statement::StatementNode;

/// What the walker should do after [`StatementVisitor::enter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Walk {
    #[default]
    Continue,
    /// Do not descend into this statement's children; `exit` is still called
    SkipChildren,
}

/// Visitor trait for YANG statement trees.
///
/// Implement this trait to define custom behavior when traversing a parsed
/// unit. `enter` is called in pre-order and `exit` in post-order, both in
/// document order. Default implementations are no-ops.
pub trait StatementVisitor {
    fn enter(&mut self, _node: &StatementNode) -> Walk {
        Walk::Continue
    }

    fn exit(&mut self, _node: &StatementNode) {}
}

/// Walk `node` and its descendants depth-first
pub fn walk<V: StatementVisitor + ?Sized>(node: &StatementNode, visitor: &mut V) {
    if visitor.enter(node) == Walk::Continue {
        for child in node.children() {
            walk(child, visitor);
        }
    }
    visitor.exit(node);
}
