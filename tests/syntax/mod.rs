//! Statement tree tests
//!
//! Tests for the parsed tree's accessors, traversal and visitor.

mod tests_visitor;
