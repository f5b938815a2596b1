//! Statement tree types and traversal.
//!
//! The parser produces one [`StatementNode`] per YANG statement. Downstream
//! consumers either pull data out directly (`children`, `children_of_kind`,
//! `descendants`) or push through a [`StatementVisitor`].

mod kind;
mod statement;
mod visitor;

pub use kind::StatementKind;
pub use statement::{Descendants, StatementNode};
pub use visitor::{StatementVisitor, Walk, walk};
