//! Parser tests
//!
//! End-to-end tests of the YANG statement parser:
//! - Statement bodies, terminators and argument assembly
//! - Module/submodule regions and header ordering
//! - Type body restriction shapes
//! - Extension statements
//! - Syntax and structural error reporting
//! - Custom token sources and parallel batches

mod tests_batch;
mod tests_errors;
mod tests_extensions;
mod tests_statements;
