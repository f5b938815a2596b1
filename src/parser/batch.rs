//! Parallel parsing of independent units
//!
//! Each source gets its own lexer and parser; nothing is shared between
//! parses, so a batch is an embarrassingly parallel map.

use rayon::prelude::*;
use tracing::debug;

use super::errors::ParseError;
use super::options::ParseOptions;
use super::parser::parse_str_with_options;
use crate::syntax::StatementNode;

/// Parse every source in parallel. Results are in input order.
pub fn parse_sources(sources: &[&str]) -> Vec<Result<StatementNode, ParseError>> {
    parse_sources_with_options(sources, &ParseOptions::default())
}

pub fn parse_sources_with_options(
    sources: &[&str],
    options: &ParseOptions,
) -> Vec<Result<StatementNode, ParseError>> {
    let results: Vec<_> = sources
        .par_iter()
        .map(|source| parse_str_with_options(source, options))
        .collect();
    debug!(
        "[BATCH] parsed {} sources, {} failed",
        results.len(),
        results.iter().filter(|result| result.is_err()).count()
    );
    results
}
