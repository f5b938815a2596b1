//! Parallel batch parsing

use yang_parser::parser::{ParseOptions, parse_sources_with_options};
use yang_parser::{ErrorCode, StatementKind, parse_sources, parse_str};

use crate::helpers::source_fixtures::{FULL_MODULE, MINIMAL_MODULE, MINIMAL_SUBMODULE};

#[test]
fn test_batch_matches_sequential() {
    let sources = [FULL_MODULE, MINIMAL_MODULE, MINIMAL_SUBMODULE];
    let batch = parse_sources(&sources);
    let sequential: Vec<_> = sources.iter().map(|source| parse_str(source)).collect();
    assert_eq!(batch, sequential);
}

#[test]
fn test_batch_failures_stay_in_place() {
    let sources = [
        MINIMAL_MODULE,
        "module broken { namespace urn:b; prefix b; leaf x; }",
        MINIMAL_SUBMODULE,
    ];
    let results = parse_sources(&sources);
    assert!(results[0].is_ok());
    assert_eq!(
        results[1].as_ref().unwrap_err().codes(),
        vec![ErrorCode::E0205]
    );
    assert_eq!(
        results[2].as_ref().map(|unit| unit.kind()).ok(),
        Some(StatementKind::Submodule)
    );
}

#[test]
fn test_batch_options_apply_to_every_source() {
    let sources = [
        "module a { prefix a; namespace urn:a; }",
        "module b { namespace urn:b; prefix b; }",
    ];
    let strict = parse_sources(&sources);
    assert!(strict[0].is_err());
    assert!(strict[1].is_ok());

    let lenient = parse_sources_with_options(&sources, &ParseOptions::lenient());
    assert!(lenient.iter().all(Result::is_ok));
}
