//! Syntax and structural error reporting

use rstest::rstest;
use yang_parser::parser::{ParseOptions, Violation, parse_str_with_options};
use yang_parser::{ErrorCode, StatementKind};

use crate::helpers::tree_assertions::{in_module, parse_err};

#[test]
fn test_leaf_without_type() {
    let err = parse_err(&in_module("leaf foo { }"));
    let errors = err.structural_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].parent, StatementKind::Leaf);
    assert_eq!(errors[0].child, Some(StatementKind::Type));
    assert_eq!(errors[0].violation, Violation::Missing);
    assert!(err.to_string().contains("leaf 'foo' is missing mandatory 'type'"));
}

#[test]
fn test_structural_errors_collected_across_tree() {
    let err = parse_err(&in_module(
        "container a { leaf x { } } list l { key k; key j; leaf k { type string; } } typedef t { }",
    ));
    let summary: Vec<_> = err
        .structural_errors()
        .iter()
        .map(|e| (e.parent, e.code))
        .collect();
    assert_eq!(
        summary,
        vec![
            (StatementKind::Leaf, ErrorCode::E0401),
            (StatementKind::List, ErrorCode::E0402),
            (StatementKind::Typedef, ErrorCode::E0403),
            (StatementKind::Typedef, ErrorCode::E0401),
        ]
    );
}

#[test]
fn test_fail_fast() {
    let source = in_module("leaf a { } leaf b { }");
    let options = ParseOptions::default().with_fail_fast(true);
    let err = parse_str_with_options(&source, &options).unwrap_err();
    assert_eq!(err.structural_errors().len(), 1);
}

#[rstest]
#[case::input("rpc r { input { } }", StatementKind::Input)]
#[case::output("rpc r { output { } }", StatementKind::Output)]
#[case::augment(r#"augment "/a" { }"#, StatementKind::Augment)]
#[case::deviation("deviation /a { }", StatementKind::Deviation)]
#[case::list("list l { }", StatementKind::List)]
fn test_empty_block(#[case] body: &str, #[case] parent: StatementKind) {
    let err = parse_err(&in_module(body));
    let errors = err.structural_errors();
    assert_eq!(errors[0].code, ErrorCode::E0403);
    assert_eq!(errors[0].violation, Violation::EmptyBlock);
    assert_eq!(errors[0].parent, parent);
}

#[rstest]
#[case::missing_semicolon("leaf l { type string }", ErrorCode::E0201)]
#[case::two_arguments(r#"leaf l { type string; units "a" "b"; }"#, ErrorCode::E0201)]
#[case::missing_argument("leaf { type string; }", ErrorCode::E0301)]
#[case::argument_missing_before_semicolon("container c { description; }", ErrorCode::E0301)]
#[case::plus_without_string(r#"container c { description "a" + ; }"#, ErrorCode::E0302)]
#[case::not_permitted("container c { key k; }", ErrorCode::E0303)]
#[case::stray_semicolon("container c { ; }", ErrorCode::E0303)]
#[case::stray_string(r#"container c { leaf l { type string; } "oops" }"#, ErrorCode::E0303)]
#[case::invalid_token(r#"container c { description "unterminated; }"#, ErrorCode::E0101)]
fn test_syntax_errors(#[case] body: &str, #[case] code: ErrorCode) {
    let err = parse_err(&in_module(body));
    let syntax = err
        .as_syntax()
        .unwrap_or_else(|| panic!("expected syntax error, got {}", err));
    assert_eq!(syntax.code, code, "{}", syntax.format());
}

#[test]
fn test_unclosed_block() {
    let err = parse_err("module m { namespace urn:m; prefix m; container c { leaf l { type string; }");
    let syntax = err.as_syntax().expect("syntax error");
    assert_eq!(syntax.code, ErrorCode::E0203);
    assert_eq!(syntax.found, "end of input");
    assert!(syntax.expected.contains(&"'}'".to_string()));
}

#[test]
fn test_not_permitted_lists_expected() {
    let err = parse_err(&in_module("leaf l { type string; key k; }"));
    let syntax = err.as_syntax().expect("syntax error");
    assert_eq!(syntax.found, "'key'");
    assert!(syntax.expected.contains(&"'units'".to_string()));
    assert!(syntax.expected.contains(&"extension statement".to_string()));
    assert!(syntax.expected.contains(&"'}'".to_string()));
}

#[test]
fn test_error_position() {
    let err = parse_err("module m {\n  namespace urn:m;\n  prefix m;\n  leaf l { type; }\n}");
    let syntax = err.as_syntax().expect("syntax error");
    assert_eq!(syntax.code, ErrorCode::E0301);
    assert_eq!(syntax.span.start.line, 3);
    assert_eq!(syntax.span.start.column, 15);
    assert!(syntax.to_string().starts_with("E0301 at 4:16"));
}

#[rstest]
#[case::not_a_module("container c;")]
#[case::extension_first("ex:module m;")]
fn test_top_level_must_be_unit(#[case] source: &str) {
    let err = parse_err(source);
    assert_eq!(err.codes(), vec![ErrorCode::E0307]);
}

#[test]
fn test_syntax_error_wins_over_structural() {
    let err = parse_err(&in_module("leaf a { } leaf b { type string }"));
    assert!(err.as_syntax().is_some());
}
