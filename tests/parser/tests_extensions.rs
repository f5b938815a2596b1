//! Extension (unknown) statements

use rstest::rstest;
use yang_parser::{ErrorCode, StatementKind};

use crate::helpers::tree_assertions::{in_module, parse_body_statement, parse_err, parse_ok};

#[rstest]
#[case::no_argument("ex:flag;", None)]
#[case::quoted_argument(r#"ex:label "some text";"#, Some("some text"))]
#[case::unquoted_argument("ex:label value;", Some("value"))]
#[case::concatenated(r#"ex:label "a" + "b";"#, Some("ab"))]
fn test_extension_arguments(#[case] statement: &str, #[case] argument: Option<&str>) {
    let ext = parse_body_statement(statement);
    assert_eq!(ext.kind(), StatementKind::UnknownExtension);
    assert!(ext.keyword().starts_with("ex:"));
    assert_eq!(ext.argument(), argument);
    assert!(ext.is_extension());
}

#[test]
fn test_extension_keeps_raw_keyword() {
    let ext = parse_body_statement("acme:annotation owner;");
    assert_eq!(ext.keyword(), "acme:annotation");
}

#[test]
fn test_extension_with_one_nested_extension() {
    let ext = parse_body_statement(r#"ex:outer "a" { ex:inner "b"; }"#);
    assert_eq!(ext.children().len(), 1);
    assert_eq!(ext.children()[0].keyword(), "ex:inner");
    assert_eq!(ext.children()[0].argument(), Some("b"));
}

#[test]
fn test_extension_with_many_nested_extensions() {
    let ext = parse_body_statement(r#"ex:outer "a" { ex:one; ex:two; ex:three { ex:deep; } }"#);
    let keywords: Vec<_> = ext.children().iter().map(|c| c.keyword()).collect();
    assert_eq!(keywords, vec!["ex:one", "ex:two", "ex:three"]);
    assert_eq!(ext.children()[2].children()[0].keyword(), "ex:deep");
}

#[test]
fn test_core_keywords_inside_extension_are_extension_content() {
    let ext = parse_body_statement(
        r#"ex:outer "a" { description "d"; leaf x { type string; } deviate add; }"#,
    );
    let summary: Vec<_> = ext
        .children()
        .iter()
        .map(|c| (c.kind(), c.keyword(), c.argument()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (StatementKind::UnknownExtension, "description", Some("d")),
            (StatementKind::UnknownExtension, "leaf", Some("x")),
            (StatementKind::UnknownExtension, "deviate", Some("add")),
        ]
    );
    assert_eq!(ext.children()[1].children()[0].keyword(), "type");
    assert!(ext.descendants().all(|node| node.is_extension()));
}

#[test]
fn test_extension_content_is_not_cardinality_checked() {
    parse_ok(&in_module(r#"ex:outer { leaf a; leaf a; mandatory x; }"#));
}

#[test]
fn test_extension_block_must_be_closed() {
    let err = parse_err(&in_module("ex:outer { ex:inner;"));
    assert_eq!(err.codes(), vec![ErrorCode::E0203]);
}

#[rstest]
#[case::module_body("ex:top;")]
#[case::container("container c { ex:c; }")]
#[case::leaf("leaf l { ex:before; type string; ex:after; }")]
#[case::list("list l { ex:only; }")]
#[case::typedef("typedef t { type string; ex:t; }")]
#[case::rpc("rpc r { ex:r; }")]
#[case::input("rpc r { input { ex:i; } }")]
#[case::deviation("deviation /a { ex:d; }")]
#[case::deviate("deviation /a { deviate add { ex:d; } }")]
#[case::enum_body("typedef t { type enumeration { enum a { ex:e; } } }")]
fn test_extensions_accepted(#[case] body: &str) {
    parse_ok(&in_module(body));
}

#[rstest]
#[case::revision("revision 2020-01-01 { ex:r; }")]
#[case::import("import b { prefix b; ex:i; }")]
#[case::include("include b { ex:i; }")]
fn test_extensions_rejected_in_linkage(#[case] statement: &str) {
    let err = parse_err(&format!(
        "module m {{ namespace urn:m; prefix m; {} }}",
        statement
    ));
    assert_eq!(err.codes(), vec![ErrorCode::E0303]);
}

#[test]
fn test_list_of_only_extensions_is_not_empty() {
    let list = parse_body_statement("list l { ex:only; }");
    assert_eq!(list.children().len(), 1);
}
