//! Statement bodies, terminators and arguments

use rstest::rstest;
use yang_parser::StatementKind;

use crate::helpers::source_fixtures::{CONTAINER_MODULE, FULL_MODULE};
use crate::helpers::tree_assertions::{
    child_kinds, child_summary, in_module, parse_body_statement, parse_err, parse_ok,
};

#[test]
fn test_leaf_with_type() {
    let leaf = parse_body_statement("leaf x { type t; }");
    assert_eq!(leaf.kind(), StatementKind::Leaf);
    assert_eq!(leaf.argument(), Some("x"));
    assert_eq!(child_kinds(&leaf), vec![StatementKind::Type]);
    assert_eq!(leaf.children()[0].argument(), Some("t"));
}

#[test]
fn test_container_module_tree() {
    let module = parse_ok(CONTAINER_MODULE);
    assert_eq!(module.kind(), StatementKind::Module);
    assert_eq!(module.argument(), Some("m"));
    assert_eq!(
        child_summary(&module),
        vec![
            (StatementKind::Namespace, Some("urn:m")),
            (StatementKind::Prefix, Some("m")),
            (StatementKind::Container, Some("top")),
        ]
    );
    let top = &module.children()[2];
    assert_eq!(child_summary(top), vec![(StatementKind::Leaf, Some("x"))]);
    let leaf = &top.children()[0];
    assert_eq!(child_summary(leaf), vec![(StatementKind::Type, Some("string"))]);
    assert!(leaf.children()[0].children().is_empty());
}

#[test]
fn test_full_module_parses() {
    let module = parse_ok(FULL_MODULE);
    assert_eq!(module.argument(), Some("acme-system"));
    assert_eq!(module.prefix(), Some("acme"));
    assert_eq!(module.yang_version(), Some("1"));
    assert_eq!(
        module.revisions().collect::<Vec<_>>(),
        vec!["2007-06-09", "2007-01-01"]
    );
    assert_eq!(
        module.child_argument(StatementKind::Description),
        Some("The module for entities implementing the ACME system.")
    );
}

#[rstest]
#[case(r#""a""#, "a")]
#[case(r#""a" + "b""#, "ab")]
#[case(r#""a" + "b" + "c""#, "abc")]
#[case(r#""multi " + 'quoted'"#, "multi quoted")]
#[case("unquoted", "unquoted")]
fn test_argument_concatenation(#[case] argument: &str, #[case] expected: &str) {
    let source = in_module(&format!("  description {};", argument));
    let module = parse_ok(&source);
    assert_eq!(module.child_argument(StatementKind::Description), Some(expected));
}

#[test]
fn test_children_keep_source_order() {
    let container = parse_body_statement(
        "container c { leaf b { type string; } leaf a { type string; } }",
    );
    assert_eq!(
        child_summary(&container),
        vec![
            (StatementKind::Leaf, Some("b")),
            (StatementKind::Leaf, Some("a")),
        ]
    );
}

#[rstest]
#[case::shorthand_leaf("choice c { leaf x { type string; } }", StatementKind::Leaf)]
#[case::explicit_case("choice c { case x { leaf x { type string; } } }", StatementKind::Case)]
#[case::shorthand_container("choice c { container x; }", StatementKind::Container)]
#[case::shorthand_anyxml("choice c { anyxml x; }", StatementKind::Anyxml)]
fn test_choice_cases(#[case] body: &str, #[case] expected: StatementKind) {
    let choice = parse_body_statement(body);
    assert_eq!(choice.kind(), StatementKind::Choice);
    assert_eq!(child_kinds(&choice), vec![expected]);
}

#[test]
fn test_choice_rejects_uses_shorthand() {
    let err = parse_err(&in_module("choice c { uses g; }"));
    assert_eq!(err.codes(), vec![yang_parser::ErrorCode::E0303]);
}

#[rstest]
#[case::semicolon(r#"units "kg";"#)]
#[case::extension_block(r#"units "kg" { unknown-thing; }"#)]
#[case::prefixed_extension_block(r#"units "kg" { ex:note "why"; }"#)]
fn test_stmtend_forms(#[case] units: &str) {
    let leaf = parse_body_statement(&format!("leaf l {{ type int32; {} }}", units));
    let units = &leaf.children()[1];
    assert_eq!(units.kind(), StatementKind::Units);
    assert_eq!(units.argument(), Some("kg"));
    assert!(units.children().iter().all(|c| c.is_extension()));
}

#[test]
fn test_stmtend_rejects_core_statement() {
    let err = parse_err(&in_module(
        r#"leaf l { type int32; units "kg" { description "x"; } }"#,
    ));
    let syntax = err.as_syntax().expect("syntax error");
    assert_eq!(syntax.code, yang_parser::ErrorCode::E0303);
    assert!(syntax.message.contains("'description'"), "{}", syntax.message);
    assert!(syntax.message.contains("units 'kg'"), "{}", syntax.message);
}

#[rstest]
#[case::semicolon_body("container c;")]
#[case::empty_block("container c { }")]
#[case::grouping("grouping g;")]
#[case::uses("uses g;")]
#[case::feature("feature f;")]
#[case::identity("identity i;")]
#[case::rpc("rpc r;")]
#[case::notification("notification n;")]
#[case::anyxml("anyxml a;")]
fn test_optional_bodies(#[case] body: &str) {
    parse_body_statement(body);
}

#[rstest]
#[case::leaf("leaf l;")]
#[case::leaf_list("leaf-list l;")]
#[case::import("import other;")]
fn test_block_required(#[case] body: &str) {
    let err = parse_err(&in_module(body));
    assert_eq!(err.codes(), vec![yang_parser::ErrorCode::E0205]);
}

#[test]
fn test_rpc_input_output() {
    let rpc = parse_body_statement(
        "rpc reset { input { leaf delay { type uint32; } } output { leaf ok { type boolean; } } }",
    );
    assert_eq!(
        child_kinds(&rpc),
        vec![StatementKind::Input, StatementKind::Output]
    );
    assert!(rpc.children().iter().all(|c| c.argument().is_none()));
}

#[test]
fn test_input_takes_no_argument() {
    let err = parse_err(&in_module("rpc r { input x { leaf a { type string; } } }"));
    assert_eq!(err.codes(), vec![yang_parser::ErrorCode::E0201]);
}

#[rstest]
#[case("not-supported;", StatementKind::DeviateNotSupported)]
#[case("add { default 5; must \"x > 1\"; }", StatementKind::DeviateAdd)]
#[case("replace { type int64; }", StatementKind::DeviateReplace)]
#[case("delete { units \"s\"; }", StatementKind::DeviateDelete)]
fn test_deviate_forms(#[case] deviate: &str, #[case] expected: StatementKind) {
    let deviation = parse_body_statement(&format!("deviation /a/b {{ deviate {} }}", deviate));
    assert_eq!(deviation.kind(), StatementKind::Deviation);
    let deviate = &deviation.children()[0];
    assert_eq!(deviate.kind(), expected);
    assert_eq!(deviate.keyword(), "deviate");
}

#[test]
fn test_deviate_repeats_properties() {
    let deviation = parse_body_statement(
        r#"deviation /a { deviate add { must "a"; must "b"; default 1; default 2; } }"#,
    );
    assert_eq!(deviation.children()[0].children().len(), 4);
}

#[test]
fn test_deviation_statements_in_any_order() {
    let deviation = parse_body_statement(
        r#"deviation /a { reference "RFC"; deviate not-supported; description "gone"; }"#,
    );
    assert_eq!(
        child_kinds(&deviation),
        vec![
            StatementKind::Reference,
            StatementKind::DeviateNotSupported,
            StatementKind::Description,
        ]
    );
}

#[test]
fn test_invalid_deviate_argument() {
    let err = parse_err(&in_module("deviation /a { deviate remove; }"));
    let syntax = err.as_syntax().expect("syntax error");
    assert_eq!(syntax.code, yang_parser::ErrorCode::E0306);
    assert!(syntax.expected.contains(&"not-supported".to_string()));
}

#[test]
fn test_keyword_as_argument() {
    let leaf = parse_body_statement("leaf type { type string; }");
    assert_eq!(leaf.argument(), Some("type"));
}

#[test]
fn test_uses_with_refine_and_augment() {
    let uses = parse_body_statement(
        r#"uses g { refine "a" { default 1; } augment "b" { leaf c { type string; } } }"#,
    );
    assert_eq!(
        child_kinds(&uses),
        vec![StatementKind::Refine, StatementKind::Augment]
    );
}

#[test]
fn test_spans_cover_statement() {
    let module = parse_ok("module m {\n  namespace urn:m;\n  prefix m;\n}");
    assert_eq!(module.span().start.line, 0);
    assert_eq!(module.span().end.line, 3);
    let prefix = &module.children()[1];
    assert_eq!(prefix.span().start.line, 2);
    assert_eq!(prefix.span().start.column, 2);
    assert_eq!(prefix.span().end.column, 11);
}
