//! Visitor-based traversal of parsed units

use yang_parser::{StatementKind, StatementNode, StatementVisitor, Walk, walk};

use crate::helpers::source_fixtures::FULL_MODULE;
use crate::helpers::tree_assertions::parse_ok;

/// Builds `/`-separated paths of data nodes, like a schema tree printer
#[derive(Default)]
struct DataPathCollector {
    stack: Vec<String>,
    paths: Vec<String>,
}

fn is_data_node(node: &StatementNode) -> bool {
    matches!(
        node.kind(),
        StatementKind::Container | StatementKind::Leaf | StatementKind::LeafList | StatementKind::List
    )
}

impl StatementVisitor for DataPathCollector {
    fn enter(&mut self, node: &StatementNode) -> Walk {
        match node.kind() {
            StatementKind::Grouping
            | StatementKind::Rpc
            | StatementKind::Notification
            | StatementKind::Augment
            | StatementKind::Choice => Walk::SkipChildren,
            _ if is_data_node(node) => {
                self.stack.push(node.argument().unwrap_or_default().to_string());
                self.paths.push(format!("/{}", self.stack.join("/")));
                Walk::Continue
            }
            _ => Walk::Continue,
        }
    }

    fn exit(&mut self, node: &StatementNode) {
        if is_data_node(node) {
            self.stack.pop();
        }
    }
}

#[test]
fn test_data_paths() {
    let module = parse_ok(FULL_MODULE);
    let mut collector = DataPathCollector::default();
    walk(&module, &mut collector);
    assert_eq!(
        collector.paths,
        vec![
            "/system",
            "/system/host-name",
            "/system/domain-search",
            "/system/user",
            "/system/user/name",
            "/system/user/uid",
            "/system/user/class",
        ]
    );
    assert!(collector.stack.is_empty());
}

#[test]
fn test_enter_and_exit_balance() {
    #[derive(Default)]
    struct Depth {
        current: usize,
        max: usize,
        entered: usize,
        exited: usize,
    }

    impl StatementVisitor for Depth {
        fn enter(&mut self, _node: &StatementNode) -> Walk {
            self.entered += 1;
            self.current += 1;
            self.max = self.max.max(self.current);
            Walk::Continue
        }

        fn exit(&mut self, _node: &StatementNode) {
            self.exited += 1;
            self.current -= 1;
        }
    }

    let module = parse_ok(FULL_MODULE);
    let mut depth = Depth::default();
    walk(&module, &mut depth);
    assert_eq!(depth.entered, depth.exited);
    assert_eq!(depth.entered, module.descendants().count() + 1);
    assert_eq!(depth.current, 0);
    assert!(depth.max >= 6);
}
