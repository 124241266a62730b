use super::*;
use pretty_assertions::assert_eq;

#[test]
fn constructors_build_expected_kinds() {
    let node = Node::if_(
        Condition::binding("x", Node::int(5)),
        Node::builtin("print", vec![Node::ident("x")]),
        None,
    )
    .at_line(3);

    assert_eq!(node.line, Some(3));
    match node.kind {
        NodeKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            assert_eq!(cond.bind.as_deref(), Some("x"));
            assert_eq!(*cond.expr, Node::int(5));
            assert_eq!(
                *then_branch,
                Node::new(
                    NodeKind::BuiltinCall(Call::new("print", vec![Node::ident("x")])),
                    None
                )
            );
            assert!(else_branch.is_none());
        }
        other => panic!("expected if, got {other:?}"),
    }
}

#[test]
fn describe_names_each_kind() {
    assert_eq!(Node::int(1).describe(), "integer literal");
    assert_eq!(Node::block(vec![]).describe(), "block");
    assert_eq!(Node::new(NodeKind::Break, None).describe(), "break");
    assert_eq!(Node::func_call("f", vec![]).describe(), "function call");
}

#[test]
fn as_ident() {
    assert_eq!(Node::ident("x").as_ident(), Some("x"));
    assert_eq!(Node::string("x").as_ident(), None);
}
