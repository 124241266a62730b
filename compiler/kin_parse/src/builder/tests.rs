use super::*;
use kin_sexpr::read;
use pretty_assertions::assert_eq;

fn node(source: &str) -> BuildResult<Node> {
    build_node(&read(source).unwrap())
}

fn program(source: &str) -> Result<Program, Vec<LoadError>> {
    build(&read(source).unwrap())
}

fn kinds(errors: &[LoadError]) -> Vec<&LoadErrorKind> {
    errors.iter().map(|e| &e.kind).collect()
}

#[test]
fn atoms_dispatch_on_shape() {
    assert_eq!(node("42").unwrap(), Node::int(42));
    assert_eq!(node("-7").unwrap(), Node::int(-7));
    assert_eq!(node("2.5").unwrap(), Node::float(2.5));
    assert_eq!(node("1e3").unwrap(), Node::float(1000.0));
    assert_eq!(node(r#""42""#).unwrap(), Node::string("42"));
    assert_eq!(node("indi").unwrap(), Node::ident("indi"));
    assert_eq!(node("nan").unwrap(), Node::ident("nan"));
    assert_eq!(node("x[8]").unwrap(), Node::ident("x").at_line(8));
}

#[test]
fn bad_identifier_atom() {
    let err = node("@I1@[3]").unwrap_err();
    assert_eq!(
        err,
        LoadError::new(
            LoadErrorKind::BadIdentifier {
                text: "@I1@".to_string(),
                role: "identifier"
            },
            Some(3)
        )
    );
}

#[test]
fn calls_with_and_without_arguments() {
    assert_eq!(
        node(r#"(bltin print ("hi" x))"#).unwrap(),
        Node::builtin("print", vec![Node::string("hi"), Node::ident("x")])
    );
    assert_eq!(node("(call header)").unwrap(), Node::proc_call("header", vec![]));
    assert_eq!(node("(fcall f ())").unwrap(), Node::func_call("f", vec![]));
}

#[test]
fn call_arguments_must_be_a_list() {
    let err = node("(bltin print x)").unwrap_err();
    assert_eq!(
        err.kind,
        LoadErrorKind::Expected {
            expected: "a list",
            found: "an atom",
            role: "call arguments"
        }
    );
}

#[test]
fn blocks() {
    assert_eq!(node("()").unwrap(), Node::block(vec![]));
    assert_eq!(
        node("((break) (continue))").unwrap(),
        Node::block(vec![
            Node::new(NodeKind::Break, None),
            Node::new(NodeKind::Continue, None)
        ])
    );
}

#[test]
fn if_and_while() {
    assert_eq!(
        node("(if (x) (return 1) (return 2))").unwrap(),
        Node::if_(
            Condition::test(Node::ident("x")),
            Node::return_(Some(Node::int(1))),
            Some(Node::return_(Some(Node::int(2)))),
        )
    );
    assert_eq!(
        node("(while (1) (break))").unwrap(),
        Node::while_(Condition::test(Node::int(1)), Node::new(NodeKind::Break, None))
    );
}

#[test]
fn condition_binders() {
    let bare = node("(if (x 5) ())").unwrap();
    let wrapped = node("(if ((x) 5) ())").unwrap();
    let expected = Node::if_(Condition::binding("x", Node::int(5)), Node::block(vec![]), None);
    assert_eq!(bare, expected);
    assert_eq!(wrapped, expected);
}

#[test]
fn malformed_conditions() {
    assert_eq!(
        node("(if (a b c) ())").unwrap_err().kind,
        LoadErrorKind::BadCondition { found: 3 }
    );
    assert_eq!(
        node("(while () ())").unwrap_err().kind,
        LoadErrorKind::BadCondition { found: 0 }
    );
    assert!(matches!(
        node("(if (\"x\" 5) ())").unwrap_err().kind,
        LoadErrorKind::BadIdentifier { .. }
    ));
}

#[test]
fn keyword_arity_errors() {
    for source in ["(if (x))", "(while (x))", "(return 1 2)", "(break 1)", "(bltin)"] {
        assert!(
            matches!(node(source).unwrap_err().kind, LoadErrorKind::Arity { .. }),
            "{source}"
        );
    }
}

#[test]
fn unknown_keyword_is_an_error() {
    let err = node("(frobnicate[9] x)").unwrap_err();
    assert_eq!(
        err,
        LoadError::new(
            LoadErrorKind::UnknownKeyword {
                keyword: "frobnicate".to_string()
            },
            Some(9)
        )
    );
}

#[test]
fn routine_forms() {
    let program = program(
        "((proc main () ((call greet (\"Ann\"))))
          (proc greet (who) (n) ((bltin print (who))))
          (func twice (x) (return (bltin add (x x))))
          (global count))",
    )
    .unwrap();

    let greet = program.procedure("greet").unwrap();
    assert_eq!(greet.params, vec!["who".to_string()]);
    assert_eq!(greet.locals, vec!["n".to_string()]);
    assert_eq!(program.function("twice").unwrap().params.len(), 1);
    assert_eq!(program.globals(), ["count".to_string()]);
}

#[test]
fn single_form_root() {
    let program = program("(proc main () () ((bltin nl)))").unwrap();
    assert!(program.procedure("main").unwrap().locals.is_empty());
    assert_eq!(program.procedure_count(), 1);
}

#[test]
fn empty_root_is_an_empty_program() {
    assert_eq!(program("()").unwrap(), Program::new());
}

#[test]
fn errors_are_batched_across_forms() {
    let errors = program(
        "((proc main () ((frob)))
          (global 9lives)
          (proc ok () ())
          (func ok () ())
          (banana))",
    )
    .unwrap_err();

    assert_eq!(
        kinds(&errors),
        vec![
            &LoadErrorKind::UnknownKeyword {
                keyword: "frob".to_string()
            },
            &LoadErrorKind::BadIdentifier {
                text: "9lives".to_string(),
                role: "global name"
            },
            &LoadErrorKind::Duplicate {
                name: "ok".to_string(),
                existing: RoutineKind::Proc
            },
            &LoadErrorKind::BadTopLevel {
                found: "`banana`".to_string()
            },
        ]
    );
}

#[test]
fn routine_shape_errors() {
    let errors = program("((proc main ()) (func f x ()) (global))").unwrap_err();
    assert_eq!(
        kinds(&errors),
        vec![
            &LoadErrorKind::Arity {
                form: "proc",
                expected: "a name, a parameter list and a body",
                found: 2
            },
            &LoadErrorKind::Expected {
                expected: "a list",
                found: "an atom",
                role: "parameter"
            },
            &LoadErrorKind::Arity {
                form: "global",
                expected: "exactly one name",
                found: 0
            },
        ]
    );
}

#[test]
fn root_atom_is_rejected() {
    let errors = program("main").unwrap_err();
    assert_eq!(
        kinds(&errors),
        vec![&LoadErrorKind::BadTopLevel {
            found: "an atom".to_string()
        }]
    );
}

#[test]
fn deeply_nested_blocks_build() {
    let depth = 3_000;
    let source = format!("{}(break){}", "(".repeat(depth), ")".repeat(depth));
    let built = node(&source).unwrap();
    assert_eq!(built.describe(), "block");
}
