use super::*;
use crate::{buffer_handler, Builtin, EvalErrorKind, Value};
use kin_diagnostic::ErrorCode;
use kin_ir::{Condition, Node};
use kin_parse::load;
use pretty_assertions::assert_eq;

/// Load `source`, run `main` with buffered output.
fn run(source: &str) -> (ExecResult, String) {
    let program = load(source).unwrap();
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(handler.clone())
        .build();
    let result = interp.run_main();
    assert_eq!(interp.env().depth(), 1, "frames leaked");
    assert_eq!(interp.call_depth(), 0, "call frames leaked");
    (result, handler.get_output())
}

fn run_err(source: &str) -> EvalError {
    run(source).0.unwrap_err()
}

// Statements

#[test]
fn string_statements_are_printed() {
    let (result, out) = run(r#"(proc main () ((bltin concat ("hello")) (bltin sp ()) "world" (bltin nl ())))"#);
    assert_eq!(result, Ok(Signal::Normal));
    assert_eq!(out, "hello world\n");
}

#[test]
fn non_string_statements_print_nothing() {
    let (_, out) = run("(proc main () ((bltin add (1 2)) 1 2.5))");
    assert_eq!(out, "");
}

#[test]
fn if_takes_else_branch() {
    let (_, out) = run(r#"(proc main () ((if (0) "then" "else")))"#);
    assert_eq!(out, "else");
}

#[test]
fn if_without_else_is_normal() {
    let (result, out) = run(r#"(proc main () ((if (0) "then")))"#);
    assert_eq!(result, Ok(Signal::Normal));
    assert_eq!(out, "");
}

#[test]
fn while_counts_up() {
    let (_, out) = run(
        r"(proc main () (
            (bltin set (i 0))
            (while ((bltin lt (i 3)))
              ((bltin incr (i)) (bltin d (i))))))",
    );
    assert_eq!(out, "123");
}

#[test]
fn break_leaves_innermost_loop() {
    let (result, out) = run(
        r#"(proc main () (
            (while (1) (
              (if (1) ((break)))
              "unreachable"))
            "after"))"#,
    );
    assert_eq!(result, Ok(Signal::Normal));
    assert_eq!(out, "after");
}

#[test]
fn continue_skips_rest_of_body() {
    let (_, out) = run(
        r"(proc main () (
            (bltin set (i 0))
            (while ((bltin lt (i 4))) (
              (bltin incr (i))
              (if ((bltin eq (i 2))) ((continue)))
              (bltin d (i))))))",
    );
    assert_eq!(out, "134");
}

#[test]
fn condition_binding_assigns_before_testing() {
    let (_, out) = run(
        r#"(proc main () (
            (if (found 0) "yes" "no")
            (bltin d (found))))"#,
    );
    assert_eq!(out, "no0");
}

#[test]
fn parenthesised_binder_is_accepted() {
    let (_, out) = run(r"(proc main () ((if ((v) 7) ((bltin d (v))))))");
    assert_eq!(out, "7");
}

#[test]
fn return_from_inside_loop_stops_routine() {
    let (result, out) = run(
        r#"((proc main () ((while (1) ((return))) "unreachable")))"#,
    );
    assert_eq!(result, Ok(Signal::Return(None)));
    assert_eq!(out, "");
}

// Routines

#[test]
fn function_value_is_returned() {
    let (_, out) = run(
        r"((func twice (n) ((return (bltin mul (n 2)))))
           (proc main () ((bltin d ((fcall twice (21)))))))",
    );
    assert_eq!(out, "42");
}

#[test]
fn function_without_return_yields_null() {
    let (_, out) = run(
        r#"((func nothing () ())
           (proc main () ((if ((fcall nothing ())) "set" "null"))))"#,
    );
    assert_eq!(out, "null");
}

#[test]
fn procedure_call_statement_discards_return() {
    let (result, out) = run(
        r#"((proc helper () ((bltin concat ("in helper")) (return 5) "unreachable"))
           (proc main () ((call helper ()) "back")))"#,
    );
    assert_eq!(result, Ok(Signal::Normal));
    assert_eq!(out, "in helperback");
}

#[test]
fn call_falls_back_to_builtin() {
    let (_, out) = run(r#"(proc main () ((call upper ("shout"))))"#);
    assert_eq!(out, "SHOUT");
}

#[test]
fn locals_start_null_and_do_not_leak() {
    let (_, out) = run(
        r#"((proc helper () (tmp) ((if (tmp) "set" "null") (bltin set (tmp 1))))
           (proc main () ((call helper ()) (call helper ()))))"#,
    );
    assert_eq!(out, "nullnull");
}

#[test]
fn arguments_evaluate_in_caller_scope() {
    let (_, out) = run(
        r"((func inc (n) ((return (bltin add (n 1)))))
           (proc main () ((bltin set (n 10)) (bltin d ((fcall inc (n)))))))",
    );
    assert_eq!(out, "11");
}

#[test]
fn callee_cannot_see_caller_locals() {
    let err = run_err(
        r"((proc peek () ((bltin d (secret))))
           (proc main () ((bltin set (secret 1)) (call peek ()))))",
    );
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedSymbol {
            name: "secret".into()
        }
    );
}

#[test]
fn recursion_works() {
    let (_, out) = run(
        r"((func fact (n) (
             (if ((bltin le (n 1))) ((return 1)))
             (return (bltin mul (n (fcall fact ((bltin sub (n 1)))))))))
           (proc main () ((bltin d ((fcall fact (10)))))))",
    );
    assert_eq!(out, "3628800");
}

// Errors

#[test]
fn missing_main() {
    let err = run_err("(proc other () ())");
    assert_eq!(err.code(), ErrorCode::E6004);
}

#[test]
fn arity_checked_before_arguments_run() {
    let err = run_err(
        r#"((func pair (a b) ((return a)))
           (proc main () ((fcall pair (1 2 (bltin print ("side effect")))))))"#,
    );
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "pair".into(),
            expected: "2".into(),
            found: 3,
        }
    );
}

#[test]
fn break_escaping_routine_is_invalid() {
    let err = run_err("((proc[4] main () ((break[5]))))");
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidControlFlow {
            keyword: "break",
            routine: "main".into(),
        }
    );
    assert_eq!(err.line, Some(4));
}

#[test]
fn continue_escaping_routine_is_invalid() {
    let err = run_err("(proc main () ((if (1) ((continue)))))");
    assert_eq!(err.code(), ErrorCode::E6006);
}

#[test]
fn error_carries_innermost_line_and_backtrace() {
    let err = run_err(
        r"((proc[1] inner () ((bltin[2] d[2] (nope[2]))))
           (proc[3] main () ((call[4] inner ()))))",
    );
    assert_eq!(err.code(), ErrorCode::E6003);
    assert_eq!(err.line, Some(2));
    let backtrace = err.backtrace.unwrap();
    let names: Vec<_> = backtrace.frames().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["inner", "main"]);
    assert_eq!(backtrace.frames()[0].line, Some(4));
}

#[test]
fn undefined_function_and_builtin() {
    assert_eq!(run_err("(proc main () ((fcall nope ())))").code(), ErrorCode::E6005);
    assert_eq!(run_err("(proc main () ((bltin nope ())))").code(), ErrorCode::E6003);
    assert_eq!(run_err("(proc main () ((call nope ())))").code(), ErrorCode::E6004);
}

#[test]
fn container_condition_is_a_type_error() {
    let err = run_err("(proc main () ((bltin list (l)) (if (l) ())))");
    assert_eq!(err.code(), ErrorCode::E6001);
}

#[test]
fn call_depth_is_limited() {
    let program = load("((proc down () ((call down ()))) (proc main () ((call down ()))))").unwrap();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(buffer_handler())
        .config(EvalConfig::default().with_max_call_depth(50))
        .build();
    let err = interp.run_main().unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::RecursionLimit {
            what: "call",
            limit: 50
        }
    );
    assert_eq!(interp.call_depth(), 0);
    assert_eq!(interp.env().depth(), 1);
}

#[test]
fn nesting_depth_is_limited() {
    let program = load("(proc main () ((bltin d ((bltin add (1 (bltin add (1 1))))))))").unwrap();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(buffer_handler())
        .config(EvalConfig::default().with_max_nesting_depth(4))
        .build();
    let err = interp.run_main().unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6009);
}

#[test]
fn record_builtin_without_store() {
    let err = run_err(r#"(proc main () ((bltin indi ("@I1@"))))"#);
    assert_eq!(err.kind, EvalErrorKind::MissingDatabase);
}

// Direct node evaluation

#[test]
fn statement_in_value_position_is_rejected() {
    let program = Program::new();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(buffer_handler())
        .build();
    let err = interp.eval(&Node::new(kin_ir::NodeKind::Break, Some(9))).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6007);
    assert_eq!(err.line, Some(9));
}

#[test]
fn exec_outside_routine_uses_bottom_frame() {
    let program = Program::new();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(buffer_handler())
        .build();
    let stmt = Node::if_(
        Condition::binding("x", Node::int(3)),
        Node::block(vec![Node::string("bound")]),
        None,
    );
    assert_eq!(interp.exec(&stmt), Ok(Signal::Normal));
    assert_eq!(interp.env().lookup("x"), Some(Value::Int(3)));
    assert_eq!(interp.get_print_output(), "bound");
}

#[test]
fn extra_builtin_replaces_standard() {
    fn shout(_: &mut Interpreter<'_>, _: &[Node]) -> kin_value::EvalResult {
        Ok(Value::string("custom"))
    }
    let program = load("(proc main () ((bltin nl ())))").unwrap();
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(handler.clone())
        .builtin(Builtin::new("nl", 0, 0, shout))
        .build();
    interp.run_main().unwrap();
    assert_eq!(handler.get_output(), "custom");
}

#[test]
fn globals_are_declared_null() {
    let program = load("((global total) (proc main () ()))").unwrap();
    let interp = Interpreter::new(&program);
    assert_eq!(interp.env().global("total"), Some(&Value::Null));
}
