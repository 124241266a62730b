//! End-to-end runs of whole report programs.

use kin_diagnostic::{ErrorCode, IntoDiagnostic};
use kin_eval::{buffer_handler, EvalErrorKind, InterpreterBuilder, Signal, Value};
use kin_parse::load;
use kin_store::MemoryStore;
use pretty_assertions::assert_eq;

const FAMILY: &str = "\
0 @I1@ INDI
1 NAME Jack /Smith/
1 FAMC @F1@
0 @I2@ INDI
1 NAME John /Smith/
1 FAMS @F1@
0 @F1@ FAM
1 HUSB @I2@
1 CHIL @I1@
";

#[test]
fn father_name_report() {
    let program =
        load(r#"(proc main () () ((bltin name ((call father ((bltin indi ("@I1@"))))))))"#)
            .unwrap();
    let store = MemoryStore::from_gedcom(FAMILY).unwrap();
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new(&program)
        .store(&store)
        .print_handler(handler.clone())
        .build();

    assert_eq!(interp.run_main(), Ok(Signal::Normal));
    assert_eq!(handler.get_output(), "John /Smith/");
    assert_eq!(interp.env().depth(), 1);
}

#[test]
fn condition_binds_global() {
    let program = load("((global x) (proc main () ((if (x 5) ()))))").unwrap();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(buffer_handler())
        .build();

    interp.run_main().unwrap();
    assert_eq!(interp.env().global("x"), Some(&Value::Int(5)));
}

#[test]
fn condition_binds_result_of_equality_test() {
    let program = load("((global x) (proc main () ((if ((x) (bltin eq (x 5))) ()))))").unwrap();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(buffer_handler())
        .build();

    assert_eq!(interp.run_main(), Ok(Signal::Normal));
    assert_eq!(interp.env().global("x"), Some(&Value::Bool(false)));
}

#[test]
fn list_is_shared_between_variables() {
    let program = load(
        r"(proc main () (a b) (
            (bltin list (a))
            (bltin set (b a))
            (bltin enqueue (b 1))
            (bltin enqueue (a 2))
            (bltin d ((bltin length (a))))
            (bltin d ((bltin length (b))))))",
    )
    .unwrap();
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(handler.clone())
        .build();

    interp.run_main().unwrap();
    assert_eq!(handler.get_output(), "22");
}

#[test]
fn list_passed_to_procedure_is_mutated_in_place() {
    let program = load(
        r"((proc fill (l) ((bltin enqueue (l 1)) (bltin enqueue (l 2))))
           (proc main () (
             (bltin list (xs))
             (call fill (xs))
             (bltin d ((bltin length (xs)))))))",
    )
    .unwrap();
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(handler.clone())
        .build();

    interp.run_main().unwrap();
    assert_eq!(handler.get_output(), "2");
}

#[test]
fn infinite_loop_with_break_terminates() {
    let program = load(
        r"((global n)
           (proc main () (
             (bltin set (n 0))
             (while (1) (
               (bltin incr (n))
               (if ((bltin ge (n 100))) ((break))))))))",
    )
    .unwrap();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(buffer_handler())
        .build();

    assert_eq!(interp.run_main(), Ok(Signal::Normal));
    assert_eq!(interp.env().global("n"), Some(&Value::Int(100)));
}

#[test]
fn zero_arg_builtin_given_one_arg() {
    let program = load("(proc main () ((bltin nl (1))))").unwrap();
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(handler.clone())
        .build();

    let err = interp.run_main().unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "nl".into(),
            expected: "0".into(),
            found: 1,
        }
    );
    assert_eq!(handler.get_output(), "");
}

#[test]
fn two_param_function_given_three_args() {
    let program = load(
        r#"((func f (a b) ((return a)))
           (proc main () ((bltin concat ("before")) (fcall f (1 2 3)) "after")))"#,
    )
    .unwrap();
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(handler.clone())
        .build();

    let err = interp.run_main().unwrap_err();
    assert_eq!(err.to_string(), "`f` expects 2 argument(s), found 3");
    assert_eq!(handler.get_output(), "before");
}

#[test]
fn runtime_error_renders_as_diagnostic() {
    let program = load("((proc[1] main () ((bltin[2] d[2] (missing[2])))))").unwrap();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(buffer_handler())
        .build();

    let diagnostic = interp.run_main().unwrap_err().to_diagnostic();
    assert_eq!(diagnostic.code, ErrorCode::E6003);
    assert_eq!(diagnostic.line, Some(2));
    assert_eq!(diagnostic.message, "undefined symbol `missing`");
}

#[test]
fn missing_store_is_reported() {
    let program = load(r#"(proc main () ((bltin indi ("@I1@"))))"#).unwrap();
    let mut interp = InterpreterBuilder::new(&program)
        .print_handler(buffer_handler())
        .build();

    assert_eq!(interp.run_main().unwrap_err().code(), ErrorCode::E6008);
}
