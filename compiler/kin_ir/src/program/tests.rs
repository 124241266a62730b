use super::*;
use pretty_assertions::assert_eq;

fn routine(kind: RoutineKind, name: &str) -> Routine {
    Routine::new(kind, name, vec![], Node::block(vec![]))
}

#[test]
fn routines_land_in_their_table() {
    let mut program = Program::new();
    program.define(routine(RoutineKind::Proc, "main")).unwrap();
    program.define(routine(RoutineKind::Func, "double")).unwrap();

    assert!(program.procedure("main").is_some());
    assert!(program.function("main").is_none());
    assert!(program.function("double").is_some());
    assert_eq!(program.procedure_count(), 1);
    assert_eq!(program.function_count(), 1);
}

#[test]
fn name_in_both_tables_is_rejected() {
    let mut program = Program::new();
    program
        .define(routine(RoutineKind::Proc, "f").at_line(2))
        .unwrap();
    let err = program.define(routine(RoutineKind::Func, "f")).unwrap_err();
    assert_eq!(
        err,
        DuplicateDefinition {
            name: "f".to_string(),
            existing: RoutineKind::Proc,
            existing_line: Some(2),
        }
    );
    assert!(program.function("f").is_none());
}

#[test]
fn duplicate_within_one_table_is_rejected() {
    let mut program = Program::new();
    program.define(routine(RoutineKind::Func, "g")).unwrap();
    assert!(program.define(routine(RoutineKind::Func, "g")).is_err());
}

#[test]
fn globals_keep_declaration_order_without_duplicates() {
    let mut program = Program::new();
    program.declare_global("b");
    program.declare_global("a");
    program.declare_global("b");
    assert_eq!(program.globals(), ["b".to_string(), "a".to_string()]);
}

#[test]
fn names_are_sorted() {
    let mut program = Program::new();
    for name in ["zeta", "alpha", "main"] {
        program.define(routine(RoutineKind::Proc, name)).unwrap();
    }
    assert_eq!(program.procedure_names(), vec!["alpha", "main", "zeta"]);
}
