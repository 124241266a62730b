use super::*;
use kin_eval::{buffer_handler, EvalConfig};
use kin_store::MemoryStore;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn run_args_with_options() {
    let (path, options) =
        parse_run_args(&args(&["report.kin", "--gedcom", "tree.ged", "--max-depth=50"])).unwrap();
    assert_eq!(path, "report.kin");
    assert_eq!(
        options,
        RunOptions {
            gedcom: Some(PathBuf::from("tree.ged")),
            max_depth: Some(50),
        }
    );
}

#[test]
fn run_args_equals_form() {
    let (_, options) = parse_run_args(&args(&["--gedcom=t.ged", "r.kin"])).unwrap();
    assert_eq!(options.gedcom, Some(PathBuf::from("t.ged")));
}

#[test]
fn run_args_errors() {
    assert!(parse_run_args(&args(&[])).is_err());
    assert!(parse_run_args(&args(&["r.kin", "--gedcom"])).is_err());
    assert!(parse_run_args(&args(&["r.kin", "--max-depth=0"])).is_err());
    assert!(parse_run_args(&args(&["r.kin", "--max-depth=lots"])).is_err());
    assert!(parse_run_args(&args(&["r.kin", "--verbose"])).is_err());
    assert!(parse_run_args(&args(&["a.kin", "b.kin"])).is_err());
}

#[test]
fn missing_file_is_io_error() {
    let diagnostic = read_file("/nonexistent/report.kin").unwrap_err();
    assert_eq!(diagnostic.code, ErrorCode::E9001);
    assert!(diagnostic.message.contains("cannot find file"));
}

#[test]
fn load_errors_are_sorted_by_line() {
    let errors = kin_parse::load("((global[3] \"g\"[3]) (proc[1] main () ((oops[2]))))").unwrap_err();
    let lines: Vec<_> = load_diagnostics(&errors).iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![Some(2), Some(3)]);
}

#[test]
fn check_summarises_program() {
    let summary =
        check_source("((global total) (func f () ()) (proc main () ()) (proc helper () ()))")
            .unwrap();
    assert_eq!(
        summary,
        ProgramSummary {
            procedures: vec!["helper".into(), "main".into()],
            functions: vec!["f".into()],
            globals: vec!["total".into()],
            has_main: true,
        }
    );
}

#[test]
fn check_reports_every_bad_form() {
    let diagnostics = check_source("((frob) (proc) (proc main () ()))").unwrap_err();
    assert_eq!(diagnostics.len(), 2);
}

#[test]
fn parse_renders_tree() {
    assert_eq!(parse_source("(proc  main ()\n  ())").unwrap(), "(proc main () ())");
    assert_eq!(parse_source("(proc").unwrap_err().code, ErrorCode::E0002);
}

#[test]
fn execute_writes_report_output() {
    let store = MemoryStore::from_gedcom("0 @I1@ INDI\n1 NAME Ann /Lee/\n").unwrap();
    let handler = buffer_handler();
    execute(
        r#"(proc main () ((bltin surname ((bltin indi ("@I1@"))))))"#,
        Some(&store),
        EvalConfig::default(),
        handler.clone(),
    )
    .unwrap();
    assert_eq!(handler.get_output(), "Lee");
}

#[test]
fn execute_reports_runtime_error() {
    let diagnostics = execute(
        "(proc main () ((bltin d (nope))))",
        None,
        EvalConfig::default(),
        buffer_handler(),
    )
    .unwrap_err();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E6003);
}
