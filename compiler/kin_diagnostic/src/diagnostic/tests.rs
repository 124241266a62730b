use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_chain_populates_fields() {
    let diag = Diagnostic::error(ErrorCode::E6003)
        .with_message("undefined symbol `spouse`")
        .with_line(Some(14))
        .with_note("in procedure `main`");

    assert_eq!(diag.code, ErrorCode::E6003);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.line, Some(14));
    assert_eq!(diag.notes, vec!["in procedure `main`".to_string()]);
    assert!(diag.is_error());
}

#[test]
fn display_includes_code_and_line() {
    let diag = Diagnostic::error(ErrorCode::E1004)
        .with_message("unknown keyword `foreach`")
        .with_line(Some(3));
    assert_eq!(
        diag.to_string(),
        "error[E1004]: unknown keyword `foreach` (line 3)"
    );
}

#[test]
fn warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E6007).with_message("slow");
    assert!(!diag.is_error());
    assert_eq!(diag.to_string(), "warning[E6007]: slow");
}
