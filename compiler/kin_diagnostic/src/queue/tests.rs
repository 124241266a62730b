use super::*;
use crate::ErrorCode;

fn at(line: Option<u32>, message: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message(message)
        .with_line(line)
}

#[test]
fn sorted_by_line_with_unknown_lines_last() {
    let mut queue = DiagnosticQueue::new();
    queue.push(at(None, "no line"));
    queue.push(at(Some(9), "nine"));
    queue.push(at(Some(2), "two"));

    let messages: Vec<_> = queue
        .into_sorted()
        .into_iter()
        .map(|d| d.message)
        .collect();
    assert_eq!(messages, vec!["two", "nine", "no line"]);
}

#[test]
fn error_limit_drops_extra_errors() {
    let mut queue = DiagnosticQueue::with_limit(2);
    assert!(queue.push(at(Some(1), "a")));
    assert!(queue.push(at(Some(2), "b")));
    assert!(!queue.push(at(Some(3), "c")));
    assert_eq!(queue.error_count(), 2);
    assert!(queue.limit_reached());
}

#[test]
fn warnings_do_not_count_as_errors() {
    let mut queue = DiagnosticQueue::with_limit(1);
    queue.push(Diagnostic::warning(ErrorCode::E6007).with_message("w"));
    assert!(!queue.has_errors());
    assert!(!queue.is_empty());
    assert!(queue.push(at(None, "e")));
    assert!(queue.has_errors());
}
