//! Load-time error types.

use kin_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic};
use kin_ir::RoutineKind;
use kin_sexpr::ReadError;
use thiserror::Error;

/// What went wrong while loading.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadErrorKind {
    #[error(transparent)]
    Read(ReadError),

    #[error("expected a `proc`, `func` or `global` form, found {found}")]
    BadTopLevel { found: String },

    #[error("`{form}` takes {expected}, found {found}")]
    Arity {
        form: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("`{text}` is not a valid {role}")]
    BadIdentifier { text: String, role: &'static str },

    #[error("unknown keyword `{keyword}`")]
    UnknownKeyword { keyword: String },

    #[error("condition must be `(expr)` or `(name expr)`, found {found} element(s)")]
    BadCondition { found: usize },

    #[error("`{name}` is already defined as a {}", .existing.keyword())]
    Duplicate { name: String, existing: RoutineKind },

    #[error("expected {expected} for {role}, found {found}")]
    Expected {
        expected: &'static str,
        found: &'static str,
        role: &'static str,
    },
}

/// A load error and the script line it points at.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub line: Option<u32>,
}

impl LoadError {
    pub fn new(kind: LoadErrorKind, line: Option<u32>) -> Self {
        LoadError { kind, line }
    }

    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            LoadErrorKind::Read(err) => match err {
                ReadError::UnmatchedClose { .. } => ErrorCode::E0001,
                ReadError::Unclosed { .. } => ErrorCode::E0002,
                ReadError::Mismatched { .. } => ErrorCode::E0003,
                ReadError::UnterminatedString { .. } => ErrorCode::E0004,
                ReadError::InvalidEscape { .. } => ErrorCode::E0005,
                ReadError::BadLineTag { .. } => ErrorCode::E0006,
                ReadError::TrailingInput { .. } => ErrorCode::E0007,
                ReadError::Empty => ErrorCode::E0008,
            },
            LoadErrorKind::BadTopLevel { .. } => ErrorCode::E1001,
            LoadErrorKind::Arity { .. } => ErrorCode::E1002,
            LoadErrorKind::BadIdentifier { .. } => ErrorCode::E1003,
            LoadErrorKind::UnknownKeyword { .. } => ErrorCode::E1004,
            LoadErrorKind::BadCondition { .. } => ErrorCode::E1005,
            LoadErrorKind::Duplicate { .. } => ErrorCode::E1006,
            LoadErrorKind::Expected { .. } => ErrorCode::E1007,
        }
    }
}

impl From<ReadError> for LoadError {
    fn from(err: ReadError) -> Self {
        let line = err.line();
        LoadError::new(LoadErrorKind::Read(err), line)
    }
}

impl IntoDiagnostic for LoadError {
    fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_line(self.line);
        match &self.kind {
            LoadErrorKind::Arity {
                form: "proc" | "func",
                ..
            } => diagnostic.with_note("expected `(KIND NAME (PARAMS) BODY)` or `(KIND NAME (PARAMS) (LOCALS) BODY)`"),
            LoadErrorKind::UnknownKeyword { .. } => diagnostic.with_note(
                "statements start with `if`, `while`, `return`, `break`, `continue`, `bltin`, `call` or `fcall`",
            ),
            _ => diagnostic,
        }
    }
}
