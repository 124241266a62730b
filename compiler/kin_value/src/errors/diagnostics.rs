//! Runtime error to diagnostic conversion.
//!
//! # Error Codes
//!
//! - E6001: type mismatch
//! - E6002: invalid arguments (arity, shape, index)
//! - E6003: undefined symbol or builtin
//! - E6004: undefined procedure
//! - E6005: undefined function
//! - E6006: `break`/`continue` outside a loop
//! - E6007: other execution failures
//! - E6008: no record database
//! - E6009: depth limit exceeded

use kin_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic};

use super::{EvalError, EvalErrorKind};

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::TypeMismatch { .. } => ErrorCode::E6001,
            Self::ArityMismatch { .. }
            | Self::InvalidArgument { .. }
            | Self::IndexOutOfBounds { .. } => ErrorCode::E6002,
            Self::UndefinedSymbol { .. } | Self::UndefinedBuiltin { .. } => ErrorCode::E6003,
            Self::UndefinedProcedure { .. } => ErrorCode::E6004,
            Self::UndefinedFunction { .. } => ErrorCode::E6005,
            Self::InvalidControlFlow { .. } => ErrorCode::E6006,
            Self::DivisionByZero | Self::IntegerOverflow { .. } | Self::Custom { .. } => {
                ErrorCode::E6007
            }
            Self::MissingDatabase => ErrorCode::E6008,
            Self::RecursionLimit { .. } => ErrorCode::E6009,
        }
    }

    /// Actionable hint for errors a script author can fix directly.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UndefinedSymbol { name } => Some(format!(
                "declare `{name}` with `global` or assign it before use"
            )),
            Self::InvalidControlFlow { keyword, .. } => {
                Some(format!("`{keyword}` must appear inside a `while` body"))
            }
            Self::MissingDatabase => Some("run with `--gedcom <file>`".to_string()),
            _ => None,
        }
    }
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }
}

impl IntoDiagnostic for EvalError {
    fn to_diagnostic(&self) -> Diagnostic {
        let mut diagnostic = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_line(self.line);
        if let Some(suggestion) = self.kind.suggestion() {
            diagnostic = diagnostic.with_note(suggestion);
        }
        if let Some(backtrace) = self.backtrace.as_ref().filter(|bt| !bt.is_empty()) {
            diagnostic = diagnostic.with_note(backtrace.to_string().trim_end().to_string());
        }
        diagnostic
    }
}
