//! Error types for program evaluation.
//!
//! `EvalErrorKind` is the typed category used for matching and for error
//! code assignment. Factory functions (e.g. `undefined_symbol()`) are the
//! public way to build errors; the interpreter attaches the source line and
//! a backtrace as the error propagates.

mod diagnostics;

use std::fmt;

use thiserror::Error;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// Each variant maps to exactly one `E6xxx` code; several variants may share
/// a code when they belong to the same taxonomy bucket.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Types
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    // Arguments
    #[error("`{name}` expects {expected} argument(s), found {found}")]
    ArityMismatch {
        name: String,
        expected: String,
        found: usize,
    },
    #[error("invalid argument to `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    // Names
    #[error("undefined symbol `{name}`")]
    UndefinedSymbol { name: String },
    #[error("undefined builtin `{name}`")]
    UndefinedBuiltin { name: String },
    #[error("undefined procedure `{name}`")]
    UndefinedProcedure { name: String },
    #[error("undefined function `{name}`")]
    UndefinedFunction { name: String },

    // Control flow
    #[error("`{keyword}` outside of a loop in `{routine}`")]
    InvalidControlFlow {
        keyword: &'static str,
        routine: String,
    },

    // Execution
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("{message}")]
    Custom { message: String },

    // Environment
    #[error("no record database is open")]
    MissingDatabase,
    #[error("maximum {what} depth exceeded (limit: {limit})")]
    RecursionLimit { what: &'static str, limit: usize },
}

/// One routine frame active when an error was raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Procedure or function name.
    pub name: String,
    /// Line of the call site.
    pub line: Option<u32>,
}

/// Snapshot of the routine call stack at an error site, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            write!(f, "  {i}: {}", frame.name)?;
            if let Some(line) = frame.line {
                write!(f, " at line {line}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Script line of the node being evaluated when the error was raised.
    pub line: Option<u32>,
    /// Routine frames active at the error site.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            line: None,
            backtrace: None,
        }
    }

    /// Attach a source line, overwriting any existing one.
    #[must_use]
    pub fn with_line(mut self, line: Option<u32>) -> Self {
        self.line = line;
        self
    }

    /// Attach a source line unless the error already has one.
    ///
    /// Errors propagate outwards through enclosing nodes; the innermost
    /// tagged node is the most precise location.
    #[must_use]
    pub fn or_line(mut self, line: Option<u32>) -> Self {
        if self.line.is_none() {
            self.line = line;
        }
        self
    }

    /// Attach a backtrace unless one was already captured deeper down.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.backtrace.is_none() {
            self.backtrace = Some(backtrace);
        }
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Type Errors

/// Value of the wrong type for an operation.
#[cold]
pub fn type_mismatch(expected: &str, found: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        found: found.type_name().to_string(),
    })
}

// Argument Errors

/// Wrong number of arguments.
///
/// `expected` is free-form so builtins can report ranges (`"1 to 2"`).
#[cold]
pub fn arity_mismatch(name: &str, expected: impl fmt::Display, found: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected: expected.to_string(),
        found,
    })
}

/// Argument with an unusable shape.
#[cold]
pub fn invalid_argument(name: &str, reason: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidArgument {
        name: name.to_string(),
        reason: reason.into(),
    })
}

/// 1-based index outside a list.
#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::new(EvalErrorKind::IndexOutOfBounds { index, len })
}

// Name Errors

#[cold]
pub fn undefined_symbol(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedSymbol {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_builtin(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedBuiltin {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_procedure(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedProcedure {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

// Control Flow Errors

/// `break` or `continue` reached the body boundary of `routine`.
#[cold]
pub fn invalid_control_flow(keyword: &'static str, routine: &str) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidControlFlow {
        keyword,
        routine: routine.to_string(),
    })
}

// Execution Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn custom(message: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::Custom {
        message: message.into(),
    })
}

// Environment Errors

/// A record builtin ran with no record store bound.
#[cold]
pub fn missing_database() -> EvalError {
    EvalError::new(EvalErrorKind::MissingDatabase)
}

/// Call or nesting depth went past its configured limit.
#[cold]
pub fn recursion_limit(what: &'static str, limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimit { what, limit })
}
