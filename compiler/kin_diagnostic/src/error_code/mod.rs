//! Error codes for all Kin diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1004`) whose first digit
//! names the phase that detected it.

use std::fmt;

/// Error codes for all Kin diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: S-expression reader errors
/// - E1xxx: Program-node builder errors
/// - E6xxx: Runtime errors
/// - E9xxx: Host errors (I/O)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Reader Errors (E0xxx)
    /// Close delimiter with no open list
    E0001,
    /// End of input inside an open list
    E0002,
    /// Close delimiter does not match the open delimiter
    E0003,
    /// Unterminated quoted string
    E0004,
    /// Unknown escape sequence in a quoted string
    E0005,
    /// Malformed `[line]` tag
    E0006,
    /// Tokens left after the top-level expression
    E0007,
    /// No expression in the input
    E0008,

    // Builder Errors (E1xxx)
    /// Top-level element is not a `proc`, `func` or `global` form
    E1001,
    /// Form has the wrong number of elements
    E1002,
    /// Atom does not satisfy the identifier grammar
    E1003,
    /// List starts with an unknown keyword
    E1004,
    /// `if`/`while` condition has the wrong shape
    E1005,
    /// Name defined twice (procedure, function or both)
    E1006,
    /// Expected an atom, found a list (or the reverse)
    E1007,

    // Runtime Errors (E6xxx)
    /// Type mismatch
    E6001,
    /// Wrong number or shape of arguments
    E6002,
    /// Undefined symbol (variable or builtin)
    E6003,
    /// Undefined procedure
    E6004,
    /// Undefined function
    E6005,
    /// `break`/`continue` escaped a loop
    E6006,
    /// Generic execution failure
    E6007,
    /// Record builtin used with no record store bound
    E6008,
    /// Nesting or call depth limit exceeded
    E6009,

    // Host Errors (E9xxx)
    /// Source or record file could not be read
    E9001,
}

/// The flat error taxonomy every code belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    MalformedExpression,
    TypeMismatch,
    InvalidArguments,
    UndefinedSymbol,
    UndefinedProcedure,
    UndefinedFunction,
    InvalidControlFlow,
    ExecutionFailed,
    MissingDatabase,
    RecursionLimit,
    Io,
}

impl ErrorCode {
    /// The code as printed in diagnostics (`"E6003"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// The taxonomy bucket this code belongs to.
    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorCode::E0001
            | ErrorCode::E0002
            | ErrorCode::E0003
            | ErrorCode::E0004
            | ErrorCode::E0005
            | ErrorCode::E0006
            | ErrorCode::E0007
            | ErrorCode::E0008
            | ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1003
            | ErrorCode::E1004
            | ErrorCode::E1005
            | ErrorCode::E1006
            | ErrorCode::E1007 => ErrorCategory::MalformedExpression,
            ErrorCode::E6001 => ErrorCategory::TypeMismatch,
            ErrorCode::E6002 => ErrorCategory::InvalidArguments,
            ErrorCode::E6003 => ErrorCategory::UndefinedSymbol,
            ErrorCode::E6004 => ErrorCategory::UndefinedProcedure,
            ErrorCode::E6005 => ErrorCategory::UndefinedFunction,
            ErrorCode::E6006 => ErrorCategory::InvalidControlFlow,
            ErrorCode::E6007 => ErrorCategory::ExecutionFailed,
            ErrorCode::E6008 => ErrorCategory::MissingDatabase,
            ErrorCode::E6009 => ErrorCategory::RecursionLimit,
            ErrorCode::E9001 => ErrorCategory::Io,
        }
    }

    /// Whether the code is raised before execution starts.
    pub fn is_load_error(self) -> bool {
        matches!(self.as_str().as_bytes().get(1), Some(b'0' | b'1'))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::MalformedExpression => "malformed expression",
            ErrorCategory::TypeMismatch => "type mismatch",
            ErrorCategory::InvalidArguments => "invalid arguments",
            ErrorCategory::UndefinedSymbol => "undefined symbol",
            ErrorCategory::UndefinedProcedure => "undefined procedure",
            ErrorCategory::UndefinedFunction => "undefined function",
            ErrorCategory::InvalidControlFlow => "invalid control flow",
            ErrorCategory::ExecutionFailed => "execution failed",
            ErrorCategory::MissingDatabase => "missing database",
            ErrorCategory::RecursionLimit => "recursion limit",
            ErrorCategory::Io => "io",
        };
        f.write_str(name)
    }
}
