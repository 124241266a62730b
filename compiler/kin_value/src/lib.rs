#![allow(
    clippy::result_large_err,
    reason = "EvalError carries its backtrace inline; boxing would touch every call site"
)]
//! Kin Value - runtime values for the report interpreter.
//!
//! This crate provides:
//! - The closed set of program values (`Value`)
//! - `Shared<T>`, the aliased mutable handle behind lists, tables and sequences
//! - The read-only record-node boundary (`RecordNode`, `RecordRef`, `RecordStore`)
//! - Evaluation error types (`EvalError`, `EvalErrorKind`, `EvalResult`)
//!
//! # Value Semantics
//!
//! Scalars (null, integer, float, boolean, string) are copied on assignment.
//! Containers are handles: cloning a list value clones the handle, so a
//! builtin that mutates the list is seen through every variable holding it.

mod errors;
mod record;
mod value;

pub use errors::{
    BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
};
pub use record::{RecordNode, RecordRef, RecordStore};
pub use value::{SetEntry, Shared, Value};

// Re-export error constructors for use by the interpreter and builtins
pub use errors::{
    arity_mismatch, custom, division_by_zero, index_out_of_bounds, integer_overflow,
    invalid_argument, invalid_control_flow, missing_database, recursion_limit, type_mismatch,
    undefined_builtin, undefined_function, undefined_procedure, undefined_symbol,
};
