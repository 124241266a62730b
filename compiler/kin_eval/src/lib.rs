#![allow(
    clippy::result_large_err,
    reason = "EvalError is the interpreter's error type throughout"
)]
//! Kin Eval - tree-walking interpreter for Kin report programs.
//!
//! # Architecture
//!
//! - `Environment`: one global table plus a stack of routine frames
//! - `Interpreter`: statement execution (`exec`) producing a [`Signal`] and
//!   expression evaluation (`eval`) producing a [`Value`]
//! - `BuiltinRegistry`: native routines that receive their argument nodes
//!   unevaluated and decide their own evaluation order
//! - `CallStack`: routine frames for depth limits and error backtraces
//!
//! Value and error types live in `kin_value` and are re-exported here.

mod builtins;
mod call_stack;
mod config;
mod environment;
pub mod interpreter;
mod print_handler;

pub use kin_value::{EvalError, EvalErrorKind, EvalResult, RecordRef, RecordStore, Value};

pub use builtins::{Builtin, BuiltinFn, BuiltinRegistry};
pub use call_stack::{CallFrame, CallStack};
pub use config::EvalConfig;
pub use environment::{Environment, Frame};
pub use interpreter::{ExecResult, Interpreter, InterpreterBuilder, Signal};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
