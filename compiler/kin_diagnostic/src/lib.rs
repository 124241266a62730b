//! Diagnostic system for Kin report programs.
//!
//! Every failure in the runtime, from an unmatched parenthesis in the wire
//! format to a `break` escaping a procedure body, is a typed error value that
//! maps onto a stable [`ErrorCode`] and renders as a [`Diagnostic`]:
//!
//! - Error codes for searchability (`E6003`)
//! - A one-line message naming the construct
//! - The source line carried by the wire format, when known
//! - Optional notes (backtraces, expected forms)
//!
//! Load-time problems are gathered in a [`DiagnosticQueue`] so a broken
//! program is reported in one batch before anything runs.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, IntoDiagnostic, Severity};
pub use error_code::{ErrorCategory, ErrorCode};
pub use queue::DiagnosticQueue;
