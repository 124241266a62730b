//! Kin command-line driver.
//!
//! The binary in `main.rs` only dispatches on the command name; the work of
//! each command lives in [`commands`] so it can be driven from tests with
//! in-memory sources and sinks.

pub mod commands;
pub mod tracing_setup;
