//! The interpreter: statement execution and expression evaluation.
//!
//! Submodules:
//! - `builder`: `InterpreterBuilder`
//! - `frame_guard`: RAII frame push/pop around routine bodies
//! - `exec`: statements, producing a [`Signal`]
//! - `eval`: expressions, producing a [`Value`]
//! - `routine_call`: procedure and function invocation

mod builder;
mod eval;
mod exec;
mod frame_guard;
mod routine_call;

pub use builder::InterpreterBuilder;
pub use exec::{ExecResult, Signal};
pub use frame_guard::FramedInterpreter;

use kin_ir::Program;
use kin_stack::ensure_sufficient_stack;
use kin_value::{missing_database, recursion_limit, undefined_procedure, EvalError, RecordStore};
use tracing::debug;

use crate::{BuiltinRegistry, CallStack, EvalConfig, Environment, SharedPrintHandler};

/// Tree-walking interpreter over a loaded [`Program`].
pub struct Interpreter<'a> {
    /// Static routine tables.
    pub(crate) program: &'a Program,
    pub(crate) env: Environment<'a>,
    pub(crate) builtins: BuiltinRegistry,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) config: EvalConfig,
    /// Live routine frames for the call-depth limit and backtraces.
    pub(crate) call_stack: CallStack,
    /// Statements and expressions currently being evaluated.
    nesting: usize,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with the standard builtins, stdout output and no store.
    pub fn new(program: &'a Program) -> Self {
        InterpreterBuilder::new(program).build()
    }

    /// Run procedure `main` with no arguments.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_main(&mut self) -> ExecResult {
        let program = self.program;
        let main = program
            .procedure("main")
            .ok_or_else(|| undefined_procedure("main"))?;
        let result = self.call_routine(main, &[], main.line);
        self.print_handler.flush();
        debug!(ok = result.is_ok(), "main finished");
        result
    }

    pub fn program(&self) -> &'a Program {
        self.program
    }

    pub fn env(&self) -> &Environment<'a> {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment<'a> {
        &mut self.env
    }

    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Number of routine calls in progress.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// The bound record store, or a missing-database error.
    pub fn store(&self) -> Result<&'a dyn RecordStore, EvalError> {
        self.env.store().ok_or_else(missing_database)
    }

    /// Write report output.
    pub fn print(&self, text: &str) {
        self.print_handler.print(text);
    }

    /// Output captured so far (buffer handler only).
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Run `f` one nesting level deeper, on a sufficiently large stack.
    ///
    /// Errors leaving `f` without a line get `line`.
    fn nested<T>(
        &mut self,
        line: Option<u32>,
        f: impl FnOnce(&mut Self) -> Result<T, EvalError>,
    ) -> Result<T, EvalError> {
        let limit = self.config.max_nesting_depth;
        if self.nesting >= limit {
            return Err(recursion_limit("nesting", limit).or_line(line));
        }
        self.nesting += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.nesting -= 1;
        result.map_err(|err| err.or_line(line))
    }
}

#[cfg(test)]
mod tests;
