//! `InterpreterBuilder` for creating Interpreter instances.

use kin_ir::Program;
use kin_value::RecordStore;

use super::Interpreter;
use crate::{stdout_handler, Builtin, BuiltinRegistry, CallStack, EvalConfig, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// The standard builtins are always installed; `builtin` adds or replaces
/// entries before the registry is frozen for the run.
pub struct InterpreterBuilder<'a> {
    program: &'a Program,
    store: Option<&'a dyn RecordStore>,
    print_handler: Option<SharedPrintHandler>,
    config: EvalConfig,
    extra_builtins: Vec<Builtin>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            store: None,
            print_handler: None,
            config: EvalConfig::default(),
            extra_builtins: Vec::new(),
        }
    }

    /// Bind the read-only record store for the run.
    #[must_use]
    pub fn store(mut self, store: &'a dyn RecordStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Set where report output goes. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Register an extra builtin, replacing a standard one of the same name.
    #[must_use]
    pub fn builtin(mut self, builtin: Builtin) -> Self {
        self.extra_builtins.push(builtin);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let mut env = match self.store {
            Some(store) => Environment::with_store(store),
            None => Environment::new(),
        };
        for name in self.program.globals() {
            env.declare_global(name);
        }

        let mut builtins = BuiltinRegistry::standard();
        for builtin in self.extra_builtins {
            builtins.register(builtin);
        }

        Interpreter {
            program: self.program,
            env,
            builtins,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            config: self.config,
            call_stack: CallStack::new(self.config.max_call_depth),
            nesting: 0,
        }
    }
}
