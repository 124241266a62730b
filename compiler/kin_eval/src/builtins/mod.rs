//! Native routines callable with `bltin` (and with `call` when no procedure
//! of that name exists).
//!
//! Builtins receive their argument nodes unevaluated and decide their own
//! evaluation order, so `set` can treat its first argument as a name and
//! `and`/`or` can stop early. Arity is checked by the registry before the
//! builtin runs.

mod args;
mod arith;
mod collections;
mod compare;
mod records;
mod strings;
mod vars;

use std::fmt;

use kin_ir::Node;
use kin_value::{arity_mismatch, EvalError, EvalResult};
use rustc_hash::FxHashMap;

use crate::Interpreter;

/// Native implementation of a builtin.
pub type BuiltinFn = fn(&mut Interpreter<'_>, &[Node]) -> EvalResult;

/// A named builtin with its accepted argument-count range.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub min_args: usize,
    /// `Builtin::VARIADIC` for no upper bound.
    pub max_args: usize,
    pub func: BuiltinFn,
}

impl Builtin {
    pub const VARIADIC: usize = usize::MAX;

    pub const fn new(name: &'static str, min_args: usize, max_args: usize, func: BuiltinFn) -> Self {
        Builtin {
            name,
            min_args,
            max_args,
            func,
        }
    }

    /// Fail with an arity error naming the accepted range and `found`.
    pub fn check_arity(&self, found: usize) -> Result<(), EvalError> {
        if (self.min_args..=self.max_args).contains(&found) {
            return Ok(());
        }
        let expected = if self.min_args == self.max_args {
            self.min_args.to_string()
        } else if self.max_args == Self::VARIADIC {
            format!("at least {}", self.min_args)
        } else {
            format!("{} to {}", self.min_args, self.max_args)
        };
        Err(arity_mismatch(self.name, expected, found))
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .finish_non_exhaustive()
    }
}

/// Name-to-builtin table, fixed once the interpreter is built.
#[derive(Clone, Debug, Default)]
pub struct BuiltinRegistry {
    builtins: FxHashMap<&'static str, Builtin>,
}

impl BuiltinRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every standard builtin.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        vars::register(&mut registry);
        arith::register(&mut registry);
        compare::register(&mut registry);
        strings::register(&mut registry);
        records::register(&mut registry);
        collections::register(&mut registry);
        registry
    }

    /// Add `builtin`, replacing any entry of the same name.
    pub fn register(&mut self, builtin: Builtin) {
        self.builtins.insert(builtin.name, builtin);
    }

    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.builtins.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.builtins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.builtins.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
