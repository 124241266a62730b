//! Static routine tables.

use rustc_hash::FxHashMap;

use crate::Node;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoutineKind {
    /// Called as a statement; may return a value when used in an expression.
    Proc,
    /// Called for its value.
    Func,
}

impl RoutineKind {
    pub fn keyword(self) -> &'static str {
        match self {
            RoutineKind::Proc => "proc",
            RoutineKind::Func => "func",
        }
    }
}

/// A procedure or function definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Routine {
    pub kind: RoutineKind,
    pub name: String,
    pub params: Vec<String>,
    /// Names pre-declared as null in every new frame.
    pub locals: Vec<String>,
    pub body: Node,
    pub line: Option<u32>,
}

impl Routine {
    pub fn new(kind: RoutineKind, name: impl Into<String>, params: Vec<String>, body: Node) -> Self {
        Routine {
            kind,
            name: name.into(),
            params,
            locals: Vec::new(),
            body,
            line: None,
        }
    }

    #[must_use]
    pub fn with_locals(mut self, locals: Vec<String>) -> Self {
        self.locals = locals;
        self
    }

    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

/// A name defined twice across the routine tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateDefinition {
    pub name: String,
    /// Kind of the definition already in the tables.
    pub existing: RoutineKind,
    pub existing_line: Option<u32>,
}

/// The loaded program: procedures, functions and declared globals.
///
/// A name lives in at most one of the two routine tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    procs: FxHashMap<String, Routine>,
    funcs: FxHashMap<String, Routine>,
    globals: Vec<String>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a routine to the table for its kind.
    ///
    /// Fails if the name is already a procedure or a function.
    pub fn define(&mut self, routine: Routine) -> Result<(), DuplicateDefinition> {
        let existing = self
            .procs
            .get(&routine.name)
            .or_else(|| self.funcs.get(&routine.name));
        if let Some(existing) = existing {
            return Err(DuplicateDefinition {
                name: routine.name,
                existing: existing.kind,
                existing_line: existing.line,
            });
        }
        let table = match routine.kind {
            RoutineKind::Proc => &mut self.procs,
            RoutineKind::Func => &mut self.funcs,
        };
        table.insert(routine.name.clone(), routine);
        Ok(())
    }

    /// Declare a global. Declaring the same name twice is harmless.
    pub fn declare_global(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.globals.contains(&name) {
            self.globals.push(name);
        }
    }

    pub fn procedure(&self, name: &str) -> Option<&Routine> {
        self.procs.get(name)
    }

    pub fn function(&self, name: &str) -> Option<&Routine> {
        self.funcs.get(name)
    }

    /// Globals in declaration order.
    pub fn globals(&self) -> &[String] {
        &self.globals
    }

    pub fn procedure_count(&self) -> usize {
        self.procs.len()
    }

    pub fn function_count(&self) -> usize {
        self.funcs.len()
    }

    /// Procedure names, sorted.
    pub fn procedure_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.procs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Function names, sorted.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.funcs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests;
