//! Symbol tables for the interpreter.
//!
//! One global table lives for the whole run. Each routine invocation pushes
//! a fresh local [`Frame`]; lookups see only the top frame and the globals,
//! never the frames of callers.

use kin_value::{RecordStore, Value};
use rustc_hash::FxHashMap;

/// Local bindings of one routine invocation.
///
/// A name bound to [`Value::Null`] is declared with no value yet; an absent
/// name is undeclared.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    bindings: FxHashMap<String, Value>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    #[inline]
    fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.bindings.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Global table, frame stack and record-store handle.
///
/// The frame stack is never empty: the bottom frame exists for the whole run
/// and holds bindings made outside any routine.
pub struct Environment<'a> {
    globals: Frame,
    frames: Vec<Frame>,
    store: Option<&'a dyn RecordStore>,
}

impl<'a> Environment<'a> {
    pub fn new() -> Self {
        Environment {
            globals: Frame::new(),
            frames: vec![Frame::new()],
            store: None,
        }
    }

    pub fn with_store(store: &'a dyn RecordStore) -> Self {
        Environment {
            store: Some(store),
            ..Self::new()
        }
    }

    /// The record store bound for this run, if any.
    pub fn store(&self) -> Option<&'a dyn RecordStore> {
        self.store
    }

    /// Declare a global with no value. An existing value is kept.
    pub fn declare_global(&mut self, name: &str) {
        if self.globals.get(name).is_none() {
            self.globals.define(name, Value::Null);
        }
    }

    pub fn global(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    /// Top frame first, then globals.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.top()
            .get(name)
            .or_else(|| self.globals.get(name))
            .cloned()
    }

    /// Bind in the top frame, shadowing any global of the same name.
    #[inline]
    pub fn assign_local(&mut self, name: &str, value: Value) {
        self.top_mut().define(name, value);
    }

    /// Update an existing top-frame binding, else an existing global, else
    /// create a new top-frame binding. Never creates a global.
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.top_mut().get_mut(name) {
            *slot = value;
        } else if let Some(slot) = self.globals.get_mut(name) {
            *slot = value;
        } else {
            self.top_mut().define(name, value);
        }
    }

    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pop the top frame. The bottom frame is never removed.
    pub fn pop_frame(&mut self) {
        debug_assert!(self.frames.len() > 1, "popped the bottom frame");
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Number of frames, including the bottom one.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn top(&self) -> &Frame {
        // The stack is never empty.
        &self.frames[self.frames.len() - 1]
    }

    #[inline]
    fn top_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}
