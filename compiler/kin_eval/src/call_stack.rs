//! Live routine call stack.
//!
//! Each procedure or function invocation pushes a [`CallFrame`]; the depth
//! check is part of `push`. When an error escapes a routine, the stack is
//! snapshotted into an `EvalBacktrace` for the diagnostic.

use kin_value::{recursion_limit, BacktraceFrame, EvalBacktrace, EvalError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Routine name.
    pub name: String,
    /// Line of the call site.
    pub call_line: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, failing with a recursion-limit error when the stack is
    /// already at its maximum depth. The frame is not pushed on failure.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            return Err(recursion_limit("call", self.max_depth));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop() on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Name of the innermost routine, if any.
    pub fn current(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    /// Snapshot, most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: f.name.clone(),
                line: f.call_line,
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a snapshot to `err` unless it already carries one.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}
