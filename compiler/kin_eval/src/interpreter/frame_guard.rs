//! RAII frame management for routine bodies.
//!
//! [`FramedInterpreter`] pushes a local frame and a call-stack entry when it
//! is created and pops both when dropped, so every exit from a routine body
//! (normal completion, `return`, error, panic) leaves the frame stack as it
//! found it.

use std::ops::{Deref, DerefMut};

use kin_value::EvalError;

use super::Interpreter;
use crate::{CallFrame, Frame};

/// Guard over an interpreter with one extra routine frame.
///
/// Access the interpreter through the guard via `Deref`/`DerefMut`.
pub struct FramedInterpreter<'guard, 'a> {
    interpreter: &'guard mut Interpreter<'a>,
}

impl Drop for FramedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_frame();
        self.interpreter.call_stack.pop();
    }
}

impl<'a> Deref for FramedInterpreter<'_, 'a> {
    type Target = Interpreter<'a>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for FramedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Enter a routine: push `call` (checking the call-depth limit) and
    /// `frame`. Nothing is pushed if the depth limit is hit.
    pub fn framed(
        &mut self,
        frame: Frame,
        call: CallFrame,
    ) -> Result<FramedInterpreter<'_, 'a>, EvalError> {
        self.call_stack.push(call)?;
        self.env.push_frame(frame);
        Ok(FramedInterpreter { interpreter: self })
    }
}
