//! Procedure and function invocation.

use kin_ir::{Node, Routine};
use kin_value::{arity_mismatch, invalid_control_flow, Value};

use super::{ExecResult, Interpreter, Signal};
use crate::{CallFrame, Frame};

impl<'a> Interpreter<'a> {
    /// Run `routine` with `args` evaluated in the caller's scope.
    ///
    /// Arity is checked before any argument is evaluated. The callee's frame
    /// holds its declared locals (null) and parameters. `break`/`continue`
    /// escaping the body is an error; anything else is returned as-is.
    #[tracing::instrument(level = "debug", skip_all, fields(routine = %routine.name))]
    pub(crate) fn call_routine(
        &mut self,
        routine: &'a Routine,
        args: &[Node],
        call_line: Option<u32>,
    ) -> ExecResult {
        if args.len() != routine.params.len() {
            return Err(arity_mismatch(
                &routine.name,
                routine.params.len(),
                args.len(),
            ));
        }

        let mut frame = Frame::new();
        for local in &routine.locals {
            frame.define(local.clone(), Value::Null);
        }
        for (param, arg) in routine.params.iter().zip(args) {
            let value = self.eval(arg)?;
            frame.define(param.clone(), value);
        }

        let mut framed = self.framed(
            frame,
            CallFrame {
                name: routine.name.clone(),
                call_line,
            },
        )?;
        let result = framed.exec(&routine.body);
        let signal = result.map_err(|err| framed.call_stack.attach_backtrace(err))?;

        let keyword = match signal {
            Signal::Break => "break",
            Signal::Continue => "continue",
            Signal::Normal | Signal::Return(_) => return Ok(signal),
        };
        let err = invalid_control_flow(keyword, &routine.name).with_line(routine.line);
        Err(framed.call_stack.attach_backtrace(err))
    }
}
