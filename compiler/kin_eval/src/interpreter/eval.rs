//! Expression evaluation.

use kin_ir::{Call, Node, NodeKind};
use kin_value::{
    custom, undefined_builtin, undefined_function, undefined_procedure, undefined_symbol,
    EvalResult, Value,
};
use tracing::trace;

use super::{Interpreter, Signal};

impl Interpreter<'_> {
    /// Evaluate one expression.
    pub fn eval(&mut self, node: &Node) -> EvalResult {
        self.nested(node.line, |interp| interp.eval_node(node))
    }

    fn eval_node(&mut self, node: &Node) -> EvalResult {
        match &node.kind {
            NodeKind::Int(n) => Ok(Value::Int(*n)),
            NodeKind::Float(x) => Ok(Value::Float(*x)),
            NodeKind::Str(s) => Ok(Value::Str(s.clone())),
            NodeKind::Ident(name) => self.env.lookup(name).ok_or_else(|| undefined_symbol(name)),
            NodeKind::BuiltinCall(call) => self.call_builtin(&call.name, &call.args),
            NodeKind::FuncCall(call) => self.call_function(call, node.line),
            NodeKind::ProcCall(call) => self.call_procedure(call, node.line),
            NodeKind::Block(_)
            | NodeKind::If { .. }
            | NodeKind::While { .. }
            | NodeKind::Return(_)
            | NodeKind::Break
            | NodeKind::Continue => Err(custom(format!(
                "{} cannot be used as a value",
                node.describe()
            ))),
        }
    }

    /// Invoke a builtin on unevaluated argument nodes.
    ///
    /// The argument count is checked against the builtin's range before any
    /// argument is touched.
    pub fn call_builtin(&mut self, name: &str, args: &[Node]) -> EvalResult {
        let Some(builtin) = self.builtins.get(name).copied() else {
            return Err(undefined_builtin(name));
        };
        builtin.check_arity(args.len())?;
        trace!(builtin = name, args = args.len(), "builtin call");
        (builtin.func)(self, args)
    }

    fn call_function(&mut self, call: &Call, line: Option<u32>) -> EvalResult {
        let program = self.program;
        let routine = program
            .function(&call.name)
            .ok_or_else(|| undefined_function(&call.name))?;
        Ok(returned_value(self.call_routine(routine, &call.args, line)?))
    }

    /// `(call NAME …)` in value position: a procedure's returned value, or
    /// the builtin of that name when no procedure exists.
    fn call_procedure(&mut self, call: &Call, line: Option<u32>) -> EvalResult {
        let program = self.program;
        if let Some(routine) = program.procedure(&call.name) {
            return Ok(returned_value(self.call_routine(routine, &call.args, line)?));
        }
        if self.builtins.contains(&call.name) {
            return self.call_builtin(&call.name, &call.args);
        }
        Err(undefined_procedure(&call.name))
    }
}

fn returned_value(signal: Signal) -> Value {
    match signal {
        Signal::Return(Some(value)) => value,
        Signal::Return(None) | Signal::Normal | Signal::Break | Signal::Continue => Value::Null,
    }
}
