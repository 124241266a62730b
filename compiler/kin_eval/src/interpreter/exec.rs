//! Statement execution.

use kin_ir::{Condition, Node, NodeKind};
use kin_value::{EvalError, Value};

use super::Interpreter;

/// How a statement completed.
#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    Normal,
    /// `return`, with its value if it had one.
    Return(Option<Value>),
    Break,
    Continue,
}

pub type ExecResult = Result<Signal, EvalError>;

impl Interpreter<'_> {
    /// Execute one statement.
    pub fn exec(&mut self, node: &Node) -> ExecResult {
        self.nested(node.line, |interp| interp.exec_node(node))
    }

    fn exec_node(&mut self, node: &Node) -> ExecResult {
        match &node.kind {
            NodeKind::Block(stmts) => self.exec_block(stmts),
            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.test_condition(cond)? {
                    self.exec(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec(else_branch)
                } else {
                    Ok(Signal::Normal)
                }
            }
            NodeKind::While { cond, body } => self.exec_while(cond, body),
            NodeKind::Return(value) => {
                let value = match value {
                    Some(expr) => Some(self.eval(expr)?),
                    None => None,
                };
                Ok(Signal::Return(value))
            }
            NodeKind::Break => Ok(Signal::Break),
            NodeKind::Continue => Ok(Signal::Continue),
            NodeKind::ProcCall(call) => {
                let program = self.program;
                match program.procedure(&call.name) {
                    Some(routine) => {
                        // A procedure's return value ends at its call site.
                        self.call_routine(routine, &call.args, node.line)?;
                        Ok(Signal::Normal)
                    }
                    None => self.exec_expression(node),
                }
            }
            NodeKind::Int(_)
            | NodeKind::Float(_)
            | NodeKind::Str(_)
            | NodeKind::Ident(_)
            | NodeKind::BuiltinCall(_)
            | NodeKind::FuncCall(_) => self.exec_expression(node),
        }
    }

    fn exec_block(&mut self, stmts: &[Node]) -> ExecResult {
        for stmt in stmts {
            let signal = self.exec(stmt)?;
            if signal != Signal::Normal {
                return Ok(signal);
            }
        }
        Ok(Signal::Normal)
    }

    fn exec_while(&mut self, cond: &Condition, body: &Node) -> ExecResult {
        while self.test_condition(cond)? {
            match self.exec(body)? {
                Signal::Normal | Signal::Continue => {}
                Signal::Break => break,
                ret @ Signal::Return(_) => return Ok(ret),
            }
        }
        Ok(Signal::Normal)
    }

    /// Evaluate for effect. String results are report output.
    fn exec_expression(&mut self, node: &Node) -> ExecResult {
        if let Value::Str(text) = self.eval(node)? {
            self.print(&text);
        }
        Ok(Signal::Normal)
    }

    /// Evaluate a condition, bind its value if it has a binder, then test it.
    pub(crate) fn test_condition(&mut self, cond: &Condition) -> Result<bool, EvalError> {
        let value = self.eval(&cond.expr)?;
        if let Some(name) = &cond.bind {
            self.env.assign(name, value.clone());
        }
        value.truthy()
    }
}
