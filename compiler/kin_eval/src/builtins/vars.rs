//! Variable assignment: `set`, `incr`, `decr`.

use kin_ir::Node;
use kin_value::{integer_overflow, type_mismatch, undefined_symbol, EvalResult, Value};

use super::args::{ident, int, value};
use super::{Builtin, BuiltinRegistry};
use crate::Interpreter;

pub(super) fn register(registry: &mut BuiltinRegistry) {
    registry.register(Builtin::new("set", 2, 2, set));
    registry.register(Builtin::new("incr", 1, 2, incr));
    registry.register(Builtin::new("decr", 1, 2, decr));
}

/// `set(name, expr)`: assign through the general assignment rule.
fn set(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let name = ident("set", args, 0)?;
    let v = value(interp, "set", args, 1)?;
    interp.env_mut().assign(name, v);
    Ok(Value::Null)
}

fn incr(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    step(interp, "incr", args, i64::checked_add)
}

fn decr(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    step(interp, "decr", args, i64::checked_sub)
}

/// Shared body of `incr`/`decr`. The step defaults to 1.
fn step(
    interp: &mut Interpreter<'_>,
    name: &'static str,
    args: &[Node],
    op: fn(i64, i64) -> Option<i64>,
) -> EvalResult {
    let var = ident(name, args, 0)?;
    let by = if args.len() > 1 {
        int(interp, name, args, 1)?
    } else {
        1
    };
    let current = interp.env().lookup(var).ok_or_else(|| undefined_symbol(var))?;
    let Value::Int(n) = current else {
        return Err(type_mismatch("integer", &current));
    };
    let next = op(n, by).ok_or_else(|| integer_overflow(name))?;
    interp.env_mut().assign(var, Value::Int(next));
    Ok(Value::Null)
}
