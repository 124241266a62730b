//! Comparison and logic: `eq`, `ne`, `lt`, `le`, `gt`, `ge`, `and`, `or`,
//! `not`.
//!
//! Logic builtins go through [`Value::truthy`] and short-circuit left to
//! right.

use std::cmp::Ordering;

use kin_ir::Node;
use kin_value::{type_mismatch, EvalError, EvalResult, Value};

use super::args::value;
use super::{Builtin, BuiltinRegistry};
use crate::Interpreter;

pub(super) fn register(registry: &mut BuiltinRegistry) {
    registry.register(Builtin::new("eq", 2, 2, eq));
    registry.register(Builtin::new("ne", 2, 2, ne));
    registry.register(Builtin::new("lt", 2, 2, lt));
    registry.register(Builtin::new("le", 2, 2, le));
    registry.register(Builtin::new("gt", 2, 2, gt));
    registry.register(Builtin::new("ge", 2, 2, ge));
    registry.register(Builtin::new("and", 2, Builtin::VARIADIC, and));
    registry.register(Builtin::new("or", 2, Builtin::VARIADIC, or));
    registry.register(Builtin::new("not", 1, 1, not));
}

fn operands(
    interp: &mut Interpreter<'_>,
    name: &str,
    args: &[Node],
) -> Result<(Value, Value), EvalError> {
    let a = value(interp, name, args, 0)?;
    let b = value(interp, name, args, 1)?;
    Ok((a, b))
}

fn eq(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (a, b) = operands(interp, "eq", args)?;
    Ok(Value::Bool(a == b))
}

fn ne(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let (a, b) = operands(interp, "ne", args)?;
    Ok(Value::Bool(a != b))
}

/// Order two operands and test the result with `accept`.
fn ordered(
    interp: &mut Interpreter<'_>,
    name: &str,
    args: &[Node],
    accept: fn(Ordering) -> bool,
) -> EvalResult {
    let (a, b) = operands(interp, name, args)?;
    match a.compare(&b) {
        Some(ordering) => Ok(Value::Bool(accept(ordering))),
        None => Err(type_mismatch(a.type_name(), &b)),
    }
}

fn lt(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    ordered(interp, "lt", args, Ordering::is_lt)
}

fn le(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    ordered(interp, "le", args, Ordering::is_le)
}

fn gt(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    ordered(interp, "gt", args, Ordering::is_gt)
}

fn ge(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    ordered(interp, "ge", args, Ordering::is_ge)
}

fn and(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    for arg in args {
        if !interp.eval(arg)?.truthy()? {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn or(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    for arg in args {
        if interp.eval(arg)?.truthy()? {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

fn not(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    Ok(Value::Bool(!value(interp, "not", args, 0)?.truthy()?))
}
