//! Strings and report output: `concat`, `strlen`, `upper`, `lower`,
//! `substring`, `d`, `print`, `nl`, `sp`.
//!
//! String-returning builtins used as statements have their result printed,
//! so `(bltin nl ())` on its own line emits a newline.

use kin_ir::Node;
use kin_value::{EvalResult, Value};

use super::args::{count, int, string, value};
use super::{Builtin, BuiltinRegistry};
use crate::Interpreter;

pub(super) fn register(registry: &mut BuiltinRegistry) {
    registry.register(Builtin::new("concat", 0, Builtin::VARIADIC, concat));
    registry.register(Builtin::new("strlen", 1, 1, strlen));
    registry.register(Builtin::new("upper", 1, 1, upper));
    registry.register(Builtin::new("lower", 1, 1, lower));
    registry.register(Builtin::new("substring", 3, 3, substring));
    registry.register(Builtin::new("d", 1, 1, d));
    registry.register(Builtin::new("print", 1, Builtin::VARIADIC, print));
    registry.register(Builtin::new("nl", 0, 0, nl));
    registry.register(Builtin::new("sp", 0, 0, sp));
}

/// Display spellings of every argument, joined.
fn concat(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let mut out = String::new();
    for arg in args {
        out.push_str(&interp.eval(arg)?.to_string());
    }
    Ok(Value::Str(out))
}

fn strlen(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let s = string(interp, "strlen", args, 0)?;
    Ok(count(s.chars().count()))
}

fn upper(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    Ok(Value::Str(string(interp, "upper", args, 0)?.to_uppercase()))
}

fn lower(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    Ok(Value::Str(string(interp, "lower", args, 0)?.to_lowercase()))
}

/// `substring(s, from, to)`: characters `from..=to`, 1-based, clamped to the
/// string. An empty range yields "".
fn substring(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let s = string(interp, "substring", args, 0)?;
    let from = int(interp, "substring", args, 1)?.max(1);
    let to = int(interp, "substring", args, 2)?;
    if to < from {
        return Ok(Value::Str(String::new()));
    }
    let skip = usize::try_from(from - 1).unwrap_or(usize::MAX);
    let take = usize::try_from(to - from + 1).unwrap_or(usize::MAX);
    Ok(Value::Str(s.chars().skip(skip).take(take).collect()))
}

/// Decimal spelling of an integer.
fn d(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    Ok(Value::Str(int(interp, "d", args, 0)?.to_string()))
}

/// Write every argument's display spelling directly.
fn print(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    for index in 0..args.len() {
        let v = value(interp, "print", args, index)?;
        interp.print(&v.to_string());
    }
    Ok(Value::Null)
}

fn nl(_interp: &mut Interpreter<'_>, _args: &[Node]) -> EvalResult {
    Ok(Value::string("\n"))
}

fn sp(_interp: &mut Interpreter<'_>, _args: &[Node]) -> EvalResult {
    Ok(Value::string(" "))
}
