//! Argument helpers shared by the builtin modules.
//!
//! Every helper takes the builtin's name for error messages and an argument
//! index the registry has already bounds-checked.

use std::collections::VecDeque;

use kin_ir::Node;
use kin_value::{
    invalid_argument, type_mismatch, EvalError, EvalResult, RecordRef, SetEntry, Shared, Value,
};
use rustc_hash::FxHashMap;

use crate::Interpreter;

/// Integer value of a length or count.
pub(super) fn count(n: usize) -> Value {
    Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
}

/// The `index`th argument node.
pub(super) fn arg<'n>(name: &str, args: &'n [Node], index: usize) -> Result<&'n Node, EvalError> {
    args.get(index)
        .ok_or_else(|| invalid_argument(name, format!("missing argument {}", index + 1)))
}

/// Evaluate the `index`th argument.
pub(super) fn value(
    interp: &mut Interpreter<'_>,
    name: &str,
    args: &[Node],
    index: usize,
) -> EvalResult {
    let node = arg(name, args, index)?;
    interp.eval(node)
}

/// The `index`th argument as a bare variable name; it is not evaluated.
pub(super) fn ident<'n>(name: &str, args: &'n [Node], index: usize) -> Result<&'n str, EvalError> {
    let node = arg(name, args, index)?;
    node.as_ident().ok_or_else(|| {
        invalid_argument(
            name,
            format!("argument {} must be a variable name, found {}", index + 1, node.describe()),
        )
    })
}

pub(super) fn int(
    interp: &mut Interpreter<'_>,
    name: &str,
    args: &[Node],
    index: usize,
) -> Result<i64, EvalError> {
    let v = value(interp, name, args, index)?;
    v.as_int().ok_or_else(|| type_mismatch("integer", &v))
}

/// String argument. Null reads as the empty string.
pub(super) fn string(
    interp: &mut Interpreter<'_>,
    name: &str,
    args: &[Node],
    index: usize,
) -> Result<String, EvalError> {
    match value(interp, name, args, index)? {
        Value::Str(s) => Ok(s),
        Value::Null => Ok(String::new()),
        other => Err(type_mismatch("string", &other)),
    }
}

/// Record argument. Null yields `None`, which record builtins pass through
/// as a null result.
pub(super) fn record(
    interp: &mut Interpreter<'_>,
    name: &str,
    args: &[Node],
    index: usize,
) -> Result<Option<RecordRef>, EvalError> {
    match value(interp, name, args, index)? {
        Value::Record(r) => Ok(Some(r)),
        Value::Null => Ok(None),
        other => Err(type_mismatch("record", &other)),
    }
}

pub(super) fn list(
    interp: &mut Interpreter<'_>,
    name: &str,
    args: &[Node],
    index: usize,
) -> Result<Shared<VecDeque<Value>>, EvalError> {
    match value(interp, name, args, index)? {
        Value::List(items) => Ok(items),
        other => Err(type_mismatch("list", &other)),
    }
}

pub(super) fn table(
    interp: &mut Interpreter<'_>,
    name: &str,
    args: &[Node],
    index: usize,
) -> Result<Shared<FxHashMap<String, Value>>, EvalError> {
    match value(interp, name, args, index)? {
        Value::Table(entries) => Ok(entries),
        other => Err(type_mismatch("table", &other)),
    }
}

pub(super) fn sequence(
    interp: &mut Interpreter<'_>,
    name: &str,
    args: &[Node],
    index: usize,
) -> Result<Shared<Vec<SetEntry>>, EvalError> {
    match value(interp, name, args, index)? {
        Value::Sequence(entries) => Ok(entries),
        other => Err(type_mismatch("sequence", &other)),
    }
}
