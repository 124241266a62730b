//! Lists, tables and sequences.
//!
//! Containers are shared: every variable holding the same container sees
//! every mutation. Arguments are evaluated before any container is
//! borrowed, so a container can appear in its own argument expressions.

use kin_ir::Node;
use kin_value::{
    index_out_of_bounds, invalid_argument, type_mismatch, EvalError, EvalResult, SetEntry, Value,
};

use super::args::{count, ident, int, list, record, sequence, string, table, value};
use super::{Builtin, BuiltinRegistry};
use crate::Interpreter;

pub(super) fn register(registry: &mut BuiltinRegistry) {
    registry.register(Builtin::new("list", 1, 1, new_list));
    registry.register(Builtin::new("enqueue", 2, 2, enqueue));
    registry.register(Builtin::new("dequeue", 1, 1, dequeue));
    registry.register(Builtin::new("push", 2, 2, push));
    registry.register(Builtin::new("pop", 1, 1, pop));
    registry.register(Builtin::new("getel", 2, 2, getel));
    registry.register(Builtin::new("setel", 3, 3, setel));
    registry.register(Builtin::new("length", 1, 1, length));
    registry.register(Builtin::new("empty", 1, 1, empty));
    registry.register(Builtin::new("table", 1, 1, new_table));
    registry.register(Builtin::new("insert", 3, 3, insert));
    registry.register(Builtin::new("lookup", 2, 2, lookup));
    registry.register(Builtin::new("indiset", 1, 1, new_indiset));
    registry.register(Builtin::new("addtoset", 3, 3, addtoset));
    registry.register(Builtin::new("lengthset", 1, 1, lengthset));
    registry.register(Builtin::new("inset", 2, 2, inset));
}

/// Zero-based slot for a 1-based `index` into `len` items.
fn slot(index: i64, len: usize) -> Result<usize, EvalError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .filter(|&i| i < len)
        .ok_or_else(|| index_out_of_bounds(index, len))
}

/// Refuse to store a container inside itself.
///
/// Indirect cycles (a list held by a list it holds) are not detected; such
/// containers are never freed.
fn reject_self(name: &str, container: &Value, v: &Value) -> Result<(), EvalError> {
    let aliased = match (container, v) {
        (Value::List(a), Value::List(b)) => a.ptr_eq(b),
        (Value::Table(a), Value::Table(b)) => a.ptr_eq(b),
        _ => false,
    };
    if aliased {
        return Err(invalid_argument(name, "a container cannot hold itself"));
    }
    Ok(())
}

/// Bind `name` to a fresh container.
fn declare(interp: &mut Interpreter<'_>, name: &str, args: &[Node], fresh: Value) -> EvalResult {
    let var = ident(name, args, 0)?;
    interp.env_mut().assign(var, fresh);
    Ok(Value::Null)
}

// Lists

fn new_list(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    declare(interp, "list", args, Value::empty_list())
}

/// Append at the back.
fn enqueue(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let items = list(interp, "enqueue", args, 0)?;
    let v = value(interp, "enqueue", args, 1)?;
    reject_self("enqueue", &Value::List(items.clone()), &v)?;
    items.borrow_mut().push_back(v);
    Ok(Value::Null)
}

/// Remove from the front; null when empty.
fn dequeue(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let items = list(interp, "dequeue", args, 0)?;
    let front = items.borrow_mut().pop_front();
    Ok(front.unwrap_or_default())
}

fn push(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let items = list(interp, "push", args, 0)?;
    let v = value(interp, "push", args, 1)?;
    reject_self("push", &Value::List(items.clone()), &v)?;
    items.borrow_mut().push_back(v);
    Ok(Value::Null)
}

/// Remove from the back; null when empty.
fn pop(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let items = list(interp, "pop", args, 0)?;
    let back = items.borrow_mut().pop_back();
    Ok(back.unwrap_or_default())
}

fn getel(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let items = list(interp, "getel", args, 0)?;
    let index = int(interp, "getel", args, 1)?;
    let items = items.borrow();
    let i = slot(index, items.len())?;
    Ok(items[i].clone())
}

fn setel(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let items = list(interp, "setel", args, 0)?;
    let index = int(interp, "setel", args, 1)?;
    let v = value(interp, "setel", args, 2)?;
    reject_self("setel", &Value::List(items.clone()), &v)?;
    let mut items = items.borrow_mut();
    let i = slot(index, items.len())?;
    items[i] = v;
    Ok(Value::Null)
}

/// Element count of a list, table or sequence.
fn length(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    match value(interp, "length", args, 0)? {
        Value::List(items) => Ok(count(items.borrow().len())),
        Value::Table(entries) => Ok(count(entries.borrow().len())),
        Value::Sequence(entries) => Ok(count(entries.borrow().len())),
        other => Err(type_mismatch("container", &other)),
    }
}

fn empty(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let items = list(interp, "empty", args, 0)?;
    let is_empty = items.borrow().is_empty();
    Ok(Value::Bool(is_empty))
}

// Tables

fn new_table(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    declare(interp, "table", args, Value::table())
}

/// `insert(table, key, value)`, replacing any earlier value.
fn insert(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let entries = table(interp, "insert", args, 0)?;
    let key = string(interp, "insert", args, 1)?;
    let v = value(interp, "insert", args, 2)?;
    reject_self("insert", &Value::Table(entries.clone()), &v)?;
    entries.borrow_mut().insert(key, v);
    Ok(Value::Null)
}

/// Value under `key`, or null.
fn lookup(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let entries = table(interp, "lookup", args, 0)?;
    let key = string(interp, "lookup", args, 1)?;
    let found = entries.borrow().get(&key).cloned();
    Ok(found.unwrap_or_default())
}

// Sequences

fn new_indiset(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    declare(interp, "indiset", args, Value::sequence())
}

/// `addtoset(set, indi, value)`. A null record is ignored.
fn addtoset(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let entries = sequence(interp, "addtoset", args, 0)?;
    let person = record(interp, "addtoset", args, 1)?;
    let v = value(interp, "addtoset", args, 2)?;
    if let Some(record) = person {
        entries.borrow_mut().push(SetEntry { record, value: v });
    }
    Ok(Value::Null)
}

fn lengthset(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let entries = sequence(interp, "lengthset", args, 0)?;
    let len = entries.borrow().len();
    Ok(count(len))
}

fn inset(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let entries = sequence(interp, "inset", args, 0)?;
    let person = record(interp, "inset", args, 1)?;
    let found = person.is_some_and(|p| entries.borrow().iter().any(|e| e.record == p));
    Ok(Value::Bool(found))
}
