//! Runtime values for the Kin interpreter.
//!
//! Containers are only built through the `Value::` factory methods, which
//! wrap them in a fresh [`Shared`] handle.

mod shared;

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::type_mismatch;
use crate::{EvalError, RecordRef};

pub use shared::Shared;

/// One member of a sequence: a record and the value carried with it.
#[derive(Clone, Debug, PartialEq)]
pub struct SetEntry {
    pub record: RecordRef,
    pub value: Value,
}

/// Runtime value of a report program.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Declared with no value, or the result of a statement-like call.
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    /// Reference into the record store.
    Record(RecordRef),
    List(Shared<VecDeque<Value>>),
    /// String-keyed table.
    Table(Shared<FxHashMap<String, Value>>),
    /// Ordered set of records with attached values.
    Sequence(Shared<Vec<SetEntry>>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(Shared::new(items.into_iter().collect()))
    }

    pub fn empty_list() -> Self {
        Value::List(Shared::default())
    }

    pub fn table() -> Self {
        Value::Table(Shared::default())
    }

    pub fn sequence() -> Self {
        Value::Sequence(Shared::default())
    }
}

impl Value {
    /// Name of the value's tag, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::Record(_) => "record",
            Value::List(_) => "list",
            Value::Table(_) => "table",
            Value::Sequence(_) => "sequence",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The single boolean coercion used by every condition and logic builtin.
    ///
    /// Null is false; numbers are true when nonzero; strings when non-empty;
    /// records always. Containers cannot be tested.
    pub fn truthy(&self) -> Result<bool, EvalError> {
        match self {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(*b),
            Value::Int(n) => Ok(*n != 0),
            Value::Float(f) => Ok(*f != 0.0),
            Value::Str(s) => Ok(!s.is_empty()),
            Value::Record(_) => Ok(true),
            Value::List(_) | Value::Table(_) | Value::Sequence(_) => {
                Err(type_mismatch("a testable value", self))
            }
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value, widening integers.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer to float widening is the numeric model"
    )]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Ordering for comparison builtins.
    ///
    /// Numbers compare by value across integer and float; strings
    /// lexicographically; null only with null. Anything else is unordered.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            _ => match (self.as_float(), other.as_float()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => None,
            },
        }
    }
}

/// Equality as seen by the `eq` builtin.
///
/// Records compare by key (identity for keyless nodes) and containers by
/// identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::List(a), Value::List(b)) => a.ptr_eq(b),
            (Value::Table(a), Value::Table(b)) => a.ptr_eq(b),
            (Value::Sequence(a), Value::Sequence(b)) => a.ptr_eq(b),
            (Value::Int(a), Value::Int(b)) => a == b,
            _ => match (self.as_float(), other.as_float()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

/// Report-output spelling of a value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
            Value::Record(r) => match r.xref() {
                Some(key) => f.write_str(key),
                None => write!(f, "<{}>", r.tag()),
            },
            Value::List(items) => write!(f, "<list of {}>", items.borrow().len()),
            Value::Table(entries) => write!(f, "<table of {}>", entries.borrow().len()),
            Value::Sequence(entries) => write!(f, "<sequence of {}>", entries.borrow().len()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<RecordRef> for Value {
    fn from(r: RecordRef) -> Self {
        Value::Record(r)
    }
}

#[cfg(test)]
mod tests;
