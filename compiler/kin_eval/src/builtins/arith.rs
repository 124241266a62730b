//! Arithmetic: `add`, `sub`, `mul`, `div`, `mod`, `neg`.
//!
//! Integer operands stay integers and overflow is an error; a float operand
//! widens the whole operation to float.

use kin_ir::Node;
use kin_value::{division_by_zero, integer_overflow, type_mismatch, EvalError, EvalResult, Value};

use super::args::value;
use super::{Builtin, BuiltinRegistry};
use crate::Interpreter;

pub(super) fn register(registry: &mut BuiltinRegistry) {
    registry.register(Builtin::new("add", 2, Builtin::VARIADIC, add));
    registry.register(Builtin::new("sub", 2, 2, sub));
    registry.register(Builtin::new("mul", 2, Builtin::VARIADIC, mul));
    registry.register(Builtin::new("div", 2, 2, div));
    registry.register(Builtin::new("mod", 2, 2, modulo));
    registry.register(Builtin::new("neg", 1, 1, neg));
}

/// A numeric operand.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    fn from_value(v: &Value) -> Result<Self, EvalError> {
        match v {
            Value::Int(n) => Ok(Num::Int(*n)),
            Value::Float(x) => Ok(Num::Float(*x)),
            _ => Err(type_mismatch("number", v)),
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "integer to float widening is the numeric model"
    )]
    fn to_f64(self) -> f64 {
        match self {
            Num::Int(n) => n as f64,
            Num::Float(x) => x,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Num::Int(n) => Value::Int(n),
            Num::Float(x) => Value::Float(x),
        }
    }
}

fn operand(
    interp: &mut Interpreter<'_>,
    name: &str,
    args: &[Node],
    index: usize,
) -> Result<Num, EvalError> {
    let v = value(interp, name, args, index)?;
    Num::from_value(&v)
}

/// Apply a binary operation with integer checking and float widening.
#[inline]
fn binary(
    a: Num,
    b: Num,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
    op_name: &'static str,
) -> Result<Num, EvalError> {
    match (a, b) {
        (Num::Int(x), Num::Int(y)) => int_op(x, y)
            .map(Num::Int)
            .ok_or_else(|| integer_overflow(op_name)),
        _ => Ok(Num::Float(float_op(a.to_f64(), b.to_f64()))),
    }
}

/// Left fold over every argument.
fn fold(
    interp: &mut Interpreter<'_>,
    name: &'static str,
    args: &[Node],
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> EvalResult {
    let mut acc = operand(interp, name, args, 0)?;
    for index in 1..args.len() {
        let next = operand(interp, name, args, index)?;
        acc = binary(acc, next, int_op, float_op, name)?;
    }
    Ok(acc.into_value())
}

fn add(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    fold(interp, "add", args, i64::checked_add, |a, b| a + b)
}

fn mul(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    fold(interp, "mul", args, i64::checked_mul, |a, b| a * b)
}

fn sub(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    fold(interp, "sub", args, i64::checked_sub, |a, b| a - b)
}

fn div(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let a = operand(interp, "div", args, 0)?;
    let b = operand(interp, "div", args, 1)?;
    if b.to_f64() == 0.0 {
        return Err(division_by_zero());
    }
    Ok(binary(a, b, i64::checked_div, |x, y| x / y, "div")?.into_value())
}

/// Integer remainder only.
fn modulo(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    let a = value(interp, "mod", args, 0)?;
    let b = value(interp, "mod", args, 1)?;
    let (Value::Int(x), Value::Int(y)) = (&a, &b) else {
        let bad = if a.as_int().is_none() { &a } else { &b };
        return Err(type_mismatch("integer", bad));
    };
    if *y == 0 {
        return Err(division_by_zero());
    }
    x.checked_rem(*y)
        .map(Value::Int)
        .ok_or_else(|| integer_overflow("mod"))
}

fn neg(interp: &mut Interpreter<'_>, args: &[Node]) -> EvalResult {
    match operand(interp, "neg", args, 0)? {
        Num::Int(n) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("neg")),
        Num::Float(x) => Ok(Value::Float(-x)),
    }
}
