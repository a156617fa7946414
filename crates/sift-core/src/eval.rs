//! Tree-walking evaluator for filter expressions.
//!
//! Evaluation maps `(AST, input value)` to an owned output value. The
//! "current value" a sub-expression runs against is an explicit `&Value`
//! parameter threaded through the recursion — there is no mutable context
//! stack and no shared state, so a compiled filter can be evaluated
//! concurrently against different inputs.
//!
//! Context rules:
//!
//! - `Pipe` is the only operator that *changes* the context: its right side
//!   runs with the left side's result as the new current value.
//! - `Field`/`Index`/`Slice` evaluate their base against the current
//!   context; index and bound sub-expressions run against the *outer*
//!   context, like ordinary function arguments — `.[.i]` indexes with the
//!   input's `i` field, not with something inside the indexed array.
//! - Binary arithmetic evaluates both operands against the same context.
//!
//! Every path returns a freshly owned `Value` (deep copy at read time, or
//! a newly constructed container). No result ever borrows from the input.

use crate::ast::Expr;
use crate::error::{Result, SiftError};
use crate::value::{self, Value};

/// Evaluate a parsed filter against an input value.
///
/// Pure and single-pass; the first semantic violation aborts with a typed
/// error. The one deliberate non-error: an array index outside `[0, len)`
/// yields `Null`.
pub fn evaluate(expr: &Expr, input: &Value) -> Result<Value> {
    match expr {
        Expr::Identity => Ok(input.clone()),
        Expr::Field { base, key } => eval_field(base, key, input),
        Expr::Index { base, index } => eval_index(base, index, input),
        Expr::Slice { base, start, end } => {
            eval_slice(base, start.as_deref(), end.as_deref(), input)
        }
        Expr::Pipe { left, right } => {
            let mid = evaluate(left, input)?;
            evaluate(right, &mid)
        }
        Expr::Add { left, right } => {
            let (l, r) = eval_pair(left, right, input)?;
            value::add(&l, &r)
        }
        Expr::Subtract { left, right } => {
            let (l, r) = eval_pair(left, right, input)?;
            value::subtract(&l, &r)
        }
        Expr::Multiply { left, right } => {
            let (l, r) = numeric_pair('*', left, right, input)?;
            Ok(Value::Number(l * r))
        }
        Expr::Divide { left, right } => {
            let (l, r) = numeric_pair('/', left, right, input)?;
            if r == 0.0 {
                return Err(SiftError::DivisionByZero);
            }
            Ok(Value::Number(l / r))
        }
        Expr::Negate { operand } => {
            let n = evaluate(operand, input)?.as_number()?;
            Ok(Value::Number(-n))
        }
        Expr::Literal(value) => Ok(value.clone()),
        Expr::ObjectConstruct(entries) => eval_object_construct(entries, input),
        Expr::ArrayConstruct(items) => items
            .iter()
            .map(|item| evaluate(item, input))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Expr::Length => value::length(input).map(|n| Value::Number(n as f64)),
        Expr::Keys => value::keys(input),
    }
}

fn eval_field(base: &Expr, key: &str, input: &Value) -> Result<Value> {
    let target = evaluate(base, input)?;
    target.get(key).cloned()
}

/// Array indexing. The index is truncated toward zero; anything outside
/// `[0, len)` — negative, past the end, or NaN — yields `Null` rather than
/// an error.
fn eval_index(base: &Expr, index: &Expr, input: &Value) -> Result<Value> {
    let target = evaluate(base, input)?;
    let items = target.as_array()?;
    let idx = evaluate(index, input)?.as_number()?.trunc();
    if idx >= 0.0 && idx < items.len() as f64 {
        Ok(items[idx as usize].clone())
    } else {
        Ok(Value::Null)
    }
}

fn eval_slice(
    base: &Expr,
    start: Option<&Expr>,
    end: Option<&Expr>,
    input: &Value,
) -> Result<Value> {
    let target = evaluate(base, input)?;
    let items = target.as_array()?;
    let len = items.len();

    let start = match start {
        Some(expr) => clamp_bound(evaluate(expr, input)?.as_number()?, len),
        None => 0,
    };
    let end = match end {
        Some(expr) => clamp_bound(evaluate(expr, input)?.as_number()?, len),
        None => len,
    };
    // An inverted range is an empty slice, not an error.
    let end = end.max(start);

    Ok(Value::Array(items[start..end].to_vec()))
}

/// Truncate toward zero and clamp into `[0, len]`. NaN clamps to 0.
fn clamp_bound(bound: f64, len: usize) -> usize {
    let bound = bound.trunc();
    if bound >= len as f64 {
        len
    } else if bound >= 0.0 {
        bound as usize
    } else {
        0
    }
}

fn eval_pair(left: &Expr, right: &Expr, input: &Value) -> Result<(Value, Value)> {
    Ok((evaluate(left, input)?, evaluate(right, input)?))
}

/// Both operands of `*` and `/` must be numbers.
fn numeric_pair(op: char, left: &Expr, right: &Expr, input: &Value) -> Result<(f64, f64)> {
    let (l, r) = eval_pair(left, right, input)?;
    match (&l, &r) {
        (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
        _ => Err(SiftError::InvalidOperand {
            op,
            left: l.type_name(),
            right: r.type_name(),
        }),
    }
}

/// Entries are evaluated in source order; a duplicate key overwrites the
/// earlier value but keeps the earlier position.
fn eval_object_construct(entries: &[(String, Expr)], input: &Value) -> Result<Value> {
    let mut object = Vec::with_capacity(entries.len());
    for (key, expr) in entries {
        let val = evaluate(expr, input)?;
        value::object_insert(&mut object, key.clone(), val);
    }
    Ok(Value::Object(object))
}
