//! Abstract syntax tree for filter expressions.
//!
//! `Expr` is a closed set of variants owning their children through `Box`:
//! a strict tree, no sharing, no cycles. An `Expr` is immutable once parsed
//! and can be evaluated any number of times against different inputs.
//!
//! The `Display` impl renders a canonical textual form of the tree. It is a
//! diagnostics aid (CLI `--ast`, test assertions on parse structure), not
//! something evaluation depends on.

use crate::value::Value;
use std::fmt;

/// One node of a parsed filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `.` — the current value, unchanged.
    Identity,
    /// `base.key` — object field access.
    Field { base: Box<Expr>, key: String },
    /// `base[index]` — array element access.
    Index { base: Box<Expr>, index: Box<Expr> },
    /// `base[start:end]` — array slice; either bound may be omitted.
    Slice {
        base: Box<Expr>,
        start: Option<Box<Expr>>,
        end: Option<Box<Expr>>,
    },
    /// `left | right` — feed left's result to right as its new input.
    Pipe { left: Box<Expr>, right: Box<Expr> },
    Add { left: Box<Expr>, right: Box<Expr> },
    Subtract { left: Box<Expr>, right: Box<Expr> },
    Multiply { left: Box<Expr>, right: Box<Expr> },
    Divide { left: Box<Expr>, right: Box<Expr> },
    /// Unary minus.
    Negate { operand: Box<Expr> },
    /// An embedded constant (number, string, boolean, null).
    Literal(Value),
    /// `{key: expr, ...}` — entries evaluated in source order; duplicate
    /// keys overwrite in place.
    ObjectConstruct(Vec<(String, Expr)>),
    /// `[expr, ...]`.
    ArrayConstruct(Vec<Expr>),
    /// The `length` built-in, applied to the current value.
    Length,
    /// The `keys` built-in, applied to the current value.
    Keys,
}

impl Expr {
    fn binary(f: &mut fmt::Formatter<'_>, left: &Expr, op: char, right: &Expr) -> fmt::Result {
        write!(f, "({left} {op} {right})")
    }

    /// Field access prints its base without the identity dot (`.a`, not
    /// `..a`); bracket postfixes keep it (`.[0]`), so every form
    /// round-trips through the parser.
    fn field_base(f: &mut fmt::Formatter<'_>, base: &Expr) -> fmt::Result {
        match base {
            Expr::Identity => Ok(()),
            other => write!(f, "{other}"),
        }
    }

    fn bracket_base(f: &mut fmt::Formatter<'_>, base: &Expr) -> fmt::Result {
        match base {
            Expr::Identity => write!(f, "."),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identity => write!(f, "."),
            Expr::Field { base, key } => {
                Expr::field_base(f, base)?;
                write!(f, ".{key}")
            }
            Expr::Index { base, index } => {
                Expr::bracket_base(f, base)?;
                write!(f, "[{index}]")
            }
            Expr::Slice { base, start, end } => {
                Expr::bracket_base(f, base)?;
                write!(f, "[")?;
                if let Some(start) = start {
                    write!(f, "{start}")?;
                }
                write!(f, ":")?;
                if let Some(end) = end {
                    write!(f, "{end}")?;
                }
                write!(f, "]")
            }
            Expr::Pipe { left, right } => write!(f, "{left} | {right}"),
            Expr::Add { left, right } => Expr::binary(f, left, '+', right),
            Expr::Subtract { left, right } => Expr::binary(f, left, '-', right),
            Expr::Multiply { left, right } => Expr::binary(f, left, '*', right),
            Expr::Divide { left, right } => Expr::binary(f, left, '/', right),
            Expr::Negate { operand } => write!(f, "(-{operand})"),
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::ObjectConstruct(entries) => {
                write!(f, "{{")?;
                for (i, (key, expr)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {expr}")?;
                }
                write!(f, "}}")
            }
            Expr::ArrayConstruct(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Expr::Length => write!(f, "length"),
            Expr::Keys => write!(f, "keys"),
        }
    }
}
