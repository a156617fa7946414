//! # sift-core
//!
//! A jq-style query engine for JSON values: a small filter-expression
//! language — field access, indexing, slicing, arithmetic, pipes,
//! object/array construction, `length`/`keys` — compiled once into an AST
//! and evaluated against any number of input values.
//!
//! ## Quick start
//!
//! ```rust
//! use sift_core::apply;
//!
//! // Compile, evaluate, and pretty-print in one call.
//! let out = apply(".users[0].name", r#"{"users":[{"name":"Ada"}]}"#).unwrap();
//! assert_eq!(out, "\"Ada\"");
//! ```
//!
//! Compile once, evaluate many times:
//!
//! ```rust
//! use sift_core::{json, Filter, Value};
//!
//! let filter = Filter::compile(".scores[1:] | length").unwrap();
//! let input = json::from_str(r#"{"scores":[95,87,92]}"#).unwrap();
//! assert_eq!(filter.evaluate(&input).unwrap(), Value::Number(2.0));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` model: ordered objects, deep-copy extraction,
//!   structural operations (`add`, `subtract`, `length`, `keys`)
//! - [`lexer`] — filter text → token stream
//! - [`parser`] — token stream → AST; all precedence/disambiguation lives here
//! - [`ast`] — the closed `Expr` node set and its canonical `Display` form
//! - [`eval`] — tree-walking evaluator, context threaded explicitly
//! - [`json`] — serde_json boundary (JSON text/value ↔ `Value`)
//! - [`printer`] — `Value` → pretty or compact JSON text
//! - [`error`] — the `SiftError` taxonomy

pub mod ast;
pub mod error;
pub mod eval;
pub mod json;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod value;

pub use ast::Expr;
pub use error::{Result, SiftError};
pub use eval::evaluate;
pub use lexer::{tokenize, Token, TokenKind};
pub use value::Value;

use std::fmt;

/// A compiled filter expression.
///
/// Compilation (lexing + parsing) happens once; the resulting AST is
/// immutable and can be evaluated repeatedly — and concurrently — against
/// different inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    ast: Expr,
}

impl Filter {
    /// Compile filter text into a reusable filter.
    pub fn compile(text: &str) -> Result<Filter> {
        let tokens = lexer::tokenize(text)?;
        let ast = parser::parse(&tokens)?;
        Ok(Filter { ast })
    }

    /// Evaluate this filter against an input value, producing an
    /// independently owned result.
    pub fn evaluate(&self, input: &Value) -> Result<Value> {
        eval::evaluate(&self.ast, input)
    }

    /// The parsed expression tree.
    pub fn ast(&self) -> &Expr {
        &self.ast
    }
}

/// Displays the canonical form of the parsed expression.
impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ast.fmt(f)
    }
}

/// Compile filter text into a [`Filter`].
pub fn compile(text: &str) -> Result<Filter> {
    Filter::compile(text)
}

/// One-call convenience: compile `filter`, parse `input` as JSON, evaluate,
/// and pretty-print the result.
pub fn apply(filter: &str, input: &str) -> Result<String> {
    let filter = Filter::compile(filter)?;
    let value = json::from_str(input)?;
    let result = filter.evaluate(&value)?;
    Ok(printer::pretty(&result))
}
