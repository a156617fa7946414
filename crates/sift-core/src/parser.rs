//! Recursive-descent parser for filter expressions.
//!
//! Owns every precedence and disambiguation decision in the grammar:
//!
//! - Precedence, lowest to highest: pipe, additive (`+` `-`),
//!   multiplicative (`*` `/`), unary minus, postfix chain, primary. All
//!   binary levels are left-associative.
//! - A postfix chain (`.field`, `[index]`, `[start:end]`) attaches to any
//!   primary, left to right: `.a[0].b[1:3]` builds
//!   `Slice(Field(Index(Field(Identity, a), 0), b), 1, 3)`.
//! - Inside postfix brackets, a colon means slice (either bound optional),
//!   no colon means index, and empty brackets are an error — there is no
//!   iterate-all operator in this grammar.
//! - A bare identifier is only meaningful as `length`, `keys`, or the
//!   keyword literals `null`/`true`/`false`; the grammar has no variables.
//!
//! The whole token stream must be consumed: trailing tokens after a
//! complete expression are a parse error, not silently ignored.

use crate::ast::Expr;
use crate::error::{Result, SiftError};
use crate::lexer::{Token, TokenKind};
use crate::value::Value;

/// Parse an `End`-terminated token stream into an AST root.
pub fn parse(tokens: &[Token]) -> Result<Expr> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.pipe()?;
    parser.expect(TokenKind::End, "expected end of filter")?;
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Lowest precedence: `additive ('|' additive)*`.
    fn pipe(&mut self) -> Result<Expr> {
        let mut expr = self.additive()?;
        while self.eat(TokenKind::Pipe) {
            let right = self.additive()?;
            expr = Expr::Pipe {
                left: Box::new(expr),
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn additive(&mut self) -> Result<Expr> {
        let mut expr = self.multiplicative()?;
        loop {
            let make: fn(Box<Expr>, Box<Expr>) -> Expr = if self.eat(TokenKind::Plus) {
                |left, right| Expr::Add { left, right }
            } else if self.eat(TokenKind::Minus) {
                |left, right| Expr::Subtract { left, right }
            } else {
                return Ok(expr);
            };
            let right = self.multiplicative()?;
            expr = make(Box::new(expr), Box::new(right));
        }
    }

    fn multiplicative(&mut self) -> Result<Expr> {
        let mut expr = self.unary()?;
        loop {
            let make: fn(Box<Expr>, Box<Expr>) -> Expr = if self.eat(TokenKind::Star) {
                |left, right| Expr::Multiply { left, right }
            } else if self.eat(TokenKind::Slash) {
                |left, right| Expr::Divide { left, right }
            } else {
                return Ok(expr);
            };
            let right = self.unary()?;
            expr = make(Box::new(expr), Box::new(right));
        }
    }

    fn unary(&mut self) -> Result<Expr> {
        if self.eat(TokenKind::Minus) {
            let operand = self.unary()?;
            return Ok(Expr::Negate {
                operand: Box::new(operand),
            });
        }
        self.postfix()
    }

    /// A primary followed by any run of `.identifier`, `[index]`, or
    /// `[start?:end?]`, each building on the node so far.
    fn postfix(&mut self) -> Result<Expr> {
        let mut expr = self.primary()?;
        loop {
            if self.eat(TokenKind::Dot) {
                let key = self.expect(TokenKind::Identifier, "expected field name after '.'")?;
                expr = Expr::Field {
                    base: Box::new(expr),
                    key,
                };
            } else if self.eat(TokenKind::LeftBracket) {
                expr = self.bracket_suffix(expr)?;
            } else {
                return Ok(expr);
            }
        }
    }

    /// The inside of a postfix `[...]`, opening bracket already consumed.
    fn bracket_suffix(&mut self, base: Expr) -> Result<Expr> {
        if self.check(TokenKind::RightBracket) {
            // `[]` would be jq's iterate-all; this grammar does not have it.
            return Err(self.err("expected index or slice expression in brackets"));
        }

        // `[:end]` — slice with the start bound omitted.
        if self.eat(TokenKind::Colon) {
            let end = self.slice_bound()?;
            self.expect(TokenKind::RightBracket, "expected ']' after slice")?;
            return Ok(Expr::Slice {
                base: Box::new(base),
                start: None,
                end,
            });
        }

        let index = self.pipe()?;
        if self.eat(TokenKind::Colon) {
            let end = self.slice_bound()?;
            self.expect(TokenKind::RightBracket, "expected ']' after slice")?;
            return Ok(Expr::Slice {
                base: Box::new(base),
                start: Some(Box::new(index)),
                end,
            });
        }

        self.expect(TokenKind::RightBracket, "expected ']' after index")?;
        Ok(Expr::Index {
            base: Box::new(base),
            index: Box::new(index),
        })
    }

    /// The expression after a slice colon, or `None` when the bound is
    /// omitted (`[1:]`).
    fn slice_bound(&mut self) -> Result<Option<Box<Expr>>> {
        if self.check(TokenKind::RightBracket) {
            return Ok(None);
        }
        Ok(Some(Box::new(self.pipe()?)))
    }

    fn primary(&mut self) -> Result<Expr> {
        if self.eat(TokenKind::Dot) {
            // `.name` arrives as Dot + Identifier with no second dot, so
            // the first field has to be claimed here; the postfix loop
            // only sees dotted continuations (`.a.b`) and brackets.
            if self.check(TokenKind::Identifier) {
                let key = self.advance().text;
                return Ok(Expr::Field {
                    base: Box::new(Expr::Identity),
                    key,
                });
            }
            return Ok(Expr::Identity);
        }
        if self.eat(TokenKind::LeftParen) {
            let expr = self.pipe()?;
            self.expect(TokenKind::RightParen, "expected ')' after expression")?;
            return Ok(expr);
        }
        if self.eat(TokenKind::LeftBrace) {
            return self.object_construct();
        }
        if self.eat(TokenKind::LeftBracket) {
            return self.array_construct();
        }
        if self.check(TokenKind::Number) {
            let text = self.advance().text;
            let value = text
                .parse::<f64>()
                .map_err(|_| self.err(format!("invalid number literal '{text}'")))?;
            return Ok(Expr::Literal(Value::Number(value)));
        }
        if self.check(TokenKind::String) {
            let text = self.advance().text;
            return Ok(Expr::Literal(Value::String(text)));
        }
        if self.check(TokenKind::Identifier) {
            let name = self.advance().text;
            return match name.as_str() {
                "length" => Ok(Expr::Length),
                "keys" => Ok(Expr::Keys),
                "null" => Ok(Expr::Literal(Value::Null)),
                "true" => Ok(Expr::Literal(Value::Bool(true))),
                "false" => Ok(Expr::Literal(Value::Bool(false))),
                other => Err(self.err(format!("unknown identifier '{other}'"))),
            };
        }
        Err(self.err(format!(
            "unexpected token {:?} in expression",
            self.peek().kind
        )))
    }

    /// `{key: expr, ...}`, opening brace already consumed. A key is a
    /// string literal or a bare identifier.
    fn object_construct(&mut self) -> Result<Expr> {
        let mut entries = Vec::new();
        if !self.check(TokenKind::RightBrace) {
            loop {
                let key = if self.check(TokenKind::String) || self.check(TokenKind::Identifier) {
                    self.advance().text
                } else {
                    return Err(self.err("expected string or identifier as object key"));
                };
                self.expect(TokenKind::Colon, "expected ':' after object key")?;
                let value = self.pipe()?;
                entries.push((key, value));
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightBrace, "expected '}' after object construction")?;
        Ok(Expr::ObjectConstruct(entries))
    }

    /// `[expr, ...]`, opening bracket already consumed. `[]` here is the
    /// empty-array literal (only *postfix* brackets require contents).
    fn array_construct(&mut self) -> Result<Expr> {
        let mut items = Vec::new();
        if !self.check(TokenKind::RightBracket) {
            loop {
                items.push(self.pipe()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightBracket, "expected ']' after array construction")?;
        Ok(Expr::ArrayConstruct(items))
    }

    fn peek(&self) -> &Token {
        // The lexer guarantees a trailing End token, and nothing advances
        // past it.
        &self.tokens[self.pos]
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::End {
            self.pos += 1;
        }
        token
    }

    /// Consume the next token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind and return its text, or fail with
    /// a positioned parse error.
    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<String> {
        if self.check(kind) {
            Ok(self.advance().text)
        } else {
            Err(self.err(format!("{message}, got {:?}", self.peek().kind)))
        }
    }

    fn err(&self, message: impl Into<String>) -> SiftError {
        SiftError::Parse {
            pos: self.pos,
            message: message.into(),
        }
    }
}
