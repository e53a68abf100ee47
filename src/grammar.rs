//! Grammar expressions for the command line.
//!
//! A grammar expression names a built-in parser or combines them, e.g.
//! `many("foo")` or `seq(word, many1(digit))`. The expression text is itself
//! read with this crate's combinators; `compile` turns it into a
//! `Parser<Value>` whose values are dynamically typed.

use std::fmt;

use im::Vector;
use serde::Serialize;

use crate::chars::{alpha_num, digit, letter, literal_char, lower, upper};
use crate::combinators::{bind, choice, lazy, sequence2};
use crate::errors::Error;
use crate::input::Input;
use crate::parser::Parser;
use crate::primitives::{item, succeed};
use crate::repetition::{literal_string, many, many1, word};
use crate::run::parse_unique;

// ============================================================================
// VALUES
// ============================================================================

/// A parsed value whose shape depends on the grammar it came from.
///
/// Serialized adjacently tagged, e.g. `{"kind": "char", "value": "7"}`, so a
/// character and a one-character text stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Char(char),
    Text(String),
    List(Vector<Value>),
    Pair(Box<Value>, Box<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Text(text) => write!(f, "{text:?}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, value) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            Value::Pair(left, right) => write!(f, "({left}, {right})"),
        }
    }
}

// ============================================================================
// BUILT-IN PARSERS
// ============================================================================

/// A built-in parser name, how many grammar arguments it takes, and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: usize,
    pub summary: &'static str,
}

pub const BUILTINS: &[Builtin] = &[
    Builtin { name: "item", arity: 0, summary: "any single character" },
    Builtin { name: "digit", arity: 0, summary: "a character in '0'..'9'" },
    Builtin { name: "lower", arity: 0, summary: "a character in 'a'..'z'" },
    Builtin { name: "upper", arity: 0, summary: "a character in 'A'..'Z'" },
    Builtin { name: "letter", arity: 0, summary: "lower or upper" },
    Builtin { name: "alphanum", arity: 0, summary: "letter or digit" },
    Builtin { name: "word", arity: 0, summary: "a run of letters, every length, longest first" },
    Builtin { name: "many", arity: 1, summary: "zero or more repetitions, most first; G must consume input" },
    Builtin { name: "many1", arity: 1, summary: "one or more repetitions, most first; G must consume input" },
    Builtin { name: "seq", arity: 2, summary: "one grammar then another, as a pair" },
    Builtin { name: "or", arity: 2, summary: "both alternatives, left successes first" },
];

pub fn builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

// ============================================================================
// EXPRESSION SYNTAX
// ============================================================================

/// Syntax tree of a grammar expression, before names are resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Name(String),
    Call(String, Vec<Expr>),
    Text(String),
    Char(char),
}

fn name() -> Parser<String> {
    many1(choice(alpha_num(), literal_char('_'))).map(|cs| cs.into_iter().collect())
}

fn spaces() -> Parser<Vector<char>> {
    many(literal_char(' '))
}

/// Everything before the next `stop` (or the end), as a single success.
///
/// `many(satisfy(..))` would also report every shorter prefix, which costs
/// quadratic memory on long literals and none of which can be followed by
/// the closing quote anyway.
fn text_before(stop: char) -> Parser<String> {
    Parser::new(move |input: &Input| {
        let end = input.as_str().find(stop).unwrap_or(input.as_str().len());
        input
            .split_at(end)
            .map(|(body, rest)| (body.to_string(), rest))
            .into_iter()
            .collect()
    })
}

fn quoted_text() -> Parser<Expr> {
    bind(literal_char('"'), |_| {
        bind(text_before('"'), |text: String| {
            bind(literal_char('"'), move |_| succeed(Expr::Text(text.clone())))
        })
    })
}

fn quoted_char() -> Parser<Expr> {
    bind(literal_char('\''), |_| {
        bind(item(), |c| bind(literal_char('\''), move |_| succeed(Expr::Char(c))))
    })
}

fn argument() -> Parser<Expr> {
    bind(spaces(), |_| {
        bind(lazy(expression), |arg: Expr| {
            bind(spaces(), move |_| succeed(arg.clone()))
        })
    })
}

fn more_arguments() -> Parser<Vector<Expr>> {
    many(bind(literal_char(','), |_| argument()))
}

fn arguments() -> Parser<Vec<Expr>> {
    bind(literal_char('('), |_| {
        bind(argument(), |first: Expr| {
            bind(more_arguments(), move |rest: Vector<Expr>| {
                let args: Vec<Expr> = std::iter::once(first.clone()).chain(rest).collect();
                bind(literal_char(')'), move |_| succeed(args.clone()))
            })
        })
    })
}

fn call() -> Parser<Expr> {
    bind(name(), |callee: String| {
        bind(arguments(), move |args| succeed(Expr::Call(callee.clone(), args)))
    })
}

/// The grammar-expression parser. Ambiguous on prefixes, as every parser in
/// this crate is; only one reading consumes a well-formed expression entirely.
pub fn expression() -> Parser<Expr> {
    call() | name().map(Expr::Name) | quoted_text() | quoted_char()
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Reads and resolves a grammar expression.
pub fn compile(source: &str) -> Result<Parser<Value>, Error> {
    let expr = parse_unique(&expression(), source.trim())?;
    resolve(&expr)
}

/// Builds the parser an expression denotes.
pub fn resolve(expr: &Expr) -> Result<Parser<Value>, Error> {
    match expr {
        Expr::Text(text) => Ok(literal_string(text).map(Value::Text)),
        Expr::Char(c) => Ok(literal_char(*c).map(Value::Char)),
        Expr::Name(name) => resolve_call(name, &[]),
        Expr::Call(name, args) => resolve_call(name, args),
    }
}

fn resolve_call(name: &str, args: &[Expr]) -> Result<Parser<Value>, Error> {
    let builtin = builtin(name).ok_or_else(|| Error::UnknownParser {
        name: name.to_string(),
    })?;
    if builtin.arity != args.len() {
        return Err(Error::BadArity {
            name: name.to_string(),
            expected: builtin.arity,
            actual: args.len(),
        });
    }

    if matches!(builtin.name, "many" | "many1") && args.iter().any(accepts_empty) {
        return Err(Error::NonConsumingRepetition {
            name: name.to_string(),
        });
    }

    let parsers = args.iter().map(resolve).collect::<Result<Vec<_>, _>>()?;
    let parser = match (builtin.name, parsers.as_slice()) {
        ("item", []) => item().map(Value::Char),
        ("digit", []) => digit().map(Value::Char),
        ("lower", []) => lower().map(Value::Char),
        ("upper", []) => upper().map(Value::Char),
        ("letter", []) => letter().map(Value::Char),
        ("alphanum", []) => alpha_num().map(Value::Char),
        ("word", []) => word().map(Value::Text),
        ("many", [inner]) => many(inner.clone()).map(Value::List),
        ("many1", [inner]) => many1(inner.clone()).map(Value::List),
        ("seq", [left, right]) => sequence2(left.clone(), right.clone())
            .map(|(l, r)| Value::Pair(Box::new(l), Box::new(r))),
        ("or", [left, right]) => choice(left.clone(), right.clone()),
        _ => {
            return Err(Error::UnknownParser {
                name: name.to_string(),
            })
        }
    };
    Ok(parser)
}

/// Whether `expr` can succeed while consuming nothing. Repeating such a
/// grammar never terminates.
fn accepts_empty(expr: &Expr) -> bool {
    match expr {
        Expr::Text(text) => text.is_empty(),
        Expr::Char(_) => false,
        Expr::Name(name) => name == "word",
        Expr::Call(name, args) => match (name.as_str(), args.as_slice()) {
            ("many", _) => true,
            ("many1", [inner]) => accepts_empty(inner),
            ("seq", [left, right]) => accepts_empty(left) && accepts_empty(right),
            ("or", [left, right]) => accepts_empty(left) || accepts_empty(right),
            _ => false,
        },
    }
}
