//! Single-character parsers: `satisfy`, `literal_char` and the character classes.
//!
//! The classes are built once, on first use, and shared. Ranges compare by
//! character code only.

use once_cell::sync::Lazy;

use crate::combinators::{bind, choice};
use crate::parser::Parser;
use crate::primitives::{fail, item, succeed};

// ============================================================================
// PREDICATE PARSERS
// ============================================================================

/// Consumes one character and keeps it only if `predicate` accepts it.
pub fn satisfy<P>(predicate: P) -> Parser<char>
where
    P: Fn(char) -> bool + Send + Sync + 'static,
{
    bind(item(), move |c| if predicate(c) { succeed(c) } else { fail() })
}

/// Matches exactly the character `expected`.
pub fn literal_char(expected: char) -> Parser<char> {
    satisfy(move |c| c == expected)
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

static DIGIT: Lazy<Parser<char>> = Lazy::new(|| satisfy(|c| ('0'..='9').contains(&c)));
static LOWER: Lazy<Parser<char>> = Lazy::new(|| satisfy(|c| ('a'..='z').contains(&c)));
static UPPER: Lazy<Parser<char>> = Lazy::new(|| satisfy(|c| ('A'..='Z').contains(&c)));
static LETTER: Lazy<Parser<char>> = Lazy::new(|| choice(lower(), upper()));
static ALPHA_NUM: Lazy<Parser<char>> = Lazy::new(|| choice(letter(), digit()));

/// `'0'..='9'`
pub fn digit() -> Parser<char> {
    DIGIT.clone()
}

/// `'a'..='z'`
pub fn lower() -> Parser<char> {
    LOWER.clone()
}

/// `'A'..='Z'`
pub fn upper() -> Parser<char> {
    UPPER.clone()
}

/// A lower or upper case letter, lower tried first.
pub fn letter() -> Parser<char> {
    LETTER.clone()
}

/// A letter or a digit.
pub fn alpha_num() -> Parser<char> {
    ALPHA_NUM.clone()
}
