//! The three irreducible parsers: `succeed`, `fail` and `item`.

use crate::input::Input;
use crate::parser::Parser;

/// Always succeeds once with `value`, consuming nothing.
pub fn succeed<A: Clone + Send + Sync + 'static>(value: A) -> Parser<A> {
    Parser::new(move |input: &Input| vec![(value.clone(), input.clone())])
}

/// Never succeeds.
pub fn fail<A: 'static>() -> Parser<A> {
    Parser::new(|_: &Input| Vec::new())
}

/// Consumes exactly one character, whatever it is. Fails on empty input.
///
/// This is the only parser that decomposes its input; every other parser
/// reads characters through it.
pub fn item() -> Parser<char> {
    Parser::new(|input: &Input| match input.uncons() {
        Some((first, rest)) => vec![(first, rest)],
        None => Vec::new(),
    })
}
