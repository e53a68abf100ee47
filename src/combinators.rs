//! Core combinators: `bind`, `sequence2`, `choice`, plus `map` and `lazy`.
//!
//! `bind` is the only way to sequence two parsers; everything multi-step in
//! this crate goes through it. `choice` always explores both branches.

use crate::input::Input;
use crate::parser::Parser;
use crate::primitives::succeed;
use crate::seq::concat;

/// Runs `parser`, then for each of its successes `(a, rest)`, in order, runs
/// `f(a)` on `rest`. All resulting successes are flattened into one list.
pub fn bind<A, B, F>(parser: Parser<A>, f: F) -> Parser<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> Parser<B> + Send + Sync + 'static,
{
    Parser::new(move |input: &Input| {
        concat(
            parser
                .apply(input)
                .into_iter()
                .map(|(value, rest)| f(value).apply(&rest)),
        )
    })
}

/// Runs `first` then `second` on what `first` left, pairing the values.
pub fn sequence2<A, B>(first: Parser<A>, second: Parser<B>) -> Parser<(A, B)>
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
{
    bind(first, move |x: A| {
        bind(second.clone(), move |y: B| succeed((x.clone(), y)))
    })
}

/// Runs both parsers on the same input and concatenates their successes,
/// `left`'s first. Duplicates are kept.
pub fn choice<A: 'static>(left: Parser<A>, right: Parser<A>) -> Parser<A> {
    Parser::new(move |input: &Input| concat([left.apply(input), right.apply(input)]))
}

/// Transforms every parsed value with `f`.
pub fn map<A, B, F>(parser: Parser<A>, f: F) -> Parser<B>
where
    A: 'static,
    B: Clone + Send + Sync + 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    bind(parser, move |value| succeed(f(value)))
}

/// Defers building a parser until it is applied.
///
/// Needed for grammars that refer to themselves: the thunk runs only when
/// input arrives, so a definition can mention itself without recursing at
/// construction time.
pub fn lazy<A, F>(thunk: F) -> Parser<A>
where
    A: 'static,
    F: Fn() -> Parser<A> + Send + Sync + 'static,
{
    Parser::new(move |input: &Input| thunk().apply(input))
}
