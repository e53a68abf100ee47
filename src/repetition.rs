//! Repetition and literal parsers: `many`, `many1`, `literal_string`, `word`.
//!
//! `many` and `word` report every possible repetition count, most repetitions
//! first and zero repetitions last. Recursion happens while parsing, never
//! while building, so these definitions may refer to themselves.
//!
//! # Depth
//!
//! Every character these parsers match adds a handful of nested calls, so
//! stack use grows linearly with the matched input. A default 2 MiB thread
//! overflows after roughly a thousand characters. Run long parses through
//! [`on_deep_stack`](crate::run::on_deep_stack), e.g. with
//! [`DEEP_STACK_BYTES`](crate::run::DEEP_STACK_BYTES).

use im::Vector;
use once_cell::sync::Lazy;

use crate::chars::{letter, literal_char};
use crate::combinators::{bind, choice, lazy};
use crate::parser::Parser;
use crate::primitives::succeed;
use crate::seq::{cons, uncons};

static WORD: Lazy<Parser<String>> = Lazy::new(|| {
    choice(
        bind(letter(), |x: char| {
            bind(lazy(word), move |xs: String| succeed(cons(x, xs)))
        }),
        succeed(String::new()),
    )
});

/// A run of letters, reported once per possible length, longest first,
/// ending with the empty word.
///
/// `word().parse("foo")` gives `("foo", "")`, `("fo", "o")`, `("f", "oo")`
/// and `("", "foo")`, in that order.
///
/// Nests one level per letter matched; see the module notes on depth.
pub fn word() -> Parser<String> {
    WORD.clone()
}

/// Matches `literal` exactly; at most one success.
///
/// Both building and applying the parser nest once per character of
/// `literal`, and so does dropping it.
pub fn literal_string(literal: &str) -> Parser<String> {
    let Some((x, xs)) = uncons(&literal.to_string()) else {
        return succeed(String::new());
    };

    let whole = cons(x, xs.clone());
    let tail = literal_string(&xs);
    bind(literal_char(x), move |_| {
        let whole = whole.clone();
        bind(tail.clone(), move |_| succeed(whole.clone()))
    })
}

/// Zero or more repetitions of `parser`, every count reported, most first.
///
/// `parser` must consume input whenever it succeeds. If it can succeed on
/// nothing (`word`, `literal_string("")`, another `many`), the recursion
/// never bottoms out. Depth otherwise grows with the repetition count.
pub fn many<A: Clone + Send + Sync + 'static>(parser: Parser<A>) -> Parser<Vector<A>> {
    choice(many1(parser), succeed(Vector::new()))
}

/// One or more repetitions of `parser`. Fails outright if `parser` fails at
/// the start; it never falls back to zero repetitions.
pub fn many1<A: Clone + Send + Sync + 'static>(parser: Parser<A>) -> Parser<Vector<A>> {
    let rest = parser.clone();
    bind(parser, move |x: A| {
        bind(many(rest.clone()), move |xs: Vector<A>| succeed(cons(x.clone(), xs)))
    })
}
