//! The `Parser` value.
//!
//! A parser maps an input to the ordered list of every way it can succeed,
//! each success being the parsed value paired with the input left over. An
//! empty list is failure. Parsers hold no state, so one parser may be applied
//! any number of times, from any number of threads.

use std::{fmt, ops::BitOr, sync::Arc};

use crate::combinators;
use crate::input::Input;

/// Ordered successes of one parser application: `(value, remainder)` pairs.
pub type Successes<A> = Vec<(A, Input)>;

type ParseFn<A> = Arc<dyn Fn(&Input) -> Successes<A> + Send + Sync>;

/// A list-of-successes parser producing values of type `A`.
pub struct Parser<A> {
    run: ParseFn<A>,
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Self {
        Parser {
            run: Arc::clone(&self.run),
        }
    }
}

impl<A> fmt::Debug for Parser<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("value", &std::any::type_name::<A>())
            .finish_non_exhaustive()
    }
}

impl<A: 'static> Parser<A> {
    /// Wraps a function from input to successes.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&Input) -> Successes<A> + Send + Sync + 'static,
    {
        Parser { run: Arc::new(run) }
    }

    /// Applies the parser to an already-built input.
    pub fn apply(&self, input: &Input) -> Successes<A> {
        (self.run)(input)
    }

    /// Applies the parser to anything convertible into an `Input`.
    pub fn parse(&self, input: impl Into<Input>) -> Successes<A> {
        self.apply(&input.into())
    }
}

// ============================================================================
// COMBINATORS AS METHODS
// ============================================================================

impl<A: Clone + Send + Sync + 'static> Parser<A> {
    /// Monadic sequencing, see [`combinators::bind`].
    pub fn bind<B, F>(self, f: F) -> Parser<B>
    where
        B: 'static,
        F: Fn(A) -> Parser<B> + Send + Sync + 'static,
    {
        combinators::bind(self, f)
    }

    /// Runs `self` then `other`, pairing their values.
    pub fn then<B: Clone + Send + Sync + 'static>(self, other: Parser<B>) -> Parser<(A, B)> {
        combinators::sequence2(self, other)
    }

    /// Non-exclusive alternative; `self`'s successes come first.
    pub fn or(self, other: Parser<A>) -> Parser<A> {
        combinators::choice(self, other)
    }

    pub fn map<B, F>(self, f: F) -> Parser<B>
    where
        B: Clone + Send + Sync + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        combinators::map(self, f)
    }
}

/// `|` for choice: `p | q` is `choice(p, q)`.
impl<A: Clone + Send + Sync + 'static> BitOr for Parser<A> {
    type Output = Parser<A>;

    fn bitor(self, rhs: Parser<A>) -> Self::Output {
        self.or(rhs)
    }
}
