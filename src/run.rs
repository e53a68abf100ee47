//! Consuming the successes of a parser.
//!
//! A parser reports partial parses along with complete ones. These helpers
//! keep the complete ones (nothing left over) and, where a caller needs a
//! single answer, check that there is exactly one.

use std::thread;

use crate::errors::Error;
use crate::input::Input;
use crate::parser::{Parser, Successes};

/// Values of the successes that consumed all input, in their original order.
pub fn complete<A>(successes: Successes<A>) -> Vec<A> {
    successes
        .into_iter()
        .filter(|(_, rest)| rest.is_empty())
        .map(|(value, _)| value)
        .collect()
}

/// Applies `parser` and keeps only complete parses.
pub fn parse_complete<A: 'static>(parser: &Parser<A>, input: impl Into<Input>) -> Vec<A> {
    complete(parser.parse(input))
}

/// Applies `parser` and requires exactly one complete parse.
pub fn parse_unique<A: 'static>(parser: &Parser<A>, input: impl Into<Input>) -> Result<A, Error> {
    let successes = parser.parse(input);
    let total = successes.len();
    let mut values = complete(successes);
    match values.len() {
        0 => Err(Error::Incomplete { partial: total }),
        1 => Ok(values.remove(0)),
        count => Err(Error::Ambiguous { count }),
    }
}

// ============================================================================
// STACK DEPTH
// ============================================================================

/// Stack size for parses of long inputs: 512 MiB.
///
/// The recursive parsers (`word`, `many`, `literal_string`) nest several
/// frames per character they match, so a default thread stack overflows after
/// a few thousand characters.
pub const DEEP_STACK_BYTES: usize = 512 * 1024 * 1024;

/// Runs `work` on a fresh thread with a stack of `stack_bytes` and waits for it.
pub fn on_deep_stack<T, F>(stack_bytes: usize, work: F) -> Result<T, Error>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let worker = thread::Builder::new()
        .name("listparse-worker".into())
        .stack_size(stack_bytes)
        .spawn(work)
        .map_err(|e| Error::Worker(e.to_string()))?;
    worker
        .join()
        .map_err(|_| Error::Worker("worker thread panicked".into()))
}
