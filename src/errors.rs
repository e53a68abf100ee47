//! Listparse error handling.
//!
//! The combinators themselves never fail with an error: a failed parse is an
//! empty list of successes. `Error` covers the layers built on top, namely
//! insisting on a single complete parse and resolving grammar expressions
//! for the command line.

use miette::{Diagnostic, Report};
use thiserror::Error;

/// All errors produced outside the combinator core.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[diagnostic(url(docsrs))]
pub enum Error {
    #[error("no parse consumed the whole input ({partial} partial)")]
    #[diagnostic(
        code(listparse::run::incomplete),
        help("every success left input unconsumed")
    )]
    Incomplete { partial: usize },

    #[error("input is ambiguous: {count} complete parses")]
    #[diagnostic(
        code(listparse::run::ambiguous),
        help("duplicate parses count separately; exactly one was required")
    )]
    Ambiguous { count: usize },

    #[error("unknown parser '{name}'")]
    #[diagnostic(
        code(listparse::grammar::unknown_parser),
        help("run `listparse list` to see the built-in parsers")
    )]
    UnknownParser { name: String },

    #[error("parser '{name}' takes {expected} argument(s), got {actual}")]
    #[diagnostic(code(listparse::grammar::arity))]
    BadArity {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("'{name}' repeats a grammar that can succeed without consuming input")]
    #[diagnostic(
        code(listparse::grammar::non_consuming_repetition),
        help("such a repetition recurses until the stack runs out; repeat a grammar that always consumes at least one character")
    )]
    NonConsumingRepetition { name: String },

    #[error("parse worker failed: {0}")]
    #[diagnostic(code(listparse::run::worker))]
    Worker(String),

    #[error("failed to render output: {0}")]
    #[diagnostic(code(listparse::cli::output))]
    Output(String),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Output(error.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Output(error.to_string())
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints an error with full miette diagnostics to stderr.
pub fn print_error(error: Error) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
