//! Listparse: backtracking parser combinators in the list-of-successes style.
//!
//! A parser returns every way it can succeed on an input, in a fixed order,
//! as `(value, remainder)` pairs. No success at all means the parse failed.

pub use crate::errors::Error;
pub use crate::input::Input;
pub use crate::parser::{Parser, Successes};

pub mod chars;
pub mod cli;
pub mod combinators;
pub mod errors;
pub mod grammar;
pub mod input;
pub mod parser;
pub mod primitives;
pub mod repetition;
pub mod run;
pub mod seq;

/// Everything needed to write grammars.
pub mod prelude {
    pub use crate::chars::{alpha_num, digit, letter, literal_char, lower, satisfy, upper};
    pub use crate::combinators::{bind, choice, lazy, map, sequence2};
    pub use crate::input::Input;
    pub use crate::parser::{Parser, Successes};
    pub use crate::primitives::{fail, item, succeed};
    pub use crate::repetition::{literal_string, many, many1, word};
    pub use crate::run::{complete, on_deep_stack, parse_complete, parse_unique, DEEP_STACK_BYTES};
    pub use crate::seq::{car, cdr, concat, cons, uncons, Sequence};
}
