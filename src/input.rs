//! Input module for Listparse
//!
//! Every parser reads from and hands back an `Input`. An `Input` is a view of
//! the unconsumed tail of some shared text, so producing a remainder never
//! copies the text and a remainder is always a suffix of what was given.

use std::{fmt, sync::Arc};

use serde::{Serialize, Serializer};

/// The unconsumed part of a shared piece of text.
///
/// Cloning is a reference-count bump. Two inputs compare equal when their
/// remaining text is equal, regardless of how much of the original was consumed.
#[derive(Clone)]
pub struct Input {
    text: Arc<str>,
    offset: usize,
}

impl Input {
    /// Creates an input positioned at the start of `text`.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Input {
            text: text.into(),
            offset: 0,
        }
    }

    /// The remaining, unconsumed text.
    pub fn as_str(&self) -> &str {
        &self.text[self.offset..]
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// Number of characters left.
    pub fn len(&self) -> usize {
        self.as_str().chars().count()
    }

    /// Bytes consumed from the original text so far.
    pub fn consumed(&self) -> usize {
        self.offset
    }

    /// The first remaining character, or `None` when nothing is left.
    pub fn car(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    /// Everything after the first remaining character. An empty input stays empty.
    pub fn cdr(&self) -> Input {
        match self.uncons() {
            Some((_, rest)) => rest,
            None => self.clone(),
        }
    }

    /// Splits off the first character, sharing the underlying text with the rest.
    pub fn uncons(&self) -> Option<(char, Input)> {
        let first = self.car()?;
        let rest = Input {
            text: Arc::clone(&self.text),
            offset: self.offset + first.len_utf8(),
        };
        Some((first, rest))
    }

    /// Splits off the first `mid` bytes of the remaining text. `None` when
    /// `mid` is past the end or inside a character.
    pub fn split_at(&self, mid: usize) -> Option<(&str, Input)> {
        let head = self.as_str().get(..mid)?;
        let rest = Input {
            text: Arc::clone(&self.text),
            offset: self.offset + mid,
        };
        Some((head, rest))
    }
}

impl Default for Input {
    fn default() -> Self {
        Input::new("")
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::new(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::new(text)
    }
}

impl From<&Input> for Input {
    fn from(input: &Input) -> Self {
        input.clone()
    }
}

impl PartialEq for Input {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Input {}

impl PartialEq<str> for Input {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Input {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl Serialize for Input {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
