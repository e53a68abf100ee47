//! Sequence utilities shared by the combinators and by host code.
//!
//! Text and generic sequences are decomposed and extended through the same
//! `Sequence` trait, so `cons` onto a `String` yields a `String` and `cons`
//! onto a vector yields a vector. None of this is parsing-specific.

use im::Vector;

use crate::input::Input;

// ============================================================================
// FLATTENING
// ============================================================================

/// Flattens one level of nesting, keeping the outer and inner order.
pub fn concat<I, T>(xss: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    xss.into_iter().flatten().collect()
}

// ============================================================================
// HEAD / TAIL
// ============================================================================

/// A sequence that can be split into its first element and the rest, and
/// rebuilt by prepending an element.
pub trait Sequence: Sized {
    type Item;

    /// The first element, or `None` for an empty sequence.
    fn car(&self) -> Option<Self::Item>;

    /// Everything but the first element. The tail of an empty sequence is empty.
    fn cdr(&self) -> Self;

    /// Prepends `x` to `xs`.
    fn cons(x: Self::Item, xs: Self) -> Self;

    fn uncons(&self) -> Option<(Self::Item, Self)> {
        let head = self.car()?;
        Some((head, self.cdr()))
    }
}

impl Sequence for String {
    type Item = char;

    fn car(&self) -> Option<char> {
        self.chars().next()
    }

    fn cdr(&self) -> String {
        match self.chars().next() {
            Some(first) => self[first.len_utf8()..].to_string(),
            None => String::new(),
        }
    }

    fn cons(x: char, xs: String) -> String {
        let mut text = String::with_capacity(x.len_utf8() + xs.len());
        text.push(x);
        text.push_str(&xs);
        text
    }
}

impl Sequence for Input {
    type Item = char;

    fn car(&self) -> Option<char> {
        Input::car(self)
    }

    fn cdr(&self) -> Input {
        Input::cdr(self)
    }

    fn cons(x: char, xs: Input) -> Input {
        Input::new(String::cons(x, xs.as_str().to_string()))
    }

    fn uncons(&self) -> Option<(char, Input)> {
        Input::uncons(self)
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn car(&self) -> Option<T> {
        self.first().cloned()
    }

    fn cdr(&self) -> Vec<T> {
        self.get(1..).map(<[T]>::to_vec).unwrap_or_default()
    }

    fn cons(x: T, mut xs: Vec<T>) -> Vec<T> {
        xs.insert(0, x);
        xs
    }
}

impl<T: Clone> Sequence for Vector<T> {
    type Item = T;

    fn car(&self) -> Option<T> {
        self.front().cloned()
    }

    fn cdr(&self) -> Vector<T> {
        self.clone().split_off(self.len().min(1))
    }

    fn cons(x: T, mut xs: Vector<T>) -> Vector<T> {
        xs.push_front(x);
        xs
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

pub fn car<S: Sequence>(xs: &S) -> Option<S::Item> {
    xs.car()
}

pub fn cdr<S: Sequence>(xs: &S) -> S {
    xs.cdr()
}

pub fn cons<S: Sequence>(x: S::Item, xs: S) -> S {
    S::cons(x, xs)
}

pub fn uncons<S: Sequence>(xs: &S) -> Option<(S::Item, S)> {
    xs.uncons()
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::vector;

    #[test]
    fn test_concat_keeps_order() {
        let flat = concat(vec![vec!["a", "b"], vec!["c"], vec![], vec!["d", "e", "f"]]);
        assert_eq!(flat, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_concat_of_nothing_is_empty() {
        let flat: Vec<i32> = concat(Vec::<Vec<i32>>::new());
        assert!(flat.is_empty());
    }

    #[test]
    fn test_cons_text_and_generic() {
        assert_eq!(cons('f', "oo".to_string()), "foo");
        assert_eq!(cons(1, vec![2, 3]), vec![1, 2, 3]);
        assert_eq!(cons(1, vector![2, 3]), vector![1, 2, 3]);
    }

    #[test]
    fn test_uncons_text_and_generic() {
        assert_eq!(uncons(&"abc".to_string()), Some(('a', "bc".to_string())));
        assert_eq!(uncons(&vec!['x']), Some(('x', vec![])));
        assert_eq!(uncons(&vector![7, 8]), Some((7, vector![8])));
        assert_eq!(uncons(&String::new()), None);
    }

    #[test]
    fn test_cdr_of_empty_is_empty() {
        assert_eq!(cdr(&String::new()), "");
        assert!(cdr(&Vec::<u8>::new()).is_empty());
        assert!(cdr(&Vector::<u8>::new()).is_empty());
    }
}
