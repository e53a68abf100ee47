// tests/repetition_tests.rs

mod common;

use common::{outcomes, strings, texts};
use im::{vector, Vector};
use listparse::prelude::*;

#[cfg(test)]
mod word_tests {
    use super::*;

    #[test]
    fn test_word_reports_every_prefix_longest_first() {
        assert_eq!(
            outcomes(word().parse("foo")),
            texts(&[("foo", ""), ("fo", "o"), ("f", "oo"), ("", "foo")])
        );
    }

    #[test]
    fn test_word_stops_at_non_letter() {
        assert_eq!(
            outcomes(word().parse("foo bar")),
            texts(&[("foo", " bar"), ("fo", "o bar"), ("f", "oo bar"), ("", "foo bar")])
        );
    }

    #[test]
    fn test_word_on_non_word_input() {
        assert_eq!(outcomes(word().parse("!notword")), texts(&[("", "!notword")]));
    }

    #[test]
    fn test_word_on_empty_input() {
        assert_eq!(outcomes(word().parse("")), texts(&[("", "")]));
    }

    #[test]
    fn test_word_yields_n_plus_one_successes() {
        let input = "aBcDeF1";
        assert_eq!(word().parse(input).len(), 7);
    }
}

#[cfg(test)]
mod literal_string_tests {
    use super::*;

    #[test]
    fn test_literal_string_matches_prefix() {
        assert_eq!(
            outcomes(literal_string("hello").parse("hello world")),
            texts(&[("hello", " world")])
        );
    }

    #[test]
    fn test_literal_string_rejects_partial_match() {
        assert!(literal_string("hello").parse("helicopter").is_empty());
        assert!(literal_string("hello").parse("hell").is_empty());
    }

    #[test]
    fn test_empty_literal_always_succeeds() {
        assert_eq!(outcomes(literal_string("").parse("abc")), texts(&[("", "abc")]));
        assert_eq!(outcomes(literal_string("").parse("")), texts(&[("", "")]));
    }

    #[test]
    fn test_literal_string_with_multibyte_chars() {
        assert_eq!(
            outcomes(literal_string("héé").parse("hééh")),
            texts(&[("héé", "h")])
        );
    }
}

#[cfg(test)]
mod many_tests {
    use super::*;

    #[test]
    fn test_many_single_repetition() {
        assert_eq!(
            outcomes(many(literal_string("foo")).parse("foo bar")),
            vec![
                (strings(&["foo"]), " bar".to_string()),
                (strings(&[]), "foo bar".to_string()),
            ]
        );
    }

    #[test]
    fn test_many_reports_most_repetitions_first() {
        assert_eq!(
            outcomes(many(literal_string("foo")).parse("foofoo bar")),
            vec![
                (strings(&["foo", "foo"]), " bar".to_string()),
                (strings(&["foo"]), "foo bar".to_string()),
                (strings(&[]), "foofoo bar".to_string()),
            ]
        );
    }

    #[test]
    fn test_many_with_no_match_succeeds_empty() {
        assert_eq!(
            outcomes(many(literal_string("foo")).parse("bar")),
            vec![(strings(&[]), "bar".to_string())]
        );
    }

    #[test]
    fn test_many1_requires_one_match() {
        assert!(many1(literal_string("foo")).parse("bar").is_empty());
        assert!(many1(digit()).parse("").is_empty());
    }

    #[test]
    fn test_many1_reports_most_repetitions_first() {
        assert_eq!(
            outcomes(many1(digit()).parse("12a")),
            vec![
                (vector!['1', '2'], "a".to_string()),
                (vector!['1'], "2a".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_many_is_ambiguous() {
        let parse = many(many1(literal_char('a')));
        let complete: Vec<Vector<Vector<char>>> = parse_complete(&parse, "aa");
        assert_eq!(
            complete,
            vec![
                vector![vector!['a', 'a']],
                vector![vector!['a'], vector!['a']],
            ]
        );
    }
}
