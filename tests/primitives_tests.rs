// tests/primitives_tests.rs

mod common;

use common::{chars, outcomes, random_inputs};
use listparse::prelude::*;

#[test]
fn test_succeed_returns_value_without_consuming() {
    let parse = succeed("VALUE");
    let result = parse.parse("THIS INPUT SHOULD NOT BE CONSUMED");
    assert_eq!(
        outcomes(result),
        vec![("VALUE", "THIS INPUT SHOULD NOT BE CONSUMED".to_string())]
    );
}

#[test]
fn test_succeed_on_any_input() {
    for input in random_inputs(1, 50) {
        let result = succeed(42).parse(input.as_str());
        assert_eq!(outcomes(result), vec![(42, input.clone())]);
    }
}

#[test]
fn test_fail_never_succeeds() {
    for input in random_inputs(2, 50) {
        assert!(fail::<char>().parse(input.as_str()).is_empty());
    }
    assert!(fail::<String>().parse("ANYTHING").is_empty());
}

#[test]
fn test_item_on_empty_input_fails() {
    assert!(item().parse("").is_empty());
}

#[test]
fn test_item_consumes_one_char() {
    assert_eq!(outcomes(item().parse("abc")), chars(&[('a', "bc")]));
    assert_eq!(
        outcomes(item().parse("THE FIRST CHAR SHOULD BE CONSUMED")),
        chars(&[('T', "HE FIRST CHAR SHOULD BE CONSUMED")])
    );
}

#[test]
fn test_item_handles_multibyte_chars() {
    assert_eq!(outcomes(item().parse("éa")), chars(&[('é', "a")]));
}

#[test]
fn test_remainder_is_suffix_of_input() {
    let input = Input::from("hello");
    for (_, rest) in item().apply(&input) {
        assert!(input.as_str().ends_with(rest.as_str()));
        assert_eq!(rest.consumed(), 1);
    }
}
