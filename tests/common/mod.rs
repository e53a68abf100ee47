//! # Listparse Test Helpers
//!
//! Shared helpers for comparing successes against plain `(value, "rest")`
//! pairs and for generating deterministic pseudo-random inputs.

#![allow(dead_code)]

use listparse::Successes;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Converts successes into `(value, remainder text)` pairs.
pub fn outcomes<A>(successes: Successes<A>) -> Vec<(A, String)> {
    successes
        .into_iter()
        .map(|(value, rest)| (value, rest.to_string()))
        .collect()
}

/// Builds expected `(text value, remainder)` pairs.
pub fn texts(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(value, rest)| (value.to_string(), rest.to_string()))
        .collect()
}

/// Builds expected `(char value, remainder)` pairs.
pub fn chars(pairs: &[(char, &str)]) -> Vec<(char, String)> {
    pairs.iter().map(|(c, rest)| (*c, rest.to_string())).collect()
}

/// A persistent vector of owned strings, as produced by `many` over text parsers.
pub fn strings(items: &[&str]) -> im::Vector<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const ALPHABET: &[char] = &['a', 'b', 'f', 'o', 'Z', '1', '9', ' ', '!'];

/// `count` short inputs drawn from a small alphabet, reproducible from `seed`.
pub fn random_inputs(seed: u64, count: usize) -> Vec<String> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..8);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
                .collect()
        })
        .collect()
}
