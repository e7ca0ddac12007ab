//! Strings compared by Unicode scalar value
//!
//! Each `char` is one symbol. A codepoint encoded with several UTF-8 bytes is a
//! single symbol, while a grapheme cluster made of several codepoints is not.
//!
//! ```
//! use rsdameraulevenshtein::adapters::unicode;
//!
//! assert_eq!(1, unicode::distance("ABC", "AC").unwrap());
//! assert_eq!(2, unicode::distance("straße", "strasse").unwrap());
//! ```

use crate::common::Metrics;
use crate::distance::damerau_levenshtein::{self, Args};
use crate::Result;

pub fn distance(s1: &str, s2: &str) -> Result<usize> {
    damerau_levenshtein::distance(s1.chars(), s2.chars(), &Args::default())
}

pub fn normalized_distance(s1: &str, s2: &str) -> Result<f64> {
    damerau_levenshtein::normalized_distance(s1.chars(), s2.chars(), &Args::default())
}

pub fn similarity(s1: &str, s2: &str) -> Result<f64> {
    damerau_levenshtein::similarity(s1.chars(), s2.chars(), &Args::default())
}

pub fn metrics(s1: &str, s2: &str) -> Result<Metrics> {
    damerau_levenshtein::metrics(s1.chars(), s2.chars(), &Args::default())
}
