//! Sequences of string tokens
//!
//! Every element of the input slices is one symbol, no matter how many characters
//! it contains. Two tokens are equal when their string contents are equal.
//!
//! ```
//! use rsdameraulevenshtein::adapters::token;
//!
//! assert_eq!(1, token::distance(&["A", "B", "C"], &["A", "C"]).unwrap());
//! assert_eq!(1, token::distance(&["new", "york"], &["york", "new"]).unwrap());
//! ```

use crate::common::Metrics;
use crate::distance::damerau_levenshtein::{self, Args};
use crate::Result;

fn tokens<'a, S>(s: &'a [S]) -> impl DoubleEndedIterator<Item = &'a str> + Clone
where
    S: AsRef<str>,
{
    s.iter().map(|token| token.as_ref())
}

pub fn distance<S1, S2>(s1: &[S1], s2: &[S2]) -> Result<usize>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    damerau_levenshtein::distance(tokens(s1), tokens(s2), &Args::default())
}

pub fn normalized_distance<S1, S2>(s1: &[S1], s2: &[S2]) -> Result<f64>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    damerau_levenshtein::normalized_distance(tokens(s1), tokens(s2), &Args::default())
}

pub fn similarity<S1, S2>(s1: &[S1], s2: &[S2]) -> Result<f64>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    damerau_levenshtein::similarity(tokens(s1), tokens(s2), &Args::default())
}

pub fn metrics<S1, S2>(s1: &[S1], s2: &[S2]) -> Result<Metrics>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    damerau_levenshtein::metrics(tokens(s1), tokens(s2), &Args::default())
}
