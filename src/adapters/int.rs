//! Sequences of integers
//!
//! ```
//! use rsdameraulevenshtein::adapters::int;
//!
//! assert_eq!(1, int::distance(&[1, 2, 3], &[2, 3]).unwrap());
//! ```

use crate::common::Metrics;
use crate::distance::damerau_levenshtein::{self, Args};
use crate::Result;

pub fn distance(s1: &[i64], s2: &[i64]) -> Result<usize> {
    damerau_levenshtein::distance(s1.iter(), s2.iter(), &Args::default())
}

pub fn normalized_distance(s1: &[i64], s2: &[i64]) -> Result<f64> {
    damerau_levenshtein::normalized_distance(s1.iter(), s2.iter(), &Args::default())
}

pub fn similarity(s1: &[i64], s2: &[i64]) -> Result<f64> {
    damerau_levenshtein::similarity(s1.iter(), s2.iter(), &Args::default())
}

pub fn metrics(s1: &[i64], s2: &[i64]) -> Result<Metrics> {
    damerau_levenshtein::metrics(s1.iter(), s2.iter(), &Args::default())
}
