//! Entry points for the symbol types the engine is most commonly used with.
//!
//! Every adapter only converts its input into an iterator over comparable
//! elements and forwards it to [`damerau_levenshtein`](crate::distance::damerau_levenshtein)
//! with the default [`Args`](crate::distance::damerau_levenshtein::Args).

pub mod int;
pub mod token;
pub mod unicode;
