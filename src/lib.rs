//! `rsdameraulevenshtein` computes the true (unrestricted) Damerau-Levenshtein
//! distance between two sequences of symbols.
//!
//! ## Key Features
//!
//! - **Any symbol type**: The engine works on any sequence of elements that
//!   implement `Eq + Hash`. Integers, characters and string tokens are supported
//!   out of the box through the [`adapters`].
//! - **Unrestricted transpositions**: Unlike the optimal string alignment distance
//!   a transposed pair can still be edited afterwards, so `CA -> ABC` costs 2.
//! - **Normalized metrics**: Every distance can be reported as a normalized distance
//!   in `[0, 1]` and as the complementary similarity.
//!
//! ## Usage
//!
//! ```rust
//! use rsdameraulevenshtein::adapters::{int, unicode};
//! use rsdameraulevenshtein::distance::damerau_levenshtein;
//!
//! assert_eq!(2, int::distance(&[0, 1, 2, 3], &[1, 2, 3, 4]).unwrap());
//! assert_eq!(0.75, unicode::similarity("ABCE", "ABCD").unwrap());
//!
//! // the generic engine accepts any iterator over hashable elements
//! let args = damerau_levenshtein::Args::default();
//! assert_eq!(
//!     2,
//!     damerau_levenshtein::distance("CA".chars(), "ABC".chars(), &args).unwrap()
//! );
//!
//! // with a score_cutoff distances above the cutoff are reported as `None`
//! let args = damerau_levenshtein::Args::default().score_cutoff(1);
//! assert_eq!(
//!     None,
//!     damerau_levenshtein::distance("CA".chars(), "ABC".chars(), &args).unwrap()
//! );
//! ```

#![forbid(unsafe_code)]
#![allow(
    // these casts are sometimes needed. The sequence lengths are stored as usize
    // while the normalized scores are f64
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_lines,
    // noisy
    clippy::missing_errors_doc,
)]

pub mod adapters;
pub mod common;
pub(crate) mod details;
pub mod distance;
mod error;
pub mod process;

pub use error::{Error, Result};
