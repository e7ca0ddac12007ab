use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias used by every fallible entry point of the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while computing a distance.
///
/// The computation itself is total, so the only way to fail is running out of
/// room for the working storage. Neither variant is transient: retrying with the
/// same input and [`Args`](crate::distance::damerau_levenshtein::Args) fails again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The working storage for the two sequences overflows `usize` or is larger
    /// than the configured memory limit
    #[error(
        "sequences of length {len1} and {len2} need {} cells, limit is {}",
        fmt_cells(.required),
        fmt_cells(.limit)
    )]
    CapacityExceeded {
        len1: usize,
        len2: usize,
        required: Option<usize>,
        limit: Option<usize>,
    },

    /// The allocator refused to reserve the working storage
    #[error("failed to allocate working storage: {0}")]
    Allocation(#[from] TryReserveError),
}

impl Error {
    /// Returns true if the error was caused by the input size rather than the allocator.
    #[inline]
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Error::CapacityExceeded { .. })
    }
}

fn fmt_cells(cells: &Option<usize>) -> String {
    match cells {
        Some(cells) => cells.to_string(),
        None => "unbounded".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_message() {
        let err = Error::CapacityExceeded {
            len1: 3,
            len2: 4,
            required: Some(30),
            limit: Some(10),
        };
        assert_eq!(
            "sequences of length 3 and 4 need 30 cells, limit is 10",
            err.to_string()
        );
        assert!(err.is_capacity_exceeded());

        let err = Error::CapacityExceeded {
            len1: usize::MAX,
            len2: usize::MAX,
            required: None,
            limit: None,
        };
        assert!(err.to_string().contains("need unbounded cells"));
    }

    #[test]
    fn allocation_from_try_reserve() {
        let mut v: Vec<u64> = Vec::new();
        let reserve_err = v.try_reserve_exact(usize::MAX).unwrap_err();
        let err: Error = reserve_err.into();
        assert!(!err.is_capacity_exceeded());
        assert!(err.to_string().starts_with("failed to allocate working storage"));
    }
}
