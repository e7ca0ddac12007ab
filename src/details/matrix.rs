use crate::{Error, Result};
use tracing::debug;

/// Reserve exactly `len` elements and fill them with `val`.
///
/// Allocation failures are reported instead of aborting the process.
pub(crate) fn try_filled_vec<T>(len: usize, val: T) -> Result<Vec<T>>
where
    T: Clone,
{
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)?;
    vec.resize(len, val);
    Ok(vec)
}

/// Validate the number of cells a computation on sequences of `len1` and `len2`
/// elements is going to allocate. `required` is `None` when the cell count
/// overflows `usize`.
pub(crate) fn check_capacity(
    len1: usize,
    len2: usize,
    required: Option<usize>,
    limit: Option<usize>,
) -> Result<usize> {
    match (required, limit) {
        (Some(cells), None) => Ok(cells),
        (Some(cells), Some(max_cells)) if cells <= max_cells => Ok(cells),
        _ => {
            debug!(
                len1,
                len2,
                ?required,
                ?limit,
                "rejecting sequences exceeding the memory limit"
            );
            Err(Error::CapacityExceeded {
                len1,
                len2,
                required,
                limit,
            })
        }
    }
}

pub(crate) struct DistanceMatrix<T> {
    rows: usize,
    cols: usize,
    matrix: Vec<T>,
}

impl<T> DistanceMatrix<T>
where
    T: Clone,
{
    /// callers have to validate `rows * cols` with [`check_capacity`] first
    pub fn try_new(rows: usize, cols: usize, val: T) -> Result<Self> {
        Ok(Self {
            rows,
            cols,
            matrix: try_filled_vec(rows * cols, val)?,
        })
    }

    #[allow(dead_code)]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[allow(dead_code)]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        &self.matrix[row * self.cols + col]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        &mut self.matrix[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_access() {
        let mut matrix = DistanceMatrix::try_new(3, 4, 0_usize).unwrap();
        assert_eq!((3, 4), (matrix.rows(), matrix.cols()));

        *matrix.get_mut(2, 3) = 7;
        *matrix.get_mut(1, 0) = 5;
        assert_eq!(7, *matrix.get(2, 3));
        assert_eq!(5, *matrix.get(1, 0));
        assert_eq!(0, *matrix.get(0, 3));
    }

    #[test]
    fn capacity() {
        assert_eq!(Ok(12), check_capacity(1, 2, Some(12), None));
        assert_eq!(Ok(12), check_capacity(1, 2, Some(12), Some(12)));
        assert!(check_capacity(1, 2, Some(13), Some(12))
            .unwrap_err()
            .is_capacity_exceeded());
        assert!(check_capacity(usize::MAX, 2, None, None)
            .unwrap_err()
            .is_capacity_exceeded());
    }

    #[test]
    fn allocation_failure() {
        assert!(matches!(
            try_filled_vec(usize::MAX, 0_u64),
            Err(Error::Allocation(_))
        ));
    }
}
