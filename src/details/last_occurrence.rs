use crate::common::Symbol;
use ahash::AHashMap;

/// Maps every symbol of the first sequence to the last row it was seen in.
///
/// Rows are 1-based, so a row of 0 never belongs to a real element. The table
/// is created by a single distance computation and dropped when it returns.
pub(crate) struct LastOccurrence<Elem>
where
    Elem: Symbol,
{
    rows: AHashMap<Elem, usize>,
}

impl<Elem> LastOccurrence<Elem>
where
    Elem: Symbol,
{
    pub fn new() -> Self {
        Self {
            rows: AHashMap::new(),
        }
    }

    pub fn get(&self, key: &Elem) -> Option<usize> {
        self.rows.get(key).copied()
    }

    pub fn insert(&mut self, key: Elem, row: usize) {
        debug_assert!(row > 0);
        self.rows.insert(key, row);
    }
}
