use crate::common::{normalize, Metrics, Symbol};
use crate::details::common::norm_sim_to_norm_dist;
use crate::Result;

/// Shared plumbing between the free functions and the `BatchComparator`.
///
/// Implementors provide the raw distance. The normalized scores are always
/// derived from it through [`normalize`] and are never computed independently.
pub(crate) trait MetricUsize {
    fn maximum(&self, len1: usize, len2: usize) -> usize;

    /// Returns a value larger than `score_cutoff` when the distance exceeds it.
    /// Pass `usize::MAX` to always receive the exact distance.
    fn _distance<Iter1, Iter2, Elem>(
        &self,
        s1: Iter1,
        len1: usize,
        s2: Iter2,
        len2: usize,
        score_cutoff: usize,
    ) -> Result<usize>
    where
        Iter1: Iterator<Item = Elem> + DoubleEndedIterator + Clone,
        Iter2: Iterator<Item = Elem> + DoubleEndedIterator + Clone,
        Elem: Symbol + Copy;

    fn _normalized_distance<Iter1, Iter2, Elem>(
        &self,
        s1: Iter1,
        len1: usize,
        s2: Iter2,
        len2: usize,
        score_cutoff: f64,
    ) -> Result<f64>
    where
        Iter1: Iterator<Item = Elem> + DoubleEndedIterator + Clone,
        Iter2: Iterator<Item = Elem> + DoubleEndedIterator + Clone,
        Elem: Symbol + Copy,
    {
        let maximum = self.maximum(len1, len2);
        let cutoff_distance = (maximum as f64 * score_cutoff).ceil() as usize;

        let dist = self._distance(s1, len1, s2, len2, cutoff_distance)?;
        Ok(normalize(dist, maximum))
    }

    fn _similarity<Iter1, Iter2, Elem>(
        &self,
        s1: Iter1,
        len1: usize,
        s2: Iter2,
        len2: usize,
        score_cutoff: f64,
    ) -> Result<f64>
    where
        Iter1: Iterator<Item = Elem> + DoubleEndedIterator + Clone,
        Iter2: Iterator<Item = Elem> + DoubleEndedIterator + Clone,
        Elem: Symbol + Copy,
    {
        let cutoff_score = norm_sim_to_norm_dist(score_cutoff);
        let norm_dist = self._normalized_distance(s1, len1, s2, len2, cutoff_score)?;
        Ok(1.0 - norm_dist)
    }

    fn _metrics<Iter1, Iter2, Elem>(
        &self,
        s1: Iter1,
        len1: usize,
        s2: Iter2,
        len2: usize,
    ) -> Result<Metrics>
    where
        Iter1: Iterator<Item = Elem> + DoubleEndedIterator + Clone,
        Iter2: Iterator<Item = Elem> + DoubleEndedIterator + Clone,
        Elem: Symbol + Copy,
    {
        let dist = self._distance(s1, len1, s2, len2, usize::MAX)?;
        Ok(Metrics::from_distance(dist, len1, len2))
    }
}
