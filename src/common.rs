use std::fmt::Debug;
use std::hash::Hash;

/// Element type the distance engine can compare.
///
/// Symbols only need to be comparable for equality and usable as a hashmap key.
/// This is implemented for every type satisfying these bounds, e.g. integers,
/// `char`, `&str` or references to user defined tokens.
pub trait Symbol: Eq + Hash {}

impl<T> Symbol for T where T: Eq + Hash + ?Sized {}

#[derive(Default, Copy, Clone, Debug)]
pub struct NoScoreCutoff;
#[derive(Default, Copy, Clone, Debug)]
pub struct WithScoreCutoff<T>(pub T);

pub trait DistanceCutoff<T>
where
    T: Copy,
{
    type Output: Copy + Into<Option<T>> + PartialEq + Debug;

    fn cutoff(&self) -> Option<T>;
    fn score(&self, raw: T) -> Self::Output;
}

impl<T> DistanceCutoff<T> for NoScoreCutoff
where
    T: Copy + PartialEq + Debug,
{
    type Output = T;

    fn cutoff(&self) -> Option<T> {
        None
    }

    fn score(&self, raw: T) -> Self::Output {
        raw
    }
}

impl<T> DistanceCutoff<T> for WithScoreCutoff<T>
where
    T: Copy + PartialOrd + Debug,
{
    type Output = Option<T>;

    fn cutoff(&self) -> Option<T> {
        Some(self.0)
    }

    fn score(&self, raw: T) -> Self::Output {
        (raw <= self.0).then_some(raw)
    }
}

pub trait SimilarityCutoff<T>
where
    T: Copy,
{
    type Output: Copy + Into<Option<T>> + PartialEq + Debug;

    fn cutoff(&self) -> Option<T>;
    fn score(&self, raw: T) -> Self::Output;
}

impl<T> SimilarityCutoff<T> for NoScoreCutoff
where
    T: Copy + PartialEq + Debug,
{
    type Output = T;

    fn cutoff(&self) -> Option<T> {
        None
    }

    fn score(&self, raw: T) -> Self::Output {
        raw
    }
}

impl<T> SimilarityCutoff<T> for WithScoreCutoff<T>
where
    T: Copy + PartialOrd + Debug,
{
    type Output = Option<T>;

    fn cutoff(&self) -> Option<T> {
        Some(self.0)
    }

    fn score(&self, raw: T) -> Self::Output {
        (raw >= self.0).then_some(raw)
    }
}

/// Distance, normalized distance and similarity of one comparison.
///
/// The two floating point values are derived from the distance and the
/// sequence lengths only:
/// - `normalized_distance = distance / max(len1, len2, 1)`
/// - `similarity = 1 - normalized_distance`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Metrics {
    pub distance: usize,
    pub normalized_distance: f64,
    pub similarity: f64,
}

impl Metrics {
    pub fn from_distance(distance: usize, len1: usize, len2: usize) -> Self {
        let normalized_distance = normalize(distance, len1.max(len2));
        Self {
            distance,
            normalized_distance,
            similarity: 1.0 - normalized_distance,
        }
    }
}

/// Divide by the longer length. Two empty sequences are identical, so
/// dividing by 1 instead yields 0.0 for them.
pub(crate) fn normalize(distance: usize, maximum: usize) -> f64 {
    distance as f64 / maximum.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_from_distance() {
        let metrics = Metrics::from_distance(2, 4, 4);
        assert_eq!(2, metrics.distance);
        assert_eq!(0.5, metrics.normalized_distance);
        assert_eq!(0.5, metrics.similarity);

        let metrics = Metrics::from_distance(1, 3, 4);
        assert_eq!(0.25, metrics.normalized_distance);
        assert_eq!(0.75, metrics.similarity);
    }

    #[test]
    fn metrics_empty() {
        let metrics = Metrics::from_distance(0, 0, 0);
        assert_eq!(0.0, metrics.normalized_distance);
        assert_eq!(1.0, metrics.similarity);
    }

    #[test]
    fn cutoffs() {
        assert_eq!(3, DistanceCutoff::<usize>::score(&NoScoreCutoff, 3));
        assert_eq!(Some(3), DistanceCutoff::score(&WithScoreCutoff(3_usize), 3));
        assert_eq!(None, DistanceCutoff::score(&WithScoreCutoff(2_usize), 3));

        assert_eq!(Some(0.5), SimilarityCutoff::score(&WithScoreCutoff(0.5), 0.5));
        assert_eq!(None, SimilarityCutoff::score(&WithScoreCutoff(0.6), 0.5));
    }
}
