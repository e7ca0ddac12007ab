//! Damerau-Levenshtein distance
//!
//! The Damerau-Levenshtein distance is the minimum number of insertions, deletions,
//! substitutions and transpositions of two adjacent elements required to transform
//! one sequence into the other. This module implements the unrestricted variant:
//! after a transposition both elements can still take part in further edits, so
//! `CA -> AC -> ABC` has a distance of 2. The restricted variant (optimal string
//! alignment) would report 3 here.
//!
//! ```
//! use rsdameraulevenshtein::distance::damerau_levenshtein::{self, Algorithm, Args};
//!
//! let args = Args::default();
//! assert_eq!(1, damerau_levenshtein::distance([1, 2, 3, 4], [2, 1, 3, 4], &args).unwrap());
//!
//! // the full matrix implementation can be selected explicitly
//! let args = Args::default().algorithm(Algorithm::LowranceWagner);
//! assert_eq!(2, damerau_levenshtein::distance("CA".chars(), "ABC".chars(), &args).unwrap());
//! ```

use crate::common::{
    DistanceCutoff, Metrics, NoScoreCutoff, SimilarityCutoff, Symbol, WithScoreCutoff,
};
use crate::details::common::remove_common_affix;
use crate::details::distance::MetricUsize;
use crate::details::last_occurrence::LastOccurrence;
use crate::details::matrix::{check_capacity, try_filled_vec, DistanceMatrix};
use crate::Result;
use std::marker::PhantomData;
use std::mem;

/// Implementation used to evaluate the distance. Both return the same results.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// linear space algorithm from Chunchun Zhao and Sartaj Sahni
    #[default]
    Zhao,
    /// the classic algorithm from Lowrance and Wagner operating on a full matrix
    LowranceWagner,
}

impl Algorithm {
    /// Number of cells allocated for sequences of `len1` and `len2` elements.
    /// Returns `None` on overflow.
    pub fn cells(self, len1: usize, len2: usize) -> Option<usize> {
        match self {
            Algorithm::Zhao => len2.checked_add(2)?.checked_mul(3),
            Algorithm::LowranceWagner => len1.checked_add(2)?.checked_mul(len2.checked_add(2)?),
        }
    }
}

/// Builder for the optional parameters of a comparison.
///
/// `ResultType` is `usize` for the raw distance and `f64` for the normalized scores.
/// Setting a `score_cutoff` changes the result type of the comparison to an `Option`.
#[derive(Copy, Clone, Debug)]
pub struct Args<ResultType, CutoffType> {
    score_cutoff: CutoffType,
    algorithm: Algorithm,
    memory_limit: Option<usize>,
    _phantom: PhantomData<ResultType>,
}

impl<ResultType> Default for Args<ResultType, NoScoreCutoff> {
    fn default() -> Self {
        Self {
            score_cutoff: NoScoreCutoff,
            algorithm: Algorithm::default(),
            memory_limit: None,
            _phantom: PhantomData,
        }
    }
}

impl<ResultType, CutoffType> Args<ResultType, CutoffType>
where
    ResultType: Copy,
{
    /// Results worse than `score_cutoff` are returned as `None`.
    pub fn score_cutoff(
        self,
        score_cutoff: ResultType,
    ) -> Args<ResultType, WithScoreCutoff<ResultType>> {
        Args {
            score_cutoff: WithScoreCutoff(score_cutoff),
            algorithm: self.algorithm,
            memory_limit: self.memory_limit,
            _phantom: PhantomData,
        }
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Upper bound for the number of cells a single comparison may allocate.
    /// Exceeding it fails with [`Error::CapacityExceeded`](crate::Error::CapacityExceeded).
    pub fn memory_limit(mut self, cells: usize) -> Self {
        self.memory_limit = Some(cells);
        self
    }
}

impl<ResultType, CutoffType> Args<ResultType, CutoffType> {
    fn comparator(&self) -> IndividualComparator {
        IndividualComparator {
            algorithm: self.algorithm,
            memory_limit: self.memory_limit,
        }
    }
}

/// based on the paper
/// "Linear space string correction algorithm using the Damerau-Levenshtein distance"
/// from Chunchun Zhao and Sartaj Sahni
fn damerau_levenshtein_zhao<Iter1, Iter2, Elem>(
    s1: Iter1,
    len1: usize,
    s2: Iter2,
    len2: usize,
    memory_limit: Option<usize>,
) -> Result<usize>
where
    Iter1: Iterator<Item = Elem>,
    Iter2: Iterator<Item = Elem> + Clone,
    Elem: Symbol + Copy,
{
    check_capacity(len1, len2, Algorithm::Zhao.cells(len1, len2), memory_limit)?;

    let max_val = len1.max(len2) as isize + 1;
    let size = len2 + 2;

    let mut last_row_id = LastOccurrence::new();
    let mut fr = try_filled_vec(size, max_val)?;
    let mut r1 = try_filled_vec(size, max_val)?;
    let mut r = try_filled_vec(size, max_val)?;
    for (j, cell) in r.iter_mut().enumerate().skip(1) {
        *cell = j as isize - 1;
    }

    for (i, ch1) in s1.enumerate().map(|(i, ch1)| (i + 1, ch1)) {
        mem::swap(&mut r, &mut r1);
        let mut last_col_id: isize = -1;
        let mut last_i2l1 = r[1];
        r[1] = i as isize;
        let mut t = max_val;

        for (j, ch2) in s2.clone().enumerate().map(|(j, ch2)| (j + 1, ch2)) {
            let diag = r1[j] + isize::from(ch1 != ch2);
            let left = r[j] + 1;
            let up = r1[j + 1] + 1;
            let mut temp = diag.min(left).min(up);

            if ch1 == ch2 {
                last_col_id = j as isize; // last occurence of s1_i
                fr[j + 1] = r1[j - 1]; // save H_k-1,j-2
                t = last_i2l1; // save H_i-2,l-1
            } else {
                let k = last_row_id.get(&ch2).map_or(-1, |row| row as isize);
                let l = last_col_id;

                if j as isize - l == 1 {
                    let transpose = fr[j + 1] + (i as isize - k);
                    temp = temp.min(transpose);
                } else if i as isize - k == 1 {
                    let transpose = t + (j as isize - l);
                    temp = temp.min(transpose);
                }
            }

            last_i2l1 = r[j + 1];
            r[j + 1] = temp;
        }

        last_row_id.insert(ch1, i);
    }

    Ok(r[len2 + 1] as usize)
}

/// Full matrix algorithm from Lowrance and Wagner.
///
/// The matrix has an additional sentinel row and column in front, filled with
/// `len1 + len2`, which is larger than any reachable distance. Row `i + 1` and
/// column `j + 1` of the matrix hold the distance between the first `i` elements
/// of `s1` and the first `j` elements of `s2`.
fn damerau_levenshtein_lowrance_wagner<Iter1, Iter2, Elem>(
    s1: Iter1,
    len1: usize,
    s2: Iter2,
    len2: usize,
    memory_limit: Option<usize>,
) -> Result<usize>
where
    Iter1: Iterator<Item = Elem>,
    Iter2: Iterator<Item = Elem> + Clone,
    Elem: Symbol + Copy,
{
    if len1 == 0 || len2 == 0 {
        return Ok(len1.max(len2));
    }

    check_capacity(
        len1,
        len2,
        Algorithm::LowranceWagner.cells(len1, len2),
        memory_limit,
    )?;

    let inf = len1 + len2;
    let mut d = DistanceMatrix::try_new(len1 + 2, len2 + 2, inf)?;
    for i in 0..=len1 {
        *d.get_mut(i + 1, 1) = i;
    }
    for j in 0..=len2 {
        *d.get_mut(1, j + 1) = j;
    }

    let mut last_row = LastOccurrence::new();

    for (i, ch1) in s1.enumerate().map(|(i, ch1)| (i + 1, ch1)) {
        // last column of the current row where s2 matched ch1
        let mut last_col = 0;

        for (j, ch2) in s2.clone().enumerate().map(|(j, ch2)| (j + 1, ch2)) {
            let k = last_row.get(&ch2).unwrap_or(0);
            let l = last_col;

            let cost = if ch1 == ch2 {
                last_col = j;
                0
            } else {
                1
            };

            let substitution = *d.get(i, j) + cost;
            let insertion = *d.get(i + 1, j) + 1;
            let deletion = *d.get(i, j + 1) + 1;
            let transposition = *d.get(k, l) + (i - k - 1) + 1 + (j - l - 1);

            *d.get_mut(i + 1, j + 1) = substitution
                .min(insertion)
                .min(deletion)
                .min(transposition);
        }

        last_row.insert(ch1, i);
    }

    Ok(*d.get(len1 + 1, len2 + 1))
}

fn damerau_levenshtein_impl<Iter1, Iter2, Elem>(
    s1: Iter1,
    len1: usize,
    s2: Iter2,
    len2: usize,
    score_cutoff: usize,
    algorithm: Algorithm,
    memory_limit: Option<usize>,
) -> Result<usize>
where
    Iter1: Iterator<Item = Elem> + DoubleEndedIterator + Clone,
    Iter2: Iterator<Item = Elem> + DoubleEndedIterator + Clone,
    Elem: Symbol + Copy,
{
    if score_cutoff < len1.abs_diff(len2) {
        return Ok(score_cutoff + 1);
    }

    let dist = match algorithm {
        Algorithm::Zhao => {
            let affix = remove_common_affix(s1, len1, s2, len2);
            if affix.len1 == 0 || affix.len2 == 0 {
                affix.len1.max(affix.len2)
            } else {
                damerau_levenshtein_zhao(affix.s1, affix.len1, affix.s2, affix.len2, memory_limit)?
            }
        }
        Algorithm::LowranceWagner => {
            damerau_levenshtein_lowrance_wagner(s1, len1, s2, len2, memory_limit)?
        }
    };

    if dist <= score_cutoff {
        Ok(dist)
    } else {
        Ok(score_cutoff + 1)
    }
}

struct IndividualComparator {
    algorithm: Algorithm,
    memory_limit: Option<usize>,
}

impl MetricUsize for IndividualComparator {
    fn maximum(&self, len1: usize, len2: usize) -> usize {
        len1.max(len2)
    }

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
        Elem: Symbol + Copy,
    {
        damerau_levenshtein_impl(
            s1,
            len1,
            s2,
            len2,
            score_cutoff,
            self.algorithm,
            self.memory_limit,
        )
    }
}

/// Damerau-Levenshtein distance between two sequences
///
/// # Errors
///
/// Fails with [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) when the working
/// storage overflows or exceeds [`Args::memory_limit`] and with
/// [`Error::Allocation`](crate::Error::Allocation) when it can't be allocated.
pub fn distance<Iter1, Iter2, Elem, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<usize, CutoffType>,
) -> Result<CutoffType::Output>
where
    Iter1: IntoIterator<Item = Elem>,
    Iter1::IntoIter: DoubleEndedIterator + Clone,
    Iter2: IntoIterator<Item = Elem>,
    Iter2::IntoIter: DoubleEndedIterator + Clone,
    Elem: Symbol + Copy,
    CutoffType: DistanceCutoff<usize>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let dist = args.comparator()._distance(
        s1_iter.clone(),
        s1_iter.count(),
        s2_iter.clone(),
        s2_iter.count(),
        args.score_cutoff.cutoff().unwrap_or(usize::MAX),
    )?;
    Ok(args.score_cutoff.score(dist))
}

/// Distance divided by the length of the longer sequence, in the range `[0, 1]`.
/// Two empty sequences have a normalized distance of 0.
pub fn normalized_distance<Iter1, Iter2, Elem, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<f64, CutoffType>,
) -> Result<CutoffType::Output>
where
    Iter1: IntoIterator<Item = Elem>,
    Iter1::IntoIter: DoubleEndedIterator + Clone,
    Iter2: IntoIterator<Item = Elem>,
    Iter2::IntoIter: DoubleEndedIterator + Clone,
    Elem: Symbol + Copy,
    CutoffType: DistanceCutoff<f64>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let norm_dist = args.comparator()._normalized_distance(
        s1_iter.clone(),
        s1_iter.count(),
        s2_iter.clone(),
        s2_iter.count(),
        args.score_cutoff.cutoff().unwrap_or(1.0),
    )?;
    Ok(args.score_cutoff.score(norm_dist))
}

/// `1 - normalized_distance`, in the range `[0, 1]`
pub fn similarity<Iter1, Iter2, Elem, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<f64, CutoffType>,
) -> Result<CutoffType::Output>
where
    Iter1: IntoIterator<Item = Elem>,
    Iter1::IntoIter: DoubleEndedIterator + Clone,
    Iter2: IntoIterator<Item = Elem>,
    Iter2::IntoIter: DoubleEndedIterator + Clone,
    Elem: Symbol + Copy,
    CutoffType: SimilarityCutoff<f64>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let sim = args.comparator()._similarity(
        s1_iter.clone(),
        s1_iter.count(),
        s2_iter.clone(),
        s2_iter.count(),
        args.score_cutoff.cutoff().unwrap_or(0.0),
    )?;
    Ok(args.score_cutoff.score(sim))
}

/// Distance, normalized distance and similarity from a single distance computation
pub fn metrics<Iter1, Iter2, Elem>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<usize, NoScoreCutoff>,
) -> Result<Metrics>
where
    Iter1: IntoIterator<Item = Elem>,
    Iter1::IntoIter: DoubleEndedIterator + Clone,
    Iter2: IntoIterator<Item = Elem>,
    Iter2::IntoIter: DoubleEndedIterator + Clone,
    Elem: Symbol + Copy,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    args.comparator()._metrics(
        s1_iter.clone(),
        s1_iter.count(),
        s2_iter.clone(),
        s2_iter.count(),
    )
}

/// Stores the first sequence, to compare it against a large number of other sequences.
///
/// ```
/// use rsdameraulevenshtein::distance::damerau_levenshtein::{Args, BatchComparator};
///
/// let scorer = BatchComparator::new("kitten".chars());
/// let args = Args::default();
/// assert_eq!(3, scorer.distance("sitting".chars(), &args).unwrap());
/// assert_eq!(0, scorer.distance("kitten".chars(), &args).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct BatchComparator<Elem1> {
    s1: Vec<Elem1>,
}

impl<Elem1> BatchComparator<Elem1>
where
    Elem1: Symbol + Copy,
{
    pub fn new<Iter1>(s1: Iter1) -> Self
    where
        Iter1: IntoIterator<Item = Elem1>,
    {
        Self {
            s1: s1.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.s1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.s1.is_empty()
    }

    /// Distance calculated similar to [`distance`]
    pub fn distance<Iter2, CutoffType>(
        &self,
        s2: Iter2,
        args: &Args<usize, CutoffType>,
    ) -> Result<CutoffType::Output>
    where
        Iter2: IntoIterator<Item = Elem1>,
        Iter2::IntoIter: DoubleEndedIterator + Clone,
        CutoffType: DistanceCutoff<usize>,
    {
        let s2_iter = s2.into_iter();
        let dist = args.comparator()._distance(
            self.s1.iter().copied(),
            self.s1.len(),
            s2_iter.clone(),
            s2_iter.count(),
            args.score_cutoff.cutoff().unwrap_or(usize::MAX),
        )?;
        Ok(args.score_cutoff.score(dist))
    }

    /// Normalized distance calculated similar to [`normalized_distance`]
    pub fn normalized_distance<Iter2, CutoffType>(
        &self,
        s2: Iter2,
        args: &Args<f64, CutoffType>,
    ) -> Result<CutoffType::Output>
    where
        Iter2: IntoIterator<Item = Elem1>,
        Iter2::IntoIter: DoubleEndedIterator + Clone,
        CutoffType: DistanceCutoff<f64>,
    {
        let s2_iter = s2.into_iter();
        let norm_dist = args.comparator()._normalized_distance(
            self.s1.iter().copied(),
            self.s1.len(),
            s2_iter.clone(),
            s2_iter.count(),
            args.score_cutoff.cutoff().unwrap_or(1.0),
        )?;
        Ok(args.score_cutoff.score(norm_dist))
    }

    /// Similarity calculated similar to [`similarity`]
    pub fn similarity<Iter2, CutoffType>(
        &self,
        s2: Iter2,
        args: &Args<f64, CutoffType>,
    ) -> Result<CutoffType::Output>
    where
        Iter2: IntoIterator<Item = Elem1>,
        Iter2::IntoIter: DoubleEndedIterator + Clone,
        CutoffType: SimilarityCutoff<f64>,
    {
        let s2_iter = s2.into_iter();
        let sim = args.comparator()._similarity(
            self.s1.iter().copied(),
            self.s1.len(),
            s2_iter.clone(),
            s2_iter.count(),
            args.score_cutoff.cutoff().unwrap_or(0.0),
        )?;
        Ok(args.score_cutoff.score(sim))
    }

    /// Metrics calculated similar to [`metrics`]
    pub fn metrics<Iter2>(&self, s2: Iter2, args: &Args<usize, NoScoreCutoff>) -> Result<Metrics>
    where
        Iter2: IntoIterator<Item = Elem1>,
        Iter2::IntoIter: DoubleEndedIterator + Clone,
    {
        let s2_iter = s2.into_iter();
        args.comparator()._metrics(
            self.s1.iter().copied(),
            self.s1.len(),
            s2_iter.clone(),
            s2_iter.count(),
        )
    }
}
