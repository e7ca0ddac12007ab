use std::iter::{Skip, Take};

pub(crate) fn norm_sim_to_norm_dist(score_cutoff: f64) -> f64 {
    let imprecision = 0.00001;
    (1.0 - score_cutoff + imprecision).min(1.0)
}

pub(crate) fn find_common_prefix<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: Iterator<Item = Elem1>,
    Iter2: Iterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
{
    s1.zip(s2)
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

pub(crate) fn find_common_suffix<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: DoubleEndedIterator<Item = Elem1>,
    Iter2: DoubleEndedIterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
{
    s1.rev()
        .zip(s2.rev())
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

pub(crate) struct StringAffix<Iter1, Iter2> {
    pub s1: Skip<Take<Iter1>>,
    pub len1: usize,
    pub s2: Skip<Take<Iter2>>,
    pub len2: usize,
    #[allow(dead_code)]
    pub prefix_len: usize,
    #[allow(dead_code)]
    pub suffix_len: usize,
}

/// common affixes do not effect the Damerau-Levenshtein distance, so they can be
/// removed before running the quadratic part of the algorithm
pub(crate) fn remove_common_affix<Iter1, Iter2, Elem1, Elem2>(
    s1: Iter1,
    len1: usize,
    s2: Iter2,
    len2: usize,
) -> StringAffix<Iter1, Iter2>
where
    Iter1: DoubleEndedIterator<Item = Elem1> + Clone,
    Iter2: DoubleEndedIterator<Item = Elem2> + Clone,
    Elem1: PartialEq<Elem2>,
{
    let suffix_len = find_common_suffix(s1.clone(), s2.clone());
    let s1_no_suffix = s1.take(len1 - suffix_len);
    let s2_no_suffix = s2.take(len2 - suffix_len);
    let prefix_len = find_common_prefix(s1_no_suffix.clone(), s2_no_suffix.clone());

    StringAffix {
        s1: s1_no_suffix.skip(prefix_len),
        len1: len1 - prefix_len - suffix_len,
        s2: s2_no_suffix.skip(prefix_len),
        len2: len2 - prefix_len - suffix_len,
        prefix_len,
        suffix_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affix() {
        let affix = remove_common_affix("abcxdef".chars(), 7, "abyydef".chars(), 7);
        assert_eq!(2, affix.prefix_len);
        assert_eq!(3, affix.suffix_len);
        assert_eq!((2, 2), (affix.len1, affix.len2));
        assert_eq!("cx", affix.s1.collect::<String>());
        assert_eq!("yy", affix.s2.collect::<String>());
    }

    #[test]
    fn affix_identical() {
        // the suffix consumes everything, so there is no prefix left to strip
        let affix = remove_common_affix([1, 2, 3].iter(), 3, [1, 2, 3].iter(), 3);
        assert_eq!(3, affix.suffix_len);
        assert_eq!(0, affix.prefix_len);
        assert_eq!((0, 0), (affix.len1, affix.len2));
    }

    #[test]
    fn affix_subsequence() {
        let affix = remove_common_affix("aaa".chars(), 3, "aaaa".chars(), 4);
        assert_eq!(3, affix.suffix_len);
        assert_eq!((0, 1), (affix.len1, affix.len2));
    }
}
