//! Compare a query against many choices.
//!
//! Every comparison is independent, so the choices are distributed over the
//! rayon thread pool. Each worker computes its distances with its own state.
//!
//! ```
//! use rsdameraulevenshtein::process;
//!
//! let query: Vec<char> = "kitten".chars().collect();
//! let choices: Vec<Vec<char>> = ["sitting", "kitchen", "mitten"]
//!     .iter()
//!     .map(|choice| choice.chars().collect())
//!     .collect();
//!
//! let best = process::extract_one(&query, &choices, None).unwrap();
//! assert_eq!(Some(2), best.map(|(index, _)| index));
//! ```

use crate::common::{NoScoreCutoff, Symbol};
use crate::distance::damerau_levenshtein::{Args, BatchComparator};
use crate::Result;
use rayon::prelude::*;
use tracing::debug;

/// similarity of every choice reaching `score_cutoff`, in choice order
fn similarities<Elem, Choice>(
    query: &[Elem],
    choices: &[Choice],
    score_cutoff: Option<f64>,
) -> Result<Vec<(usize, f64)>>
where
    Elem: Symbol + Copy + Send + Sync,
    Choice: AsRef<[Elem]> + Sync,
{
    let scorer = BatchComparator::new(query.iter().copied());
    let args = Args::default().score_cutoff(score_cutoff.unwrap_or(0.0));

    let scores = choices
        .par_iter()
        .enumerate()
        .map(|(index, choice)| -> Result<Option<(usize, f64)>> {
            let score = scorer.similarity(choice.as_ref().iter().copied(), &args)?;
            Ok(score.map(|score| (index, score)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(scores.into_iter().flatten().collect())
}

/// Similarity of `query` to every choice, best matches first.
///
/// Returns the index of each choice together with its similarity. Choices with a
/// similarity below `score_cutoff` are left out. Equal scores keep choice order.
pub fn extract<Elem, Choice>(
    query: &[Elem],
    choices: &[Choice],
    score_cutoff: Option<f64>,
) -> Result<Vec<(usize, f64)>>
where
    Elem: Symbol + Copy + Send + Sync,
    Choice: AsRef<[Elem]> + Sync,
{
    debug!(
        query_len = query.len(),
        choices = choices.len(),
        ?score_cutoff,
        "extracting matches"
    );

    let mut result = similarities(query, choices, score_cutoff)?;
    result.sort_by(|(index_a, score_a), (index_b, score_b)| {
        score_b.total_cmp(score_a).then(index_a.cmp(index_b))
    });
    Ok(result)
}

/// Best match of `query` among the choices. On equal scores the first choice wins.
pub fn extract_one<Elem, Choice>(
    query: &[Elem],
    choices: &[Choice],
    score_cutoff: Option<f64>,
) -> Result<Option<(usize, f64)>>
where
    Elem: Symbol + Copy + Send + Sync,
    Choice: AsRef<[Elem]> + Sync,
{
    debug!(
        query_len = query.len(),
        choices = choices.len(),
        ?score_cutoff,
        "extracting best match"
    );

    let mut result_choice: Option<(usize, f64)> = None;
    for (index, score) in similarities(query, choices, score_cutoff)? {
        match result_choice {
            Some((_, best)) if best >= score => {}
            _ => result_choice = Some((index, score)),
        }
    }

    Ok(result_choice)
}

/// Distance between every query and every choice.
///
/// `result[i][j]` is the distance between `queries[i]` and `choices[j]`.
pub fn cdist<Elem, Query, Choice>(
    queries: &[Query],
    choices: &[Choice],
    args: &Args<usize, NoScoreCutoff>,
) -> Result<Vec<Vec<usize>>>
where
    Elem: Symbol + Copy + Send + Sync,
    Query: AsRef<[Elem]> + Sync,
    Choice: AsRef<[Elem]> + Sync,
{
    debug!(
        queries = queries.len(),
        choices = choices.len(),
        "computing distance matrix"
    );

    queries
        .par_iter()
        .map(|query| -> Result<Vec<usize>> {
            let scorer = BatchComparator::new(query.as_ref().iter().copied());
            choices
                .iter()
                .map(|choice| scorer.distance(choice.as_ref().iter().copied(), args))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{int, unicode};
    use crate::distance::damerau_levenshtein::Algorithm;
    use crate::Error;

    fn chars(words: &[&str]) -> Vec<Vec<char>> {
        words.iter().map(|word| word.chars().collect()).collect()
    }

    #[test]
    fn extract_sorted() {
        let query: Vec<char> = "ABCD".chars().collect();
        let words = ["ABCE", "WXYZ", "ABCD", "BACD", "AB"];
        let choices = chars(&words);

        let result = extract(&query, &choices, None).unwrap();
        let indices: Vec<usize> = result.iter().map(|(index, _)| *index).collect();
        assert_eq!(vec![2, 0, 3, 4, 1], indices);

        for (index, score) in result {
            assert_eq!(unicode::similarity("ABCD", words[index]).unwrap(), score);
        }
    }

    #[test]
    fn extract_score_cutoff() {
        let query: Vec<char> = "ABCD".chars().collect();
        let choices = chars(&["ABCE", "WXYZ", "ABCD", "AB"]);

        let result = extract(&query, &choices, Some(0.75)).unwrap();
        assert_eq!(vec![(2, 1.0), (0, 0.75)], result);

        assert!(extract(&query, &choices[1..2], Some(0.1)).unwrap().is_empty());
    }

    #[test]
    fn extract_one_best() {
        let query = [1_i64, 2, 3, 4];
        let choices = vec![vec![4_i64, 3, 2, 1], vec![2, 1, 3, 4], vec![1, 2, 4, 3]];

        // two choices are a single transposition away, the first one wins
        assert_eq!(
            Some((1, 0.75)),
            extract_one(&query, &choices, None).unwrap()
        );
        assert_eq!(None, extract_one(&query, &choices, Some(0.8)).unwrap());

        let empty: Vec<Vec<i64>> = Vec::new();
        assert_eq!(None, extract_one(&query, &empty, None).unwrap());
    }

    #[test]
    fn cdist_matches_pairwise() {
        let queries = vec![vec![0_i64, 1, 2, 3], vec![], vec![1, 2, 3]];
        let choices = vec![vec![1_i64, 2, 3, 4], vec![5, 6, 7, 8], vec![]];

        let matrix = cdist(&queries, &choices, &Args::default()).unwrap();
        assert_eq!(queries.len(), matrix.len());
        for (query, row) in queries.iter().zip(&matrix) {
            assert_eq!(choices.len(), row.len());
            for (choice, dist) in choices.iter().zip(row) {
                assert_eq!(int::distance(query, choice).unwrap(), *dist);
            }
        }
        assert_eq!(vec![2, 4, 4], matrix[0]);
        assert_eq!(vec![4, 4, 0], matrix[1]);
    }

    #[test]
    fn cdist_capacity_error() {
        let queries = chars(&["abc", "xyz"]);
        let choices = chars(&["cba"]);
        let args = Args::default()
            .algorithm(Algorithm::LowranceWagner)
            .memory_limit(4);

        let err = cdist(&queries, &choices, &args).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { .. }));
    }
}
