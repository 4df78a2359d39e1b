//! Levenshtein distance
//!
//! The Levenshtein distance measures the minimum number of operations required to
//! transform one string into another, considering three types of elementary edits:
//! `insertions`, `deletions` and `substitutions`. Each of them has a cost of 1.
//!
//! The normalized distance divides the result by the length of the longer sequence,
//! which maps it into the range `0.0` (identical) to `1.0` (nothing in common).
//!
//! # Performance
//!
//! The implementation has a runtime complexity of `O(N*M)` and a memory usage of `O(M)`.
//! A common prefix and suffix are removed before the calculation, so mostly similar
//! strings are considerably faster.

use crate::common::{DistanceCutoff, NoScoreCutoff};
use crate::details::common::remove_common_affix;

pub use crate::common::Args;

/// Wagner-Fischer dynamic programming keeping a single row of the cost table.
///
/// `cache[j]` holds `D[i][j + 1]` of the previous row while row `i + 1` is computed.
fn levenshtein_distance_impl<Iter1, Iter2>(
    s1: Iter1,
    len1: usize,
    s2: Iter2,
    len2: usize,
) -> usize
where
    Iter1: DoubleEndedIterator + Clone,
    Iter2: DoubleEndedIterator + Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    // common affix does not effect Levenshtein distance
    let trimmed = remove_common_affix(s1, len1, s2, len2);
    if trimmed.len1 == 0 {
        return trimmed.len2;
    }
    if trimmed.len2 == 0 {
        return trimmed.len1;
    }

    let mut cache: Vec<usize> = (1..=trimmed.len2).collect();
    let mut dist = trimmed.len2;

    for (i, ch1) in trimmed.s1.enumerate() {
        let mut diag = i;
        dist = i + 1;

        for (j, ch2) in trimmed.s2.clone().enumerate() {
            let up = cache[j];
            dist = if ch1 == ch2 {
                diag
            } else {
                1 + diag.min(up).min(dist)
            };
            diag = up;
            cache[j] = dist;
        }
    }

    dist
}

fn maximum(len1: usize, len2: usize) -> usize {
    len1.max(len2)
}

/// Levenshtein distance
///
/// # Examples
///
/// ```
/// use textdistance::distance::levenshtein;
///
/// assert_eq!(3, levenshtein::distance("sitting".chars(), "kitten".chars()));
/// assert_eq!(3, levenshtein::distance("ひだるま".chars(), "けんだま".chars()));
/// ```
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator,
    Iter1::IntoIter: DoubleEndedIterator + Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: DoubleEndedIterator + Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    distance_with_args(s1, s2, &Args::<usize, NoScoreCutoff>::default())
}

/// Levenshtein distance with a `score_cutoff`
///
/// With a `score_cutoff` the result is `None` when the distance is larger than the cutoff.
pub fn distance_with_args<Iter1, Iter2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<usize, CutoffType>,
) -> CutoffType::Output
where
    Iter1: IntoIterator,
    Iter1::IntoIter: DoubleEndedIterator + Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: DoubleEndedIterator + Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
    CutoffType: DistanceCutoff<usize>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let len1 = s1_iter.clone().count();
    let len2 = s2_iter.clone().count();

    // the length difference is a lower bound for the distance
    if let Some(score_cutoff) = args.score_cutoff.cutoff() {
        if len1.abs_diff(len2) > score_cutoff {
            return args.score_cutoff.score(len1.abs_diff(len2));
        }
    }

    let dist = levenshtein_distance_impl(s1_iter, len1, s2_iter, len2);
    args.score_cutoff.score(dist)
}

/// Normalized Levenshtein distance in the range `0.0` - `1.0`
///
/// This is the distance divided by the length of the longer sequence. Two empty
/// sequences have a normalized distance of `0.0`.
///
/// # Examples
///
/// ```
/// use textdistance::distance::levenshtein;
///
/// assert_eq!(
///     0.375,
///     levenshtein::normalized_distance("sunday".chars(), "saturday".chars())
/// );
/// ```
pub fn normalized_distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter1::IntoIter: DoubleEndedIterator + Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: DoubleEndedIterator + Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    normalized_distance_with_args(s1, s2, &Args::<f64, NoScoreCutoff>::default())
}

/// Normalized Levenshtein distance with a `score_cutoff`
pub fn normalized_distance_with_args<Iter1, Iter2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<f64, CutoffType>,
) -> CutoffType::Output
where
    Iter1: IntoIterator,
    Iter1::IntoIter: DoubleEndedIterator + Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: DoubleEndedIterator + Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
    CutoffType: DistanceCutoff<f64>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let len1 = s1_iter.clone().count();
    let len2 = s2_iter.clone().count();

    let maximum = maximum(len1, len2);
    if maximum == 0 {
        return args.score_cutoff.score(0.0);
    }

    let dist = distance_with_args(s1_iter, s2_iter, &Args::<usize, NoScoreCutoff>::default());
    args.score_cutoff.score(dist as f64 / maximum as f64)
}
