//! Damerau-Levenshtein distance
//!
//! The Damerau-Levenshtein distance measures the minimum number of operations required to
//! transform one string into another, considering four types of elementary edits:
//! `insertions`, `deletions`, `substitutions`, and `transpositions`. Each of them has a
//! cost of 1.
//!
//! This is the unrestricted variant: the two transposed characters do not need to be
//! adjacent, other characters may be inserted or deleted between them. So `"ca"` and
//! `"abc"` have a distance of 2, while the restricted variant (optimal string
//! alignment) would report 3. A transposition spanning a gap costs one plus the size of
//! the larger of the two gaps, so `"abcdef"` and `"abcfad"` have a distance of 2.
//!
//! # Performance
//!
//! The implementation has a runtime complexity of `O(N*M)` and a memory usage of
//! `O(N*M)`. Elements have to implement [`HashableChar`], which is used to remember the
//! last row each element occurred in.
//!
//! [`HashableChar`]: crate::HashableChar

use crate::common::{DistanceCutoff, NoScoreCutoff};
use crate::details::common::remove_common_affix;
use crate::details::hybrid_map::HybridHashmap;
use crate::details::matrix::Matrix;
use crate::HashableChar;

pub use crate::common::Args;

/// based on the algorithm from Lowrance and Wagner
/// "An Extension of the String-to-String Correction Problem"
///
/// The table is shifted by one row and column compared to the Levenshtein table. Row
/// and column 0 hold `len1 + len2`, which is larger than any reachable distance.
///
/// `k` is the last row before `i` holding the current element of `s2` and `l` the last
/// column before `j` holding the current element of `s1`. The elements between them on
/// both sides are paired up with the transposition, so only the longer gap is charged.
fn damerau_levenshtein_distance_lowrance_wagner<Iter1, Iter2>(
    s1: Iter1,
    len1: usize,
    s2: Iter2,
    len2: usize,
) -> usize
where
    Iter1: Iterator,
    Iter2: Iterator + Clone,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar,
    Iter2::Item: HashableChar,
{
    let max_dist = len1 + len2;
    let mut d = Matrix::new(len1 + 2, len2 + 2, max_dist);
    for i in 0..=len1 {
        d.set(i + 1, 1, i);
    }
    for j in 0..=len2 {
        d.set(1, j + 1, j);
    }

    // last row in which each element of s1 occurred
    let mut last_row = HybridHashmap::<usize>::default();

    for (i, ch1) in s1.enumerate().map(|(i, ch1)| (i + 1, ch1)) {
        // last column of the current row in which s2 matched ch1
        let mut last_col = 0;

        for (j, ch2) in s2.clone().enumerate().map(|(j, ch2)| (j + 1, ch2)) {
            let l = last_col;
            let cost = if ch1 == ch2 {
                last_col = j;
                0
            } else {
                1
            };
            let k = last_row.get(ch2);

            let substitute = d.get(i, j) + cost;
            let insert = d.get(i + 1, j) + 1;
            let delete = d.get(i, j + 1) + 1;
            let transpose = d.get(k, l) + (i - k - 1).max(j - l - 1) + 1;

            d.set(
                i + 1,
                j + 1,
                substitute.min(insert).min(delete).min(transpose),
            );
        }

        *last_row.get_mut(ch1) = i;
    }

    d.get(len1 + 1, len2 + 1)
}

fn damerau_levenshtein_distance_impl<Iter1, Iter2>(
    s1: Iter1,
    len1: usize,
    s2: Iter2,
    len2: usize,
) -> usize
where
    Iter1: DoubleEndedIterator + Clone,
    Iter2: DoubleEndedIterator + Clone,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar,
    Iter2::Item: HashableChar,
{
    // common affix does not effect Damerau-Levenshtein distance
    let trimmed = remove_common_affix(s1, len1, s2, len2);
    if trimmed.len1 == 0 {
        return trimmed.len2;
    }
    if trimmed.len2 == 0 {
        return trimmed.len1;
    }

    damerau_levenshtein_distance_lowrance_wagner(trimmed.s1, trimmed.len1, trimmed.s2, trimmed.len2)
}

/// Damerau-Levenshtein distance
///
/// # Examples
///
/// ```
/// use textdistance::distance::damerau_levenshtein;
///
/// assert_eq!(2, damerau_levenshtein::distance("BADC".chars(), "ABCD".chars()));
/// assert_eq!(2, damerau_levenshtein::distance("ca".chars(), "abc".chars()));
/// ```
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator,
    Iter1::IntoIter: DoubleEndedIterator + Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: DoubleEndedIterator + Clone,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar,
    Iter2::Item: HashableChar,
{
    distance_with_args(s1, s2, &Args::<usize, NoScoreCutoff>::default())
}

/// Damerau-Levenshtein distance with a `score_cutoff`
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
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar,
    Iter2::Item: HashableChar,
    CutoffType: DistanceCutoff<usize>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let len1 = s1_iter.clone().count();
    let len2 = s2_iter.clone().count();

    if let Some(score_cutoff) = args.score_cutoff.cutoff() {
        if len1.abs_diff(len2) > score_cutoff {
            return args.score_cutoff.score(len1.abs_diff(len2));
        }
    }

    let dist = damerau_levenshtein_distance_impl(s1_iter, len1, s2_iter, len2);
    args.score_cutoff.score(dist)
}

/// Normalized Damerau-Levenshtein distance in the range `0.0` - `1.0`
///
/// This is the distance divided by the length of the longer sequence.
pub fn normalized_distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter1::IntoIter: DoubleEndedIterator + Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: DoubleEndedIterator + Clone,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar,
    Iter2::Item: HashableChar,
{
    normalized_distance_with_args(s1, s2, &Args::<f64, NoScoreCutoff>::default())
}

/// Normalized Damerau-Levenshtein distance with a `score_cutoff`
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
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar,
    Iter2::Item: HashableChar,
    CutoffType: DistanceCutoff<f64>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let len1 = s1_iter.clone().count();
    let len2 = s2_iter.clone().count();

    let maximum = len1.max(len2);
    if maximum == 0 {
        return args.score_cutoff.score(0.0);
    }

    let dist = damerau_levenshtein_distance_impl(s1_iter, len1, s2_iter, len2);
    args.score_cutoff.score(dist as f64 / maximum as f64)
}
