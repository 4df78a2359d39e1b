//! Hamming distance
//!
//! The Hamming distance counts the positions at which two sequences of equal length
//! differ. It is only defined for sequences of the same length, so comparing sequences
//! of different length returns [`Error::LengthMismatch`] unless padding is enabled.
//!
//! With padding, every position past the end of the shorter sequence counts as a
//! mismatch.
//!
//! # Performance
//!
//! The implementation has a runtime complexity of `O(N)` and a memory usage of `O(1)`.

use crate::common::{DistanceCutoff, NoScoreCutoff, WithScoreCutoff};
use crate::error::{Error, Result};

#[derive(Copy, Clone)]
pub struct Args<CutoffType> {
    score_cutoff: CutoffType,
    pad: bool,
}

impl Default for Args<NoScoreCutoff> {
    fn default() -> Self {
        Args {
            score_cutoff: NoScoreCutoff,
            pad: false,
        }
    }
}

impl<CutoffType> Args<CutoffType> {
    pub fn score_cutoff(&self, score_cutoff: usize) -> Args<WithScoreCutoff<usize>> {
        Args {
            score_cutoff: WithScoreCutoff(score_cutoff),
            pad: self.pad,
        }
    }

    /// count positions past the end of the shorter sequence as mismatches instead of
    /// rejecting sequences of different length
    pub fn pad(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }
}

fn hamming_distance_impl<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: Iterator,
    Iter2: Iterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    let (mut it_s1, mut it_s2) = (s1, s2);
    let mut dist = 0;
    loop {
        match (it_s1.next(), it_s2.next()) {
            (Some(ch1), Some(ch2)) => {
                if ch1 != ch2 {
                    dist += 1;
                }
            }
            (None, None) => return dist,
            _ => dist += 1,
        }
    }
}

/// Hamming distance
///
/// # Examples
///
/// ```
/// use textdistance::distance::hamming;
/// use textdistance::Error;
///
/// assert_eq!(Ok(3), hamming::distance("karolin".chars(), "kathrin".chars()));
/// assert_eq!(
///     Err(Error::LengthMismatch { len1: 3, len2: 5 }),
///     hamming::distance("abc".chars(), "abcdf".chars())
/// );
/// ```
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> Result<usize>
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    distance_with_args(s1, s2, &Args::<NoScoreCutoff>::default())
}

/// Hamming distance with padding and `score_cutoff`
///
/// # Examples
///
/// ```
/// use textdistance::distance::hamming;
///
/// let args = hamming::Args::default().pad(true);
/// assert_eq!(
///     Ok(4),
///     hamming::distance_with_args("ham".chars(), "hamming".chars(), &args)
/// );
/// ```
pub fn distance_with_args<Iter1, Iter2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<CutoffType>,
) -> Result<CutoffType::Output>
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
    CutoffType: DistanceCutoff<usize>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let len1 = s1_iter.clone().count();
    let len2 = s2_iter.clone().count();

    if !args.pad && len1 != len2 {
        tracing::debug!(len1, len2, "hamming distance requires sequences of equal length");
        return Err(Error::LengthMismatch { len1, len2 });
    }

    let dist = hamming_distance_impl(s1_iter, s2_iter);
    Ok(args.score_cutoff.score(dist))
}
