//! Jaro-Winkler similarity
//!
//! The Jaro-Winkler similarity extends the [`Jaro`] similarity to provide additional
//! sensitivity to matching prefixes. It introduces a scaling mechanism that boosts
//! the similarity score for strings with common prefixes:
//!
//! `sim = jaro + prefix * 0.1 * (1 - jaro)`
//!
//! where `prefix` is the length of the common prefix, counting at most 4 elements.
//! Sequences without any matching element keep a similarity of `0.0`.
//!
//! [`Jaro`]: ../jaro/index.html

use crate::common::{NoScoreCutoff, SimilarityCutoff};
use crate::details::common::find_common_prefix;
use crate::distance::jaro::jaro_similarity_impl;

pub use crate::common::Args;

const PREFIX_WEIGHT: f64 = 0.1;
const MAX_PREFIX: usize = 4;

fn jaro_winkler_similarity_impl<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> f64
where
    Elem1: PartialEq<Elem2>,
{
    let sim = jaro_similarity_impl(s1, s2);
    if sim == 0.0 {
        return 0.0;
    }

    let prefix = find_common_prefix(s1.iter().take(MAX_PREFIX), s2.iter());
    sim + prefix as f64 * PREFIX_WEIGHT * (1.0 - sim)
}

/// Jaro-Winkler similarity in the range `0.0` - `1.0`
///
/// # Examples
///
/// ```
/// use textdistance::distance::jaro_winkler;
///
/// assert_eq!(
///     0.8678571428571429,
///     jaro_winkler::similarity("Thorkel".chars(), "Thorgier".chars())
/// );
/// ```
pub fn similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    similarity_with_args(s1, s2, &Args::<f64, NoScoreCutoff>::default())
}

/// Jaro-Winkler similarity with a `score_cutoff`
///
/// With a `score_cutoff` the result is `None` when the similarity is below the cutoff.
pub fn similarity_with_args<Iter1, Iter2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<f64, CutoffType>,
) -> CutoffType::Output
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    CutoffType: SimilarityCutoff<f64>,
{
    let s1: Vec<Iter1::Item> = s1.into_iter().collect();
    let s2: Vec<Iter2::Item> = s2.into_iter().collect();

    args.score_cutoff.score(jaro_winkler_similarity_impl(&s1, &s2))
}
