//! Jaro similarity
//!
//! The Jaro similarity measures the similarity of two sequences based on the elements
//! they have in common and the order of these elements. An element of the first
//! sequence only matches an element of the second sequence when it occurs within a
//! window of `max(len1, len2) / 2 - 1` positions around its own position. Matched
//! elements appearing in a different order count as half a transposition each. The
//! window always covers at least the direct neighbours of a position.
//!
//! The result is in the range `0.0` (nothing in common) to `1.0` (identical). Two
//! empty sequences are considered identical.
//!
//! # Performance
//!
//! The implementation has a runtime complexity of `O(N*M)` in the worst case, but only
//! elements inside the match window are compared. Memory usage is `O(N+M)`.

use crate::common::{NoScoreCutoff, SimilarityCutoff};

pub use crate::common::Args;

/// matched elements and transpositions found between two sequences
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct JaroMatches {
    pub common_chars: usize,
    pub transpositions: usize,
}

pub(crate) fn jaro_calculate_similarity(
    p_len: usize,
    t_len: usize,
    common_chars: usize,
    mut transpositions: usize,
) -> f64 {
    transpositions /= 2;
    let mut sim: f64 = 0.0;
    sim += common_chars as f64 / p_len as f64;
    sim += common_chars as f64 / t_len as f64;
    sim += (common_chars as f64 - transpositions as f64) / common_chars as f64;

    sim / 3.0
}

// upper bound of the similarity based on the string lengths
fn jaro_length_filter(p_len: usize, t_len: usize, score_cutoff: f64) -> bool {
    if t_len == 0 || p_len == 0 {
        return false;
    }

    let min_len = p_len.min(t_len) as f64;
    let mut sim = min_len / p_len as f64 + min_len / t_len as f64 + 1.0;
    sim /= 3.0;
    sim >= score_cutoff
}

/// radius of the window in which two elements are allowed to match
pub(crate) fn jaro_bound(len1: usize, len2: usize) -> usize {
    (len1.max(len2) / 2).saturating_sub(1).max(1)
}

/// Flag the first unused element of `s2` within the search window of each element of
/// `s1`, then walk the flagged elements of both sequences in order and count the
/// positions where they disagree.
pub(crate) fn flag_similar_characters<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> JaroMatches
where
    Elem1: PartialEq<Elem2>,
{
    let bound = jaro_bound(s1.len(), s2.len());
    let mut s1_flags = vec![false; s1.len()];
    let mut s2_flags = vec![false; s2.len()];
    let mut common_chars = 0;

    for (i, ch1) in s1.iter().enumerate() {
        let start = i.saturating_sub(bound);
        let end = (i + bound + 1).min(s2.len());

        for j in start..end {
            if !s2_flags[j] && *ch1 == s2[j] {
                s1_flags[i] = true;
                s2_flags[j] = true;
                common_chars += 1;
                break;
            }
        }
    }

    if common_chars == 0 {
        return JaroMatches::default();
    }

    let mut s2_matched = s2
        .iter()
        .zip(&s2_flags)
        .filter(|(_, &flagged)| flagged)
        .map(|(ch2, _)| ch2);

    let mut transpositions = 0;
    for (ch1, _) in s1.iter().zip(&s1_flags).filter(|(_, &flagged)| flagged) {
        if let Some(ch2) = s2_matched.next() {
            if *ch1 != *ch2 {
                transpositions += 1;
            }
        }
    }

    JaroMatches {
        common_chars,
        transpositions,
    }
}

pub(crate) fn jaro_similarity_impl<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> f64
where
    Elem1: PartialEq<Elem2>,
{
    let (len1, len2) = (s1.len(), s2.len());

    if len1 == 0 && len2 == 0 {
        return 1.0;
    }
    if len1 == 0 || len2 == 0 {
        return 0.0;
    }

    let matches = flag_similar_characters(s1, s2);
    if matches.common_chars == 0 {
        return 0.0;
    }

    jaro_calculate_similarity(len1, len2, matches.common_chars, matches.transpositions)
}

/// Jaro similarity in the range `0.0` - `1.0`
///
/// # Examples
///
/// ```
/// use textdistance::distance::jaro;
///
/// assert_eq!(0.8888888888888888, jaro::similarity("abc".chars(), "bac".chars()));
/// assert_eq!(0.0, jaro::similarity("Dinsdale".chars(), "".chars()));
/// ```
pub fn similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    similarity_with_args(s1, s2, &Args::<f64, NoScoreCutoff>::default())
}

/// Jaro similarity with a `score_cutoff`
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

    // identical empty sequences always reach the maximum similarity
    if let Some(score_cutoff) = args.score_cutoff.cutoff() {
        if !(s1.is_empty() && s2.is_empty())
            && !jaro_length_filter(s1.len(), s2.len(), score_cutoff)
        {
            return args.score_cutoff.score(0.0);
        }
    }

    args.score_cutoff.score(jaro_similarity_impl(&s1, &s2))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_delta {
        ($x:expr, $y:expr, $d:expr) => {
            if ($x - $y).abs() > $d {
                panic!();
            }
        };
    }

    fn _test_similarity<Iter1, Iter2>(s1_: Iter1, s2_: Iter2) -> f64
    where
        Iter1: IntoIterator,
        Iter1::IntoIter: Clone,
        Iter2: IntoIterator,
        Iter2::IntoIter: Clone,
        Iter1::Item: PartialEq<Iter2::Item>,
        Iter2::Item: PartialEq<Iter1::Item>,
    {
        let s1 = s1_.into_iter();
        let s2 = s2_.into_iter();
        let res1 = similarity(s1.clone(), s2.clone());
        let res2 = similarity(s2.clone(), s1.clone());

        assert_delta!(res1, res2, 0.0001);
        res1
    }

    fn _test_similarity_ascii(s1: &str, s2: &str) -> f64 {
        let res1 = _test_similarity(s1.chars(), s2.chars());
        let res2 = _test_similarity(s1.bytes(), s2.bytes());

        assert_delta!(res1, res2, 0.0001);
        res1
    }

    #[test]
    fn jaro_empty() {
        assert_eq!(1.0, _test_similarity_ascii("", ""));
        assert_eq!(0.0, _test_similarity_ascii("Dinsdale", ""));
        assert_eq!(0.0, _test_similarity_ascii("", "elephant"));
    }

    #[test]
    fn jaro_literal_scores() {
        assert_eq!(0.8888888888888888, _test_similarity_ascii("abc", "bac"));
        assert_eq!(0.7666666666666666, similarity("dicksonx".chars(), "dixon".chars()));
        assert_eq!(0.7666666666666666, similarity("dixon".chars(), "dicksonx".chars()));
        assert_eq!(0.0, _test_similarity_ascii("Brian", "Jesus"));
        assert_eq!(0.7797619047619048, _test_similarity_ascii("Thorkel", "Thorgier"));
        assert_eq!(0.7083333333333334, _test_similarity_ascii("Dinsdale", "D"));
        assert_eq!(0.44166666666666665, _test_similarity_ascii("Carol", "elephant"));
    }

    #[test]
    fn jaro_unicode() {
        assert_eq!(
            0.48333333333333334,
            _test_similarity("idカード".chars(), "Id番号".chars())
        );
        assert_eq!(
            0.6666666666666666,
            _test_similarity("ひだるま".chars(), "けんだま".chars())
        );
    }

    #[test]
    fn jaro_flag_chars() {
        let s1: Vec<char> = "abc".chars().collect();
        let s2: Vec<char> = "bac".chars().collect();
        assert_eq!(
            JaroMatches {
                common_chars: 3,
                transpositions: 2
            },
            flag_similar_characters(&s1, &s2)
        );

        // 'a' of the second string is outside the match window of the first 'a'
        let s1: Vec<char> = "abcdef".chars().collect();
        let s2: Vec<char> = "bcdefa".chars().collect();
        assert_eq!(5, flag_similar_characters(&s1, &s2).common_chars);
    }

    #[test]
    fn jaro_bound_minimum() {
        assert_eq!(1, jaro_bound(1, 1));
        assert_eq!(1, jaro_bound(2, 3));
        assert_eq!(1, jaro_bound(4, 2));
        assert_eq!(2, jaro_bound(7, 6));
        assert_eq!(3, jaro_bound(8, 1));
    }

    /// adjacent transpositions are matched even in very short sequences
    #[test]
    fn jaro_short_transposition() {
        assert_eq!(0.8333333333333334, _test_similarity_ascii("ab", "ba"));
    }

    #[test]
    fn jaro_score_cutoff() {
        let args = Args::default().score_cutoff(0.8);
        assert_eq!(
            Some(0.8888888888888888),
            similarity_with_args("abc".chars(), "bac".chars(), &args)
        );
        assert_eq!(
            None,
            similarity_with_args("Thorkel".chars(), "Thorgier".chars(), &args)
        );
        // rejected by the length filter
        assert_eq!(
            None,
            similarity_with_args("Dinsdale".chars(), "D".chars(), &args)
        );
        assert_eq!(Some(1.0), similarity_with_args("".chars(), "".chars(), &args));
    }
}
