//! Property-based tests for the metric invariants.

use proptest::prelude::*;
use textdistance::distance::{damerau_levenshtein, hamming, jaro, jaro_winkler, levenshtein};

/// Small alphabets produce many repeated elements, which exercises transpositions
/// and the match window far more than arbitrary unicode does.
fn text() -> impl Strategy<Value = String> {
    prop_oneof!["[abcd]{0,12}", "\\PC{0,8}"]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    #[test]
    fn levenshtein_symmetric(a in text(), b in text()) {
        prop_assert_eq!(
            levenshtein::distance(a.chars(), b.chars()),
            levenshtein::distance(b.chars(), a.chars())
        );
    }

    #[test]
    fn identical_inputs_have_no_distance(a in text()) {
        prop_assert_eq!(0, levenshtein::distance(a.chars(), a.chars()));
        prop_assert_eq!(0, damerau_levenshtein::distance(a.chars(), a.chars()));
        prop_assert_eq!(Ok(0), hamming::distance(a.chars(), a.chars()));
        prop_assert_eq!(0.0, levenshtein::normalized_distance(a.chars(), a.chars()));
    }

    #[test]
    fn levenshtein_triangle_inequality(a in text(), b in text(), c in text()) {
        let ab = levenshtein::distance(a.chars(), b.chars());
        let bc = levenshtein::distance(b.chars(), c.chars());
        let ac = levenshtein::distance(a.chars(), c.chars());
        prop_assert!(ac <= ab + bc, "{} > {} + {}", ac, ab, bc);
    }

    #[test]
    fn levenshtein_bounded_by_longer_input(a in text(), b in text()) {
        let dist = levenshtein::distance(a.chars(), b.chars());
        let (len1, len2) = (a.chars().count(), b.chars().count());
        prop_assert!(dist >= len1.abs_diff(len2));
        prop_assert!(dist <= len1.max(len2));

        let norm = levenshtein::normalized_distance(a.chars(), b.chars());
        prop_assert!((0.0..=1.0).contains(&norm));
    }

    #[test]
    fn jaro_symmetric_and_bounded(a in text(), b in text()) {
        let sim = jaro::similarity(a.chars(), b.chars());
        prop_assert!((0.0..=1.0).contains(&sim));
        prop_assert!((sim - jaro::similarity(b.chars(), a.chars())).abs() < 1e-9);
    }

    #[test]
    fn jaro_winkler_rewards_common_prefix(prefix in "[abcd]{1,4}", a in text(), b in text()) {
        let s1 = format!("{prefix}{a}");
        let s2 = format!("{prefix}{b}");
        let jaro_sim = jaro::similarity(s1.chars(), s2.chars());
        let sim = jaro_winkler::similarity(s1.chars(), s2.chars());
        prop_assert!(jaro_sim > 0.0);
        prop_assert!(sim >= jaro_sim);
        prop_assert!(sim <= 1.0 + 1e-9);
    }

    #[test]
    fn damerau_levenshtein_not_above_levenshtein(a in text(), b in text()) {
        let dist = damerau_levenshtein::distance(a.chars(), b.chars());
        prop_assert!(dist <= levenshtein::distance(a.chars(), b.chars()));
        prop_assert_eq!(dist, damerau_levenshtein::distance(b.chars(), a.chars()));
    }

    #[test]
    fn checked_surface_matches_engines(a in text(), b in text()) {
        prop_assert_eq!(
            Ok(levenshtein::distance(a.chars(), b.chars())),
            textdistance::levenshtein(a.as_str(), b.as_str())
        );
        prop_assert_eq!(
            Ok(damerau_levenshtein::distance(a.chars(), b.chars())),
            textdistance::damerau_levenshtein(a.as_str(), b.as_str())
        );
        prop_assert_eq!(
            hamming::distance(a.chars(), b.chars()),
            textdistance::hamming(a.as_str(), b.as_str())
        );
    }
}
