#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textdistance::distance::levenshtein;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let dist = textdistance::levenshtein(texts.s1.as_str(), texts.s2.as_str())
        .expect("text operands are accepted");
    assert_eq!(dist, levenshtein::distance(texts.s2.chars(), texts.s1.chars()));

    let norm = textdistance::normalized_levenshtein(texts.s1.as_str(), texts.s2.as_str())
        .expect("text operands are accepted");
    assert!((0.0..=1.0).contains(&norm));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
