#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textdistance::distance::damerau_levenshtein;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let dist = textdistance::damerau_levenshtein(texts.s1.as_str(), texts.s2.as_str())
        .expect("text operands are accepted");
    let lev = textdistance::levenshtein(texts.s1.as_str(), texts.s2.as_str())
        .expect("text operands are accepted");
    assert!(dist <= lev);
    assert_eq!(
        dist,
        damerau_levenshtein::distance(texts.s2.chars(), texts.s1.chars())
    );
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
