#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let sim = textdistance::jaro_winkler(texts.s1.as_str(), texts.s2.as_str())
        .expect("text operands are accepted");
    let jaro_sim = textdistance::jaro(texts.s1.as_str(), texts.s2.as_str())
        .expect("text operands are accepted");
    assert!(sim <= 1.0 + 1e-9);
    assert!(sim >= jaro_sim);
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
