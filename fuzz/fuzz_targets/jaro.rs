#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textdistance::distance::jaro;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let sim = textdistance::jaro(texts.s1.as_str(), texts.s2.as_str())
        .expect("text operands are accepted");
    assert!((0.0..=1.0).contains(&sim));
    assert!((sim - jaro::similarity(texts.s2.chars(), texts.s1.chars())).abs() < 1e-9);
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
