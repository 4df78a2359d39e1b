#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textdistance::distance::hamming;
use textdistance::Error;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let len1 = texts.s1.chars().count();
    let len2 = texts.s2.chars().count();

    match textdistance::hamming(texts.s1.as_str(), texts.s2.as_str()) {
        Ok(dist) => assert!(len1 == len2 && dist <= len1),
        Err(err) => assert_eq!(Error::LengthMismatch { len1, len2 }, err),
    }

    let padded = hamming::distance_with_args(
        texts.s1.chars(),
        texts.s2.chars(),
        &hamming::Args::default().pad(true),
    )
    .expect("padding accepts any length");
    assert!(padded <= len1.max(len2));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
