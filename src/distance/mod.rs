//! String metrics over arbitrary element sequences.
//!
//! Every metric accepts two iterators. Passing `s.chars()` compares unicode code points,
//! passing `s.bytes()` compares bytes, which gives the same results for ascii text.

pub mod damerau_levenshtein;
pub mod hamming;
pub mod jaro;
pub mod jaro_winkler;
pub mod levenshtein;
