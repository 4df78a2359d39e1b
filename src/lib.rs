//! `textdistance` computes similarity and distance scores between two pieces of text.
//!
//! ## Key Features
//!
//! - **Classic String Metrics**: Levenshtein, normalized Levenshtein, Hamming,
//!   Jaro, Jaro-Winkler and the unrestricted Damerau-Levenshtein distance.
//! - **Unicode aware**: every metric compares Unicode code points, so
//!   multi-byte and non-Latin text is measured per character, not per byte.
//! - **Checked inputs**: the functions at the crate root accept anything implementing
//!   [`Operand`] and report non-text arguments as a typed [`Error`] instead of
//!   silently coercing them.
//!
//! ## Usage
//!
//! ```rust
//! use textdistance::{levenshtein, jaro_winkler, hamming, Error, Position};
//!
//! assert_eq!(Ok(3), levenshtein("kitten", "sitting"));
//! assert_eq!(Ok(0.8678571428571429), jaro_winkler("Thorkel", "Thorgier"));
//!
//! // hamming requires sequences of equal length
//! assert_eq!(
//!     Err(Error::LengthMismatch { len1: 3, len2: 5 }),
//!     hamming("abc", "abcdf")
//! );
//!
//! // numbers are not text
//! assert!(matches!(
//!     levenshtein("abc", 1),
//!     Err(Error::InvalidArgumentType { position: Position::Second, .. })
//! ));
//! ```
//!
//! The generic implementations in the [`distance`] modules work on any pair of
//! iterators and additionally support a `score_cutoff`:
//!
//! ```rust
//! use textdistance::distance::levenshtein;
//!
//! assert_eq!(3, levenshtein::distance("kitten".chars(), "sitting".chars()));
//!
//! // If you are sure the input strings are ascii only it's usually faster to operate on bytes
//! assert_eq!(3, levenshtein::distance("kitten".bytes(), "sitting".bytes()));
//!
//! // Distances worse than the score_cutoff are reported as None
//! assert_eq!(
//!     None,
//!     levenshtein::distance_with_args(
//!         "kitten".chars(),
//!         "sitting".chars(),
//!         &levenshtein::Args::default().score_cutoff(2)
//!     )
//! );
//! ```
//!
//! [`distance`]: distance/index.html

#![forbid(unsafe_code)]
#![allow(
    // these casts are needed to turn counts into scores
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::similar_names,
    // noisy
    clippy::missing_errors_doc,
)]

pub mod common;
pub(crate) mod details;
pub mod distance;
mod error;
mod operand;

pub use error::{Error, Position, Result};
pub use operand::Operand;

/// Hash value in the range `i64::MIN` - `u64::MAX`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Hash {
    UNSIGNED(u64),
    SIGNED(i64),
}

/// trait used to map between element types and unique hash values
///
/// `textdistance` already implements this trait for `char` and the primitive integer
/// types. For custom types it can be used to take part in the element lookups of
/// [`damerau_levenshtein`](distance::damerau_levenshtein).
///
/// Hashes have to be unique in the range `i64::MIN` - `u64::MAX`. If two distinct
/// objects produce the same hash, they are treated as the same element. Values in
/// the range 0-255 are stored in a flat table and are the fastest to look up.
///
/// # Example
/// ```
/// use textdistance::distance;
/// use textdistance::{Hash, HashableChar};
///
/// #[derive(PartialEq, Clone, Copy)]
/// struct Token {
///     id: u64,
/// }
///
/// impl HashableChar for Token {
///     fn hash_char(&self) -> Hash {
///         Hash::UNSIGNED(self.id)
///     }
/// }
///
/// let s1 = [Token { id: 1 }, Token { id: 2 }];
/// let s2 = [Token { id: 2 }, Token { id: 1 }];
/// assert_eq!(1, distance::damerau_levenshtein::distance(s1, s2));
/// ```
pub trait HashableChar {
    fn hash_char(&self) -> Hash;
}

/// Levenshtein distance between two text operands.
///
/// ```
/// assert_eq!(Ok(3), textdistance::levenshtein("sitting", "kitten"));
/// assert_eq!(Ok(7), textdistance::levenshtein("sitting", ""));
/// ```
pub fn levenshtein<A, B>(a: A, b: B) -> Result<usize>
where
    A: Operand,
    B: Operand,
{
    let (s1, s2) = operand::validate(&a, &b)?;
    Ok(distance::levenshtein::distance(
        s1.iter().copied(),
        s2.iter().copied(),
    ))
}

/// Levenshtein distance divided by the length of the longer operand.
///
/// Two empty operands have a normalized distance of `0.0`.
///
/// ```
/// assert_eq!(
///     Ok(0.42857142857142855),
///     textdistance::normalized_levenshtein("dixon", "dickson")
/// );
/// ```
pub fn normalized_levenshtein<A, B>(a: A, b: B) -> Result<f64>
where
    A: Operand,
    B: Operand,
{
    let (s1, s2) = operand::validate(&a, &b)?;
    Ok(distance::levenshtein::normalized_distance(
        s1.iter().copied(),
        s2.iter().copied(),
    ))
}

/// Number of positions at which two operands of equal length differ.
///
/// Operands of different length are rejected with [`Error::LengthMismatch`].
pub fn hamming<A, B>(a: A, b: B) -> Result<usize>
where
    A: Operand,
    B: Operand,
{
    let (s1, s2) = operand::validate(&a, &b)?;
    distance::hamming::distance(s1.iter().copied(), s2.iter().copied())
}

/// Jaro similarity between two text operands.
///
/// ```
/// assert_eq!(Ok(0.8888888888888888), textdistance::jaro("abc", "bac"));
/// assert_eq!(Ok(1.0), textdistance::jaro("", ""));
/// ```
pub fn jaro<A, B>(a: A, b: B) -> Result<f64>
where
    A: Operand,
    B: Operand,
{
    let (s1, s2) = operand::validate(&a, &b)?;
    Ok(distance::jaro::similarity(
        s1.iter().copied(),
        s2.iter().copied(),
    ))
}

/// Jaro-Winkler similarity between two text operands.
pub fn jaro_winkler<A, B>(a: A, b: B) -> Result<f64>
where
    A: Operand,
    B: Operand,
{
    let (s1, s2) = operand::validate(&a, &b)?;
    Ok(distance::jaro_winkler::similarity(
        s1.iter().copied(),
        s2.iter().copied(),
    ))
}

/// Unrestricted Damerau-Levenshtein distance between two text operands.
///
/// ```
/// assert_eq!(Ok(2), textdistance::damerau_levenshtein("ca", "abc"));
/// ```
pub fn damerau_levenshtein<A, B>(a: A, b: B) -> Result<usize>
where
    A: Operand,
    B: Operand,
{
    let (s1, s2) = operand::validate(&a, &b)?;
    Ok(distance::damerau_levenshtein::distance(
        s1.iter().copied(),
        s2.iter().copied(),
    ))
}
