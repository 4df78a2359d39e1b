//! Per-call configuration shared by the metrics in [`distance`](crate::distance).
//!
//! Whether a `score_cutoff` is set is tracked in the type of [`Args`]. Without a cutoff
//! a metric returns its plain score, with a cutoff it returns `Option<score>` and
//! reports results worse than the cutoff as `None`.
//!
//! ```
//! use textdistance::distance::jaro;
//!
//! let args = jaro::Args::default().score_cutoff(0.9);
//! assert_eq!(None, jaro::similarity_with_args("abc".chars(), "bac".chars(), &args));
//! ```

use std::fmt::Debug;
use std::marker::PhantomData;

#[derive(Default, Copy, Clone)]
pub struct NoScoreCutoff;
#[derive(Default, Copy, Clone)]
pub struct WithScoreCutoff<T>(pub T);

/// cutoff for scores where lower is better
pub trait DistanceCutoff<T>
where
    T: Copy,
{
    type Output: Copy + Into<Option<T>> + PartialEq + Debug;

    fn cutoff(&self) -> Option<T>;
    fn score(&self, raw: T) -> Self::Output;
}

impl<T> DistanceCutoff<T> for NoScoreCutoff
where
    T: Copy + PartialEq + Debug,
{
    type Output = T;

    fn cutoff(&self) -> Option<T> {
        None
    }

    fn score(&self, raw: T) -> Self::Output {
        raw
    }
}

impl<T> DistanceCutoff<T> for WithScoreCutoff<T>
where
    T: Copy + PartialOrd + Debug,
{
    type Output = Option<T>;

    fn cutoff(&self) -> Option<T> {
        Some(self.0)
    }

    fn score(&self, raw: T) -> Self::Output {
        (raw <= self.0).then_some(raw)
    }
}

/// cutoff for scores where higher is better
pub trait SimilarityCutoff<T>
where
    T: Copy,
{
    type Output: Copy + Into<Option<T>> + PartialEq + Debug;

    fn cutoff(&self) -> Option<T>;
    fn score(&self, raw: T) -> Self::Output;
}

impl<T> SimilarityCutoff<T> for NoScoreCutoff
where
    T: Copy + PartialEq + Debug,
{
    type Output = T;

    fn cutoff(&self) -> Option<T> {
        None
    }

    fn score(&self, raw: T) -> Self::Output {
        raw
    }
}

impl<T> SimilarityCutoff<T> for WithScoreCutoff<T>
where
    T: Copy + PartialOrd + Debug,
{
    type Output = Option<T>;

    fn cutoff(&self) -> Option<T> {
        Some(self.0)
    }

    fn score(&self, raw: T) -> Self::Output {
        (raw >= self.0).then_some(raw)
    }
}

/// Arguments for a metric returning `ResultType`
#[derive(Copy, Clone)]
pub struct Args<ResultType, CutoffType> {
    pub(crate) score_cutoff: CutoffType,
    result_type: PhantomData<ResultType>,
}

impl<ResultType> Default for Args<ResultType, NoScoreCutoff> {
    fn default() -> Self {
        Args {
            score_cutoff: NoScoreCutoff,
            result_type: PhantomData,
        }
    }
}

impl<ResultType, CutoffType> Args<ResultType, CutoffType>
where
    ResultType: Copy,
{
    pub fn score_cutoff(
        &self,
        score_cutoff: ResultType,
    ) -> Args<ResultType, WithScoreCutoff<ResultType>> {
        Args {
            score_cutoff: WithScoreCutoff(score_cutoff),
            result_type: PhantomData,
        }
    }
}
