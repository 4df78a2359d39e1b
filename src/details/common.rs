use crate::{Hash, HashableChar};
use std::iter::{Skip, Take};

macro_rules! impl_hashable_char {
    ($base_type:ty, $kind:tt $(, $t:ty)*) => {
        impl HashableChar for $base_type {
            #[inline]
            fn hash_char(&self) -> Hash
            {
                Hash::$kind(*self $(as $t)*)
            }
        }

        impl HashableChar for &$base_type {
            #[inline]
            fn hash_char(&self) -> Hash
            {
                Hash::$kind(**self $(as $t)*)
            }
        }
    }
}

impl_hashable_char!(char, UNSIGNED, u32, u64);
impl_hashable_char!(i8, SIGNED, i64);
impl_hashable_char!(i16, SIGNED, i64);
impl_hashable_char!(i32, SIGNED, i64);
impl_hashable_char!(i64, SIGNED, i64);
impl_hashable_char!(u8, UNSIGNED, u64);
impl_hashable_char!(u16, UNSIGNED, u64);
impl_hashable_char!(u32, UNSIGNED, u64);
impl_hashable_char!(u64, UNSIGNED, u64);

pub(crate) fn find_common_prefix<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: Iterator,
    Iter2: Iterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    s1.zip(s2)
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

pub(crate) fn find_common_suffix<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: DoubleEndedIterator,
    Iter2: DoubleEndedIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    s1.rev()
        .zip(s2.rev())
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

/// sequences with the common prefix and suffix removed, together with their new lengths
pub(crate) struct Trimmed<Iter1, Iter2> {
    pub s1: Skip<Take<Iter1>>,
    pub len1: usize,
    pub s2: Skip<Take<Iter2>>,
    pub len2: usize,
}

/// remove the common prefix and suffix. The suffix is removed first, so the two never overlap
pub(crate) fn remove_common_affix<Iter1, Iter2>(
    s1: Iter1,
    len1: usize,
    s2: Iter2,
    len2: usize,
) -> Trimmed<Iter1, Iter2>
where
    Iter1: DoubleEndedIterator + Clone,
    Iter2: DoubleEndedIterator + Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    let suffix_len = find_common_suffix(s1.clone(), s2.clone());
    let s1_no_suffix = s1.take(len1 - suffix_len);
    let s2_no_suffix = s2.take(len2 - suffix_len);
    let prefix_len = find_common_prefix(s1_no_suffix.clone(), s2_no_suffix.clone());

    Trimmed {
        s1: s1_no_suffix.skip(prefix_len),
        len1: len1 - suffix_len - prefix_len,
        s2: s2_no_suffix.skip(prefix_len),
        len2: len2 - suffix_len - prefix_len,
    }
}
