//! Stable, key-based merge sort.
//!
//! `logsort` reorders a mutable slice in place, in non-decreasing order of a
//! caller-supplied key. It was written to put log records back into timestamp
//! order before storing or displaying them, but nothing about it is specific
//! to log records: any `T` with an `Ord` key works.
//!
//! The sort is stable: elements whose keys compare equal keep their original
//! relative order. This matters for log records that share a timestamp.
//!
//! The algorithm is a top-down merge sort, `O(n * log(n))` comparisons with
//! `n / 2` elements of scratch space. The input slice is only borrowed for
//! the duration of the call; no state is kept between calls.

use std::cmp::Ordering;

mod merge_sort;

/// Sorts `v` in place in non-decreasing order, preserving the order of equal
/// elements.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    merge_sort::sort(v, &mut |a, b| a.lt(b));
}

/// Sorts `v` in place with a comparator function, preserving the order of
/// elements that compare equal.
///
/// `compare` must implement a total order or the resulting order is
/// unspecified. Even then, all original elements remain present. A panic in
/// `compare` propagates to the caller and likewise leaves the full element
/// set in `v`, partially reordered.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort::sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` in place in non-decreasing key order, preserving the order of
/// elements with equal keys.
///
/// The key function is re-invoked for every comparison, which is the right
/// trade-off for cheap keys like a timestamp field. For expensive keys,
/// sort a pre-computed `(key, value)` pairing instead.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort::sort(v, &mut |a, b| key(a).lt(&key(b)));
}
