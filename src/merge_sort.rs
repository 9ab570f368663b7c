//! Top-down merge sort on an `is_less` closure.

use std::mem;
use std::ptr;

/// Stable-sorts `v` so that `is_less` never holds for adjacent elements in
/// reverse. `is_less` must be a strict-weak-order "less than"; ties are kept
/// in their original order.
pub fn sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting zero-sized types has no observable effect.
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // One scratch allocation shared by every merge. A merge buffers only its
    // left run, and no left run anywhere in the recursion is longer than
    // `len / 2`.
    let mut buf = Vec::with_capacity(len / 2);
    merge_sort(v, buf.as_mut_ptr(), is_less);
}

fn merge_sort<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], buf, is_less);
    merge_sort(&mut v[mid..], buf, is_less);

    // The halves may already be in order, common for mostly-sorted log
    // batches. `!is_less` keeps equal boundary elements where they are.
    if !is_less(&v[mid], &v[mid - 1]) {
        return;
    }

    // SAFETY: 2 <= len, so 0 < mid < len. `buf` has room for `len / 2`
    // elements and `mid <= len / 2`. T is not a ZST, checked in `sort`.
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into `v`, resolving ties
/// in favor of the left run. That tie-break is what makes the sort stable.
///
/// The left run is copied out into `buf` and the merge walks both runs
/// forward, writing into `v` from the front. The write cursor trails the
/// right run's read cursor by the number of unconsumed left elements, so it
/// never overwrites an unread element.
///
/// # Safety
///
/// `mid` must be in `(0, v.len())`, `buf` must be valid for `mid` writes, and
/// `T` must not be zero-sized.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let v_ptr = v.as_mut_ptr();
    let v_mid = v_ptr.add(mid);
    let v_end = v_ptr.add(len);

    ptr::copy_nonoverlapping(v_ptr, buf, mid);

    // `hole` owns the unconsumed part of the buffered left run. If `is_less`
    // panics, dropping it copies that part back into the gap in `v`, so `v`
    // ends up holding every original element exactly once.
    let mut hole = MergeHole {
        start: buf,
        end: buf.add(mid),
        dest: v_ptr,
    };

    let left = &mut hole.start;
    let out = &mut hole.dest;
    let mut right = v_mid;

    while *left < hole.end && right < v_end {
        // Ties emit from the left run, which held the earlier position.
        if is_less(&*right, &**left) {
            ptr::copy_nonoverlapping(right, *out, 1);
            right = right.add(1);
        } else {
            ptr::copy_nonoverlapping(*left, *out, 1);
            *left = left.add(1);
        }
        *out = out.add(1);
    }

    // `hole` drops here and bulk-copies any left-run tail into place. If the
    // left run was exhausted first, the right run's tail is already in place.
}

struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `start..end` is the still-initialized part of the buffered
        // run and `dest` has room for exactly that many elements.
        unsafe {
            let remaining = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, remaining);
        }
    }
}
