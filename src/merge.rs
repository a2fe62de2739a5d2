use core::mem::{self, MaybeUninit};
use core::ptr;

/// Sorts `v` using top-down merge sort.
///
/// The left half of every split receives the extra element of an odd length, i.e. the split
/// point of the inclusive range `[left, right]` is `floor((left + right) / 2)`. A single scratch
/// buffer of `v.len()` elements is allocated up front and shared by every merge.
pub fn sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 || mem::size_of::<T>() == 0 {
        return;
    }

    let mut scratch: Vec<T> = Vec::with_capacity(v.len());
    mergesort(v, scratch.spare_capacity_mut(), is_less);
}

fn mergesort<T, F>(v: &mut [T], scratch: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = (len + 1) / 2;
    mergesort(&mut v[..mid], scratch, is_less);
    mergesort(&mut v[mid..], scratch, is_less);
    merge(v, scratch, mid, is_less);
}

/// Merges sorted runs `v[..mid]` and `v[mid..]` using `scratch` as temporary storage, and stores
/// the result into `v[..]`.
///
/// On ties the element of the left run is taken first, which makes the merge stable.
///
/// # Panics
///
/// Panics if either run is empty or `scratch` cannot hold all of `v`.
pub fn merge<T, F>(v: &mut [T], scratch: &mut [MaybeUninit<T>], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(mid > 0 && mid < len && scratch.len() >= len);

    // SAFETY: We checked that both runs are non-empty and that the buffer can hold a copy of both.
    // `scratch` is a separate allocation, so buffer and v do not alias. Zero-sized types never
    // reach this point.
    unsafe {
        merge_from_buffer(v, mid, scratch.as_mut_ptr().cast::<T>(), is_less);
    }
}

/// # Safety
///
/// Both runs must be non-empty, `buf` must have space for `v.len()` elements and must not alias
/// `v`. `T` must not be a zero-sized type.
unsafe fn merge_from_buffer<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v = v.as_mut_ptr();

    // Both runs are moved into `buf`, the left one at `buf[..mid]` and the right one at
    // `buf[mid..]`. The merge then traces both copies forwards, comparing their next unconsumed
    // elements and moving the one that goes first back into `v`.
    //
    // Intermediate state of the process is always tracked by `hole`, which serves two purposes:
    // 1. Protects integrity of `v` from panics in `is_less`.
    // 2. Moves whatever remains of the run that was not exhausted into the tail of `v`.
    //
    // Panic safety:
    //
    // If `is_less` panics at any point during the process, `hole` will get dropped and fill the
    // rest of `v` with the unconsumed elements of both runs, thus ensuring that `v` still holds
    // every object it initially held exactly once.
    let mut hole;

    // SAFETY: `buf` has capacity for `len` elements and does not overlap `v`.
    unsafe {
        ptr::copy_nonoverlapping(v, buf, len);
        hole = MergeHole {
            left: buf,
            left_end: buf.add(mid),
            right: buf.add(mid),
            right_end: buf.add(len),
            dst: v,
        };
    }

    while hole.left < hole.left_end && hole.right < hole.right_end {
        // Consume the right run only if its element goes strictly first.
        // If equal, prefer the left run to maintain stability.

        // SAFETY: left and right point to unconsumed elements in `buf`. `dst` trails them, it
        // points into `v` and has exactly as many slots left as there are unconsumed elements.
        unsafe {
            let to_copy = if is_less(&*hole.right, &*hole.left) {
                get_and_increment(&mut hole.right)
            } else {
                get_and_increment(&mut hole.left)
            };
            ptr::copy_nonoverlapping(to_copy, get_and_increment(&mut hole.dst), 1);
        }
    }
    // Finally, `hole` gets dropped, moving the rest of the run that was not exhausted into `v`.

    unsafe fn get_and_increment<T>(ptr: &mut *mut T) -> *mut T {
        let old = *ptr;

        // SAFETY: ptr.add(1) must still be a valid pointer or one past the end of its buffer.
        *ptr = unsafe { ptr.add(1) };
        old
    }

    // When dropped, copies `left..left_end` followed by `right..right_end` into `dst..`.
    struct MergeHole<T> {
        left: *mut T,
        left_end: *mut T,
        right: *mut T,
        right_end: *mut T,
        dst: *mut T,
    }

    impl<T> Drop for MergeHole<T> {
        fn drop(&mut self) {
            // SAFETY: `T` is not a zero-sized type, and these are pointers into the elements of
            // `buf` and `v`. The remaining slots of `v` match the unconsumed element count.
            unsafe {
                let left_len = self.left_end.offset_from(self.left) as usize;
                let right_len = self.right_end.offset_from(self.right) as usize;
                ptr::copy_nonoverlapping(self.left, self.dst, left_len);
                ptr::copy_nonoverlapping(self.right, self.dst.add(left_len), right_len);
            }
        }
    }
}
