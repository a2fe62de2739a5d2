/// Sorts `v` using quicksort with Lomuto partitioning.
///
/// The pivot is always the last element of the (sub-)slice. Already sorted, reverse sorted and
/// all-equal inputs therefore take quadratic time. The sort is not stable.
///
/// Only the smaller side of each partition is sorted recursively, the larger side is handled by
/// the next loop iteration. This keeps the recursion depth below `log2(len)` no matter how
/// unbalanced the partitions are.
pub fn sort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let mid = partition(v, is_less);

        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            sort(left, is_less);
            v = right;
        } else {
            sort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its last element.
///
/// Elements that do not have to go after the pivot are moved to the front, in scan order. Returns
/// the final position of the pivot, everything before it is placed at or before the pivot and
/// everything after it strictly after.
///
/// `v` must not be empty.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let (rest, tail) = v.split_at_mut(len - 1);
    let pivot = &tail[0];

    let mut boundary = 0;
    for j in 0..rest.len() {
        if !is_less(pivot, &rest[j]) {
            rest.swap(boundary, j);
            boundary += 1;
        }
    }

    v.swap(boundary, len - 1);
    boundary
}
