/// Inserts `v[v.len() - 1]` into pre-sorted sequence `v[..v.len() - 1]` so that whole `v[..]`
/// becomes sorted.
///
/// The element is swapped leftwards as long as it has to be placed strictly before its
/// predecessor, so equal elements are never passed.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = v.len() - 1;
    while i > 0 && is_less(&v[i], &v[i - 1]) {
        v.swap(i, i - 1);
        i -= 1;
    }
}

/// Sort `v` assuming `v[..offset]` is already sorted.
///
/// An `offset` of `0` is treated like `1`, a single element is always sorted.
///
/// # Panics
///
/// Panics if `offset > v.len()`.
pub fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(offset <= len, "offset {offset} out of bounds for length {len}");

    // Shift each element of the unsorted region v[i..] as far left as is needed to make v sorted.
    for i in offset.max(1)..len {
        insert_tail(&mut v[..=i], is_less);
    }
}
