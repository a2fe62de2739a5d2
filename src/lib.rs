//! Textbook comparison sorts: quicksort, merge sort and insertion sort, each usable in ascending
//! or descending order.
//!
//! The in-place functions are the primitives. [`sort`] and [`try_sort_partial`] copy the input
//! first and hand back a new vector, leaving the caller's sequence untouched.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::RangeInclusive;
use std::str::FromStr;

use log::{debug, trace};

mod error;
mod merge;
mod quicksort;
mod smallsort;

pub use error::SortError;
pub use smallsort::insertion_sort_shift_left;

/// The sense in which a sequence is sorted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    /// Returns `true` if `a` has to be placed strictly before `b`.
    ///
    /// This is the predicate every algorithm in this crate is driven by.
    #[inline(always)]
    pub fn is_less<T: PartialOrd + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            Order::Ascending => a < b,
            Order::Descending => b < a,
        }
    }

    #[inline(always)]
    pub fn compare<T: Ord + ?Sized>(self, a: &T, b: &T) -> Ordering {
        match self {
            Order::Ascending => a.cmp(b),
            Order::Descending => b.cmp(a),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Order::Ascending => "ascending",
            Order::Descending => "descending",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Ascending),
            "desc" | "descending" => Ok(Order::Descending),
            _ => Err(SortError::InvalidInput(format!(
                "unknown order `{s}`, expected `asc` or `desc`"
            ))),
        }
    }
}

/// The algorithm used to sort.
///
/// `Default` yields [`Algorithm::Quick`]. Parsing a selector never falls back to it: an
/// unrecognized name is an [`SortError::UnsupportedAlgorithm`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Lomuto quicksort with the last element as pivot. Not stable, quadratic on sorted input.
    #[default]
    Quick,
    /// Top-down merge sort. Stable, `O(n log n)`, needs a scratch buffer of `n` elements.
    Merge,
    /// Insertion sort. Stable, quadratic, linear on already sorted input.
    Insertion,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Quick, Algorithm::Merge, Algorithm::Insertion];

    /// Human readable name, e.g. `"Merge Sort"`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Insertion => "Insertion Sort",
        }
    }

    /// Whether elements that compare equal keep their relative order.
    pub fn is_stable(self) -> bool {
        !matches!(self, Algorithm::Quick)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" | "quicksort" => Ok(Algorithm::Quick),
            "merge" | "mergesort" => Ok(Algorithm::Merge),
            "insertion" | "insertionsort" => Ok(Algorithm::Insertion),
            _ => Err(SortError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Returns a sorted copy of `seq`.
pub fn sort<T: Ord + Clone>(seq: &[T], order: Order, algorithm: Algorithm) -> Vec<T> {
    let mut v = seq.to_vec();
    sort_in_place(&mut v, order, algorithm);
    v
}

/// Sorts `v` in place.
pub fn sort_in_place<T: Ord>(v: &mut [T], order: Order, algorithm: Algorithm) {
    trace!("{algorithm}: {} elements, {order}", v.len());
    sort_impl(v, algorithm, &mut |a: &T, b: &T| order.is_less(a, b));
}

/// Sorts `v` in place with a comparator, ascending with respect to `compare`.
pub fn sort_by<T, F>(v: &mut [T], algorithm: Algorithm, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("{algorithm}: {} elements, custom comparator", v.len());
    sort_impl(v, algorithm, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Returns a sorted copy of a sequence of partially ordered elements.
///
/// Fails with [`SortError::InvalidInput`] if any element is not comparable with itself, which for
/// the primitive float types means `NaN`. Nothing is sorted in that case.
pub fn try_sort_partial<T: PartialOrd + Clone>(
    seq: &[T],
    order: Order,
    algorithm: Algorithm,
) -> Result<Vec<T>, SortError> {
    validate_comparable(seq)?;

    let mut v = seq.to_vec();
    trace!("{algorithm}: {} elements, {order}", v.len());
    sort_impl(&mut v, algorithm, &mut |a: &T, b: &T| order.is_less(a, b));
    Ok(v)
}

/// Checks that every element of `seq` can be ordered.
pub fn validate_comparable<T: PartialOrd>(seq: &[T]) -> Result<(), SortError> {
    match seq.iter().position(|x| x.partial_cmp(x).is_none()) {
        Some(i) => {
            debug!("rejecting input: element {i} of {} is not comparable", seq.len());
            Err(SortError::InvalidInput(format!(
                "element at index {i} cannot be compared"
            )))
        }
        None => Ok(()),
    }
}

/// Sorts the inclusive range `v[low..=high]` with quicksort.
///
/// `low == high + 1` is an empty range and does nothing, as long as `low <= v.len()`. Otherwise
/// both bounds have to lie within `v` and `low <= high`.
pub fn quicksort<T: Ord>(
    v: &mut [T],
    low: usize,
    high: usize,
    order: Order,
) -> Result<(), SortError> {
    trace!("{}: {low}..={high} of {} elements, {order}", Algorithm::Quick, v.len());
    if let Some(range) = checked_range(v.len(), low, high)? {
        quicksort::sort(&mut v[range], &mut |a: &T, b: &T| order.is_less(a, b));
    }
    Ok(())
}

/// Sorts the inclusive range `v[left..=right]` with merge sort.
///
/// Bounds are checked like in [`quicksort`].
pub fn mergesort<T: Ord>(
    v: &mut [T],
    left: usize,
    right: usize,
    order: Order,
) -> Result<(), SortError> {
    trace!("{}: {left}..={right} of {} elements, {order}", Algorithm::Merge, v.len());
    if let Some(range) = checked_range(v.len(), left, right)? {
        merge::sort(&mut v[range], &mut |a: &T, b: &T| order.is_less(a, b));
    }
    Ok(())
}

/// Sorts all of `v` with insertion sort.
pub fn insertion_sort<T: Ord>(v: &mut [T], order: Order) {
    trace!("{}: {} elements, {order}", Algorithm::Insertion, v.len());
    insertion_sort_shift_left(v, 0, &mut |a: &T, b: &T| order.is_less(a, b));
}

fn checked_range(
    len: usize,
    low: usize,
    high: usize,
) -> Result<Option<RangeInclusive<usize>>, SortError> {
    if low > high {
        // Only the empty range directly after `high` is accepted, e.g. `len..=len - 1`.
        if low - high > 1 || low > len {
            debug!("rejecting range {low}..={high} for length {len}");
            return Err(SortError::IndexOutOfBounds { index: low, len });
        }
        return Ok(None);
    }
    if high >= len {
        debug!("rejecting range {low}..={high} for length {len}");
        return Err(SortError::IndexOutOfBounds { index: high, len });
    }
    Ok(Some(low..=high))
}

#[inline(always)]
fn sort_impl<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], algorithm: Algorithm, is_less: &mut F) {
    if v.len() < 2 || mem::size_of::<T>() == 0 {
        return;
    }

    match algorithm {
        Algorithm::Quick => quicksort::sort(v, is_less),
        Algorithm::Merge => merge::sort(v, is_less),
        Algorithm::Insertion => insertion_sort_shift_left(v, 1, is_less),
    }
}
