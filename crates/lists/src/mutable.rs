//! In-place operations.
//!
//! Length-preserving operations take `&mut [T]`; operations that grow or
//! shrink the sequence take `&mut Vec<T>`. Every fallible operation
//! validates its arguments before touching the sequence, so an `Err` leaves
//! the caller's value exactly as it was.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;
use std::ops::{Range, RangeBounds};

use rand::Rng;

use crate::error::Result;
use crate::util::{check_element_index, check_insert_index, check_non_empty, normalize_range};

pub fn insert_first<T>(list: &mut Vec<T>, element: T) {
    list.insert(0, element);
}

pub fn insert_last<T>(list: &mut Vec<T>, element: T) {
    list.push(element);
}

/// Inserts `element` so that it ends up at `index`. Valid for `0..=len`.
pub fn insert_at<T>(list: &mut Vec<T>, index: usize, element: T) -> Result<()> {
    check_insert_index(index, list.len())?;
    list.insert(index, element);
    Ok(())
}

pub fn insert_all_first<T, I: IntoIterator<Item = T>>(list: &mut Vec<T>, elements: I) {
    list.splice(0..0, elements);
}

pub fn insert_all<T, I: IntoIterator<Item = T>>(list: &mut Vec<T>, elements: I) {
    list.extend(elements);
}

pub fn insert_all_last<T, I: IntoIterator<Item = T>>(list: &mut Vec<T>, elements: I) {
    insert_all(list, elements);
}

/// Inserts `elements` in order starting at `index`. Valid for `0..=len`.
pub fn insert_all_at<T, I: IntoIterator<Item = T>>(
    list: &mut Vec<T>,
    index: usize,
    elements: I,
) -> Result<()> {
    check_insert_index(index, list.len())?;
    list.splice(index..index, elements);
    Ok(())
}

pub fn remove_first<T>(list: &mut Vec<T>) -> Result<T> {
    check_non_empty(list.len())?;
    Ok(list.remove(0))
}

pub fn remove_last<T>(list: &mut Vec<T>) -> Result<T> {
    check_non_empty(list.len())?;
    Ok(list.remove(list.len() - 1))
}

pub fn remove_at<T>(list: &mut Vec<T>, index: usize) -> Result<T> {
    check_element_index(index, list.len())?;
    Ok(list.remove(index))
}

/// Removes the first element equal to `element`, or appends it if there is
/// none. Returns whether `element` is present afterwards.
pub fn toggle<T: PartialEq>(list: &mut Vec<T>, element: T) -> bool {
    match list.iter().position(|item| *item == element) {
        Some(index) => {
            list.remove(index);
            false
        }
        None => {
            list.push(element);
            true
        }
    }
}

/// Removes the elements whose indices fall in `range`.
///
/// Ranges are half-open like every std range: `1..3` removes indices 1 and
/// 2. Pass `1..=3` to include the upper bound.
pub fn filter_out_range<T, R: RangeBounds<usize>>(list: &mut Vec<T>, range: R) -> Result<()> {
    let range = normalize_range(range, list.len())?;
    list.drain(range);
    Ok(())
}

/// Keeps only the elements whose indices fall in `range`. Same bound
/// convention as [`filter_out_range`].
pub fn filter_in_range<T, R: RangeBounds<usize>>(list: &mut Vec<T>, range: R) -> Result<()> {
    let Range { start, end } = normalize_range(range, list.len())?;
    list.truncate(end);
    list.drain(..start);
    Ok(())
}

pub fn filter<T, F: FnMut(&T) -> bool>(list: &mut Vec<T>, mut predicate: F) {
    list.retain(|item| predicate(item));
}

/// Like [`filter`], with each element's index before filtering.
pub fn filter_indexed<T, F: FnMut(&T, usize) -> bool>(list: &mut Vec<T>, mut predicate: F) {
    let mut index = 0;
    list.retain(|item| {
        let keep = predicate(item, index);
        index += 1;
        keep
    });
}

pub fn reverse<T>(list: &mut [T]) {
    if list.len() < 2 {
        return;
    }

    let mut left = 0;
    let mut right = list.len() - 1;
    while left < right {
        list.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Builds a sequence of `count` elements, the `i`-th being `generator(i)`.
pub fn times<T, F: FnMut(usize) -> T>(count: usize, generator: F) -> Vec<T> {
    (0..count).map(generator).collect()
}

/// Drops every element equal to an earlier one, keeping first occurrences
/// in their original order. Quadratic; only needs `PartialEq`.
pub fn uniquify<T: PartialEq>(list: &mut Vec<T>) {
    // list[..kept] holds the distinct values seen so far, list[kept..i] only
    // duplicates of them.
    let mut kept = 0;
    for i in 0..list.len() {
        if !list[..kept].contains(&list[i]) {
            list.swap(kept, i);
            kept += 1;
        }
    }
    list.truncate(kept);
}

/// Same result as [`uniquify`] in linear time for hashable elements.
pub fn uniquify_hashed<T: Hash + Eq>(list: &mut Vec<T>) {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(list.len());
        list.iter().map(|item| seen.insert(item)).collect()
    };
    let mut keep = keep.into_iter();
    list.retain(|_| keep.next().unwrap_or(false));
}

#[inline]
fn ordering_from_less<T, F: FnMut(&T, &T) -> bool>(less: &mut F, a: &T, b: &T) -> Ordering {
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Stable sort by a strict "less than" predicate.
///
/// `less` must be a strict weak ordering; otherwise the resulting order is
/// unspecified and std's sort may panic.
pub fn sort<T, F: FnMut(&T, &T) -> bool>(list: &mut [T], mut less: F) {
    list.sort_by(|a, b| ordering_from_less(&mut less, a, b));
}

/// Unstable counterpart of [`sort`]: equal elements may be reordered.
pub fn sort_unstable<T, F: FnMut(&T, &T) -> bool>(list: &mut [T], mut less: F) {
    list.sort_unstable_by(|a, b| ordering_from_less(&mut less, a, b));
}

/// Fisher-Yates shuffle drawing from `rng`.
///
/// Walks from the last index down to 1 and swaps position `i` with a
/// uniformly chosen `j` in `0..=i`, so every permutation is equally likely.
pub fn shuffle_rng<T, R: Rng + ?Sized>(list: &mut [T], rng: &mut R) {
    tracing::trace!(len = list.len(), "shuffle");
    for i in (1..list.len()).rev() {
        let j = rng.random_range(0..=i);
        list.swap(i, j);
    }
}

/// [`shuffle_rng`] with the thread-local generator.
pub fn shuffle<T>(list: &mut [T]) {
    shuffle_rng(list, &mut rand::rng());
}

/// Returns a uniformly chosen element without removing it.
pub fn pick_rng<'a, T, R: Rng + ?Sized>(list: &'a [T], rng: &mut R) -> Result<&'a T> {
    check_non_empty(list.len())?;
    let index = rng.random_range(0..list.len());
    tracing::trace!(index, len = list.len(), "pick");
    Ok(&list[index])
}

/// [`pick_rng`] with the thread-local generator.
pub fn pick<T>(list: &[T]) -> Result<&T> {
    pick_rng(list, &mut rand::rng())
}

pub fn clear<T>(list: &mut Vec<T>) {
    list.clear();
}

pub fn push<T>(list: &mut Vec<T>, element: T) {
    insert_last(list, element);
}

pub fn pop<T>(list: &mut Vec<T>) -> Result<T> {
    remove_last(list)
}
