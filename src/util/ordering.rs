//! Fallible ordering for partially ordered values
//!
//! Directions only promise `PartialOrd`. The standard sorts assume a total
//! order and may panic when the comparator lies, so sorting goes through a
//! merge sort that stops at the first incomparable pair instead.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::CodingError;

/// Compare two values, failing with `IncomparableDirection` when they have no order.
pub fn try_cmp<T: PartialOrd + Debug + ?Sized>(left: &T, right: &T) -> Result<Ordering, CodingError> {
    left.partial_cmp(right)
        .ok_or_else(|| CodingError::incomparable(&left, &right))
}

/// Stable merge sort driven by a fallible comparator.
///
/// Time: O(n log n) comparisons, O(n) scratch
pub fn try_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Result<Vec<T>, CodingError>
where
    F: FnMut(&T, &T) -> Result<Ordering, CodingError>,
{
    merge_sort(items, &mut compare)
}

fn merge_sort<T, F>(mut items: Vec<T>, compare: &mut F) -> Result<Vec<T>, CodingError>
where
    F: FnMut(&T, &T) -> Result<Ordering, CodingError>,
{
    if items.len() <= 1 {
        return Ok(items);
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare)?;
    let right = merge_sort(right, compare)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Ties keep the left element first (stability)
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l)? == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);

    Ok(merged)
}
