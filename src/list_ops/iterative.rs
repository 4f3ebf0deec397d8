//! Single-pass loops over the sequence.
//!
//! Same contracts as [`recursive`](super::recursive), no recursion at all.

use crate::{Lookup, Sequence, Summable};

/// Totals the sequence. `sum([])` is zero.
///
/// Adds from the last element back to the first, the same order as
/// [`recursive::sum`](super::recursive::sum), so float rounding and integer
/// overflow match it exactly.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn sum<N: Summable>(sequence: &Sequence<N>) -> N {
    let elements: Vec<N> = sequence.iter().copied().collect();
    elements
        .into_iter()
        .rfold(N::ZERO, |total, element| element + total)
}

/// Removes duplicates, keeping each element at its first occurrence.
///
/// Only equality is required, so each element is checked against the
/// distinct elements collected so far.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn unique<T: PartialEq + Clone>(sequence: &Sequence<T>) -> Sequence<T> {
    let mut distinct: Vec<T> = Vec::new();
    for element in sequence {
        if !distinct.contains(element) {
            distinct.push(element.clone());
        }
    }
    distinct.into()
}

/// Returns `true` if some element equals `element`. Stops at the first match.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn contains<T: PartialEq>(element: &T, sequence: &Sequence<T>) -> bool {
    sequence.iter().any(|candidate| candidate == element)
}

/// Returns the first element equal to `element`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn find<'a, T: PartialEq>(element: &T, sequence: &'a Sequence<T>) -> Lookup<&'a T> {
    sequence.iter().find(|candidate| *candidate == element).into()
}

/// Returns the 0-based position of the first element equal to `element`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn index_of<T: PartialEq>(element: &T, sequence: &Sequence<T>) -> Option<usize> {
    sequence.iter().position(|candidate| candidate == element)
}

/// Reverses the sequence by consing each element onto the result.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn reverse<T: Clone>(sequence: &Sequence<T>) -> Sequence<T> {
    sequence
        .iter()
        .fold(Sequence::new(), |reversed, element| reversed.cons(element.clone()))
}

/// Keeps the elements satisfying `predicate`, in their original order.
///
/// A panic raised by `predicate` propagates to the caller.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn filter<T, P>(mut predicate: P, sequence: &Sequence<T>) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .filter(|element| predicate(*element))
        .cloned()
        .collect()
}
