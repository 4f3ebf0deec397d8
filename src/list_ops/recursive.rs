//! Plain structural recursion.
//!
//! Each operation matches on [`Sequence::uncons`]: `None` is the base case,
//! `Some((head, rest))` handles one element and recurses on `rest`. The
//! recursion depth equals the length of the input; prefer
//! [`stack_safe`](super::stack_safe) or [`iterative`](super::iterative) for
//! long sequences.

use crate::{Lookup, Sequence, Summable};

/// Totals the sequence. `sum([])` is zero.
///
/// # Examples
///
/// ```rust
/// use recursia::{Sequence, list_ops::recursive};
///
/// assert_eq!(recursive::sum(&Sequence::from([1, 10, 100, 1000])), 1111);
/// assert_eq!(recursive::sum::<i32>(&Sequence::new()), 0);
/// ```
pub fn sum<N: Summable>(sequence: &Sequence<N>) -> N {
    match sequence.uncons() {
        None => N::ZERO,
        Some((&head, rest)) => head + sum(rest),
    }
}

/// Removes duplicates, keeping each element at its first occurrence.
///
/// # Examples
///
/// ```rust
/// use recursia::{Sequence, list_ops::recursive};
///
/// let numbers = Sequence::from([1, 2, 2, 3, 3, 3]);
/// assert_eq!(recursive::unique(&numbers), Sequence::from([1, 2, 3]));
/// ```
pub fn unique<T: PartialEq + Clone>(sequence: &Sequence<T>) -> Sequence<T> {
    reverse(&collect_unseen(sequence, Sequence::new()))
}

/// Carries the elements seen so far, most recent first.
fn collect_unseen<T: PartialEq + Clone>(sequence: &Sequence<T>, seen: Sequence<T>) -> Sequence<T> {
    match sequence.uncons() {
        None => seen,
        Some((head, rest)) if contains(head, &seen) => collect_unseen(rest, seen),
        Some((head, rest)) => collect_unseen(rest, seen.cons(head.clone())),
    }
}

/// Returns `true` if some element equals `element`.
///
/// Stops at the first match.
///
/// # Examples
///
/// ```rust
/// use recursia::{Sequence, list_ops::recursive};
///
/// let letters = Sequence::from(['a', 'b', 'c']);
/// assert!(recursive::contains(&'b', &letters));
/// assert!(!recursive::contains(&'z', &letters));
/// ```
pub fn contains<T: PartialEq>(element: &T, sequence: &Sequence<T>) -> bool {
    match sequence.uncons() {
        None => false,
        Some((head, rest)) => head == element || contains(element, rest),
    }
}

/// Returns the first element equal to `element`.
///
/// # Examples
///
/// ```rust
/// use recursia::{Lookup, Sequence, list_ops::recursive};
///
/// let numbers = Sequence::from([1, 2, 3, 4, 0]);
/// assert_eq!(recursive::find(&0, &numbers), Lookup::Found(&0));
/// assert_eq!(recursive::find(&7, &numbers), Lookup::NotFound);
/// ```
pub fn find<'a, T: PartialEq>(element: &T, sequence: &'a Sequence<T>) -> Lookup<&'a T> {
    match sequence.uncons() {
        None => Lookup::NotFound,
        Some((head, _)) if head == element => Lookup::Found(head),
        Some((_, rest)) => find(element, rest),
    }
}

/// Returns the 0-based position of the first element equal to `element`.
///
/// # Examples
///
/// ```rust
/// use recursia::{Sequence, list_ops::recursive};
///
/// let numbers = Sequence::from([1, 2, 3, 4, 0]);
/// assert_eq!(recursive::index_of(&0, &numbers), Some(4));
/// assert_eq!(recursive::index_of(&0, &Sequence::new()), None);
/// ```
pub fn index_of<T: PartialEq>(element: &T, sequence: &Sequence<T>) -> Option<usize> {
    index_from(element, sequence, 0)
}

fn index_from<T: PartialEq>(element: &T, sequence: &Sequence<T>, offset: usize) -> Option<usize> {
    match sequence.uncons() {
        None => None,
        Some((head, _)) if head == element => Some(offset),
        Some((_, rest)) => index_from(element, rest, offset + 1),
    }
}

/// Reverses the sequence: the reversal of the rest, with the head appended.
///
/// # Examples
///
/// ```rust
/// use recursia::{Sequence, list_ops::recursive};
///
/// assert_eq!(recursive::reverse(&Sequence::from([1, 2, 3])), Sequence::from([3, 2, 1]));
/// ```
pub fn reverse<T: Clone>(sequence: &Sequence<T>) -> Sequence<T> {
    match sequence.uncons() {
        None => Sequence::new(),
        Some((head, rest)) => append(&reverse(rest), head.clone()),
    }
}

/// Copies `sequence` with `element` added at the end.
fn append<T: Clone>(sequence: &Sequence<T>, element: T) -> Sequence<T> {
    match sequence.uncons() {
        None => Sequence::singleton(element),
        Some((head, rest)) => append(rest, element).cons(head.clone()),
    }
}

/// Keeps the elements satisfying `predicate`, in their original order.
///
/// A panic raised by `predicate` propagates to the caller.
///
/// # Examples
///
/// ```rust
/// use recursia::{Sequence, list_ops::recursive};
///
/// let numbers = Sequence::from([-1, 2, -3, 4]);
/// assert_eq!(recursive::filter(|n: &i32| *n > 0, &numbers), Sequence::from([2, 4]));
/// ```
pub fn filter<T, P>(mut predicate: P, sequence: &Sequence<T>) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter_with(&mut predicate, sequence)
}

fn filter_with<T, P>(predicate: &mut P, sequence: &Sequence<T>) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    match sequence.uncons() {
        None => Sequence::new(),
        Some((head, rest)) => {
            // The predicate sees elements front to back.
            let keep = predicate(head);
            let filtered = filter_with(predicate, rest);
            if keep { filtered.cons(head.clone()) } else { filtered }
        }
    }
}
