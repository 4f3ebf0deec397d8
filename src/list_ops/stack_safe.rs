//! The recursive decomposition, driven by a [`Trampoline`].
//!
//! Every recursive call becomes a [`Trampoline::suspend`] and is evaluated
//! in a loop, so these functions accept sequences of any length. The
//! suspended steps own their inputs: the rest of the sequence is a cheap
//! shared clone, and elements are cloned where a result needs them.

use crate::control::Trampoline;
use crate::{Lookup, Sequence, Summable};

/// Totals the sequence. `sum([])` is zero.
///
/// The sequence is reversed first and then added back to front, so the
/// additions happen in the same order as [`recursive::sum`](super::recursive::sum).
///
/// # Examples
///
/// ```rust
/// use recursia::{Sequence, list_ops::stack_safe};
///
/// let numbers: Sequence<u64> = (1..=100_000).collect();
/// assert_eq!(stack_safe::sum(&numbers), 5_000_050_000);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn sum<N: Summable + 'static>(sequence: &Sequence<N>) -> N {
    let reversed = reverse_step(sequence.clone(), Sequence::new()).run();
    sum_step(reversed, N::ZERO).run()
}

fn sum_step<N: Summable + 'static>(sequence: Sequence<N>, total: N) -> Trampoline<N> {
    match sequence.uncons() {
        None => Trampoline::done(total),
        Some((&head, rest)) => {
            let rest = rest.clone();
            Trampoline::suspend(move || sum_step(rest, head + total))
        }
    }
}

/// Removes duplicates, keeping each element at its first occurrence.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn unique<T: PartialEq + Clone + 'static>(sequence: &Sequence<T>) -> Sequence<T> {
    let seen = unique_step(sequence.clone(), Sequence::new()).run();
    reverse_step(seen, Sequence::new()).run()
}

fn unique_step<T: PartialEq + Clone + 'static>(
    sequence: Sequence<T>,
    seen: Sequence<T>,
) -> Trampoline<Sequence<T>> {
    match sequence.uncons() {
        None => Trampoline::done(seen),
        Some((head, rest)) => {
            let seen = if index_step(head.clone(), seen.clone(), 0).run().is_some() {
                seen
            } else {
                seen.cons(head.clone())
            };
            let rest = rest.clone();
            Trampoline::suspend(move || unique_step(rest, seen))
        }
    }
}

/// Returns `true` if some element equals `element`. Stops at the first match.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn contains<T: PartialEq + Clone + 'static>(element: &T, sequence: &Sequence<T>) -> bool {
    index_of(element, sequence).is_some()
}

/// Returns a clone of the first element equal to `element`.
///
/// # Examples
///
/// ```rust
/// use recursia::{Lookup, Sequence, list_ops::stack_safe};
///
/// let words = Sequence::from([String::new(), String::from("a")]);
/// assert_eq!(stack_safe::find(&String::new(), &words), Lookup::Found(String::new()));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn find<T: PartialEq + Clone + 'static>(element: &T, sequence: &Sequence<T>) -> Lookup<T> {
    find_step(element.clone(), sequence.clone()).run()
}

fn find_step<T: PartialEq + Clone + 'static>(element: T, sequence: Sequence<T>) -> Trampoline<Lookup<T>> {
    match sequence.uncons() {
        None => Trampoline::done(Lookup::NotFound),
        Some((head, _)) if *head == element => Trampoline::done(Lookup::Found(head.clone())),
        Some((_, rest)) => {
            let rest = rest.clone();
            Trampoline::suspend(move || find_step(element, rest))
        }
    }
}

/// Returns the 0-based position of the first element equal to `element`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn index_of<T: PartialEq + Clone + 'static>(element: &T, sequence: &Sequence<T>) -> Option<usize> {
    index_step(element.clone(), sequence.clone(), 0).run()
}

fn index_step<T: PartialEq + 'static>(
    element: T,
    sequence: Sequence<T>,
    offset: usize,
) -> Trampoline<Option<usize>> {
    match sequence.uncons() {
        None => Trampoline::done(None),
        Some((head, _)) if *head == element => Trampoline::done(Some(offset)),
        Some((_, rest)) => {
            let rest = rest.clone();
            Trampoline::suspend(move || index_step(element, rest, offset + 1))
        }
    }
}

/// Reverses the sequence.
///
/// Each head is placed in front of the reversal built so far, which is the
/// same result as appending it behind the reversal of the rest.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn reverse<T: Clone + 'static>(sequence: &Sequence<T>) -> Sequence<T> {
    reverse_step(sequence.clone(), Sequence::new()).run()
}

fn reverse_step<T: Clone + 'static>(
    sequence: Sequence<T>,
    reversed: Sequence<T>,
) -> Trampoline<Sequence<T>> {
    match sequence.uncons() {
        None => Trampoline::done(reversed),
        Some((head, rest)) => {
            let reversed = reversed.cons(head.clone());
            let rest = rest.clone();
            Trampoline::suspend(move || reverse_step(rest, reversed))
        }
    }
}

/// Keeps the elements satisfying `predicate`, in their original order.
///
/// A panic raised by `predicate` propagates to the caller.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn filter<T, P>(predicate: P, sequence: &Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool + 'static,
{
    let kept = filter_step(predicate, sequence.clone(), Sequence::new()).run();
    reverse_step(kept, Sequence::new()).run()
}

/// Carries the kept elements, most recent first.
fn filter_step<T, P>(mut predicate: P, sequence: Sequence<T>, kept: Sequence<T>) -> Trampoline<Sequence<T>>
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool + 'static,
{
    match sequence.uncons() {
        None => Trampoline::done(kept),
        Some((head, rest)) => {
            let kept = if predicate(head) {
                kept.cons(head.clone())
            } else {
                kept
            };
            let rest = rest.clone();
            Trampoline::suspend(move || filter_step(predicate, rest, kept))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DEEP: u32 = 200_000;

    fn deep() -> Sequence<u32> {
        (0..DEEP).collect()
    }

    #[rstest]
    fn deep_sum() {
        let sequence: Sequence<u64> = (1..=u64::from(DEEP)).collect();
        assert_eq!(sum(&sequence), u64::from(DEEP) * (u64::from(DEEP) + 1) / 2);
    }

    #[rstest]
    fn sum_adds_from_the_back() {
        assert_eq!(sum(&Sequence::from([1.0_f64, 1e16, -1e16])), 1.0);
        assert_eq!(sum(&Sequence::from([100i8, 100, -100])), 100);
    }

    #[rstest]
    fn deep_index_of_last() {
        assert_eq!(index_of(&(DEEP - 1), &deep()), Some(DEEP as usize - 1));
        assert!(contains(&(DEEP - 1), &deep()));
        assert_eq!(find(&DEEP, &deep()), Lookup::NotFound);
    }

    #[rstest]
    fn deep_reverse_and_filter() {
        let reversed = reverse(&deep());
        assert_eq!(reversed.head(), Some(&(DEEP - 1)));
        let evens = filter(|n: &u32| n % 2 == 0, &deep());
        assert_eq!(evens.len(), DEEP as usize / 2);
        assert_eq!(evens.head(), Some(&0));
    }

    #[rstest]
    fn unique_of_long_repetition() {
        let sequence: Sequence<u8> = (0..50_000).map(|n| (n % 3) as u8).collect();
        assert_eq!(unique(&sequence), Sequence::from([0, 1, 2]));
    }
}
