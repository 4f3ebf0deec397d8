//! The mutual recursion of the interleaved fold on a [`Trampoline`].
//!
//! Each function returns a suspended call of its partner, so the two can
//! alternate over sequences of any length. The pair only checks the shape
//! and collects contributions; a second loop adds them from the back, in
//! the order the recursive pair adds them on the way out.

use super::{Element, InterleaveError, Kind, contribution};
use crate::control::Trampoline;
use crate::{Sequence, Summable};

/// Contributions validated so far, most recent first.
type Step<N> = Trampoline<Result<Sequence<N>, InterleaveError>>;

/// Stack-safe [`sum_from_even_index`](super::sum_from_even_index).
///
/// # Errors
///
/// Returns [`InterleaveError::ShapeMismatch`] for the first element whose
/// kind does not match its slot.
///
/// # Examples
///
/// ```rust
/// use recursia::interleaved::{alternating, stack_safe};
///
/// let sequence = alternating((0..100_000).map(|_| 1u64));
/// assert_eq!(stack_safe::sum_from_even_index(&sequence), Ok(100_000));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn sum_from_even_index<N: Summable + 'static>(
    sequence: &Sequence<Element<N>>,
) -> Result<N, InterleaveError> {
    even_step(sequence.clone(), 0, Sequence::new())
        .run()
        .map(|pending| total_step(pending, N::ZERO).run())
}

/// Stack-safe [`sum_from_odd_index`](super::sum_from_odd_index).
///
/// # Errors
///
/// Returns [`InterleaveError::ShapeMismatch`] for the first element whose
/// kind does not match its slot.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len()))
)]
pub fn sum_from_odd_index<N: Summable + 'static>(
    sequence: &Sequence<Element<N>>,
) -> Result<N, InterleaveError> {
    odd_step(sequence.clone(), 0, Sequence::new())
        .run()
        .map(|pending| total_step(pending, N::ZERO).run())
}

fn even_step<N: Summable + 'static>(
    sequence: Sequence<Element<N>>,
    position: usize,
    pending: Sequence<N>,
) -> Step<N> {
    match sequence.uncons() {
        None => Trampoline::done(Ok(pending)),
        Some((head, rest)) => match contribution(head, Kind::Plain, position) {
            Ok(value) => {
                let rest = rest.clone();
                Trampoline::suspend(move || odd_step(rest, position + 1, pending.cons(value)))
            }
            Err(error) => Trampoline::done(Err(error)),
        },
    }
}

fn odd_step<N: Summable + 'static>(
    sequence: Sequence<Element<N>>,
    position: usize,
    pending: Sequence<N>,
) -> Step<N> {
    match sequence.uncons() {
        None => Trampoline::done(Ok(pending)),
        Some((head, rest)) => match contribution(head, Kind::Wrapped, position) {
            Ok(value) => {
                let rest = rest.clone();
                Trampoline::suspend(move || even_step(rest, position + 1, pending.cons(value)))
            }
            Err(error) => Trampoline::done(Err(error)),
        },
    }
}

/// Adds the pending contributions, last element of the input first.
fn total_step<N: Summable + 'static>(pending: Sequence<N>, total: N) -> Trampoline<N> {
    match pending.uncons() {
        None => Trampoline::done(total),
        Some((&value, rest)) => {
            let rest = rest.clone();
            Trampoline::suspend(move || total_step(rest, value + total))
        }
    }
}
