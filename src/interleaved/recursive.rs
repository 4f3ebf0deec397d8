use super::{Element, InterleaveError, Kind, contribution};
use crate::{Sequence, Summable};

/// Sums an interleaved sequence whose first element is plain.
///
/// Base case: an empty sequence sums to zero. Inductive case: the plain head
/// plus [`sum_from_odd_index`] of the rest.
///
/// # Errors
///
/// Returns [`InterleaveError::ShapeMismatch`] for the first element whose
/// kind does not match its slot.
///
/// # Examples
///
/// ```rust
/// use recursia::interleaved::{alternating, sum_from_even_index};
///
/// assert_eq!(sum_from_even_index(&alternating([1, 10, 5, 20, 2, 50])), Ok(88));
/// assert_eq!(sum_from_even_index(&alternating([1, 10, 5])), Ok(16));
/// ```
pub fn sum_from_even_index<N: Summable>(sequence: &Sequence<Element<N>>) -> Result<N, InterleaveError> {
    even_from(sequence, 0)
}

/// Sums an interleaved sequence whose first element is wrapped.
///
/// Base case: an empty sequence sums to zero. Inductive case: the head's
/// `total` plus [`sum_from_even_index`] of the rest.
///
/// # Errors
///
/// Returns [`InterleaveError::ShapeMismatch`] for the first element whose
/// kind does not match its slot.
///
/// # Examples
///
/// ```rust
/// use recursia::Sequence;
/// use recursia::interleaved::{Element, sum_from_odd_index};
///
/// let sequence = Sequence::from([Element::wrapped(10), Element::plain(5)]);
/// assert_eq!(sum_from_odd_index(&sequence), Ok(15));
/// ```
pub fn sum_from_odd_index<N: Summable>(sequence: &Sequence<Element<N>>) -> Result<N, InterleaveError> {
    odd_from(sequence, 0)
}

fn even_from<N: Summable>(sequence: &Sequence<Element<N>>, position: usize) -> Result<N, InterleaveError> {
    match sequence.uncons() {
        None => Ok(N::ZERO),
        Some((head, rest)) => {
            let value = contribution(head, Kind::Plain, position)?;
            Ok(value + odd_from(rest, position + 1)?)
        }
    }
}

fn odd_from<N: Summable>(sequence: &Sequence<Element<N>>, position: usize) -> Result<N, InterleaveError> {
    match sequence.uncons() {
        None => Ok(N::ZERO),
        Some((head, rest)) => {
            let total = contribution(head, Kind::Wrapped, position)?;
            Ok(total + even_from(rest, position + 1)?)
        }
    }
}
