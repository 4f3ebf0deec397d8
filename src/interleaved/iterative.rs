//! The interleaved fold as one pass with a parity check.

use super::{Element, InterleaveError, Kind, contribution};
use crate::{Sequence, Summable};

/// Sums an interleaved sequence whose first element has kind `start`.
///
/// `sum_interleaved(sequence, Kind::Plain)` equals
/// [`sum_from_even_index`](super::sum_from_even_index) and
/// `sum_interleaved(sequence, Kind::Wrapped)` equals
/// [`sum_from_odd_index`](super::sum_from_odd_index), errors included.
/// The shape is checked front to back before anything is added, and the
/// contributions are then added from the last one back.
///
/// # Errors
///
/// Returns [`InterleaveError::ShapeMismatch`] for the first element whose
/// kind does not match its slot.
///
/// # Examples
///
/// ```rust
/// use recursia::interleaved::{Kind, alternating, iterative};
///
/// let sequence = alternating([1, 10, 5, 20, 2, 50]);
/// assert_eq!(iterative::sum_interleaved(&sequence, Kind::Plain), Ok(88));
/// assert!(iterative::sum_interleaved(&sequence, Kind::Wrapped).is_err());
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(length = sequence.len(), start = %start))
)]
pub fn sum_interleaved<N: Summable>(
    sequence: &Sequence<Element<N>>,
    start: Kind,
) -> Result<N, InterleaveError> {
    let mut contributions = Vec::with_capacity(sequence.len());
    for (position, element) in sequence.iter().enumerate() {
        let expected = if position % 2 == 0 { start } else { start.next() };
        contributions.push(contribution(element, expected, position)?);
    }
    Ok(contributions
        .into_iter()
        .rfold(N::ZERO, |total, value| value + total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Kind::Plain, Ok(0.0))]
    #[case(Kind::Wrapped, Ok(0.0))]
    fn empty_sums_to_zero(#[case] start: Kind, #[case] expected: Result<f64, InterleaveError>) {
        assert_eq!(sum_interleaved(&Sequence::new(), start), expected);
    }

    #[rstest]
    fn adds_contributions_from_the_back() {
        let sequence = crate::interleaved::alternating([1.0_f64, 1e16, -1e16]);
        assert_eq!(sum_interleaved(&sequence, Kind::Plain), Ok(1.0));
    }

    #[rstest]
    fn float_totals() {
        let sequence = Sequence::from([Element::plain(0.5), Element::wrapped(1.25)]);
        assert_eq!(sum_interleaved(&sequence, Kind::Plain), Ok(1.75));
    }
}
