use super::{Element, InterleaveError, Kind, Wrapped, contribution};
use crate::{Sequence, Summable};

/// An interleaved sequence stored as `(plain, wrapped)` pairs.
///
/// Every value of this type alternates correctly: plain values can only sit
/// at even positions and wrapped values at odd ones. An optional trailing
/// plain value covers odd lengths.
///
/// # Examples
///
/// ```rust
/// use recursia::interleaved::{Interleaved, Wrapped, sum_from_even_index};
///
/// let interleaved = Interleaved::from_pairs([
///     (1, Wrapped::new(10)),
///     (5, Wrapped::new(20)),
///     (2, Wrapped::new(50)),
/// ]);
///
/// assert_eq!(interleaved.total(), 88);
/// assert_eq!(sum_from_even_index(&interleaved.to_sequence()), Ok(88));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interleaved<N> {
    pairs: Vec<(N, Wrapped<N>)>,
    trailing: Option<N>,
}

impl<N> Interleaved<N> {
    /// Creates an empty interleaved sequence.
    pub const fn new() -> Self {
        Self {
            pairs: Vec::new(),
            trailing: None,
        }
    }

    /// Collects pairs in order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, Wrapped<N>)>,
    {
        Self {
            pairs: pairs.into_iter().collect(),
            trailing: None,
        }
    }

    /// Sets the plain value that follows the last pair.
    #[must_use]
    pub fn with_trailing(mut self, value: N) -> Self {
        self.trailing = Some(value);
        self
    }

    /// Appends a pair after the existing ones.
    ///
    /// A trailing value, if present, stays at the end.
    pub fn push_pair(&mut self, plain: N, wrapped: Wrapped<N>) {
        self.pairs.push((plain, wrapped));
    }

    /// Returns the pairs.
    pub fn pairs(&self) -> &[(N, Wrapped<N>)] {
        &self.pairs
    }

    /// Returns the trailing plain value.
    pub const fn trailing(&self) -> Option<&N> {
        self.trailing.as_ref()
    }

    /// Number of elements once flattened.
    pub fn len(&self) -> usize {
        self.pairs.len() * 2 + usize::from(self.trailing.is_some())
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<N: Summable> Interleaved<N> {
    /// Sums every plain value and every wrapped total.
    ///
    /// Equals [`sum_from_even_index`](super::sum_from_even_index) of
    /// [`to_sequence`](Self::to_sequence), which cannot fail here. The
    /// additions run from the last element back, like the recursive fold.
    pub fn total(&self) -> N {
        let tail = self.trailing.map_or(N::ZERO, |value| value + N::ZERO);
        self.pairs
            .iter()
            .rfold(tail, |total, (plain, wrapped)| *plain + (wrapped.total + total))
    }

    /// Flattens into an interleaved [`Sequence`] starting with a plain element.
    pub fn to_sequence(&self) -> Sequence<Element<N>> {
        self.pairs
            .iter()
            .flat_map(|&(plain, wrapped)| [Element::Plain(plain), Element::Wrapped(wrapped)])
            .chain(self.trailing.map(Element::Plain))
            .collect()
    }
}

impl<N> Default for Interleaved<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Summable> TryFrom<&Sequence<Element<N>>> for Interleaved<N> {
    type Error = InterleaveError;

    /// Regroups a flat sequence into pairs, checking that it starts plain
    /// and alternates from there.
    fn try_from(sequence: &Sequence<Element<N>>) -> Result<Self, Self::Error> {
        let mut interleaved = Self::new();
        let mut pending: Option<N> = None;
        for (position, element) in sequence.iter().enumerate() {
            match pending.take() {
                None => pending = Some(contribution(element, Kind::Plain, position)?),
                Some(plain) => {
                    let total = contribution(element, Kind::Wrapped, position)?;
                    interleaved.push_pair(plain, Wrapped::new(total));
                }
            }
        }
        interleaved.trailing = pending;
        Ok(interleaved)
    }
}
