//! Folding a sequence that interleaves two kinds of element.
//!
//! The input alternates between plain numbers at even positions and
//! wrapped values exposing a `total` at odd positions, as produced by
//! flattening a list of `(number, wrapped)` pairs:
//!
//! ```text
//! [1, {total: 10}, 5, {total: 20}, 2, {total: 50}]
//! ```
//!
//! Two functions consume it: [`sum_from_even_index`] expects a plain
//! element first, [`sum_from_odd_index`] a wrapped one, and each hands the
//! rest of the sequence to the other. An odd-length sequence is fine; the
//! function expecting the missing slot sees an empty rest and returns zero.
//!
//! An element of the wrong kind for its slot is reported as
//! [`InterleaveError::ShapeMismatch`]. [`Interleaved`] holds the same data
//! as pairs, so its shape cannot be wrong.
//!
//! # Examples
//!
//! ```rust
//! use recursia::Sequence;
//! use recursia::interleaved::{Element, sum_from_even_index};
//!
//! let sequence = Sequence::from([
//!     Element::plain(1),
//!     Element::wrapped(10),
//!     Element::plain(5),
//!     Element::wrapped(20),
//!     Element::plain(2),
//!     Element::wrapped(50),
//! ]);
//!
//! assert_eq!(sum_from_even_index(&sequence), Ok(88));
//! ```

use std::fmt;

use thiserror::Error;

use crate::{Sequence, Summable};

pub mod iterative;
mod pairs;
mod recursive;
#[cfg(feature = "control")]
pub mod stack_safe;

pub use pairs::Interleaved;
pub use recursive::{sum_from_even_index, sum_from_odd_index};

/// A value exposing a numeric `total`, found at odd positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wrapped<N> {
    /// The contribution of this element to the sum.
    pub total: N,
}

impl<N> Wrapped<N> {
    /// Wraps `total`.
    pub const fn new(total: N) -> Self {
        Self { total }
    }
}

/// One element of an interleaved sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element<N> {
    /// A directly summable number.
    Plain(N),
    /// A wrapped value; its `total` is summed.
    Wrapped(Wrapped<N>),
}

impl<N> Element<N> {
    /// Creates a [`Element::Plain`].
    pub const fn plain(value: N) -> Self {
        Self::Plain(value)
    }

    /// Creates a [`Element::Wrapped`] with the given total.
    pub const fn wrapped(total: N) -> Self {
        Self::Wrapped(Wrapped::new(total))
    }

    /// Returns the kind of this element.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Plain(_) => Kind::Plain,
            Self::Wrapped(_) => Kind::Wrapped,
        }
    }
}

/// The two kinds of element an interleaved sequence alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// Expected at even positions.
    Plain,
    /// Expected at odd positions.
    Wrapped,
}

impl Kind {
    /// The kind expected in the slot after this one.
    pub const fn next(self) -> Self {
        match self {
            Self::Plain => Self::Wrapped,
            Self::Wrapped => Self::Plain,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => formatter.write_str("plain"),
            Self::Wrapped => formatter.write_str("wrapped"),
        }
    }
}

/// Errors raised while folding an interleaved sequence.
///
/// # Examples
///
/// ```rust
/// use recursia::interleaved::{InterleaveError, Kind};
///
/// let error = InterleaveError::ShapeMismatch {
///     position: 3,
///     expected: Kind::Wrapped,
///     found: Kind::Plain,
/// };
/// assert_eq!(
///     error.to_string(),
///     "expected a wrapped element at position 3, found a plain element"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterleaveError {
    /// An element sits in a slot reserved for the other kind.
    #[error("expected a {expected} element at position {position}, found a {found} element")]
    ShapeMismatch {
        /// Offset of the element in the sequence given to the outermost call.
        position: usize,
        /// The kind the slot requires.
        expected: Kind,
        /// The kind actually present.
        found: Kind,
    },
}

impl InterleaveError {
    pub(crate) fn shape_mismatch(position: usize, expected: Kind, found: Kind) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(position, %expected, %found, "interleaved sequence out of shape");
        Self::ShapeMismatch {
            position,
            expected,
            found,
        }
    }
}

/// Reads the contribution of `element` if it has the `expected` kind.
pub(crate) fn contribution<N: Summable>(
    element: &Element<N>,
    expected: Kind,
    position: usize,
) -> Result<N, InterleaveError> {
    match (element, expected) {
        (Element::Plain(value), Kind::Plain) => Ok(*value),
        (Element::Wrapped(wrapped), Kind::Wrapped) => Ok(wrapped.total),
        (element, expected) => Err(InterleaveError::shape_mismatch(
            position,
            expected,
            element.kind(),
        )),
    }
}

/// Builds an interleaved sequence from alternating values, starting plain.
///
/// # Examples
///
/// ```rust
/// use recursia::interleaved::{Element, alternating};
///
/// let sequence = alternating([1, 10, 5]);
/// assert_eq!(sequence.to_vec(), vec![Element::plain(1), Element::wrapped(10), Element::plain(5)]);
/// ```
pub fn alternating<N, I>(values: I) -> Sequence<Element<N>>
where
    I: IntoIterator<Item = N>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            if index % 2 == 0 {
                Element::Plain(value)
            } else {
                Element::wrapped(value)
            }
        })
        .collect()
}
