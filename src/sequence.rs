//! Immutable, structurally shared sequence.
//!
//! [`Sequence`] is the list every algorithm in this crate consumes. It is a
//! cons list: a sequence is either empty or a head element followed by
//! another sequence. Taking the tail is O(1) and never copies, which makes
//! "process the head, recurse on the rest" as cheap as it reads.
//!
//! # Examples
//!
//! ```rust
//! use recursia::Sequence;
//!
//! let numbers = Sequence::new().cons(3).cons(2).cons(1);
//! assert_eq!(numbers.head(), Some(&1));
//! assert_eq!(numbers.len(), 3);
//!
//! // The original is preserved when a new sequence is built on top of it.
//! let extended = numbers.cons(0);
//! assert_eq!(numbers.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! let collected: Sequence<i32> = (1..=5).collect();
//! assert_eq!(collected.iter().sum::<i32>(), 15);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! numbers:  1 -> 2 -> 3 -> nil
//! extended: 0 -> [1 -> 2 -> 3 -> nil]   // shares every node of `numbers`
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

/// One cell of the list: an element and the sequence that follows it.
struct Node<T> {
    element: T,
    rest: Sequence<T>,
}

/// An ordered, finite, immutable sequence.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `cons`    | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `uncons`  | O(1)       |
/// | `len`     | O(1)       |
/// | `get`     | O(n)       |
///
/// # Examples
///
/// ```rust
/// use recursia::Sequence;
///
/// let sequence = Sequence::singleton(42);
/// assert_eq!(sequence.head(), Some(&42));
/// ```
pub struct Sequence<T> {
    node: Option<Rc<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursia::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            node: None,
            length: 0,
        }
    }

    /// Creates a sequence holding exactly one element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Builds a sequence from a `Vec`, keeping the `Vec`'s order.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut sequence = Self::new();
        while let Some(element) = elements.pop() {
            sequence = sequence.cons(element);
        }
        sequence
    }

    /// Returns a new sequence with `element` in front of this one.
    ///
    /// The receiver is shared, not copied.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursia::Sequence;
    ///
    /// let sequence = Sequence::new().cons(2).cons(1);
    /// assert_eq!(sequence.to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            node: Some(Rc::new(Node {
                element,
                rest: self.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns the first element, or `None` if the sequence is empty.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.node.as_ref().map(|node| &node.element)
    }

    /// Returns everything after the first element.
    ///
    /// The tail of an empty sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursia::Sequence;
    ///
    /// let sequence: Sequence<i32> = (1..=3).collect();
    /// assert_eq!(sequence.tail().to_vec(), vec![2, 3]);
    /// assert!(Sequence::<i32>::new().tail().is_empty());
    /// ```
    #[must_use]
    pub fn tail(&self) -> Self {
        self.node
            .as_ref()
            .map_or_else(Self::new, |node| node.rest.clone())
    }

    /// Splits the sequence into its head and a borrow of the rest.
    ///
    /// This is the decomposition every recursive algorithm in the crate is
    /// written against: `None` is the base case, `Some((head, rest))` the
    /// inductive one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursia::Sequence;
    ///
    /// fn length<T>(sequence: &Sequence<T>) -> usize {
    ///     match sequence.uncons() {
    ///         None => 0,
    ///         Some((_, rest)) => 1 + length(rest),
    ///     }
    /// }
    ///
    /// let sequence: Sequence<i32> = (1..=4).collect();
    /// assert_eq!(length(&sequence), 4);
    /// ```
    #[inline]
    pub fn uncons(&self) -> Option<(&T, &Self)> {
        self.node.as_deref().map(|node| (&node.element, &node.rest))
    }

    /// Returns the element at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self,
            remaining: self.length,
        }
    }
}

impl<T: Clone> Sequence<T> {
    /// Builds a sequence from a slice, cloning each element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursia::Sequence;
    ///
    /// let sequence = Sequence::from_slice(&[1, 2, 3]);
    /// assert_eq!(sequence.len(), 3);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self::build_from_vec(slice.to_vec())
    }

    /// Copies the elements into a `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            length: self.length,
        }
    }
}

impl<T> Drop for Sequence<T> {
    // Unlink uniquely owned nodes one at a time; the derived drop would
    // recurse once per node and overflow on long sequences.
    fn drop(&mut self) {
        let mut current = self.node.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut node) => current = node.rest.node.take(),
                Err(_) => break,
            }
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Borrowing iterator over a [`Sequence`].
pub struct Iter<'a, T> {
    current: &'a Sequence<T>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, rest) = self.current.uncons()?;
        self.current = rest;
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`Sequence`]; clones elements out of shared nodes.
pub struct IntoIter<T> {
    current: Sequence<T>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.current.head()?.clone();
        self.current = self.current.tail();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.current.len(), Some(self.current.len()))
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::build_from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::build_from_vec(Vec::from(elements))
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { current: self }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Equality, Hashing, Formatting
// =============================================================================

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Sequence::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
