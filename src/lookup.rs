//! The result of searching a sequence.
//!
//! [`Lookup`] keeps "found a value" and "found nothing" apart even when the
//! value found is `0`, `false` or an empty string.
//!
//! # Examples
//!
//! ```rust
//! use recursia::{Lookup, Sequence, list_ops};
//!
//! let numbers: Sequence<i32> = vec![1, 2, 3, 4, 0].into();
//!
//! assert_eq!(list_ops::find(&0, &numbers), Lookup::Found(&0));
//! assert_eq!(list_ops::find(&9, &numbers), Lookup::NotFound);
//! ```

/// Either the element a search matched, or the absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lookup<T> {
    /// The search matched this element.
    Found(T),
    /// No element matched.
    NotFound,
}

impl<T> Lookup<T> {
    /// Returns `true` for [`Lookup::Found`].
    #[inline]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns `true` for [`Lookup::NotFound`].
    #[inline]
    pub const fn is_not_found(&self) -> bool {
        !self.is_found()
    }

    /// Borrows the found element, if any.
    pub const fn as_ref(&self) -> Lookup<&T> {
        match self {
            Self::Found(value) => Lookup::Found(value),
            Self::NotFound => Lookup::NotFound,
        }
    }

    /// Applies `function` to the found element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursia::Lookup;
    ///
    /// assert_eq!(Lookup::Found(21).map(|x| x * 2), Lookup::Found(42));
    /// assert_eq!(Lookup::<i32>::NotFound.map(|x| x * 2), Lookup::NotFound);
    /// ```
    pub fn map<U, F>(self, function: F) -> Lookup<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Found(value) => Lookup::Found(function(value)),
            Self::NotFound => Lookup::NotFound,
        }
    }

    /// Converts into the standard library's `Option`.
    pub fn found(self) -> Option<T> {
        self.into()
    }
}

impl<T: Clone> Lookup<&T> {
    /// Clones the borrowed element out of the lookup.
    pub fn cloned(self) -> Lookup<T> {
        self.map(Clone::clone)
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::NotFound, Self::Found)
    }
}

impl<T> From<Lookup<T>> for Option<T> {
    fn from(lookup: Lookup<T>) -> Self {
        match lookup {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn found_zero_is_still_found() {
        let lookup = Lookup::Found(0);
        assert!(lookup.is_found());
        assert_eq!(lookup.found(), Some(0));
    }

    #[rstest]
    fn found_false_is_still_found() {
        assert!(Lookup::Found(false).is_found());
    }

    #[rstest]
    #[case(Lookup::Found(0), false)]
    #[case(Lookup::NotFound, true)]
    fn is_not_found_is_the_complement(#[case] lookup: Lookup<i32>, #[case] expected: bool) {
        assert_eq!(lookup.is_not_found(), expected);
        assert_eq!(lookup.is_found(), !expected);
    }

    #[rstest]
    fn as_ref_borrows_without_consuming() {
        let owned = Lookup::Found(String::from("abc"));
        assert_eq!(owned.as_ref().map(String::len), Lookup::Found(3));
        assert_eq!(owned, Lookup::Found(String::from("abc")));
        assert_eq!(Lookup::<String>::NotFound.as_ref(), Lookup::NotFound);
    }

    #[rstest]
    #[case(Some(3), Lookup::Found(3))]
    #[case(None, Lookup::NotFound)]
    fn converts_from_option(#[case] option: Option<i32>, #[case] expected: Lookup<i32>) {
        assert_eq!(Lookup::from(option), expected);
    }

    #[rstest]
    fn cloned_detaches_from_borrow() {
        let text = String::from("x");
        let lookup = Lookup::Found(&text).cloned();
        assert_eq!(lookup, Lookup::Found(String::from("x")));
    }
}
