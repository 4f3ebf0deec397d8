//! Recursive list operations.
//!
//! Seven operations over a [`Sequence`](crate::Sequence), each defined by a
//! base case (the empty sequence) and an inductive case (one element, then
//! the rest):
//!
//! | Operation  | Result                                             |
//! |------------|----------------------------------------------------|
//! | `sum`      | total of the elements, zero when empty             |
//! | `unique`   | elements without duplicates, first occurrence kept |
//! | `contains` | whether an element is present                      |
//! | `find`     | the first equal element, as a [`Lookup`](crate::Lookup) |
//! | `index_of` | the 0-based position of the first equal element    |
//! | `reverse`  | the elements back to front                         |
//! | `filter`   | the elements satisfying a predicate, order kept    |
//!
//! Three strategies implement the same contracts:
//!
//! - [`recursive`]: direct structural recursion, one stack frame per element
//! - [`stack_safe`]: the same steps run on a [`Trampoline`](crate::control::Trampoline)
//! - [`iterative`]: plain loops
//!
//! The recursive strategy is re-exported here.
//!
//! # Examples
//!
//! ```rust
//! use recursia::{Sequence, list_ops};
//!
//! let numbers = Sequence::from([1, 2, 2, 3, 3, 3]);
//!
//! assert_eq!(list_ops::unique(&numbers), Sequence::from([1, 2, 3]));
//! assert_eq!(list_ops::sum(&numbers), 14);
//! assert_eq!(list_ops::reverse(&list_ops::reverse(&numbers)), numbers);
//! ```

pub mod iterative;
pub mod recursive;
#[cfg(feature = "control")]
pub mod stack_safe;

pub use recursive::{contains, filter, find, index_of, reverse, sum, unique};
