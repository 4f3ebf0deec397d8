//! # recursia
//!
//! List algorithms written as explicit recursion: a base case for the empty
//! sequence and an inductive case that handles one element and delegates
//! the rest.
//!
//! ## Overview
//!
//! - **[`Sequence`]**: an immutable cons list; taking the rest is O(1)
//! - **[`list_ops`]**: `sum`, `unique`, `contains`, `find`, `index_of`,
//!   `reverse`, `filter`, each in a recursive, a stack-safe and an iterative
//!   form with identical results
//! - **[`interleaved`]**: a mutually recursive pair summing a sequence that
//!   alternates plain numbers and wrapped totals
//! - **[`control`]**: the [`Trampoline`](control::Trampoline) behind the
//!   stack-safe forms
//!
//! ## Feature Flags
//!
//! - `control`: `Trampoline` and the `stack_safe` modules (default)
//! - `tracing`: trace spans on the stack-safe and iterative entry points,
//!   and a debug event on interleaving errors (default)
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use recursia::prelude::*;
//!
//! let numbers = Sequence::from([1, 2, 3, 4, 0]);
//! assert_eq!(list_ops::index_of(&0, &numbers), Some(4));
//! assert_eq!(list_ops::find(&0, &numbers), Lookup::Found(&0));
//!
//! let mixed = alternating([1, 10, 5, 20, 2, 50]);
//! assert_eq!(sum_from_even_index(&mixed), Ok(88));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use recursia::prelude::*;
/// ```
pub mod prelude {
    pub use crate::interleaved::{
        Element, InterleaveError, Interleaved, Kind, Wrapped, alternating, sum_from_even_index,
        sum_from_odd_index,
    };
    pub use crate::list_ops;
    pub use crate::{Lookup, Sequence, Summable};

    #[cfg(feature = "control")]
    pub use crate::control::Trampoline;
}

#[cfg(feature = "control")]
pub mod control;

pub mod interleaved;
pub mod list_ops;

mod lookup;
mod sequence;
mod summable;

pub use lookup::Lookup;
pub use sequence::{IntoIter, Iter, Sequence};
pub use summable::Summable;
