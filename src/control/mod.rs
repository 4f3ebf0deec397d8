//! Control structures for recursion that must not grow the call stack.
//!
//! - [`Trampoline`]: stack-safe recursion, including mutual recursion
//!
//! # Examples
//!
//! ```rust
//! use recursia::control::Trampoline;
//!
//! fn sum_to(n: u64, accumulator: u64) -> Trampoline<u64> {
//!     if n == 0 {
//!         Trampoline::done(accumulator)
//!     } else {
//!         Trampoline::suspend(move || sum_to(n - 1, accumulator + n))
//!     }
//! }
//!
//! assert_eq!(sum_to(100_000, 0).run(), 5_000_050_000);
//! ```

mod trampoline;

pub use trampoline::{Thunk, Trampoline};
