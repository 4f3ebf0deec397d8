//! Stack-safe recursion via trampolining.
//!
//! A function that would call itself (or a partner) returns
//! [`Trampoline::suspend`] with the call wrapped in a closure instead.
//! [`Trampoline::run`] then evaluates the steps one after another in a loop,
//! so the depth of the recursion never reaches the call stack.
//!
//! Rust does not guarantee tail call elimination, which is why every
//! `stack_safe` operation in this crate is written against this type.
//!
//! # Examples
//!
//! ## Accumulating Recursion
//!
//! ```rust
//! use recursia::Sequence;
//! use recursia::control::Trampoline;
//!
//! fn length(sequence: Sequence<u32>, accumulator: usize) -> Trampoline<usize> {
//!     match sequence.uncons() {
//!         None => Trampoline::done(accumulator),
//!         Some((_, rest)) => {
//!             let rest = rest.clone();
//!             Trampoline::suspend(move || length(rest, accumulator + 1))
//!         }
//!     }
//! }
//!
//! let sequence: Sequence<u32> = (0..200_000).collect();
//! assert_eq!(length(sequence, 0).run(), 200_000);
//! ```
//!
//! ## Mutual Recursion
//!
//! ```rust
//! use recursia::control::Trampoline;
//!
//! fn is_even(n: u64) -> Trampoline<bool> {
//!     if n == 0 {
//!         Trampoline::done(true)
//!     } else {
//!         Trampoline::suspend(move || is_odd(n - 1))
//!     }
//! }
//!
//! fn is_odd(n: u64) -> Trampoline<bool> {
//!     if n == 0 {
//!         Trampoline::done(false)
//!     } else {
//!         Trampoline::suspend(move || is_even(n - 1))
//!     }
//! }
//!
//! assert!(is_even(100_000).run());
//! ```

/// A deferred next step of a trampolined computation.
pub type Thunk<A> = Box<dyn FnOnce() -> Trampoline<A> + 'static>;

/// A recursive computation producing an `A`, encoded as data.
///
/// # States
///
/// 1. `Done(A)` - finished with a value
/// 2. `Suspend(thunk)` - one more step to take
///
/// # Examples
///
/// ```rust
/// use recursia::control::Trampoline;
///
/// assert_eq!(Trampoline::done(42).run(), 42);
/// assert_eq!(Trampoline::suspend(|| Trampoline::done(42)).run(), 42);
/// ```
pub enum Trampoline<A> {
    /// The computation has completed with value `A`.
    Done(A),
    /// The computation needs another step; the thunk produces it.
    Suspend(Thunk<A>),
}

impl<A> Trampoline<A> {
    /// Creates a finished computation.
    #[inline]
    pub const fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Defers `thunk` until the trampoline is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursia::control::Trampoline;
    ///
    /// let trampoline = Trampoline::suspend(|| Trampoline::done("later"));
    /// assert!(!trampoline.is_done());
    /// assert_eq!(trampoline.run(), "later");
    /// ```
    #[inline]
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::Suspend(Box::new(thunk))
    }

    /// Returns `true` if no further step is needed.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Runs the computation to completion in constant stack space.
    pub fn run(self) -> A {
        let mut current = self;
        loop {
            match current {
                Self::Done(value) => return value,
                Self::Suspend(thunk) => current = thunk(),
            }
        }
    }

    /// Takes a single step.
    ///
    /// Returns the value if the computation had already finished, or the
    /// next state otherwise. Useful for counting or inspecting steps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recursia::control::Trampoline;
    ///
    /// let trampoline = Trampoline::suspend(|| Trampoline::done(1));
    /// let next = trampoline.step().unwrap_err();
    /// assert_eq!(next.step().ok(), Some(1));
    /// ```
    pub fn step(self) -> Result<A, Self> {
        match self {
            Self::Done(value) => Ok(value),
            Self::Suspend(thunk) => Err(thunk()),
        }
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for Trampoline<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Suspend(_) => formatter.debug_tuple("Suspend").field(&"<thunk>").finish(),
        }
    }
}
