//! Numbers that can be totalled.
//!
//! [`Summable`] is an additive monoid: an identity element [`Summable::ZERO`]
//! and an associative `+`. Every primitive integer and float implements it.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! ZERO + a == a
//! a + ZERO == a
//! (a + b) + c == a + (b + c)
//! ```
//!
//! Floats satisfy associativity only up to rounding.

use std::ops::Add;

/// A copyable number with an additive identity.
///
/// # Examples
///
/// ```rust
/// use recursia::Summable;
///
/// fn total<N: Summable>(values: &[N]) -> N {
///     values.iter().fold(N::ZERO, |accumulator, &value| accumulator + value)
/// }
///
/// assert_eq!(total(&[1, 10, 100, 1000]), 1111);
/// assert_eq!(total::<f64>(&[]), 0.0);
/// ```
pub trait Summable: Copy + Add<Output = Self> {
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_summable {
    ($zero:literal => $($number:ty),+ $(,)?) => {
        $(
            impl Summable for $number {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_summable!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_summable!(0.0 => f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(i64::MAX)]
    fn zero_is_identity(#[case] value: i64) {
        assert_eq!(i64::ZERO + value, value);
        assert_eq!(value + i64::ZERO, value);
    }

    #[rstest]
    fn float_zero() {
        assert!((f64::ZERO + 1.5 - 1.5).abs() < f64::EPSILON);
        assert!(f32::ZERO.abs() < f32::EPSILON);
    }
}
