//! Exact integer scalars the engine can multiply over.
//!
//! Fixed-width scalars rely on `overflow-checks` to turn overflow into a
//! panic; `BigInt` never overflows.

use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};

/// Exact signed integer element of a [`Matrix`](crate::matrix::Matrix).
pub trait Scalar:
    Clone
    + Debug
    + Display
    + PartialEq
    + FromStr
    + Zero
    + One
    + ToPrimitive
    + Neg<Output = Self>
    + Send
    + Sync
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
{
    /// Multiply two scalars by reference.
    fn mul_ref(&self, other: &Self) -> Self;

    /// Convert a small integer into this scalar.
    fn from_i64(value: i64) -> Self;
}

macro_rules! impl_scalar_primitive {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn mul_ref(&self, other: &Self) -> Self {
                    *self * *other
                }

                #[inline]
                fn from_i64(value: i64) -> Self {
                    Self::from(value)
                }
            }
        )*
    };
}

impl_scalar_primitive!(i64, i128);

impl Scalar for BigInt {
    fn mul_ref(&self, other: &Self) -> Self {
        self * other
    }

    fn from_i64(value: i64) -> Self {
        BigInt::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_plus_one<T: Scalar>(x: &T) -> T {
        x.mul_ref(x) + &T::one()
    }

    #[test]
    fn primitive_mul_ref() {
        assert_eq!(7i64.mul_ref(&-3), -21);
        assert_eq!(i128::from_i64(-5).mul_ref(&4), -20);
    }

    #[test]
    fn bigint_exceeds_i64() {
        let big = BigInt::from_i64(i64::MAX);
        let sq = big.mul_ref(&big);
        assert_eq!(
            sq.to_string(),
            "85070591730234615847396907784232501249"
        );
    }

    #[test]
    fn generic_arithmetic() {
        assert_eq!(square_plus_one(&3i64), 10);
        assert_eq!(square_plus_one(&BigInt::from(3)), BigInt::from(10));
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("-42".parse::<i128>().ok(), Some(-42));
        assert_eq!("12".parse::<BigInt>().ok(), Some(BigInt::from(12)));
    }
}
