// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar arithmetic abstraction and tolerance predicates for tinyla.
//!
//! [`Scalar`] is the minimal numeric surface the vector and matrix kernels are
//! written against; it covers integers and floats alike. [`Float`] adds the
//! transcendental and tolerance-related pieces that only make sense for
//! floating-point types (normalization, inversion, rotation, projection).
//!
//! Tolerance contract:
//! - [`close`] is a *relative* comparison scaled by the larger magnitude of the
//!   two operands. Near zero the tolerance collapses to a fraction of one
//!   epsilon, so comparisons against exact zero must use [`close_to_zero`].
//! - [`close_to_zero`] is an *absolute* comparison fixed at one machine
//!   epsilon. Callers needing a scaled tolerance must pre-scale the value.
//!
//! Every "is this the identity", "did normalization collapse", and "is this
//! determinant singular" decision in the crate goes through these two
//! predicates.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Numeric element type usable inside [`crate::Vector`] and [`crate::Matrix`].
///
/// Arithmetic operators are required via the standard operator traits so
/// generic kernels can use `+`, `-`, `*`, `/` and their compound forms.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Widens `self` to `f64`; lossy for 64-bit integers beyond 2^53.
    fn to_f64(self) -> f64;

    /// Narrows an `f64` into this type with `as`-cast semantics
    /// (truncation toward zero and saturation for integers).
    fn from_f64(value: f64) -> Self;
}

/// Floating-point scalar with the operations needed by geometric code.
pub trait Float: Scalar + Neg<Output = Self> {
    /// Machine epsilon of the type.
    const EPSILON: Self;

    /// Archimedes' constant.
    const PI: Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Returns both sine and cosine of `self` (radians).
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Larger of `self` and `other`.
    fn max(self, other: Self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Scalar for $ty {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_float {
    ($ty:ident) => {
        impl Scalar for $ty {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            #[allow(clippy::cast_lossless)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }
        }

        impl Float for $ty {
            const EPSILON: Self = $ty::EPSILON;
            const PI: Self = core::$ty::consts::PI;

            fn abs(self) -> Self {
                $ty::abs(self)
            }

            fn sqrt(self) -> Self {
                $ty::sqrt(self)
            }

            fn sin(self) -> Self {
                $ty::sin(self)
            }

            fn cos(self) -> Self {
                $ty::cos(self)
            }

            fn sin_cos(self) -> (Self, Self) {
                $ty::sin_cos(self)
            }

            fn max(self, other: Self) -> Self {
                $ty::max(self, other)
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

/// Primitive numeric conversion with the semantics of an `as` cast.
///
/// Integer-to-integer casts wrap, float-to-integer casts truncate toward zero
/// and saturate, and identity casts return the value unchanged.
pub trait CastTo<U: Scalar>: Scalar {
    /// Converts `self` to `U`.
    fn cast_to(self) -> U;
}

macro_rules! impl_cast_to {
    (@from $src:ty => $($dst:ty),*) => {$(
        impl CastTo<$dst> for $src {
            #[allow(
                clippy::cast_lossless,
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss,
                clippy::unnecessary_cast,
                trivial_numeric_casts
            )]
            fn cast_to(self) -> $dst {
                self as $dst
            }
        }
    )*};
    ($($src:ty),*) => {$(
        impl_cast_to!(@from $src => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
    )*};
}

impl_cast_to!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Converts degrees to radians.
pub fn deg_to_rad<T: Float>(degrees: T) -> T {
    degrees * (T::PI / T::from_f64(180.0))
}

/// Converts radians to degrees.
pub fn rad_to_deg<T: Float>(radians: T) -> T {
    radians * (T::from_f64(180.0) / T::PI)
}

/// Returns `true` when `a` and `b` differ by at most one epsilon relative to
/// the larger magnitude: `|a - b| <= ε · max(|a|, |b|)`.
pub fn close<T: Float>(a: T, b: T) -> bool {
    (a - b).abs() <= T::EPSILON * a.abs().max(b.abs())
}

/// Returns `true` when `|value| <= ε`.
pub fn close_to_zero<T: Float>(value: T) -> bool {
    value.abs() <= T::EPSILON
}
