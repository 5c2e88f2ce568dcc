// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-length vectors and dimension capability markers.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::MathError;
use crate::scalar::{close, close_to_zero, CastTo, Float, Scalar};

/// Type-level dimension used to gate size-specific accessors at compile time.
///
/// `Vector<N, T>::z()` exists only when `Dim<N>: HasZ`, and `w()` only when
/// `Dim<N>: HasW`; calling them on a shorter vector is a type error rather
/// than a runtime check.
///
/// The capability traits are implemented for `N` up to 16. Longer vectors
/// still index normally but do not get the named `z`/`w` accessors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dim<const N: usize>;

/// Dimensions with a third component (`z` / `b`).
pub trait HasZ {}

/// Dimensions with a fourth component (`w` / `a`).
pub trait HasW: HasZ {}

macro_rules! impl_has_z {
    ($($n:literal),*) => {$( impl HasZ for Dim<$n> {} )*};
}

macro_rules! impl_has_w {
    ($($n:literal),*) => {$( impl HasW for Dim<$n> {} )*};
}

impl_has_z!(3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16);
impl_has_w!(4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16);

/// Fixed-length numeric vector with `N >= 2` components of type `T`.
///
/// * Plain `Copy` value; all arithmetic returns new vectors or mutates in place.
/// * Components are stored contiguously in order; [`Vector::data`] exposes
///   them as a slice.
/// * `N < 2` is rejected at compile time by every constructor.
///
/// # Examples
/// ```
/// use tinyla::{Vec3, Vec4};
/// let v = Vec3::new([1.0_f32, 2.0, 3.0]);
/// let h = Vec4::extend(v, [1.0]);
/// assert_eq!(h.w(), 1.0);
/// assert_eq!(Vec3::dot(v, v), 14.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<const N: usize, T> {
    data: [T; N],
}

/// Two-component vector.
pub type Vec2<T> = Vector<2, T>;
/// Three-component vector.
pub type Vec3<T> = Vector<3, T>;
/// Four-component vector.
pub type Vec4<T> = Vector<4, T>;
/// Two-component `f32` vector.
pub type Vec2f = Vec2<f32>;
/// Three-component `f32` vector.
pub type Vec3f = Vec3<f32>;
/// Four-component `f32` vector.
pub type Vec4f = Vec4<f32>;
/// Two-component `i32` vector.
pub type Vec2i = Vec2<i32>;
/// Three-component `i32` vector.
pub type Vec3i = Vec3<i32>;
/// Four-component `i32` vector.
pub type Vec4i = Vec4<i32>;

impl<const N: usize, T> Vector<N, T> {
    /// Creates a vector from exactly `N` components.
    pub const fn new(data: [T; N]) -> Self {
        const { assert!(N >= 2, "Vector requires at least two components") }
        Self { data }
    }

    /// Returns the components as an array reference.
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Consumes the vector and returns its components.
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Contiguous view of the components.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable contiguous view of the components.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Applies `f` to each component.
    pub fn map<U, F>(self, f: F) -> Vector<N, U>
    where
        F: FnMut(T) -> U,
    {
        Vector::new(self.data.map(f))
    }

    /// Creates a vector with every component set to `value`.
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self::new([value; N])
    }

    /// Overwrites every component with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Copy,
    {
        self.data = [value; N];
    }
}

impl<const N: usize, T: Scalar> Vector<N, T> {
    /// Zero vector.
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Vector whose contents the caller must overwrite before reading.
    ///
    /// Safe Rust cannot hand out uninitialized memory, so the contents are
    /// currently zero; callers must not rely on that.
    pub fn uninitialized() -> Self {
        Self::zero()
    }

    /// Sets every component to zero.
    pub fn set_to_zero(&mut self) {
        self.fill(T::zero());
    }

    /// Builds a vector from a slice holding exactly `N` values.
    pub fn from_slice(values: &[T]) -> Result<Self, MathError> {
        <[T; N]>::try_from(values)
            .map(Self::new)
            .map_err(|_| MathError::LengthMismatch {
                expected: N,
                actual: values.len(),
            })
    }

    /// Extends a shorter vector with `K` trailing components; `M + K` must
    /// equal `N` (checked at compile time).
    ///
    /// ```
    /// use tinyla::{Vec2, Vec4};
    /// let v: Vec4<i32> = Vec4::extend(Vec2::new([1, 2]), [3, 4]);
    /// assert_eq!(v.into_array(), [1, 2, 3, 4]);
    /// ```
    pub fn extend<const M: usize, const K: usize>(head: Vector<M, T>, tail: [T; K]) -> Self {
        const { assert!(M + K == N, "extended vector length must equal N") }
        Self::new(core::array::from_fn(|i| {
            if i < M {
                head.data[i]
            } else {
                tail[i - M]
            }
        }))
    }

    /// Extends a shorter vector with trailing components from a slice, which
    /// must hold exactly `N - M` values.
    pub fn extend_from_slice<const M: usize>(
        head: Vector<M, T>,
        tail: &[T],
    ) -> Result<Self, MathError> {
        const { assert!(M < N, "head must be shorter than the extended vector") }
        if tail.len() != N - M {
            return Err(MathError::LengthMismatch {
                expected: N - M,
                actual: tail.len(),
            });
        }
        Ok(Self::new(core::array::from_fn(|i| {
            if i < M {
                head.data[i]
            } else {
                tail[i - M]
            }
        })))
    }

    /// First component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Second component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// First component (colour alias of [`Vector::x`]).
    pub fn r(&self) -> T {
        self.data[0]
    }

    /// Second component (colour alias of [`Vector::y`]).
    pub fn g(&self) -> T {
        self.data[1]
    }

    /// Mutable first component.
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.data[0]
    }

    /// Mutable second component.
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.data[1]
    }

    /// Mutable first component (colour alias).
    pub fn r_mut(&mut self) -> &mut T {
        &mut self.data[0]
    }

    /// Mutable second component (colour alias).
    pub fn g_mut(&mut self) -> &mut T {
        &mut self.data[1]
    }

    /// Sum of pairwise products.
    pub fn dot(self, other: Self) -> T {
        self.data
            .into_iter()
            .zip(other.data)
            .fold(T::zero(), |acc, (a, b)| acc + a * b)
    }

    /// Squared length; avoids the square root when only relative magnitude
    /// matters.
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Multiplies every component by `factor`.
    pub fn scale(self, factor: T) -> Self {
        self.map(|c| c * factor)
    }

    /// Converts every component to another scalar type with `as`-cast
    /// semantics (see [`CastTo`]).
    pub fn cast<U: Scalar>(self) -> Vector<N, U>
    where
        T: CastTo<U>,
    {
        self.map(<T as CastTo<U>>::cast_to)
    }
}

impl<const N: usize, T: Scalar> Vector<N, T>
where
    Dim<N>: HasZ,
{
    /// Third component.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Third component (colour alias of [`Vector::z`]).
    pub fn b(&self) -> T {
        self.data[2]
    }

    /// Mutable third component.
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.data[2]
    }

    /// Mutable third component (colour alias).
    pub fn b_mut(&mut self) -> &mut T {
        &mut self.data[2]
    }
}

impl<const N: usize, T: Scalar> Vector<N, T>
where
    Dim<N>: HasW,
{
    /// Fourth component.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Fourth component (colour alias of [`Vector::w`]).
    pub fn a(&self) -> T {
        self.data[3]
    }

    /// Mutable fourth component.
    pub fn w_mut(&mut self) -> &mut T {
        &mut self.data[3]
    }

    /// Mutable fourth component (colour alias).
    pub fn a_mut(&mut self) -> &mut T {
        &mut self.data[3]
    }
}

impl<const N: usize, T: Float> Vector<N, T> {
    /// Euclidean length.
    pub fn length(self) -> T {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Vectors whose length is already within one epsilon of `1`, and
    /// vectors whose length is within one epsilon of `0`, are returned
    /// unchanged. A zero vector therefore stays zero instead of turning into
    /// NaNs.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if close_to_zero(len - T::one()) || close_to_zero(len) {
            return self;
        }
        self.map(|c| c / len)
    }

    /// Normalizes in place; see [`Vector::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Like [`Vector::normalized`] but reports a zero-length vector as
    /// [`MathError::ZeroLength`] instead of returning it unchanged.
    pub fn try_normalized(self) -> Result<Self, MathError> {
        if close_to_zero(self.length()) {
            return Err(MathError::ZeroLength);
        }
        Ok(self.normalized())
    }

    /// Returns `true` when every component pair satisfies [`close`].
    pub fn close_to(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(&a, &b)| close(a, b))
    }
}

impl<T: Scalar> Vector<3, T> {
    /// Right-handed cross product.
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T: Float> Vector<3, T> {
    /// Unit normal of the plane through `a`, `b`, `c`:
    /// `normalize(cross(b - a, c - a))`.
    ///
    /// Counter-clockwise triangles (seen from the normal's side) yield the
    /// outward normal at `a`.
    pub fn normal(a: Self, b: Self, c: Self) -> Self {
        (b - a).cross(c - a).normalized()
    }

    /// [`Vector::normal`] for a triangle given as an array of vertices.
    pub fn normal_of(vertices: [Self; 3]) -> Self {
        let [a, b, c] = vertices;
        Self::normal(a, b, c)
    }
}

impl<const N: usize, T: Scalar> Default for Vector<N, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, T> From<[T; N]> for Vector<N, T> {
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<const N: usize, T> From<Vector<N, T>> for [T; N] {
    fn from(value: Vector<N, T>) -> Self {
        value.data
    }
}

impl<const N: usize, T> AsRef<[T]> for Vector<N, T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<const N: usize, T> Index<usize> for Vector<N, T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<const N: usize, T> IndexMut<usize> for Vector<N, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

macro_rules! impl_elementwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<const N: usize, T: Scalar> $OpAssign for Vector<N, T> {
            fn $op_assign(&mut self, rhs: Self) {
                for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
                    lhs.$op_assign(rhs);
                }
            }
        }

        impl<const N: usize, T: Scalar> $Op for Vector<N, T> {
            type Output = Self;
            fn $op(mut self, rhs: Self) -> Self {
                self.$op_assign(rhs);
                self
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign);
impl_elementwise_op!(Div, div, DivAssign, div_assign);

// Scalar `*` and `/` are implemented per primitive so `s * v` works with the
// scalar on the left.
macro_rules! impl_scalar_ops {
    ($($ty:ty),* $(,)?) => {$(
        impl<const N: usize> MulAssign<$ty> for Vector<N, $ty> {
            fn mul_assign(&mut self, rhs: $ty) {
                for c in &mut self.data {
                    *c *= rhs;
                }
            }
        }

        impl<const N: usize> Mul<$ty> for Vector<N, $ty> {
            type Output = Self;
            fn mul(mut self, rhs: $ty) -> Self {
                self *= rhs;
                self
            }
        }

        impl<const N: usize> Mul<Vector<N, $ty>> for $ty {
            type Output = Vector<N, $ty>;
            fn mul(self, mut rhs: Vector<N, $ty>) -> Vector<N, $ty> {
                rhs *= self;
                rhs
            }
        }

        impl<const N: usize> DivAssign<$ty> for Vector<N, $ty> {
            fn div_assign(&mut self, rhs: $ty) {
                for c in &mut self.data {
                    *c /= rhs;
                }
            }
        }

        impl<const N: usize> Div<$ty> for Vector<N, $ty> {
            type Output = Self;
            fn div(mut self, rhs: $ty) -> Self {
                self /= rhs;
                self
            }
        }
    )*};
}

impl_scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<const N: usize, T: Scalar + Neg<Output = T>> Neg for Vector<N, T> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

// SAFETY: `Vector` is `repr(transparent)` over `[T; N]`, which is zeroable and
// plain-old-data exactly when `T` is.
#[cfg(feature = "bytemuck")]
#[allow(unsafe_code)]
unsafe impl<const N: usize, T: bytemuck::Zeroable> bytemuck::Zeroable for Vector<N, T> {}

// SAFETY: see the `Zeroable` impl above.
#[cfg(feature = "bytemuck")]
#[allow(unsafe_code)]
unsafe impl<const N: usize, T: bytemuck::Pod> bytemuck::Pod for Vector<N, T> {}
