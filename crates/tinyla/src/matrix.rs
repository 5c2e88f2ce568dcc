// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Square matrices with column-major storage.

use core::fmt;
use core::ops::{Index, IndexMut, Mul, MulAssign};

use tracing::debug;

use crate::error::MathError;
use crate::scalar::{close, close_to_zero, Float, Scalar};
use crate::vector::Vector;

/// Initial contents for [`Matrix::new`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MatInit<const N: usize, T> {
    /// Contents the caller overwrites before reading (see
    /// [`Matrix::uninitialized`]).
    Uninitialized,
    /// All zeros.
    Zero,
    /// Ones on the diagonal.
    Identity,
    /// The given vector on the diagonal, zeros elsewhere.
    Diagonal(Vector<N, T>),
}

/// Square `N×N` matrix addressed by `(row, column)` and stored column-major.
///
/// - Storage is `[column][row]`: the elements of one column are contiguous, so
///   [`Matrix::data`] can be handed to column-major graphics APIs without a
///   transpose.
/// - Literal construction goes through [`Matrix::from_rows`], which takes the
///   values in the order they read on paper and transposes them into storage.
/// - `N < 2` is rejected at compile time; determinant, inverse and the
///   transform helpers in [`crate::geom`] exist only for `N = 4`.
///
/// # Examples
/// ```
/// use tinyla::{Mat4, Vec4};
/// let m = Mat4::from_rows([
///     [1, 2, 3, 4],
///     [5, 6, 7, 8],
///     [9, 10, 11, 12],
///     [13, 14, 15, 16],
/// ]);
/// assert_eq!(m[(0, 3)], 4);
/// assert_eq!(&m.data()[..4], &[1, 5, 9, 13]);
/// assert_eq!((m * Vec4::new([1, 2, 3, 4])).into_array(), [30, 70, 110, 150]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Matrix<const N: usize, T> {
    columns: [[T; N]; N],
}

/// 2×2 matrix.
pub type Mat2<T> = Matrix<2, T>;
/// 3×3 matrix.
pub type Mat3<T> = Matrix<3, T>;
/// 4×4 matrix.
pub type Mat4<T> = Matrix<4, T>;
/// 2×2 `f32` matrix.
pub type Mat2f = Mat2<f32>;
/// 3×3 `f32` matrix.
pub type Mat3f = Mat3<f32>;
/// 4×4 `f32` matrix.
pub type Mat4f = Mat4<f32>;
/// 2×2 `i32` matrix.
pub type Mat2i = Mat2<i32>;
/// 3×3 `i32` matrix.
pub type Mat3i = Mat3<i32>;
/// 4×4 `i32` matrix.
pub type Mat4i = Mat4<i32>;

impl<const N: usize, T> Matrix<N, T> {
    /// Creates a matrix from column-major storage (`columns[c][r]`).
    pub const fn from_columns(columns: [[T; N]; N]) -> Self {
        const { assert!(N >= 2, "Matrix requires at least 2x2 elements") }
        Self { columns }
    }

    /// Creates a matrix from row-major literal values (`rows[r][c]`).
    pub fn from_rows(rows: [[T; N]; N]) -> Self
    where
        T: Copy,
    {
        Self::from_columns(core::array::from_fn(|column| {
            core::array::from_fn(|row| rows[row][column])
        }))
    }

    /// Consumes the matrix and returns its column-major storage.
    pub fn into_columns(self) -> [[T; N]; N] {
        self.columns
    }

    /// Raw column-major buffer: column 0's `N` rows, then column 1's, and so
    /// on.
    pub fn data(&self) -> &[T] {
        self.columns.as_flattened()
    }

    /// Mutable raw column-major buffer.
    pub fn data_mut(&mut self) -> &mut [T] {
        self.columns.as_flattened_mut()
    }

    /// Element at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> T
    where
        T: Copy,
    {
        self.columns[column][row]
    }
}

impl<const N: usize, T: Scalar> Matrix<N, T> {
    /// Creates a matrix with the requested initial contents.
    pub fn new(init: MatInit<N, T>) -> Self {
        match init {
            MatInit::Uninitialized => Self::uninitialized(),
            MatInit::Zero => Self::zero(),
            MatInit::Identity => Self::identity(),
            MatInit::Diagonal(v) => Self::diagonal(&v),
        }
    }

    /// Matrix whose contents the caller must overwrite before reading.
    ///
    /// Safe Rust cannot hand out uninitialized memory, so the contents are
    /// currently zero; callers must not rely on that.
    pub fn uninitialized() -> Self {
        Self::zero()
    }

    /// All-zero matrix.
    pub fn zero() -> Self {
        Self::from_columns([[T::zero(); N]; N])
    }

    /// Identity matrix.
    pub fn identity() -> Self {
        let mut m = Self::zero();
        m.set_to_identity();
        m
    }

    /// Matrix with `v` on the diagonal and zeros elsewhere.
    pub fn diagonal(v: &Vector<N, T>) -> Self {
        let mut m = Self::zero();
        m.set_to_diagonal(v);
        m
    }

    /// Builds a matrix from `N * N` row-major values.
    pub fn from_row_major(values: &[T]) -> Result<Self, MathError> {
        if values.len() != N * N {
            return Err(MathError::LengthMismatch {
                expected: N * N,
                actual: values.len(),
            });
        }
        Ok(Self::from_columns(core::array::from_fn(|column| {
            core::array::from_fn(|row| values[row * N + column])
        })))
    }

    /// Sets every element to zero.
    pub fn set_to_zero(&mut self) {
        self.columns = [[T::zero(); N]; N];
    }

    /// Resets to the identity matrix.
    pub fn set_to_identity(&mut self) {
        self.set_to_diagonal(&Vector::splat(T::one()));
    }

    /// Resets to a diagonal matrix holding `v`.
    pub fn set_to_diagonal(&mut self, v: &Vector<N, T>) {
        self.set_to_zero();
        for i in 0..N {
            self.columns[i][i] = v[i];
        }
    }

    /// Row `row` as a vector.
    pub fn row(&self, row: usize) -> Vector<N, T> {
        Vector::new(core::array::from_fn(|column| self.columns[column][row]))
    }

    /// Column `column` as a vector.
    pub fn column(&self, column: usize) -> Vector<N, T> {
        Vector::new(self.columns[column])
    }

    /// Returns the transpose.
    pub fn transposed(&self) -> Self {
        Self::from_rows(self.columns)
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = Self::zero();
        for column in 0..N {
            for row in 0..N {
                let mut sum = T::zero();
                for k in 0..N {
                    sum += self.columns[k][row] * rhs.columns[column][k];
                }
                out.columns[column][row] = sum;
            }
        }
        out
    }

    /// Linear map `self * v`: `result[i] = Σ_j self(i, j) · v[j]`.
    pub fn multiply_vector(&self, v: &Vector<N, T>) -> Vector<N, T> {
        Vector::new(core::array::from_fn(|row| {
            let mut sum = T::zero();
            for column in 0..N {
                sum += self.columns[column][row] * v[column];
            }
            sum
        }))
    }
}

impl<const N: usize, T: Float> Matrix<N, T> {
    /// Returns `true` when every element pair satisfies [`close`].
    pub fn close_to(&self, other: &Self) -> bool {
        self.data()
            .iter()
            .zip(other.data())
            .all(|(&a, &b)| close(a, b))
    }
}

/// Indices left over after removing one of `0..4`.
const COMPLEMENT: [[usize; 3]; 4] = [[1, 2, 3], [0, 2, 3], [0, 1, 3], [0, 1, 2]];

fn det2<T: Scalar>(m: &Matrix<4, T>, rows: [usize; 2], columns: [usize; 2]) -> T {
    let [r0, r1] = rows;
    let [c0, c1] = columns;
    m[(r0, c0)] * m[(r1, c1)] - m[(r1, c0)] * m[(r0, c1)]
}

fn det3<T: Scalar>(m: &Matrix<4, T>, rows: [usize; 3], columns: [usize; 3]) -> T {
    let [r0, r1, r2] = rows;
    let [c0, c1, c2] = columns;
    m[(r0, c0)] * det2(m, [r1, r2], [c1, c2]) - m[(r0, c1)] * det2(m, [r1, r2], [c0, c2])
        + m[(r0, c2)] * det2(m, [r1, r2], [c0, c1])
}

/// Determinant of the 3×3 matrix left after deleting `row` and `column`.
fn minor<T: Scalar>(m: &Matrix<4, T>, row: usize, column: usize) -> T {
    det3(m, COMPLEMENT[row], COMPLEMENT[column])
}

impl<T: Scalar> Matrix<4, T> {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// Fixed operation count, no pivoting. Exact for integer matrices whose
    /// intermediate products do not overflow.
    pub fn determinant(&self) -> T {
        let mut det = T::zero();
        for column in 0..4 {
            let term = self[(0, column)] * minor(self, 0, column);
            if column % 2 == 0 {
                det += term;
            } else {
                det -= term;
            }
        }
        det
    }
}

impl<T: Float> Matrix<4, T> {
    /// Inverse via the adjugate, or [`MathError::Singular`] when the
    /// determinant is within one epsilon of zero.
    pub fn try_inverted(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if close_to_zero(det) {
            return Err(MathError::Singular);
        }
        let inv_det = T::one() / det;
        let mut inv = Self::zero();
        for row in 0..4 {
            for column in 0..4 {
                // Adjugate is the transposed cofactor matrix.
                let cofactor = minor(self, column, row) * inv_det;
                inv[(row, column)] = if (row + column) % 2 == 0 {
                    cofactor
                } else {
                    -cofactor
                };
            }
        }
        Ok(inv)
    }

    /// Inverse via the adjugate.
    ///
    /// A singular matrix (determinant within one epsilon of zero) yields the
    /// identity instead of infinities; use [`Matrix::try_inverted`] to detect
    /// that case.
    pub fn inverted(&self) -> Self {
        self.try_inverted().unwrap_or_else(|err| {
            debug!(%err, "matrix inverse fell back to identity");
            Self::identity()
        })
    }
}

impl<const N: usize, T: Scalar> Default for Matrix<N, T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize, T> Index<(usize, usize)> for Matrix<N, T> {
    type Output = T;
    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.columns[column][row]
    }
}

impl<const N: usize, T> IndexMut<(usize, usize)> for Matrix<N, T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.columns[column][row]
    }
}

impl<const N: usize, T: Scalar> Mul for Matrix<N, T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<const N: usize, T: Scalar> MulAssign for Matrix<N, T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<const N: usize, T: Scalar> MulAssign<&Matrix<N, T>> for Matrix<N, T> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}

impl<const N: usize, T: Scalar> Mul<Vector<N, T>> for Matrix<N, T> {
    type Output = Vector<N, T>;
    fn mul(self, rhs: Vector<N, T>) -> Vector<N, T> {
        self.multiply_vector(&rhs)
    }
}

impl<const N: usize, T: fmt::Display> fmt::Display for Matrix<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            f.write_str("[")?;
            for column in 0..N {
                if column > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", self.columns[column][row])?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

// SAFETY: `Matrix` is `repr(transparent)` over `[[T; N]; N]`, which is
// zeroable and plain-old-data exactly when `T` is.
#[cfg(feature = "bytemuck")]
#[allow(unsafe_code)]
unsafe impl<const N: usize, T: bytemuck::Zeroable> bytemuck::Zeroable for Matrix<N, T> {}

// SAFETY: see the `Zeroable` impl above.
#[cfg(feature = "bytemuck")]
#[allow(unsafe_code)]
unsafe impl<const N: usize, T: bytemuck::Pod> bytemuck::Pod for Matrix<N, T> {}
