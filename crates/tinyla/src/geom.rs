// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Builders and in-place composers for 4×4 transform matrices.
//!
//! Conventions:
//! - Matrices act on column vectors: `M * v`. A *pre* operation composes on
//!   the left (`op * M`), a *post* operation on the right (`M * op`).
//! - Translation lives in column 3; the projective row is row 3.
//! - `pre_*`/`post_*` mutate in place and produce exactly what multiplying by
//!   the matching builder would, while touching only the affected rows or
//!   columns.

use tracing::debug;

use crate::angle::Angle;
use crate::error::MathError;
use crate::matrix::Matrix;
use crate::scalar::{close, close_to_zero, Float, Scalar};
use crate::vector::Vector;

/// Orientation of the view-space coordinate system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Handedness {
    /// Camera looks down −Z.
    #[default]
    Right,
    /// Camera looks down +Z.
    Left,
}

/// Depth range that [`perspective`] maps view-space Z into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ClipVolume {
    /// `0..1` depth (Vulkan, Direct3D, Metal).
    ZeroToOne,
    /// `-1..1` depth (OpenGL).
    #[default]
    MinusOneToOne,
}

/// Viewing volume parameters for [`perspective`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frustum<T> {
    fov: Angle<T>,
    aspect_ratio: T,
    near: T,
    far: T,
}

impl<T: Float> Frustum<T> {
    /// Validates and bundles a vertical field of view, aspect ratio
    /// (width / height) and clip plane distances.
    ///
    /// # Errors
    /// - [`MathError::DegenerateDepthRange`] when `near == far`.
    /// - [`MathError::ZeroAspectRatio`] when `aspect_ratio == 0`.
    /// - [`MathError::DegenerateFieldOfView`] when the sine of half the field
    ///   of view is within one epsilon of zero.
    pub fn new(fov: Angle<T>, aspect_ratio: T, near: T, far: T) -> Result<Self, MathError> {
        let err = if near == far {
            Some(MathError::DegenerateDepthRange)
        } else if aspect_ratio == T::zero() {
            Some(MathError::ZeroAspectRatio)
        } else if close_to_zero((fov.radians() / T::from_f64(2.0)).sin()) {
            Some(MathError::DegenerateFieldOfView)
        } else {
            None
        };
        if let Some(err) = err {
            debug!(
                %err,
                fov_degrees = fov.degrees().to_f64(),
                aspect_ratio = aspect_ratio.to_f64(),
                near = near.to_f64(),
                far = far.to_f64(),
                "rejected frustum"
            );
            return Err(err);
        }
        Ok(Self {
            fov,
            aspect_ratio,
            near,
            far,
        })
    }

    /// Vertical field of view.
    pub const fn fov(&self) -> Angle<T> {
        self.fov
    }

    /// Width over height.
    pub const fn aspect_ratio(&self) -> T {
        self.aspect_ratio
    }

    /// Near clip plane distance.
    pub const fn near(&self) -> T {
        self.near
    }

    /// Far clip plane distance.
    pub const fn far(&self) -> T {
        self.far
    }
}

/// Diagonal matrix scaling X, Y and Z by the components of `s`.
pub fn scaling<T: Scalar>(s: &Vector<3, T>) -> Matrix<4, T> {
    Matrix::diagonal(&Vector::extend(*s, [T::one()]))
}

/// Identity with `t` in the translation column.
pub fn translation<T: Scalar>(t: &Vector<3, T>) -> Matrix<4, T> {
    let mut m = Matrix::identity();
    for row in 0..3 {
        m[(row, 3)] = t[row];
    }
    m
}

/// Rotation by `angle` about `axis` (Rodrigues' formula).
///
/// `axis` is normalized first unless its squared length is already [`close`]
/// to one or [`close_to_zero`]. A zero axis therefore yields a matrix that
/// only scales by `cos(angle)` on the diagonal.
pub fn rotation<T: Float>(angle: Angle<T>, axis: &Vector<3, T>) -> Matrix<4, T> {
    let mut axis = *axis;
    let len2 = axis.length_squared();
    if !close(len2, T::one()) && !close_to_zero(len2) {
        axis = axis.scale(T::one() / len2.sqrt());
    }
    let [x, y, z] = axis.into_array();
    let (s, c) = angle.radians().sin_cos();
    let ic = T::one() - c;
    let (zero, one) = (T::zero(), T::one());
    Matrix::from_rows([
        [x * x * ic + c, x * y * ic - z * s, x * z * ic + y * s, zero],
        [y * x * ic + z * s, y * y * ic + c, y * z * ic - x * s, zero],
        [x * z * ic - y * s, y * z * ic + x * s, z * z * ic + c, zero],
        [zero, zero, zero, one],
    ])
}

/// Perspective projection for the given frustum and conventions.
///
/// Built right-handed, then `[2,2]` and `[3,2]` are negated for
/// [`Handedness::Left`].
pub fn perspective<T: Float>(
    frustum: &Frustum<T>,
    handedness: Handedness,
    clip_volume: ClipVolume,
) -> Matrix<4, T> {
    let half_fov = frustum.fov.radians() / T::from_f64(2.0);
    let (sin, cos) = half_fov.sin_cos();
    let cot = cos / sin;
    let (near, far) = (frustum.near, frustum.far);
    let depth = far - near;

    let mut p = Matrix::zero();
    p[(0, 0)] = cot / frustum.aspect_ratio;
    p[(1, 1)] = cot;
    p[(3, 2)] = -T::one();
    match clip_volume {
        ClipVolume::MinusOneToOne => {
            p[(2, 2)] = -(far + near) / depth;
            p[(2, 3)] = -(T::from_f64(2.0) * far * near) / depth;
        }
        ClipVolume::ZeroToOne => {
            p[(2, 2)] = -far / depth;
            p[(2, 3)] = -(far * near) / depth;
        }
    }
    if handedness == Handedness::Left {
        p[(2, 2)] = -p[(2, 2)];
        p[(3, 2)] = -p[(3, 2)];
    }
    p
}

/// Applies `m` to the homogeneous point `v` and returns the perspective-divided
/// `(x, y)`.
///
/// When `w` is exactly zero the divide is skipped and the raw `(x, y)` is
/// returned.
pub fn project<T: Float>(m: &Matrix<4, T>, v: &Vector<4, T>) -> Vector<2, T> {
    let clip = m.multiply_vector(v);
    let w = clip.w();
    let clip = if w == T::zero() {
        clip
    } else {
        clip.map(|c| c / w)
    };
    Vector::new([clip.x(), clip.y()])
}

/// `m = translation(t) * m`
pub fn pre_translate<T: Scalar>(m: &mut Matrix<4, T>, t: &Vector<3, T>) {
    for column in 0..4 {
        let w = m[(3, column)];
        for row in 0..3 {
            m[(row, column)] += w * t[row];
        }
    }
}

/// `m = m * translation(t)`
pub fn post_translate<T: Scalar>(m: &mut Matrix<4, T>, t: &Vector<3, T>) {
    for row in 0..4 {
        let offset = m[(row, 0)] * t.x() + m[(row, 1)] * t.y() + m[(row, 2)] * t.z();
        m[(row, 3)] += offset;
    }
}

/// `m = scaling(s) * m`
pub fn pre_scale<T: Scalar>(m: &mut Matrix<4, T>, s: &Vector<3, T>) {
    for column in 0..4 {
        for row in 0..3 {
            m[(row, column)] *= s[row];
        }
    }
}

/// `m = m * scaling(s)`
pub fn post_scale<T: Scalar>(m: &mut Matrix<4, T>, s: &Vector<3, T>) {
    for column in 0..3 {
        for row in 0..4 {
            m[(row, column)] *= s[column];
        }
    }
}

/// Index pair spanned by a rotation about a coordinate axis, plus the signed
/// axis component. `None` unless exactly two components are exactly zero and
/// the axis is long enough for [`rotation`] to normalize.
fn coordinate_plane<T: Float>(axis: &Vector<3, T>) -> Option<(usize, usize, T)> {
    if close_to_zero(axis.length_squared()) {
        return None;
    }
    let zero = T::zero();
    match (axis.x() == zero, axis.y() == zero, axis.z() == zero) {
        (false, true, true) => Some((1, 2, axis.x())),
        (true, false, true) => Some((2, 0, axis.y())),
        (true, true, false) => Some((0, 1, axis.z())),
        _ => None,
    }
}

/// Sine and cosine of `angle`, with the sine flipped for a negative axis.
fn signed_sin_cos<T: Float>(angle: Angle<T>, component: T) -> (T, T) {
    let (s, c) = angle.radians().sin_cos();
    if component < T::zero() {
        (-s, c)
    } else {
        (s, c)
    }
}

/// `m = rotation(angle, axis) * m`
///
/// Axes lying exactly on X, Y or Z update two rows in place; any other axis
/// falls back to a full multiplication.
pub fn pre_rotate<T: Float>(m: &mut Matrix<4, T>, angle: Angle<T>, axis: &Vector<3, T>) {
    let Some((a, b, component)) = coordinate_plane(axis) else {
        *m = rotation(angle, axis) * *m;
        return;
    };
    let (s, c) = signed_sin_cos(angle, component);
    for column in 0..4 {
        let (ra, rb) = (m[(a, column)], m[(b, column)]);
        m[(a, column)] = c * ra - s * rb;
        m[(b, column)] = s * ra + c * rb;
    }
}

/// `m = m * rotation(angle, axis)`
///
/// Axes lying exactly on X, Y or Z update two columns in place; any other
/// axis falls back to a full multiplication.
pub fn post_rotate<T: Float>(m: &mut Matrix<4, T>, angle: Angle<T>, axis: &Vector<3, T>) {
    let Some((a, b, component)) = coordinate_plane(axis) else {
        *m *= rotation(angle, axis);
        return;
    };
    let (s, c) = signed_sin_cos(angle, component);
    for row in 0..4 {
        let (ca, cb) = (m[(row, a)], m[(row, b)]);
        m[(row, a)] = c * ca + s * cb;
        m[(row, b)] = c * cb - s * ca;
    }
}
