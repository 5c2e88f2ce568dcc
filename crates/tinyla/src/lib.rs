// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tinyla: fixed-size vector and matrix algebra for 3D transforms.
//!
//! The crate is a small, allocation-free kernel: const-generic [`Vector`] and
//! [`Matrix`] containers over any [`Scalar`], a unit-safe [`Angle`], and the
//! [`geom`] builders that produce and compose 4×4 transform and projection
//! matrices.
//!
//! Matrices are addressed `(row, column)` but stored column-major, so
//! [`Matrix::data`] can be uploaded to column-major graphics APIs as-is.
//!
//! ```
//! use tinyla::geom::{self, ClipVolume, Frustum, Handedness};
//! use tinyla::{AngleExt, Mat4f, Vec3f, Vec4f};
//!
//! let mut model = Mat4f::identity();
//! geom::pre_scale(&mut model, &Vec3f::new([2.0, 2.0, 2.0]));
//! geom::pre_translate(&mut model, &Vec3f::new([0.0, 0.0, -5.0]));
//!
//! let frustum = Frustum::new(60.0_f32.deg(), 16.0 / 9.0, 0.1, 100.0)?;
//! let proj = geom::perspective(&frustum, Handedness::Right, ClipVolume::ZeroToOne);
//! let screen = geom::project(&(proj * model), &Vec4f::new([0.0, 0.0, 0.0, 1.0]));
//! assert!(screen.x().abs() < 1e-6 && screen.y().abs() < 1e-6);
//! # Ok::<(), tinyla::MathError>(())
//! ```
#![deny(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

/// Plane angles with type-level units.
pub mod angle;
mod error;
pub mod geom;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use angle::{Angle, AngleExt};
pub use error::MathError;
pub use matrix::{MatInit, Mat2, Mat2f, Mat2i, Mat3, Mat3f, Mat3i, Mat4, Mat4f, Mat4i, Matrix};
pub use scalar::{close, close_to_zero, deg_to_rad, rad_to_deg, CastTo, Float, Scalar};
pub use vector::{
    Dim, HasW, HasZ, Vec2, Vec2f, Vec2i, Vec3, Vec3f, Vec3i, Vec4, Vec4f, Vec4i, Vector,
};
