// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Unit-safe plane angles.

use core::ops::Neg;

use crate::scalar::{deg_to_rad, rad_to_deg, Float};

/// Plane angle stored in radians.
///
/// The only way in is through [`Angle::from_radians`] or
/// [`Angle::from_degrees`], so APIs that accept an `Angle` cannot be handed a
/// raw number in the wrong unit.
///
/// # Examples
/// ```
/// use tinyla::{Angle, AngleExt};
/// let a = Angle::from_degrees(180.0_f64);
/// assert!((a.radians() - core::f64::consts::PI).abs() < 1e-12);
/// assert_eq!(90.0_f32.deg(), Angle::from_degrees(90.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Angle<T> {
    radians: T,
}

impl<T: Float> Angle<T> {
    /// Creates an angle from a value in radians.
    pub const fn from_radians(radians: T) -> Self {
        Self { radians }
    }

    /// Creates an angle from a value in degrees.
    pub fn from_degrees(degrees: T) -> Self {
        Self {
            radians: deg_to_rad(degrees),
        }
    }

    /// Value in radians.
    pub const fn radians(self) -> T {
        self.radians
    }

    /// Value converted to degrees.
    pub fn degrees(self) -> T {
        rad_to_deg(self.radians)
    }
}

impl<T: Float> Neg for Angle<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

/// Unit-suffix helpers on float literals: `45.0_f32.deg()`, `0.5_f64.rad()`.
pub trait AngleExt: Float {
    /// Interprets `self` as radians.
    fn rad(self) -> Angle<Self>;

    /// Interprets `self` as degrees.
    fn deg(self) -> Angle<Self>;
}

impl<T: Float> AngleExt for T {
    fn rad(self) -> Angle<Self> {
        Angle::from_radians(self)
    }

    fn deg(self) -> Angle<Self> {
        Angle::from_degrees(self)
    }
}
