// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors emitted by tinyla's fallible constructors and `try_*` operations.
///
/// The total operations (`normalized`, `inverted`, `project`) never return
/// these; they recover locally instead. The `try_*` companions surface the
/// same conditions for callers that must detect them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A slice did not contain the number of elements the target requires.
    #[error("expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Number of values the target type needs.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
    /// The matrix determinant is within one epsilon of zero.
    #[error("matrix is singular")]
    Singular,
    /// The vector length is within one epsilon of zero.
    #[error("vector has zero length")]
    ZeroLength,
    /// Near and far clip planes coincide.
    #[error("near and far planes must differ")]
    DegenerateDepthRange,
    /// Aspect ratio is zero.
    #[error("aspect ratio must be non-zero")]
    ZeroAspectRatio,
    /// Half of the vertical field of view has a zero sine.
    #[error("field of view must not be a multiple of 360 degrees")]
    DegenerateFieldOfView,
}
