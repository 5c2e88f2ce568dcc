// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared inputs for the tinyla benchmarks.

use tinyla::Mat4f;

/// Dense, invertible model matrix used as the starting point of every
/// composition benchmark.
pub fn model_matrix() -> Mat4f {
    Mat4f::from_rows([
        [0.9, -0.2, 0.1, 4.0],
        [0.3, 1.1, -0.4, -2.0],
        [-0.1, 0.5, 0.8, 7.5],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
