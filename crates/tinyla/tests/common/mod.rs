// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use tinyla::{Mat4, Vector};

/// Tolerance used against the six-decimal reference values.
pub const EPS: f64 = 1e-5;

/// Matrix with rows `1..=4`, `5..=8`, `9..=12`, `13..=16`. Singular.
pub fn unique() -> Mat4<f64> {
    Mat4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ])
}

/// Integer version of [`unique`].
pub fn unique_i32() -> Mat4<i32> {
    Mat4::from_rows([
        [1, 2, 3, 4],
        [5, 6, 7, 8],
        [9, 10, 11, 12],
        [13, 14, 15, 16],
    ])
}

/// A well-conditioned invertible matrix.
pub fn invertible() -> Mat4<f64> {
    Mat4::from_rows([
        [4.0, 7.0, 2.0, 3.0],
        [0.0, 5.0, 0.0, 1.0],
        [1.0, 0.0, 6.0, 0.0],
        [2.0, 1.0, 0.0, 3.0],
    ])
}

/// Asserts every element of `m` matches the row-major `rows` within `eps`.
pub fn assert_rows_approx(m: &Mat4<f64>, rows: [[f64; 4]; 4], eps: f64) {
    for (r, row) in rows.iter().enumerate() {
        for (c, want) in row.iter().enumerate() {
            let got = m[(r, c)];
            assert!(
                (got - want).abs() <= eps,
                "({r}, {c}): got {got}, want {want}\n{m}"
            );
        }
    }
}

/// Asserts two matrices agree element-wise within `eps`.
pub fn assert_mat_approx(a: &Mat4<f64>, b: &Mat4<f64>, eps: f64) {
    for (i, (x, y)) in a.data().iter().zip(b.data()).enumerate() {
        assert!((x - y).abs() <= eps, "index {i}: {x} vs {y}\n{a}\n{b}");
    }
}

/// Asserts two vectors agree component-wise within `eps`.
pub fn assert_vec_approx<const N: usize>(a: &Vector<N, f64>, b: &[f64; N], eps: f64) {
    for (i, (x, y)) in a.data().iter().zip(b).enumerate() {
        assert!((x - y).abs() <= eps, "component {i}: {a:?} vs {b:?}");
    }
}
