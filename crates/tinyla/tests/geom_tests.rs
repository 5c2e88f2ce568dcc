// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use common::{assert_mat_approx, assert_rows_approx, assert_vec_approx, unique, EPS};
use tinyla::geom::{
    self, perspective, post_rotate, post_scale, post_translate, pre_rotate, pre_scale,
    pre_translate, project, rotation, scaling, translation, ClipVolume, Frustum, Handedness,
};
use tinyla::{Angle, AngleExt, Mat4, MathError, Vec3, Vec4};

fn x_axis() -> Vec3<f64> {
    Vec3::new([1.0, 0.0, 0.0])
}

fn y_axis() -> Vec3<f64> {
    Vec3::new([0.0, 1.0, 0.0])
}

fn z_axis() -> Vec3<f64> {
    Vec3::new([0.0, 0.0, 1.0])
}

fn reference_frustum() -> Frustum<f64> {
    match Frustum::new(60.0_f64.deg(), 1.0, 0.1, 1000.0) {
        Ok(f) => f,
        Err(err) => unreachable!("reference frustum rejected: {err}"),
    }
}

#[test]
fn scaling_places_factors_on_the_diagonal() {
    let m = scaling(&Vec3::new([2, 3, 4]));
    assert_eq!(
        m,
        Mat4::from_rows([[2, 0, 0, 0], [0, 3, 0, 0], [0, 0, 4, 0], [0, 0, 0, 1]])
    );
}

#[test]
fn translation_fills_the_last_column() {
    let m = translation(&Vec3::new([1, 2, 3]));
    assert_eq!(&m.data()[12..], &[1, 2, 3, 1]);
    assert_eq!(m * Vec4::new([0, 0, 0, 1]), Vec4::new([1, 2, 3, 1]));
    // Directions (w = 0) are not translated.
    assert_eq!(m * Vec4::new([5, 6, 7, 0]), Vec4::new([5, 6, 7, 0]));
}

#[test]
fn rotation_about_z_turns_x_into_y() {
    let r = rotation(90.0_f64.deg(), &z_axis());
    let v = r * Vec4::new([1.0, 0.0, 0.0, 0.0]);
    assert_vec_approx(&v, &[0.0, 1.0, 0.0, 0.0], 1e-12);
}

#[test]
fn rotation_normalizes_long_axes() {
    let unit = rotation(33.0_f64.deg(), &Vec3::new([1.0, 2.0, 2.0]).normalized());
    let long = rotation(33.0_f64.deg(), &Vec3::new([3.0, 6.0, 6.0]));
    assert_mat_approx(&unit, &long, 1e-12);
}

#[test]
fn rotation_about_zero_axis_scales_by_cosine() {
    let r = rotation(Angle::from_radians(0.5_f64), &Vec3::zero());
    let c = 0.5_f64.cos();
    assert_rows_approx(
        &r,
        [
            [c, 0.0, 0.0, 0.0],
            [0.0, c, 0.0, 0.0],
            [0.0, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
        1e-15,
    );
}

#[test]
fn pre_rotate_x_matches_reference() {
    let mut m = unique();
    pre_rotate(&mut m, 45.0_f64.deg(), &x_axis());
    assert_rows_approx(
        &m,
        [
            [1.0, 2.0, 3.0, 4.0],
            [-2.828427, -2.828427, -2.828427, -2.828427],
            [9.899494, 11.313708, 12.727922, 14.142136],
            [13.0, 14.0, 15.0, 16.0],
        ],
        EPS,
    );
    assert_mat_approx(&m, &(rotation(45.0_f64.deg(), &x_axis()) * unique()), 1e-12);
}

#[test]
fn post_rotate_x_matches_reference() {
    let mut m = unique();
    post_rotate(&mut m, 45.0_f64.deg(), &x_axis());
    assert_rows_approx(
        &m,
        [
            [1.0, 3.535534, 0.707107, 4.0],
            [5.0, 9.192389, 0.707107, 8.0],
            [9.0, 14.849242, 0.707107, 12.0],
            [13.0, 20.506096, 0.707107, 16.0],
        ],
        EPS,
    );
    assert_mat_approx(&m, &(unique() * rotation(45.0_f64.deg(), &x_axis())), 1e-12);
}

#[test]
fn pre_rotate_y_matches_reference() {
    let mut m = unique();
    pre_rotate(&mut m, 45.0_f64.deg(), &y_axis());
    assert_rows_approx(
        &m,
        [
            [7.071067, 8.485281, 9.899494, 11.313708],
            [5.0, 6.0, 7.0, 8.0],
            [5.656854, 5.656854, 5.656854, 5.656854],
            [13.0, 14.0, 15.0, 16.0],
        ],
        EPS,
    );
    assert_mat_approx(&m, &(rotation(45.0_f64.deg(), &y_axis()) * unique()), 1e-12);
}

#[test]
fn post_rotate_y_matches_reference() {
    let mut m = unique();
    post_rotate(&mut m, 45.0_f64.deg(), &y_axis());
    assert_rows_approx(
        &m,
        [
            [-1.414213, 2.0, 2.828427, 4.0],
            [-1.414214, 6.0, 8.485281, 8.0],
            [-1.414214, 10.0, 14.142136, 12.0],
            [-1.414214, 14.0, 19.798988, 16.0],
        ],
        EPS,
    );
    assert_mat_approx(&m, &(unique() * rotation(45.0_f64.deg(), &y_axis())), 1e-12);
}

#[test]
fn pre_rotate_z_matches_reference() {
    let mut m = unique();
    pre_rotate(&mut m, 45.0_f64.deg(), &z_axis());
    assert_rows_approx(
        &m,
        [
            [-2.828427, -2.828427, -2.828427, -2.828427],
            [4.242640, 5.656854, 7.071068, 8.485281],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ],
        EPS,
    );
    assert_mat_approx(&m, &(rotation(45.0_f64.deg(), &z_axis()) * unique()), 1e-12);
}

#[test]
fn post_rotate_z_matches_reference() {
    let mut m = unique();
    post_rotate(&mut m, 45.0_f64.deg(), &z_axis());
    assert_rows_approx(
        &m,
        [
            [2.121320, 0.707107, 3.0, 4.0],
            [7.778174, 0.707107, 7.0, 8.0],
            [13.435028, 0.707107, 11.0, 12.0],
            [19.091883, 0.707108, 15.0, 16.0],
        ],
        EPS,
    );
    assert_mat_approx(&m, &(unique() * rotation(45.0_f64.deg(), &z_axis())), 1e-12);
}

#[test]
fn off_axis_rotation_falls_back_to_multiplication() {
    let axis = Vec3::new([1.0, 1.0e-9, 0.0]);
    let mut pre = unique();
    pre_rotate(&mut pre, 20.0_f64.deg(), &axis);
    assert_mat_approx(&pre, &(rotation(20.0_f64.deg(), &axis) * unique()), 1e-12);

    let mut post = unique();
    post_rotate(&mut post, 20.0_f64.deg(), &axis);
    assert_mat_approx(&post, &(unique() * rotation(20.0_f64.deg(), &axis)), 1e-12);
}

#[test]
fn pre_and_post_translate_match_multiplication() {
    let t = Vec3::new([1.5, -2.0, 3.25]);
    let mut pre = unique();
    pre_translate(&mut pre, &t);
    assert_mat_approx(&pre, &(translation(&t) * unique()), 1e-12);

    let mut post = unique();
    post_translate(&mut post, &t);
    assert_mat_approx(&post, &(unique() * translation(&t)), 1e-12);
}

#[test]
fn pre_and_post_scale_match_multiplication_exactly_for_integers() {
    let m = common::unique_i32();
    let s = Vec3::new([2, -3, 4]);

    let mut pre = m;
    pre_scale(&mut pre, &s);
    assert_eq!(pre, scaling(&s) * m);

    let mut post = m;
    post_scale(&mut post, &s);
    assert_eq!(post, m * scaling(&s));

    let t = Vec3::new([7, 8, 9]);
    let mut pre = m;
    pre_translate(&mut pre, &t);
    assert_eq!(pre, translation(&t) * m);
    let mut post = m;
    post_translate(&mut post, &t);
    assert_eq!(post, m * translation(&t));
}

#[test]
fn perspective_minus_one_to_one_right_handed() {
    let p = perspective(
        &reference_frustum(),
        Handedness::Right,
        ClipVolume::MinusOneToOne,
    );
    assert_rows_approx(
        &p,
        [
            [1.732051, 0.0, 0.0, 0.0],
            [0.0, 1.732051, 0.0, 0.0],
            [0.0, 0.0, -1.000200, -0.200020],
            [0.0, 0.0, -1.0, 0.0],
        ],
        EPS,
    );
    assert_eq!(
        p,
        perspective(
            &reference_frustum(),
            Handedness::default(),
            ClipVolume::default()
        )
    );
}

#[test]
fn perspective_zero_to_one() {
    let p = perspective(&reference_frustum(), Handedness::Right, ClipVolume::ZeroToOne);
    assert!((p[(2, 2)] + 1.00010001).abs() < 1e-7);
    assert!((p[(2, 3)] + 0.10001000).abs() < 1e-7);
    assert!((p[(3, 2)] + 1.0).abs() < f64::EPSILON);
}

#[test]
fn left_handed_flips_depth_terms() {
    let frustum = reference_frustum();
    for clip in [ClipVolume::ZeroToOne, ClipVolume::MinusOneToOne] {
        let rh = perspective(&frustum, Handedness::Right, clip);
        let lh = perspective(&frustum, Handedness::Left, clip);
        assert!(lh[(2, 2)] > 0.0);
        assert!((lh[(2, 2)] + rh[(2, 2)]).abs() < f64::EPSILON);
        assert!((lh[(3, 2)] - 1.0).abs() < f64::EPSILON);
        assert!((lh[(2, 3)] - rh[(2, 3)]).abs() < f64::EPSILON);
    }
}

#[test]
fn perspective_inverse_matches_reference() {
    let p = perspective(
        &reference_frustum(),
        Handedness::Right,
        ClipVolume::MinusOneToOne,
    );
    assert!((p.determinant() + 0.60006).abs() < 1e-6);
    assert_rows_approx(
        &p.inverted(),
        [
            [0.577350, 0.0, 0.0, 0.0],
            [0.0, 0.577350, 0.0, 0.0],
            [0.0, 0.0, 0.0, -1.0],
            [0.0, 0.0, -4.99950, 5.00050],
        ],
        EPS,
    );
}

#[test]
fn rotate_about_vanishing_coordinate_axis_matches_rotation() {
    let m = Mat4::from_rows([
        [1.0_f32, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ]);
    let angle = 45.0_f32.deg();
    let axis = Vec3::new([1.0e-4_f32, 0.0, 0.0]);
    let r = rotation(angle, &axis);

    let mut pre = m;
    pre_rotate(&mut pre, angle, &axis);
    assert_eq!(pre, r * m);
    assert!((pre[(0, 0)] - core::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);

    let mut post = m;
    post_rotate(&mut post, angle, &axis);
    assert_eq!(post, m * r);
}

#[test]
fn project_divides_by_w() {
    let p = perspective(
        &reference_frustum(),
        Handedness::Right,
        ClipVolume::MinusOneToOne,
    );
    let screen = project(&p, &Vec4::new([1.0, 1.0, -2.0, 1.0]));
    assert_vec_approx(&screen, &[0.866025, 0.866025], EPS);
}

#[test]
fn project_skips_divide_when_w_is_zero() {
    let p = perspective(
        &reference_frustum(),
        Handedness::Right,
        ClipVolume::MinusOneToOne,
    );
    let screen = project(&p, &Vec4::new([1.0, 2.0, 0.0, 0.0]));
    assert_vec_approx(&screen, &[1.732051, 3.464102], EPS);
    assert!(screen.x().is_finite() && screen.y().is_finite());
}

#[test]
fn frustum_validation_reports_each_degeneracy() {
    let fov = 45.0_f32.deg();
    assert_eq!(
        Frustum::new(fov, 1.0, 2.0, 2.0),
        Err(MathError::DegenerateDepthRange)
    );
    assert_eq!(
        Frustum::new(fov, 0.0, 0.1, 100.0),
        Err(MathError::ZeroAspectRatio)
    );
    assert_eq!(
        Frustum::new(Angle::from_radians(0.0_f32), 1.0, 0.1, 100.0),
        Err(MathError::DegenerateFieldOfView)
    );

    let frustum = reference_frustum();
    assert!((frustum.fov().degrees() - 60.0).abs() < 1e-12);
    assert!((frustum.near() - 0.1).abs() < f64::EPSILON);
    assert!((frustum.far() - 1000.0).abs() < f64::EPSILON);
}

#[test]
fn composed_model_view_projection() {
    let mut view = Mat4::identity();
    geom::pre_translate(&mut view, &Vec3::new([0.0, 0.0, -10.0]));
    geom::pre_rotate(&mut view, 90.0_f64.deg(), &z_axis());
    geom::post_scale(&mut view, &Vec3::new([2.0, 2.0, 2.0]));

    let proj = perspective(&reference_frustum(), Handedness::Right, ClipVolume::ZeroToOne);
    let mvp = proj * view;
    let origin = project(&mvp, &Vec4::new([0.0, 0.0, 0.0, 1.0]));
    assert_vec_approx(&origin, &[0.0, 0.0], 1e-12);
    // (1, 0, 0) -> scaled to x = 2, turned onto +Y, ten units ahead.
    let tip = project(&mvp, &Vec4::new([1.0, 0.0, 0.0, 1.0]));
    assert_vec_approx(&tip, &[0.0, 0.3464102], 1e-6);
}
