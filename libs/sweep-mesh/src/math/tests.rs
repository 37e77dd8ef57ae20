//! Tests for the vector and rotation helpers.

use super::*;
use approx::assert_abs_diff_eq;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn normalize_zero_is_unchanged() {
    assert_eq!(normalize(Vec3::ZERO), Vec3::ZERO);
}

#[test]
fn normalize_yields_unit_length() {
    let v = normalize(Vec3::new(3.0, -4.0, 12.0));
    assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);
}

#[test]
fn rotation_about_z_quarter_turn() {
    let p = rotate_point_around_axis(Vec3::new(2.0, 0.0, 0.0), Vec3::Z, FRAC_PI_2);
    assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-12);
}

#[test]
fn rotation_preserves_magnitude() {
    let p = Vec3::new(1.5, -2.0, 0.75);
    let axis = Vec3::new(1.0, 1.0, 0.3);
    for step in 0..12 {
        let r = rotate_point_around_axis(p, axis, step as f64 * 0.37);
        assert_abs_diff_eq!(r.length(), p.length(), epsilon = 1e-12);
    }
}

#[test]
fn rotation_accepts_unnormalized_axis() {
    let a = rotate_point_around_axis(Vec3::X, Vec3::new(0.0, 0.0, 5.0), PI);
    assert_abs_diff_eq!(a.x, -1.0, epsilon = 1e-12);
}

#[test]
fn point_on_axis_is_fixed() {
    let p = rotate_point_around_axis(Vec3::new(0.0, 0.0, 3.0), Vec3::Z, 1.234);
    assert_abs_diff_eq!(p.z, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
}

#[test]
fn direction_rotation_stays_unit_after_many_steps() {
    let mut d = Vec3::X;
    for _ in 0..10_000 {
        d = rotate_direction_around_axis(d, Vec3::new(0.2, 0.3, 1.0), 0.01);
    }
    assert_abs_diff_eq!(d.length(), 1.0, epsilon = 1e-12);
}

#[test]
fn angle_between_basics() {
    assert_abs_diff_eq!(angle_between(Vec3::X, Vec3::Y), FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(angle_between(Vec3::X, -Vec3::X), PI, epsilon = 1e-12);
    assert_eq!(angle_between(Vec3::ZERO, Vec3::X), 0.0);
}

#[test]
fn centroid_of_square() {
    let pts = [
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(2.0, 0.0, 1.0),
        Vec3::new(2.0, 2.0, 1.0),
        Vec3::new(0.0, 2.0, 1.0),
    ];
    assert_eq!(centroid(&pts), Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(centroid(&[]), Vec3::ZERO);
}

#[test]
fn newell_normal_follows_winding() {
    let ccw = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let n = newell_normal(&ccw);
    assert!(n.z > 0.0);
    assert_abs_diff_eq!(n.z, 2.0, epsilon = 1e-12);

    let cw: Vec<Vec3> = ccw.iter().rev().copied().collect();
    assert!(newell_normal(&cw).z < 0.0);
}
