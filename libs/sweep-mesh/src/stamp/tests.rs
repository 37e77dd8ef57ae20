//! Tests for ring stamping.

use super::*;
use crate::math::newell_normal;
use approx::assert_abs_diff_eq;

fn assert_vec_eq(a: Vec3, b: Vec3) {
    assert!((a - b).length() < 1e-9, "{a:?} != {b:?}");
}

#[test]
fn test_plane_axes_default_pose() {
    let (x, y) = plane_axes(&Pose::default());
    assert_vec_eq(x, -Vec3::Y);
    assert_vec_eq(y, Vec3::Z);
    assert_vec_eq(x.cross(y), -Vec3::X);
}

#[test]
fn test_plane_axes_degenerate_pose_falls_back() {
    let pose = Pose {
        position: Vec3::ZERO,
        heading: Vec3::Z,
        up: Vec3::Z,
    };
    let (x, y) = plane_axes(&pose);
    assert_abs_diff_eq!(x.length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y.length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(x.dot(pose.heading), 0.0, epsilon = 1e-12);
    assert_vec_eq(x.cross(y), -pose.heading);

    let along_x = Pose {
        position: Vec3::ZERO,
        heading: Vec3::X,
        up: Vec3::X,
    };
    let (x, _) = plane_axes(&along_x);
    assert_abs_diff_eq!(x.dot(Vec3::X), 0.0, epsilon = 1e-12);
}

#[test]
fn test_first_point_lands_on_cursor() {
    let pose = Pose::new(Vec3::new(5.0, 6.0, 7.0), Vec3::Y, Vec3::Z);
    let shape = Shape::new(vec![
        Vec2::new(2.0, 2.0),
        Vec2::new(4.0, 2.0),
        Vec2::new(4.0, 5.0),
    ]);
    let ring = stamp_ring(&shape, &pose);
    assert_vec_eq(ring[0], pose.position);
    // plane_x = Y × Z = X, plane_y = Z
    assert_vec_eq(ring[2], pose.position + Vec3::new(2.0, 0.0, 3.0));
}

#[test]
fn test_centered_shape_surrounds_cursor() {
    let ring = stamp_ring(&Shape::square(4.0, true), &Pose::default());
    assert_vec_eq(centroid(&ring), Vec3::ZERO);
    for p in &ring {
        assert_abs_diff_eq!(p.x, 0.0);
    }
}

#[test]
fn test_preserve_position_keeps_offset() {
    let shape = Shape::new(vec![
        Vec2::new(10.0, 0.0),
        Vec2::new(11.0, 0.0),
        Vec2::new(11.0, 1.0),
    ])
    .preserve_position();
    let ring = stamp_ring(&shape, &Pose::default());
    assert_vec_eq(ring[0], Vec3::new(0.0, -10.0, 0.0));
}

#[test]
fn test_counter_clockwise_profile_faces_backward() {
    let ring = stamp_ring(&Shape::square(2.0, true), &Pose::default());
    let normal = newell_normal(&ring);
    assert!(normal.dot(Pose::default().heading) < 0.0);
}

#[test]
fn test_ring_data_layout() {
    let outer = vec![
        Vec2::new(-5.0, -5.0),
        Vec2::new(5.0, -5.0),
        Vec2::new(5.0, 5.0),
        Vec2::new(-5.0, 5.0),
    ];
    let hole = vec![
        Vec2::new(-2.0, -2.0),
        Vec2::new(-2.0, 2.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(2.0, -2.0),
    ];
    let shape = Shape::with_holes(outer, vec![hole]).centered();
    let data = stamp_ring_data(&shape, &Pose::default());

    assert_eq!(data.len(), 8);
    assert_eq!(data.contours().count(), 2);
    let points: Vec<Vec3> = data.points().collect();
    assert_eq!(points[4], data.holes[0][0]);

    let shifted = data.map_points(|p| p + Vec3::X);
    assert_vec_eq(shifted.holes[0][0], data.holes[0][0] + Vec3::X);
    assert_vec_eq(shifted.centroid(), Vec3::X);
}
