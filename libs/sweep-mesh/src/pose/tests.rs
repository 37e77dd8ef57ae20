//! Tests for cursor movement.

use super::*;
use crate::error::SweepError;
use approx::assert_abs_diff_eq;

fn assert_vec_eq(a: Vec3, b: Vec3) {
    assert!((a - b).length() < 1e-9, "{a:?} != {b:?}");
}

#[test]
fn test_default_pose_is_orthonormal() {
    let pose = Pose::default();
    assert_abs_diff_eq!(pose.heading.dot(pose.up), 0.0);
    assert_vec_eq(pose.right(), -Vec3::Y);
}

#[test]
fn test_forward_moves_along_heading() {
    let pose = Pose::default().forward(12.5).unwrap();
    assert_vec_eq(pose.position, Vec3::new(12.5, 0.0, 0.0));
}

#[test]
fn test_negative_forward_moves_backward() {
    let pose = Pose::default().forward(-4.0).unwrap();
    assert_vec_eq(pose.position, Vec3::new(-4.0, 0.0, 0.0));
    assert_vec_eq(pose.heading, Vec3::X);
}

#[test]
fn test_yaw_turns_left_about_up() {
    let pose = Pose::default().yaw(90.0).unwrap();
    assert_vec_eq(pose.heading, Vec3::Y);
    assert_vec_eq(pose.up, Vec3::Z);
}

#[test]
fn test_pitch_raises_nose() {
    let pose = Pose::default().pitch(90.0).unwrap();
    assert_vec_eq(pose.heading, Vec3::Z);
    assert_vec_eq(pose.up, -Vec3::X);
}

#[test]
fn test_roll_keeps_heading() {
    let pose = Pose::default().roll(90.0).unwrap();
    assert_vec_eq(pose.heading, Vec3::X);
    assert_vec_eq(pose.up, -Vec3::Y);
}

#[test]
fn test_order_matters() {
    let a = Pose::default().yaw(90.0).unwrap().pitch(90.0).unwrap();
    let b = Pose::default().pitch(90.0).unwrap().yaw(90.0).unwrap();
    assert!((a.heading - b.heading).length() > 0.5);
}

#[test]
fn test_movement_returns_new_pose() {
    let start = Pose::default();
    let moved = start.forward(3.0).unwrap();
    assert_eq!(start, Pose::default());
    assert_ne!(moved, start);
}

#[test]
fn test_frame_stays_orthonormal_over_many_turns() {
    let mut pose = Pose::default();
    for i in 0..2000 {
        pose = match i % 3 {
            0 => pose.yaw(7.3).unwrap(),
            1 => pose.pitch(-3.1).unwrap(),
            _ => pose.roll(11.9).unwrap(),
        };
    }
    assert_abs_diff_eq!(pose.heading.length(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pose.up.length(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pose.heading.dot(pose.up), 0.0, epsilon = 1e-6);
}

#[test]
fn test_non_finite_input_is_rejected() {
    assert_eq!(
        Pose::default().forward(f64::INFINITY).unwrap_err(),
        SweepError::NonFinite { command: "forward", value: f64::INFINITY }
    );
    assert!(matches!(
        Pose::default().yaw(f64::NAN),
        Err(SweepError::NonFinite { command: "yaw", .. })
    ));
    assert!(matches!(
        Pose::default().set_heading(Vec3::new(f64::NAN, 0.0, 0.0), Vec3::Z),
        Err(SweepError::NonFinite { command: "set_heading", .. })
    ));
}

#[test]
fn test_set_heading_orthogonalizes_up() {
    let pose = Pose::default()
        .set_heading(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 1.0))
        .unwrap();
    assert_vec_eq(pose.heading, Vec3::Y);
    assert_vec_eq(pose.up, Vec3::Z);
}

#[test]
fn test_set_heading_parallel_up_keeps_previous_up() {
    let pose = Pose::default().set_heading(Vec3::Y, Vec3::Y).unwrap();
    assert_vec_eq(pose.heading, Vec3::Y);
    assert_vec_eq(pose.up, Vec3::Z);
}

#[test]
fn test_set_heading_zero_is_ignored() {
    let pose = Pose::default().set_heading(Vec3::ZERO, Vec3::Z).unwrap();
    assert_eq!(pose, Pose::default());
}

#[test]
fn test_apply_all_replays_in_order() {
    let commands = [Command::Forward(10.0), Command::Yaw(90.0), Command::Forward(5.0)];
    let pose = Pose::default().apply_all(&commands).unwrap();
    assert_vec_eq(pose.position, Vec3::new(10.0, 5.0, 0.0));
    assert_vec_eq(pose.heading, Vec3::Y);
}
