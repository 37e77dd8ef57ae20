//! # Segment Analysis Tests

use super::*;
use crate::path::Path;
use approx::assert_abs_diff_eq;

fn tuning() -> SweepTuning {
    SweepTuning::default()
}

// =============================================================================
// SHORTEN
// =============================================================================

#[test]
fn test_shorten_below_threshold_is_zero() {
    assert_eq!(shorten(0.0, 5.0), 0.0);
    assert_eq!(shorten(9.99, 5.0), 0.0);
    assert!(shorten(10.0, 5.0) > 0.0);
}

#[test]
fn test_shorten_right_angle_equals_radius() {
    assert_abs_diff_eq!(shorten(90.0, 7.0), 7.0, epsilon = 1e-9);
}

#[test]
fn test_shorten_is_monotonic_and_bounded() {
    let radius = 3.0;
    let bound = radius * 87.5_f64.to_radians().tan();
    let mut previous = 0.0;
    let mut angle = 10.0;
    while angle <= 175.0 {
        let s = shorten(angle, radius);
        assert!(s >= previous, "not monotonic at {angle}");
        assert!(s <= bound + 1e-9);
        previous = s;
        angle += 0.5;
    }
    assert!(shorten(179.9, radius) <= bound + 1e-9);
    assert!(shorten(720.0, radius) <= bound + 1e-9);
}

#[test]
fn test_shorten_uses_absolute_angle() {
    assert_eq!(shorten(-60.0, 2.0), shorten(60.0, 2.0));
}

#[test]
fn test_shorten_respects_tuning_threshold() {
    let relaxed = SweepTuning::new(30.0, 15.0).unwrap();
    assert_eq!(shorten_with(20.0, 5.0, &relaxed), 0.0);
    assert!(shorten_with(20.0, 5.0, &tuning()) > 0.0);
}

// =============================================================================
// OPEN PATHS
// =============================================================================

#[test]
fn test_open_path_boundaries_never_shorten() {
    let path = Path::new().yaw(90.0).forward(20.0).yaw(90.0).forward(20.0).yaw(90.0);
    let plan = analyze_open(path.commands(), 2.0, &tuning());

    assert_eq!(plan.leading, vec![Command::Yaw(90.0)]);
    assert_eq!(plan.segments.len(), 2);

    let first = &plan.segments[0];
    let last = &plan.segments[1];
    assert!(first.is_first && !first.is_last);
    assert!(last.is_last && !last.is_first);
    assert_eq!(first.shorten_start, 0.0);
    assert_eq!(last.shorten_end, 0.0);
    assert!(!last.corner_after);

    assert!(first.corner_after);
    assert_abs_diff_eq!(first.shorten_end, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(last.shorten_start, 2.0, epsilon = 1e-9);
}

#[test]
fn test_consecutive_rotations_are_summed_and_kept() {
    let path = Path::new().forward(50.0).yaw(30.0).pitch(-30.0).roll(15.0).forward(50.0);
    let plan = analyze_open(path.commands(), 1.0, &tuning());

    let first = &plan.segments[0];
    assert_eq!(
        first.rotations_after,
        vec![Command::Yaw(30.0), Command::Pitch(-30.0), Command::Roll(15.0)]
    );
    assert_abs_diff_eq!(first.turn_after_deg, 75.0);
    assert_abs_diff_eq!(first.shorten_end, shorten(75.0, 1.0), epsilon = 1e-12);
}

#[test]
fn test_small_turns_are_not_corners() {
    let path = Path::new().forward(10.0).yaw(4.0).yaw(4.0).forward(10.0);
    let plan = analyze_open(path.commands(), 3.0, &tuning());
    assert!(!plan.segments[0].corner_after);
    assert_eq!(plan.segments[0].shorten_end, 0.0);
    assert_eq!(plan.segments[1].shorten_start, 0.0);
}

#[test]
fn test_set_heading_is_never_a_corner() {
    let path = Path::new()
        .forward(10.0)
        .set_heading(crate::math::Vec3::Y, crate::math::Vec3::Z)
        .forward(10.0);
    let plan = analyze_open(path.commands(), 3.0, &tuning());
    assert!(!plan.segments[0].corner_after);
    assert_eq!(plan.segments[0].shorten_end, 0.0);
    assert_eq!(plan.segments[0].rotations_after.len(), 1);
}

#[test]
fn test_zero_length_moves_are_dropped() {
    let path = Path::new().forward(10.0).yaw(45.0).forward(0.0).yaw(45.0).forward(10.0);
    let plan = analyze_open(path.commands(), 1.0, &tuning());
    assert_eq!(plan.segments.len(), 2);
    assert_abs_diff_eq!(plan.segments[0].turn_after_deg, 90.0);
}

#[test]
fn test_pull_back_is_clamped_to_half_segment() {
    let path = Path::new().forward(4.0).yaw(90.0).forward(100.0);
    let plan = analyze_open(path.commands(), 10.0, &tuning());
    assert_abs_diff_eq!(plan.segments[0].shorten_end, 2.0);
    assert!(plan.segments[0].effective_length() >= 0.0);
}

#[test]
fn test_path_without_moves_has_no_segments() {
    let path = Path::new().yaw(90.0).pitch(10.0);
    let plan = analyze_open(path.commands(), 1.0, &tuning());
    assert!(plan.segments.is_empty());
    assert_eq!(plan.leading.len(), 2);
}

// =============================================================================
// CLOSED PATHS
// =============================================================================

#[test]
fn test_closing_angle() {
    let t = tuning();
    let square = Path::new().forward(1.0).yaw(90.0).forward(1.0).yaw(90.0).forward(1.0).yaw(90.0);
    assert_abs_diff_eq!(closing_angle(square.commands(), &t), 90.0);

    let full = square.clone().forward(1.0).yaw(90.0);
    assert_eq!(closing_angle(full.commands(), &t), 0.0);

    let nearly = Path::new().yaw(359.5);
    assert_eq!(closing_angle(nearly.commands(), &t), 0.0);

    let two_turns = Path::new().yaw(400.0);
    assert_abs_diff_eq!(closing_angle(two_turns.commands(), &t), 320.0);
}

#[test]
fn test_closed_square_shortens_every_end() {
    let path = Path::new()
        .forward(30.0)
        .yaw(90.0)
        .forward(30.0)
        .yaw(90.0)
        .forward(30.0)
        .yaw(90.0)
        .forward(30.0)
        .yaw(90.0);
    let plan = analyze_closed(path.commands(), 10.0, &tuning());
    assert!(plan.closed);
    assert_eq!(plan.closing_angle_deg, 0.0);
    assert_eq!(plan.segments.len(), 4);
    for segment in &plan.segments {
        assert!(segment.corner_after);
        assert_abs_diff_eq!(segment.shorten_start, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(segment.shorten_end, 10.0, epsilon = 1e-9);
    }
}

#[test]
fn test_closed_path_seam_gets_implicit_rotation() {
    // The final turn back to the start heading is never written
    let path = Path::new()
        .forward(30.0)
        .yaw(90.0)
        .forward(30.0)
        .yaw(90.0)
        .forward(30.0)
        .yaw(90.0)
        .forward(30.0);
    let plan = analyze_closed(path.commands(), 5.0, &tuning());
    assert_abs_diff_eq!(plan.closing_angle_deg, 90.0);

    let last = &plan.segments[3];
    assert!(last.corner_after);
    assert_abs_diff_eq!(last.turn_after_deg, 90.0);
    assert_abs_diff_eq!(last.shorten_end, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(plan.segments[0].shorten_start, 5.0, epsilon = 1e-9);
}
