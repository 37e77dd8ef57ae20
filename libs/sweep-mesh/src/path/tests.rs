//! Tests for path recording.

use super::*;

#[test]
fn test_builder_keeps_order() {
    let path = Path::new().yaw(45.0).forward(10.0).roll(-30.0).pitch(5.0);
    assert_eq!(
        path.commands(),
        &[
            Command::Yaw(45.0),
            Command::Forward(10.0),
            Command::Roll(-30.0),
            Command::Pitch(5.0),
        ]
    );
}

#[test]
fn test_rotation_deg() {
    assert_eq!(Command::Yaw(12.0).rotation_deg(), Some(12.0));
    assert_eq!(Command::Roll(-3.0).rotation_deg(), Some(-3.0));
    assert_eq!(Command::Forward(1.0).rotation_deg(), None);
    assert_eq!(Command::SetHeading(Vec3::X, Vec3::Z).rotation_deg(), None);
}

#[test]
fn test_set_heading_is_turn_without_angle() {
    let cmd = Command::SetHeading(Vec3::Y, Vec3::Z);
    assert!(cmd.is_turn());
    assert!(!Command::Forward(2.0).is_turn());
    assert_eq!(cmd.name(), "set_heading");
}

#[test]
fn test_check_finite_names_command() {
    assert!(Command::Yaw(30.0).check_finite().is_ok());
    let err = Command::Pitch(f64::NAN).check_finite().unwrap_err();
    assert!(err.to_string().contains("pitch"));
    let err = Command::SetHeading(Vec3::X, Vec3::new(0.0, f64::INFINITY, 0.0))
        .check_finite()
        .unwrap_err();
    assert!(err.to_string().contains("set_heading"));
}

#[test]
fn test_forward_count() {
    let path = Path::new().forward(1.0).yaw(90.0).forward(2.0).forward(3.0);
    assert_eq!(path.forward_count(), 3);
    assert!(!path.is_empty());
    assert!(Path::new().is_empty());
}

#[test]
fn test_path_from_json() {
    let json = r#"[{"forward": 30.0}, {"yaw": 90.0}, {"set_heading": [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]}]"#;
    let path: Path = serde_json::from_str(json).unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.commands()[0], Command::Forward(30.0));
    assert_eq!(path.commands()[2], Command::SetHeading(Vec3::Y, Vec3::Z));
}
