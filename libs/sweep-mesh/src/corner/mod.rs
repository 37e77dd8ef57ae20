//! # Corner Generation
//!
//! Builds the intermediate rings bridging two straight runs.
//!
//! ## Joint Modes
//!
//! - **Flat**: no intermediate ring, the runs butt directly
//! - **Round**: fillet rings rigidly rotated about a pivot on the inside of
//!   the turn
//! - **Tapered**: a single bevel ring at the apex on the bisector, stretched
//!   across the bisector so the section does not pinch
//!
//! Heading changes that are not corners (smooth curve approximations) are
//! always filleted with one ring per smoothing step, whatever the joint
//! mode.
//!
//! ## Fillet Pivot
//!
//! The pivot sits `pull_back / tan(bend / 2)` inside the turn from the end
//! cursor. For an unclamped miter this is the profile radius and the fully
//! rotated ring coincides with the next run's start ring; without a
//! pull-back the rings turn in place about the cursor.

use crate::math::{angle_between, normalize, rotate_direction_around_axis, rotate_point_around_axis, Vec3};
use crate::pose::Pose;
use crate::stamp::RingData;
use config::constants::{DEFAULT_FILLET_STEPS, EPSILON};
use config::SweepTuning;
use serde::{Deserialize, Serialize};

/// Policy for bridging a path corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointMode {
    /// Runs butt directly
    Flat,
    /// Multi-ring fillet
    #[default]
    Round,
    /// Single scaled bevel ring
    Tapered,
}

/// How many rings a round joint receives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Fixed ring count regardless of the bend
    FixedCount(u32),
    /// One ring per this many degrees of bend
    AngleStep(f64),
    /// This many rings per full 360° of bend
    StepsPerAngle(f64),
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::FixedCount(DEFAULT_FILLET_STEPS)
    }
}

impl Resolution {
    /// Ring count for a bend of `bend_deg`, never below `min_steps`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sweep_mesh::corner::Resolution;
    ///
    /// assert_eq!(Resolution::AngleStep(10.0).steps(90.0, 2), 9);
    /// assert_eq!(Resolution::StepsPerAngle(36.0).steps(90.0, 2), 9);
    /// assert_eq!(Resolution::FixedCount(1).steps(90.0, 2), 2);
    /// ```
    pub fn steps(&self, bend_deg: f64, min_steps: u32) -> u32 {
        let raw = match *self {
            Resolution::FixedCount(n) => f64::from(n),
            Resolution::AngleStep(step) if step > EPSILON => (bend_deg.abs() / step).ceil(),
            Resolution::StepsPerAngle(per_turn) if per_turn > EPSILON => {
                (per_turn * bend_deg.abs() / 360.0).ceil()
            }
            Resolution::AngleStep(_) | Resolution::StepsPerAngle(_) => 0.0,
        };
        // NaN and out-of-range counts fall back to the floor
        let steps = if raw.is_finite() { raw.min(f64::from(u32::MAX)) as u32 } else { 0 };
        steps.max(min_steps)
    }
}

/// Rotation carrying one heading onto another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bend {
    /// Unit rotation axis (`old × new`)
    pub axis: Vec3,
    /// Bend angle in radians
    pub angle: f64,
    /// Unit vector from the old heading's line toward the inside of the turn
    pub inward: Vec3,
}

impl Bend {
    /// Computes the bend from `from` to `to`, `None` when the headings are
    /// colinear (including reversals).
    pub fn between(from: Vec3, to: Vec3, tuning: &SweepTuning) -> Option<Self> {
        let axis = from.cross(to);
        if axis.length() < tuning.colinear_epsilon {
            return None;
        }
        let axis = normalize(axis);
        Some(Self {
            axis,
            angle: angle_between(from, to),
            inward: normalize(axis.cross(from)),
        })
    }

    /// Bend angle in degrees.
    pub fn degrees(&self) -> f64 {
        self.angle.to_degrees()
    }
}

/// Intermediate rings for a corner between `end_pose` (where `end_ring`
/// was stamped) and `apex` (the unshortened corner point, already carrying
/// the new orientation).
///
/// Returns no rings for flat joints and colinear headings.
pub fn corner_rings(
    end_ring: &RingData,
    end_pose: &Pose,
    apex: &Pose,
    pull_back: f64,
    joint: JointMode,
    resolution: &Resolution,
    tuning: &SweepTuning,
) -> Vec<RingData> {
    let Some(bend) = Bend::between(end_pose.heading, apex.heading, tuning) else {
        return Vec::new();
    };

    match joint {
        JointMode::Flat => Vec::new(),
        JointMode::Round => {
            let n = resolution.steps(bend.degrees(), tuning.min_fillet_steps);
            let fractions = (1..=n).map(|i| f64::from(i) / f64::from(n + 1));
            fillet(end_ring, end_pose, &bend, pull_back, fractions)
        }
        JointMode::Tapered => vec![bevel(end_ring, end_pose, apex, &bend, tuning)],
    }
}

/// Automatic smoothing for heading changes below the corner threshold.
///
/// Produces `ceil(bend / smoothing_step)` rings (at least one), the last
/// fully rotated so it can serve as the next run's start ring.
pub fn smoothing_rings(
    end_ring: &RingData,
    end_pose: &Pose,
    next_heading: Vec3,
    tuning: &SweepTuning,
) -> Vec<RingData> {
    let Some(bend) = Bend::between(end_pose.heading, next_heading, tuning) else {
        return Vec::new();
    };
    let steps = ((bend.degrees() / tuning.smoothing_step_deg).ceil() as u32).max(1);
    let fractions = (1..=steps).map(|i| f64::from(i) / f64::from(steps));
    fillet(end_ring, end_pose, &bend, 0.0, fractions)
}

/// Rotates `end_ring` about the fillet pivot by `bend.angle * t` for each
/// fraction `t`.
fn fillet(
    end_ring: &RingData,
    end_pose: &Pose,
    bend: &Bend,
    pull_back: f64,
    fractions: impl Iterator<Item = f64>,
) -> Vec<RingData> {
    let half_tan = (bend.angle / 2.0).tan();
    let radius = if half_tan > EPSILON { pull_back / half_tan } else { 0.0 };
    let pivot = end_pose.position + bend.inward * radius;

    fractions
        .map(|t| {
            let angle = bend.angle * t;
            end_ring.map_points(|p| pivot + rotate_point_around_axis(p - pivot, bend.axis, angle))
        })
        .collect()
}

/// Moves `end_ring` to the apex, turns it onto the bisector and stretches
/// it across the bisector by `1 / cos(half)`.
fn bevel(end_ring: &RingData, end_pose: &Pose, apex: &Pose, bend: &Bend, tuning: &SweepTuning) -> RingData {
    let half = bend.angle / 2.0;
    let scale = if bend.degrees() > tuning.bevel_extreme_angle_deg {
        tuning.bevel_max_scale
    } else {
        1.0 / half.cos()
    };
    let across = rotate_direction_around_axis(bend.inward, bend.axis, half);

    end_ring.map_points(|p| {
        let q = apex.position + rotate_point_around_axis(p - end_pose.position, bend.axis, half);
        let offset = (q - apex.position).dot(across);
        q + across * (offset * (scale - 1.0))
    })
}
