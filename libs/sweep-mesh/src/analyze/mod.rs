//! # Path Segment Analysis
//!
//! Splits a path into straight segments and computes how far each end of a
//! segment must be pulled back so the corner geometry between two segments
//! fits without self-intersection, the same way line joins are mitered in
//! 2D vector graphics.
//!
//! ## Rules
//!
//! - Open paths never shorten the first segment's start or the last
//!   segment's end.
//! - Closed paths shorten both ends of every segment. Rotation missing from
//!   a whole number of turns is attributed to the seam joining the last
//!   segment back to the first.
//! - Rotations between two segments are summed by absolute value for the
//!   shortening but kept in order for replay.
//! - `SetHeading` never contributes to a corner.

use crate::path::Command;
use config::constants::approx_zero;
use config::SweepTuning;
use tracing::trace;

/// A straight run of the path with its miter pull-backs.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Signed travel distance
    pub distance: f64,
    /// Pull-back at the start of the run
    pub shorten_start: f64,
    /// Pull-back at the end of the run
    pub shorten_end: f64,
    /// Orientation commands between this run and the next, in order
    pub rotations_after: Vec<Command>,
    /// True for the first run
    pub is_first: bool,
    /// True for the last run
    pub is_last: bool,
    /// Accumulated absolute rotation (degrees) in the joint after this run
    pub turn_after_deg: f64,
    /// Whether the joint after this run is a corner
    pub corner_after: bool,
}

impl Segment {
    /// Length left between the two pull-backs.
    pub fn effective_length(&self) -> f64 {
        self.distance.abs() - self.shorten_start - self.shorten_end
    }
}

/// Segments of a path plus the orientation commands preceding the first run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathPlan {
    /// Orientation commands before the first `Forward`
    pub leading: Vec<Command>,
    /// Straight runs in travel order
    pub segments: Vec<Segment>,
    /// True if the plan wraps the last run back to the first
    pub closed: bool,
    /// Rotation (degrees) attributed to the seam of a closed path
    pub closing_angle_deg: f64,
}

/// Miter pull-back for a joint of `angle_deg` on a profile of `radius`,
/// with the default tuning.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::analyze::shorten;
///
/// assert_eq!(shorten(5.0, 10.0), 0.0);
/// assert!((shorten(90.0, 10.0) - 10.0).abs() < 1e-9);
/// ```
pub fn shorten(angle_deg: f64, radius: f64) -> f64 {
    shorten_with(angle_deg, radius, &SweepTuning::default())
}

/// `radius · tan(angle / 2)`, zero below the corner threshold, with the
/// half-angle clamped before the tangent.
pub fn shorten_with(angle_deg: f64, radius: f64, tuning: &SweepTuning) -> f64 {
    let angle = angle_deg.abs();
    if angle < tuning.corner_threshold_deg {
        return 0.0;
    }
    let half = (angle / 2.0).min(tuning.max_miter_half_angle_deg);
    radius * half.to_radians().tan()
}

/// Rotation (degrees) still needed for a closed path to complete a whole
/// number of turns, `0` when the remainder is within tolerance.
pub fn closing_angle(commands: &[Command], tuning: &SweepTuning) -> f64 {
    let total: f64 = commands.iter().filter_map(Command::rotation_deg).sum();
    let remainder = total.abs() % 360.0;
    if remainder < tuning.closing_tolerance_deg || 360.0 - remainder < tuning.closing_tolerance_deg {
        0.0
    } else {
        360.0 - remainder
    }
}

/// Analyzes an open path.
pub fn analyze_open(commands: &[Command], radius: f64, tuning: &SweepTuning) -> PathPlan {
    analyze(commands, radius, tuning, false)
}

/// Analyzes a closed path.
pub fn analyze_closed(commands: &[Command], radius: f64, tuning: &SweepTuning) -> PathPlan {
    analyze(commands, radius, tuning, true)
}

fn analyze(commands: &[Command], radius: f64, tuning: &SweepTuning, closed: bool) -> PathPlan {
    let (leading, runs) = split_runs(commands);
    let n = runs.len();
    let closing_angle_deg = if closed { closing_angle(commands, tuning) } else { 0.0 };

    let mut segments: Vec<Segment> = runs
        .into_iter()
        .enumerate()
        .map(|(i, (distance, rotations_after))| Segment {
            distance,
            shorten_start: 0.0,
            shorten_end: 0.0,
            turn_after_deg: turn_sum(&rotations_after),
            rotations_after,
            is_first: i == 0,
            is_last: i + 1 == n,
            corner_after: false,
        })
        .collect();

    if n == 0 {
        return PathPlan {
            leading,
            segments,
            closed,
            closing_angle_deg,
        };
    }

    if closed {
        segments[n - 1].turn_after_deg += turn_sum(&leading) + closing_angle_deg;
    }

    let joints = if closed { n } else { n - 1 };
    for i in 0..joints {
        let next = (i + 1) % n;
        let turn = segments[i].turn_after_deg;
        let limit = 0.5 * segments[i].distance.abs().min(segments[next].distance.abs());
        let pull_back = shorten_with(turn, radius, tuning).min(limit);

        segments[i].corner_after = turn >= tuning.corner_threshold_deg;
        segments[i].shorten_end = pull_back;
        segments[next].shorten_start = pull_back;

        trace!(
            segment = i,
            turn_deg = turn,
            corner = segments[i].corner_after,
            pull_back,
            "analyzed joint"
        );
    }

    PathPlan {
        leading,
        segments,
        closed,
        closing_angle_deg,
    }
}

/// Splits commands into the orientation prefix and `(distance, turns)` runs.
/// Zero-length moves are dropped so their neighbouring turns merge.
fn split_runs(commands: &[Command]) -> (Vec<Command>, Vec<(f64, Vec<Command>)>) {
    let mut leading = Vec::new();
    let mut runs: Vec<(f64, Vec<Command>)> = Vec::new();

    for command in commands {
        match *command {
            Command::Forward(d) if approx_zero(d) => {}
            Command::Forward(d) => runs.push((d, Vec::new())),
            turn => match runs.last_mut() {
                Some((_, turns)) => turns.push(turn),
                None => leading.push(turn),
            },
        }
    }

    (leading, runs)
}

fn turn_sum(commands: &[Command]) -> f64 {
    commands
        .iter()
        .filter_map(Command::rotation_deg)
        .map(f64::abs)
        .sum()
}

#[cfg(test)]
mod tests;
