//! # Path Drivers
//!
//! Walks a path segment by segment, stamping rings and bridging corners,
//! and hands the ring sequence to the sweep assembler.
//!
//! ## Ring Sequence
//!
//! - A fresh ring is stamped at the very start of the path and right after
//!   every corner.
//! - Otherwise the previous segment's end ring (or its last smoothing
//!   ring) doubles as the next segment's start ring.
//! - Corner and smoothing rings are inserted inline in travel order.
//!
//! ## Failure Semantics
//!
//! Non-finite numbers anywhere in the path fail the call before any
//! geometry is built. Structural misuse (fewer than 3 profile points, no
//! straight runs, too few rings) returns the unchanged start pose and no
//! mesh.
//!
//! ## Example
//!
//! ```rust
//! use sweep_mesh::driver::{sweep, SweepOptions};
//! use sweep_mesh::{path::Path, pose::Pose, shape::Shape};
//!
//! let path = Path::new().forward(20.0).yaw(90.0).forward(20.0);
//! let result = sweep(&Shape::square(4.0, true), &path, &Pose::default(), &SweepOptions::default()).unwrap();
//! assert!(result.mesh.is_some());
//! ```

use crate::analyze::{analyze_closed, analyze_open, PathPlan, Segment};
use crate::corner::{corner_rings, smoothing_rings, JointMode, Resolution};
use crate::error::SweepResult;
use crate::mesh::Mesh;
use crate::path::Path;
use crate::pose::Pose;
use crate::shape::Shape;
use crate::stamp::{stamp_ring_data, RingData};
use crate::sweep::{assemble_closed, assemble_open, ContourWinding};
use crate::topology::check_mesh;
use config::SweepTuning;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Per-sweep settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepOptions {
    /// Corner treatment (default: round)
    pub joint: JointMode,
    /// Round-joint ring count (default: 6 rings)
    pub resolution: Resolution,
    /// Wrap the path into a closed loop without caps
    pub closed: bool,
    /// Threshold and limit overrides
    pub tuning: SweepTuning,
    /// Material tag for the produced mesh
    pub material: Option<String>,
}

impl SweepOptions {
    /// Default options with the given joint mode.
    pub fn with_joint(joint: JointMode) -> Self {
        Self {
            joint,
            ..Self::default()
        }
    }

    /// Default options for a closed loop.
    pub fn closed() -> Self {
        Self {
            closed: true,
            ..Self::default()
        }
    }
}

/// Outcome of a driver call.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    /// Cursor pose after the path (the start pose for a no-op)
    pub pose: Pose,
    /// Produced mesh, `None` for a no-op
    pub mesh: Option<Mesh>,
}

impl Sweep {
    fn unchanged(pose: Pose) -> Self {
        Self { pose, mesh: None }
    }
}

/// One independent sweep for [`sweep_many`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepJob {
    /// Profile
    pub shape: Shape,
    /// Recorded path
    pub path: Path,
    /// Start pose
    #[serde(default)]
    pub start: Pose,
    /// Settings
    #[serde(default)]
    pub options: SweepOptions,
}

/// Sweeps `shape` along `path` from `start`.
///
/// # Arguments
///
/// * `shape` - Profile with at least 3 outer points
/// * `path` - Recorded commands
/// * `start` - Cursor pose the path starts from
/// * `options` - Joint mode, resolution, open/closed and tuning
///
/// # Errors
///
/// Returns [`SweepError::NonFinite`](crate::error::SweepError::NonFinite)
/// for NaN or infinite command arguments, and
/// [`SweepError::InvalidMesh`](crate::error::SweepError::InvalidMesh) if
/// the debug-build structural check rejects the output.
pub fn sweep(shape: &Shape, path: &Path, start: &Pose, options: &SweepOptions) -> SweepResult<Sweep> {
    for command in path.commands() {
        command.check_finite()?;
    }

    if shape.points.len() < 3 {
        warn!(points = shape.points.len(), "profile has fewer than 3 points, nothing swept");
        return Ok(Sweep::unchanged(*start));
    }

    let radius = shape.profile_radius();
    let plan = if options.closed {
        analyze_closed(path.commands(), radius, &options.tuning)
    } else {
        analyze_open(path.commands(), radius, &options.tuning)
    };
    if plan.segments.is_empty() {
        warn!(commands = path.len(), "path has no straight runs, nothing swept");
        return Ok(Sweep::unchanged(*start));
    }

    let walker = Walker { shape, options };
    let (rings, end) = walker.walk(&plan, start)?;

    // Backward detection only covers single straight runs
    let backward = !plan.closed && plan.segments.len() == 1 && plan.segments[0].distance < 0.0;
    let winding = ContourWinding::for_shape(shape, backward);
    let assembled = if plan.closed {
        assemble_closed(&rings, &winding)
    } else {
        assemble_open(&rings, &winding)
    };
    let Some(mesh) = assembled else {
        warn!(rings = rings.len(), closed = plan.closed, "too few rings, nothing swept");
        return Ok(Sweep::unchanged(*start));
    };

    let mesh = mesh
        .with_provenance(*start)
        .with_material(options.material.clone());
    if cfg!(debug_assertions) {
        check_mesh(&mesh)?;
    }

    debug!(
        segments = plan.segments.len(),
        rings = rings.len(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        closed = plan.closed,
        "sweep complete"
    );
    Ok(Sweep {
        pose: end,
        mesh: Some(mesh),
    })
}

/// Sweeps `shape` along a single straight run of `distance`.
///
/// Negative distances extrude backward; the mesh still faces outward.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::driver::{extrude, SweepOptions};
/// use sweep_mesh::{pose::Pose, shape::Shape};
///
/// let result = extrude(&Shape::square(10.0, true), 30.0, &Pose::default(), &SweepOptions::default()).unwrap();
/// let extent = result.mesh.unwrap().extent();
/// assert!((extent.x - 30.0).abs() < 1e-9);
/// ```
pub fn extrude(shape: &Shape, distance: f64, start: &Pose, options: &SweepOptions) -> SweepResult<Sweep> {
    let options = SweepOptions {
        closed: false,
        ..options.clone()
    };
    sweep(shape, &Path::new().forward(distance), start, &options)
}

/// Runs independent sweeps in parallel, results in job order.
pub fn sweep_many(jobs: &[SweepJob]) -> Vec<SweepResult<Sweep>> {
    jobs.par_iter()
        .map(|job| sweep(&job.shape, &job.path, &job.start, &job.options))
        .collect()
}

/// Ring emission state for one path walk.
struct Walker<'a> {
    shape: &'a Shape,
    options: &'a SweepOptions,
}

impl Walker<'_> {
    fn stamp(&self, pose: &Pose) -> RingData {
        stamp_ring_data(self.shape, pose)
    }

    /// Produces the ring sequence and the cursor pose after the path.
    fn walk(&self, plan: &PathPlan, start: &Pose) -> SweepResult<(Vec<RingData>, Pose)> {
        let first_pose = start.apply_all(&plan.leading)?;
        let mut pose = first_pose;
        let mut rings: Vec<RingData> = Vec::new();
        let mut fresh = true;

        for segment in &plan.segments {
            let sign = segment.distance.signum();
            if fresh {
                rings.push(self.stamp(&pose.forward(sign * segment.shorten_start)?));
                fresh = false;
            }

            let end_pose = pose.forward(segment.distance - sign * segment.shorten_end)?;
            let apex = pose.forward(segment.distance)?;
            let next = apex.apply_all(&segment.rotations_after)?;

            if segment.is_last && plan.closed {
                // The seam turns back onto the first segment's orientation
                let seam = Pose { position: apex.position, ..first_pose };
                self.close_seam(&mut rings, segment, &end_pose, &seam);
            } else {
                let end_ring = self.stamp(&end_pose);
                if !segment.is_last {
                    fresh = self.bridge(&mut rings, end_ring, segment, &end_pose, &next);
                } else {
                    rings.push(end_ring);
                }
            }
            pose = next;
        }

        Ok((rings, pose))
    }

    /// Pushes `end_ring` and whatever joins it to the next segment.
    /// Returns true if the next segment needs a fresh start ring.
    fn bridge(&self, rings: &mut Vec<RingData>, end_ring: RingData, segment: &Segment, end_pose: &Pose, next: &Pose) -> bool {
        let tuning = &self.options.tuning;
        let joint = if segment.corner_after {
            corner_rings(
                &end_ring,
                end_pose,
                next,
                segment.shorten_end,
                self.options.joint,
                &self.options.resolution,
                tuning,
            )
        } else {
            smoothing_rings(&end_ring, end_pose, next.heading, tuning)
        };
        rings.push(end_ring);
        rings.extend(joint);
        segment.corner_after
    }

    /// Joins the last segment of a closed path back onto the first ring.
    ///
    /// A corner seam keeps the end ring and its corner rings. Otherwise the
    /// end ring would coincide with the first ring, so it and any smoothing
    /// are left out and the wrap-around band closes the loop.
    fn close_seam(&self, rings: &mut Vec<RingData>, segment: &Segment, end_pose: &Pose, seam: &Pose) {
        if !segment.corner_after {
            return;
        }
        let end_ring = self.stamp(end_pose);
        self.bridge(rings, end_ring, segment, end_pose, seam);
    }
}
