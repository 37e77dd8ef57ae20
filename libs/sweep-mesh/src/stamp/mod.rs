//! # Ring Stamping
//!
//! Projects a 2D profile onto the plane of a cursor pose.
//!
//! ## Plane Convention
//!
//! - `plane_x = normalize(heading × up)` (the cursor's right)
//! - `plane_y = up`
//!
//! so `plane_x × plane_y = -heading`: a counter-clockwise profile faces
//! backward along the travel direction.

use crate::math::{centroid, normalize, Vec2, Vec3};
use crate::pose::Pose;
use crate::shape::Shape;
use config::constants::COLINEAR_AXIS_EPSILON;

/// One 3D vertex loop, one point per profile point.
pub type Ring = Vec<Vec3>;

/// A stamped outer ring plus one ring per hole.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RingData {
    /// Stamped outer boundary
    pub outer: Ring,
    /// Stamped holes, in shape order
    pub holes: Vec<Ring>,
}

impl RingData {
    /// Creates ring data without holes.
    pub fn new(outer: Ring) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Total number of points over all contours.
    pub fn len(&self) -> usize {
        self.outer.len() + self.holes.iter().map(Vec::len).sum::<usize>()
    }

    /// Returns true if the outer ring is empty.
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// Contours in mesh layout order: outer first, then holes.
    pub fn contours(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// All points in mesh layout order.
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.contours().flat_map(|ring| ring.iter().copied())
    }

    /// Centroid of the outer ring.
    pub fn centroid(&self) -> Vec3 {
        centroid(&self.outer)
    }

    /// Applies `f` to every point of every contour.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Vec3) -> Vec3) -> Self {
        Self {
            outer: self.outer.iter().map(|p| f(*p)).collect(),
            holes: self
                .holes
                .iter()
                .map(|hole| hole.iter().map(|p| f(*p)).collect())
                .collect(),
        }
    }
}

/// Returns `(plane_x, plane_y)` for a pose.
///
/// When heading is parallel to up the frame is degenerate: world X (or
/// world Y if heading runs along X) is orthogonalized against heading
/// instead, keeping `plane_x × plane_y = -heading`.
pub fn plane_axes(pose: &Pose) -> (Vec3, Vec3) {
    let right = pose.heading.cross(pose.up);
    if right.length() > COLINEAR_AXIS_EPSILON {
        return (normalize(right), pose.up);
    }

    let heading = normalize(pose.heading);
    let world = if heading.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let plane_x = normalize(world - heading * world.dot(heading));
    let plane_y = normalize(plane_x.cross(heading));
    (plane_x, plane_y)
}

/// Maps anchored 2D points onto the pose plane.
pub fn stamp_points(points: &[Vec2], pose: &Pose) -> Ring {
    let (plane_x, plane_y) = plane_axes(pose);
    points
        .iter()
        .map(|p| pose.position + plane_x * p.x + plane_y * p.y)
        .collect()
}

/// Stamps the outer boundary of `shape` at `pose`.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::{pose::Pose, shape::Shape, stamp::stamp_ring};
///
/// let ring = stamp_ring(&Shape::square(2.0, false), &Pose::default());
/// // The first vertex lands on the cursor
/// assert_eq!(ring[0], glam::DVec3::ZERO);
/// ```
pub fn stamp_ring(shape: &Shape, pose: &Pose) -> Ring {
    stamp_points(&shape.anchored_outer(), pose)
}

/// Stamps the outer boundary and every hole of `shape` at `pose`.
pub fn stamp_ring_data(shape: &Shape, pose: &Pose) -> RingData {
    RingData {
        outer: stamp_ring(shape, pose),
        holes: shape
            .anchored_holes()
            .iter()
            .map(|hole| stamp_points(hole, pose))
            .collect(),
    }
}

#[cfg(test)]
mod tests;
