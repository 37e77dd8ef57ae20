//! # Sweep Assembly
//!
//! Connects an ordered ring sequence into a triangulated shell.
//!
//! ## Vertex Layout
//!
//! Every ring contributes its outer contour followed by each hole contour,
//! so ring `k` starts at `k * ring_len`. Rings are shared between adjacent
//! bands and never duplicated.
//!
//! ## Side Faces
//!
//! Each profile edge between two consecutive rings spans a quad. Of its
//! two diagonals the shorter one (by squared length) is used, which keeps
//! curved sweeps free of bow-tie triangles. Holes get the same treatment.
//!
//! ## Topology
//!
//! - **Open**: two caps, each facing along the local end tangent
//! - **Closed**: the last ring wraps back to the first, no caps (torus)

use crate::cap::triangulate_cap;
use crate::math::{newell_normal, Vec3};
use crate::mesh::Mesh;
use crate::shape::{signed_area, Shape};
use crate::stamp::{Ring, RingData};
use config::constants::EPSILON;
use tracing::warn;

/// Which contours need their side-face winding reversed.
///
/// Side faces come out facing outward for a counter-clockwise outer
/// contour and clockwise holes swept forward along the heading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContourWinding {
    /// Reverse the outer contour's side faces
    pub flip_outer: bool,
    /// Reverse each hole's side faces, in hole order
    pub flip_holes: Vec<bool>,
}

impl ContourWinding {
    /// Derives the winding from the profile orientation and whether the
    /// sweep travels against the cursor heading.
    pub fn for_shape(shape: &Shape, backward: bool) -> Self {
        Self {
            flip_outer: (shape.signed_area() < 0.0) ^ backward,
            flip_holes: shape
                .holes
                .iter()
                .map(|hole| (signed_area(hole) > 0.0) ^ backward)
                .collect(),
        }
    }

    fn hole(&self, index: usize) -> bool {
        self.flip_holes.get(index).copied().unwrap_or(false)
    }
}

/// Builds an open, capped sweep. Needs at least two rings of a profile with
/// at least three outer points, all rings sharing one layout.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::{pose::Pose, shape::Shape, stamp::stamp_ring_data};
/// use sweep_mesh::sweep::{assemble_open, ContourWinding};
///
/// let shape = Shape::square(2.0, true);
/// let start = Pose::default();
/// let rings = vec![
///     stamp_ring_data(&shape, &start),
///     stamp_ring_data(&shape, &start.forward(5.0).unwrap()),
/// ];
/// let mesh = assemble_open(&rings, &ContourWinding::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn assemble_open(rings: &[RingData], winding: &ContourWinding) -> Option<Mesh> {
    let ring_len = uniform_layout(rings, 2)?;
    let mut mesh = shell(rings, ring_len, false, winding);

    let (start_normal, end_normal) = cap_normals(rings, winding);
    let last = rings.len() - 1;
    for (ring, normal, base) in [
        (&rings[0], start_normal, 0),
        (&rings[last], end_normal, last * ring_len),
    ] {
        let Some(normal) = normal else {
            warn!(ring = base / ring_len, "degenerate cap normal, cap omitted");
            continue;
        };
        for [a, b, c] in triangulate_cap(ring, normal, base as u32) {
            mesh.add_triangle(a, b, c);
        }
    }
    Some(mesh)
}

/// Builds a closed sweep wrapping the last ring back to the first. Needs at
/// least three rings; the first ring must not be repeated at the end.
pub fn assemble_closed(rings: &[RingData], winding: &ContourWinding) -> Option<Mesh> {
    let ring_len = uniform_layout(rings, 3)?;
    Some(shell(rings, ring_len, true, winding))
}

/// Shared point count of every ring, `None` if the rings are unusable.
fn uniform_layout(rings: &[RingData], min_rings: usize) -> Option<usize> {
    if rings.len() < min_rings {
        return None;
    }
    let first = &rings[0];
    if first.outer.len() < 3 {
        return None;
    }
    let matches = |ring: &RingData| {
        ring.outer.len() == first.outer.len()
            && ring.holes.len() == first.holes.len()
            && ring.holes.iter().zip(&first.holes).all(|(a, b)| a.len() == b.len())
    };
    if !rings.iter().all(matches) {
        warn!("rings do not share a vertex layout");
        return None;
    }
    Some(first.len())
}

/// Vertices plus side faces of every band.
fn shell(rings: &[RingData], ring_len: usize, closed: bool, winding: &ContourWinding) -> Mesh {
    let bands = if closed { rings.len() } else { rings.len() - 1 };
    let mut mesh = Mesh::with_capacity(rings.len() * ring_len, bands * ring_len * 2);
    for ring in rings {
        mesh.add_vertices(ring.points());
    }

    for k in 0..bands {
        let next = (k + 1) % rings.len();
        let (a, b) = (&rings[k], &rings[next]);
        let mut offset = 0;
        for (contour, (ca, cb)) in a.contours().zip(b.contours()).enumerate() {
            let flip = match contour {
                0 => winding.flip_outer,
                h => winding.hole(h - 1),
            };
            let a_base = (k * ring_len + offset) as u32;
            let b_base = (next * ring_len + offset) as u32;
            add_band(&mut mesh, (ca, a_base), (cb, b_base), flip);
            offset += ca.len();
        }
    }
    mesh
}

/// Side faces between two copies of one contour.
fn add_band(mesh: &mut Mesh, (a, a_base): (&Ring, u32), (b, b_base): (&Ring, u32), flip: bool) {
    let n = a.len();
    for i in 0..n {
        let j = (i + 1) % n;
        let (ai, aj) = (a_base + i as u32, a_base + j as u32);
        let (bi, bj) = (b_base + i as u32, b_base + j as u32);

        let triangles = if (b[j] - a[i]).length_squared() <= (b[i] - a[j]).length_squared() {
            [[ai, bi, bj], [ai, bj, aj]]
        } else {
            [[ai, bi, aj], [aj, bi, bj]]
        };
        for [p, q, r] in triangles {
            if flip {
                mesh.add_triangle(p, r, q);
            } else {
                mesh.add_triangle(p, q, r);
            }
        }
    }
}

/// Outward cap normals from the local end tangents.
///
/// Coincident end centroids fall back to the end ring's Newell normal,
/// oriented by the outer winding; `None` when that is degenerate too.
fn cap_normals(rings: &[RingData], winding: &ContourWinding) -> (Option<Vec3>, Option<Vec3>) {
    let last = rings.len() - 1;
    let tangent = |from: &RingData, to: &RingData| {
        let d = from.centroid() - to.centroid();
        (d.length() > EPSILON).then_some(d)
    };
    let fallback = |ring: &RingData, start: bool| {
        let n = newell_normal(&ring.outer);
        let n = if winding.flip_outer == start { -n } else { n };
        (n.length() > EPSILON).then_some(n)
    };

    let start = tangent(&rings[0], &rings[1]).or_else(|| fallback(&rings[0], true));
    let end = tangent(&rings[last], &rings[last - 1]).or_else(|| fallback(&rings[last], false));
    (start, end)
}
