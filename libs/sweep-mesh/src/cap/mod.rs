//! # Cap Triangulation
//!
//! Triangulates the planar end face of an open sweep, holes included, so
//! every triangle faces along a requested outward normal.
//!
//! ## Algorithm
//!
//! 1. Drop the coordinate axis most parallel to the normal. The remaining
//!    two are taken in cyclic order (`yz`, `zx`, `xy`) so the projection
//!    views the polygon from the positive side of the dropped axis.
//! 2. Flatten the outer contour and every usable hole into one coordinate
//!    buffer with hole-start markers and hand it to `earcutr`.
//! 3. If the projected triangles wind against the normal (the projection
//!    mirrored the 3D winding relative to the normal) flip them all.
//! 4. Remap earcut's buffer indices to ring layout indices: the outer block
//!    first, then each hole block in input order.
//!
//! Holes with fewer than 3 points are left out of the triangulation but
//! keep their slot in the layout.

use crate::math::{Vec2, Vec3};
use crate::stamp::RingData;
use tracing::warn;

/// Projects onto the plane perpendicular to `axis`, keeping the cyclic
/// orientation of the remaining two coordinates.
fn project(p: Vec3, axis: usize) -> Vec2 {
    match axis {
        0 => Vec2::new(p.y, p.z),
        1 => Vec2::new(p.z, p.x),
        _ => Vec2::new(p.x, p.y),
    }
}

/// Index of the component of `n` with the largest magnitude.
fn dominant_axis(n: Vec3) -> usize {
    let a = n.abs();
    if a.x >= a.y && a.x >= a.z {
        0
    } else if a.y >= a.z {
        1
    } else {
        2
    }
}

/// Triangulates a planar polygon with holes.
///
/// Returned indices address the layout `outer ++ holes[0] ++ holes[1] ...`
/// and every triangle winds counter-clockwise when seen from the side
/// `normal` points to.
///
/// # Arguments
///
/// * `outer` - Outer contour
/// * `holes` - Hole contours, any winding
/// * `normal` - Outward direction the triangles must face
///
/// # Example
///
/// ```rust
/// use sweep_mesh::cap::triangulate_polygon;
/// use glam::DVec3;
///
/// let square = [
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// ];
/// let triangles = triangulate_polygon(&square, &[], DVec3::Z);
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangulate_polygon(outer: &[Vec3], holes: &[Vec<Vec3>], normal: Vec3) -> Vec<[usize; 3]> {
    if outer.len() < 3 {
        return Vec::new();
    }

    let axis = dominant_axis(normal);
    let total = outer.len() + holes.iter().map(Vec::len).sum::<usize>();
    let mut coords: Vec<f64> = Vec::with_capacity(total * 2);
    let mut hole_starts: Vec<usize> = Vec::with_capacity(holes.len());
    let mut index_map: Vec<usize> = Vec::with_capacity(total);

    let mut append = |contour: &[Vec3], layout_start: usize, coords: &mut Vec<f64>| {
        for (i, p) in contour.iter().enumerate() {
            let q = project(*p, axis);
            coords.extend([q.x, q.y]);
            index_map.push(layout_start + i);
        }
    };

    append(outer, 0, &mut coords);
    let mut layout_start = outer.len();
    for hole in holes {
        if hole.len() >= 3 {
            hole_starts.push(coords.len() / 2);
            append(hole, layout_start, &mut coords);
        }
        layout_start += hole.len();
    }

    let flat = match earcutr::earcut(&coords, &hole_starts, 2) {
        Ok(flat) => flat,
        Err(err) => {
            warn!(?err, points = total, "cap triangulation failed, cap omitted");
            return Vec::new();
        }
    };

    let point = |i: usize| Vec2::new(coords[2 * i], coords[2 * i + 1]);
    let projected_area: f64 = flat
        .chunks_exact(3)
        .map(|t| (point(t[1]) - point(t[0])).perp_dot(point(t[2]) - point(t[0])))
        .sum();
    let flip = projected_area * normal[axis] < 0.0;

    flat.chunks_exact(3)
        .map(|t| {
            let [a, b, c] = [index_map[t[0]], index_map[t[1]], index_map[t[2]]];
            if flip {
                [a, c, b]
            } else {
                [a, b, c]
            }
        })
        .collect()
}

/// Triangulates the cap of a stamped ring whose first vertex sits at mesh
/// index `base`.
pub fn triangulate_cap(ring: &RingData, normal: Vec3, base: u32) -> Vec<[u32; 3]> {
    triangulate_polygon(&ring.outer, &ring.holes, normal)
        .into_iter()
        .map(|t| t.map(|i| base + i as u32))
        .collect()
}
