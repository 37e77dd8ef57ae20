//! Vector and rotation helpers on top of `glam::DVec3`.
//!
//! Vector algebra (add, sub, scale, dot, cross, length) comes from `glam`
//! directly; this module adds the zero-safe normalization and the Rodrigues
//! rotations the cursor and corner code rely on.

pub use glam::{DVec2 as Vec2, DVec3 as Vec3};

/// Normalizes `v`, returning the zero vector unchanged when it has no length.
///
/// # Examples
/// ```
/// use sweep_mesh::math::{normalize, Vec3};
/// assert_eq!(normalize(Vec3::new(0.0, 3.0, 4.0)), Vec3::new(0.0, 0.6, 0.8));
/// assert_eq!(normalize(Vec3::ZERO), Vec3::ZERO);
/// ```
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// Rotates `point` about the unit `axis` through the origin by `angle_rad`
/// using the Rodrigues formula. Magnitude is preserved.
///
/// # Examples
/// ```
/// use sweep_mesh::math::{rotate_point_around_axis, Vec3};
/// let p = rotate_point_around_axis(Vec3::X, Vec3::Z, std::f64::consts::FRAC_PI_2);
/// assert!((p - Vec3::Y).length() < 1e-12);
/// ```
pub fn rotate_point_around_axis(point: Vec3, axis: Vec3, angle_rad: f64) -> Vec3 {
    let k = normalize(axis);
    let (sin_a, cos_a) = angle_rad.sin_cos();
    point * cos_a + k.cross(point) * sin_a + k * k.dot(point) * (1.0 - cos_a)
}

/// Rotates a direction like [`rotate_point_around_axis`] and renormalizes
/// the result, counteracting drift over repeated rotations.
pub fn rotate_direction_around_axis(direction: Vec3, axis: Vec3, angle_rad: f64) -> Vec3 {
    normalize(rotate_point_around_axis(direction, axis, angle_rad))
}

/// Unsigned angle between two directions in radians, `0` when either is zero.
pub fn angle_between(a: Vec3, b: Vec3) -> f64 {
    let denom = a.length() * b.length();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// Average of a point set, `Vec3::ZERO` for an empty set.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    points.iter().copied().sum::<Vec3>() / points.len() as f64
}

/// Area-weighted normal of a closed polygon (Newell's method), unnormalized.
pub fn newell_normal(points: &[Vec3]) -> Vec3 {
    let n = points.len();
    let mut normal = Vec3::ZERO;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}

#[cfg(test)]
mod tests;
