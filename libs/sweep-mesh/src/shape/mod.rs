//! # Profile Shapes
//!
//! A shape is the closed 2D profile that gets stamped onto the plane of a
//! cursor pose. It may carry holes, each wound opposite to the outer
//! boundary, and an anchor policy deciding which 2D point lands on the
//! cursor.

use crate::math::Vec2;
use config::constants::DEFAULT_CIRCLE_SEGMENTS;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Which 2D point of a shape is placed at the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// The first outer point lands on the cursor.
    #[default]
    FirstPoint,
    /// The shape's own origin lands on the cursor.
    Centered,
    /// Raw coordinates are used unmodified.
    PreservePosition,
}

/// A 2D profile with optional holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Outer boundary vertices
    pub points: Vec<Vec2>,
    /// Hole contours, each wound opposite to `points`
    #[serde(default)]
    pub holes: Vec<Vec<Vec2>>,
    /// Anchor policy
    #[serde(default)]
    pub anchor: Anchor,
}

impl Shape {
    /// Creates a shape from outer boundary vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sweep_mesh::shape::Shape;
    /// use glam::DVec2;
    ///
    /// let triangle = Shape::new(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(4.0, 0.0),
    ///     DVec2::new(0.0, 3.0),
    /// ]);
    /// assert_eq!(triangle.vertex_count(), 3);
    /// ```
    pub fn new(points: Vec<Vec2>) -> Self {
        Self {
            points,
            holes: Vec::new(),
            anchor: Anchor::FirstPoint,
        }
    }

    /// Creates a shape with holes.
    ///
    /// # Arguments
    ///
    /// * `points` - Outer boundary
    /// * `holes` - Inner holes, each wound opposite to the outer boundary
    pub fn with_holes(points: Vec<Vec2>, holes: Vec<Vec<Vec2>>) -> Self {
        Self {
            points,
            holes,
            anchor: Anchor::FirstPoint,
        }
    }

    /// Creates an axis-aligned square, counter-clockwise.
    ///
    /// Centered squares are anchored at their origin.
    pub fn square(size: f64, center: bool) -> Self {
        Self::rectangle(Vec2::splat(size), center)
    }

    /// Creates an axis-aligned rectangle, counter-clockwise.
    ///
    /// # Arguments
    ///
    /// * `size` - Width and height
    /// * `center` - If true, centered on the origin and anchored there
    pub fn rectangle(size: Vec2, center: bool) -> Self {
        let (x, y) = if center {
            (-size.x / 2.0, -size.y / 2.0)
        } else {
            (0.0, 0.0)
        };

        let shape = Self::new(vec![
            Vec2::new(x, y),
            Vec2::new(x + size.x, y),
            Vec2::new(x + size.x, y + size.y),
            Vec2::new(x, y + size.y),
        ]);
        if center {
            shape.centered()
        } else {
            shape
        }
    }

    /// Creates a counter-clockwise circle approximation centered on and
    /// anchored at the origin.
    ///
    /// # Arguments
    ///
    /// * `radius` - Circle radius
    /// * `segments` - Number of segments (at least 3), `0` for
    ///   `DEFAULT_CIRCLE_SEGMENTS`
    pub fn circle(radius: f64, segments: u32) -> Self {
        let segments = if segments == 0 { DEFAULT_CIRCLE_SEGMENTS } else { segments };
        Self::regular_polygon(radius, segments)
    }

    /// Creates a regular polygon with `sides` vertices on a circle of
    /// `radius`, first vertex on +X.
    pub fn regular_polygon(radius: f64, sides: u32) -> Self {
        let sides = sides.max(3);
        let points = (0..sides)
            .map(|i| {
                let angle = TAU * f64::from(i) / f64::from(sides);
                Vec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Self::new(points).centered()
    }

    /// Anchors the shape at its own origin.
    #[must_use]
    pub fn centered(mut self) -> Self {
        self.anchor = Anchor::Centered;
        self
    }

    /// Uses raw coordinates without any anchor offset.
    #[must_use]
    pub fn preserve_position(mut self) -> Self {
        self.anchor = Anchor::PreservePosition;
        self
    }

    /// Returns true for [`Anchor::Centered`].
    pub fn is_centered(&self) -> bool {
        self.anchor == Anchor::Centered
    }

    /// Returns true for [`Anchor::PreservePosition`].
    pub fn preserves_position(&self) -> bool {
        self.anchor == Anchor::PreservePosition
    }

    /// Returns the number of outer vertices.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the shape has holes.
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Offset added to every point so the anchor lands on the cursor.
    pub fn anchor_offset(&self) -> Vec2 {
        match self.anchor {
            Anchor::Centered | Anchor::PreservePosition => Vec2::ZERO,
            Anchor::FirstPoint => self.points.first().map_or(Vec2::ZERO, |p| -*p),
        }
    }

    /// Outer boundary after the anchor offset.
    pub fn anchored_outer(&self) -> Vec<Vec2> {
        let offset = self.anchor_offset();
        self.points.iter().map(|p| *p + offset).collect()
    }

    /// Holes after the anchor offset.
    pub fn anchored_holes(&self) -> Vec<Vec<Vec2>> {
        let offset = self.anchor_offset();
        self.holes
            .iter()
            .map(|hole| hole.iter().map(|p| *p + offset).collect())
            .collect()
    }

    /// Maximum distance from the anchored origin to any outer point.
    pub fn profile_radius(&self) -> f64 {
        self.anchored_outer()
            .iter()
            .map(|p| p.length())
            .fold(0.0, f64::max)
    }

    /// Signed area of the outer boundary, positive when counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }
}

/// Signed area of a closed 2D contour (shoelace), positive when
/// counter-clockwise.
pub fn signed_area(points: &[Vec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    twice / 2.0
}
