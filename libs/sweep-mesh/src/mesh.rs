//! # Mesh Data Structure
//!
//! Triangle mesh produced by a sweep, optionally tagged with the pose it
//! was swept from and a material name.

use crate::pose::Pose;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and indices.
///
/// All geometry uses f64. Triangles wind counter-clockwise seen from
/// outside.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Pose the sweep started from
    #[serde(default)]
    pose: Option<Pose>,
    /// Material name
    #[serde(default)]
    material: Option<String>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            ..Self::default()
        }
    }

    /// Tags the mesh with the pose it was swept from.
    #[must_use]
    pub fn with_provenance(mut self, pose: Pose) -> Self {
        self.pose = Some(pose);
        self
    }

    /// Tags the mesh with a material name.
    #[must_use]
    pub fn with_material(mut self, material: Option<String>) -> Self {
        self.material = material;
        self
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Appends vertices in order and returns the index of the first.
    pub fn add_vertices(&mut self, positions: impl IntoIterator<Item = DVec3>) -> u32 {
        let base = self.vertices.len() as u32;
        self.vertices.extend(positions);
        base
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Pose the sweep started from, if tagged.
    pub fn pose(&self) -> Option<&Pose> {
        self.pose.as_ref()
    }

    /// Material name, if tagged.
    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Size of the bounding box along each axis.
    pub fn extent(&self) -> DVec3 {
        let (min, max) = self.bounding_box();
        max - min
    }

    /// Signed enclosed volume (divergence theorem). Positive for a closed
    /// mesh whose triangles face outward.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|t| {
                let [a, b, c] = t.map(|i| self.vertex(i));
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }
}
