//! # Mesh Topology
//!
//! Edge-sharing queries and the structural check run on sweep output.
//!
//! Edges are keyed by their sorted vertex pair, so `(a, b)` and `(b, a)`
//! are the same undirected edge.

use crate::error::{SweepError, SweepResult};
use crate::mesh::Mesh;
use std::collections::{HashMap, HashSet};

fn undirected(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

fn directed_edges(triangle: &[u32; 3]) -> [(u32, u32); 3] {
    let [a, b, c] = *triangle;
    [(a, b), (b, c), (c, a)]
}

/// Number of triangles sharing each undirected edge.
pub fn edge_counts(mesh: &Mesh) -> HashMap<(u32, u32), usize> {
    let mut counts = HashMap::new();
    for triangle in mesh.triangles() {
        for (a, b) in directed_edges(triangle) {
            *counts.entry(undirected(a, b)).or_insert(0) += 1;
        }
    }
    counts
}

/// Edges used by exactly one triangle, sorted.
pub fn boundary_edges(mesh: &Mesh) -> Vec<(u32, u32)> {
    let mut edges: Vec<(u32, u32)> = edge_counts(mesh)
        .into_iter()
        .filter_map(|(edge, count)| (count == 1).then_some(edge))
        .collect();
    edges.sort_unstable();
    edges
}

/// Number of connected boundary loops (an open sweep has one per cap).
pub fn boundary_loop_count(mesh: &Mesh) -> usize {
    let mut adjacency: HashMap<u32, Vec<u32>> = HashMap::new();
    for (a, b) in boundary_edges(mesh) {
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }

    let mut starts: Vec<u32> = adjacency.keys().copied().collect();
    starts.sort_unstable();

    let mut seen: HashSet<u32> = HashSet::new();
    let mut loops = 0;
    for start in starts {
        if !seen.insert(start) {
            continue;
        }
        loops += 1;
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            for &next in adjacency.get(&v).into_iter().flatten() {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
    }
    loops
}

/// True when every undirected edge is shared by exactly two triangles.
pub fn is_watertight(mesh: &Mesh) -> bool {
    let counts = edge_counts(mesh);
    !counts.is_empty() && counts.values().all(|&count| count == 2)
}

/// True when no directed edge is used twice, i.e. neighbouring triangles
/// agree on winding.
pub fn is_consistently_oriented(mesh: &Mesh) -> bool {
    let mut seen = HashSet::new();
    mesh.triangles()
        .iter()
        .flat_map(directed_edges)
        .all(|edge| seen.insert(edge))
}

/// Structural check of a produced mesh.
///
/// Checks:
/// - All vertex coordinates are finite
/// - All triangle indices are in range
/// - No triangle repeats a vertex
pub fn check_mesh(mesh: &Mesh) -> SweepResult<()> {
    if let Some(i) = mesh.vertices().iter().position(|v| !v.is_finite()) {
        return Err(SweepError::invalid_mesh(format!(
            "vertex {i} is not finite: {:?}",
            mesh.vertices()[i]
        )));
    }

    let vertex_count = mesh.vertex_count();
    for (i, triangle) in mesh.triangles().iter().enumerate() {
        if let Some(&index) = triangle.iter().find(|&&v| v as usize >= vertex_count) {
            return Err(SweepError::invalid_mesh(format!(
                "triangle {i} references vertex {index} of {vertex_count}"
            )));
        }
        let [a, b, c] = *triangle;
        if a == b || b == c || a == c {
            return Err(SweepError::invalid_mesh(format!(
                "triangle {i} repeats a vertex: {triangle:?}"
            )));
        }
    }
    Ok(())
}
