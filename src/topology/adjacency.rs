//! Face adjacency graph.
//!
//! Two triangles are adjacent when they share an undirected edge. The build
//! indexes the winding model's edge buckets instead of comparing triangle
//! pairs, so it is linear in the mesh size. Buckets are visited in
//! [`EdgeId`](crate::mesh::EdgeId) order, which fixes the adjacency list
//! order and keeps the whole pipeline reproducible.
//!
//! Open edges (one occurrence) contribute no adjacency. Non-manifold edges
//! (more than two occurrences) pair only their first two occurrences; the
//! closure validator has already flagged such meshes and the pipeline
//! continues best-effort.

use crate::mesh::TriangleId;

use super::winding::WindingModel;

/// One adjacency: a neighboring triangle and the local edge slots on both
/// sides of the shared edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacentFace {
    /// The neighboring triangle.
    pub neighbor: TriangleId,
    /// The local slot (0, 1, or 2) of the shared edge in this triangle.
    pub slot: usize,
    /// The local slot of the shared edge in the neighbor.
    pub neighbor_slot: usize,
}

/// Per-triangle adjacency lists over shared undirected edges.
#[derive(Debug, Clone)]
pub struct FaceAdjacency {
    neighbors: Vec<Vec<AdjacentFace>>,
}

impl FaceAdjacency {
    /// Build the adjacency graph from the winding model.
    pub fn build(model: &WindingModel) -> Self {
        let mut neighbors = vec![Vec::new(); model.num_dir_edges() / 3];

        for bucket in model.edge_occurrences() {
            if bucket.len() < 2 {
                continue;
            }
            let (t1, s1) = bucket[0];
            let (t2, s2) = bucket[1];
            neighbors[t1.index()].push(AdjacentFace {
                neighbor: t2,
                slot: s1,
                neighbor_slot: s2,
            });
            neighbors[t2.index()].push(AdjacentFace {
                neighbor: t1,
                slot: s2,
                neighbor_slot: s1,
            });
        }

        Self { neighbors }
    }

    /// Get the number of triangles in the graph.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.neighbors.len()
    }

    /// The adjacencies of a triangle, in build order.
    #[inline]
    pub fn neighbors_of(&self, t: TriangleId) -> &[AdjacentFace] {
        &self.neighbors[t.index()]
    }
}
