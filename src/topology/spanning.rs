//! Spanning forest of the face adjacency graph.
//!
//! One breadth-first tree per connected component (a mesh may be several
//! disjoint closed shells). Roots are the lowest-index unvisited triangle and
//! siblings follow the adjacency list order, so the crossing sequence is
//! deterministic. The twist stage consumes the crossings in exactly this
//! discovery order.

use std::collections::VecDeque;

use crate::mesh::TriangleId;

use super::adjacency::FaceAdjacency;

/// One spanning tree edge: the traversal crossed from `from` into `to`
/// over the undirected edge at the given local slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeCrossing {
    /// The already-visited triangle.
    pub from: TriangleId,
    /// The shared edge's local slot in `from`.
    pub from_slot: usize,
    /// The newly discovered triangle.
    pub to: TriangleId,
    /// The shared edge's local slot in `to`.
    pub to_slot: usize,
}

/// A spanning forest: tree crossings in discovery order plus the number of
/// connected components covered.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    /// Tree crossings in discovery order; `N - 1` per component.
    pub crossings: Vec<TreeCrossing>,
    /// Number of connected components (shells).
    pub components: usize,
}

impl SpanningForest {
    /// Grow the forest by breadth-first traversal.
    pub fn grow(adjacency: &FaceAdjacency) -> Self {
        let n = adjacency.num_triangles();
        let mut visited = vec![false; n];
        let mut crossings = Vec::with_capacity(n.saturating_sub(1));
        let mut components = 0;
        let mut queue = VecDeque::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            components += 1;
            visited[root] = true;
            queue.push_back(TriangleId::new(root));

            while let Some(t) = queue.pop_front() {
                for adj in adjacency.neighbors_of(t) {
                    if visited[adj.neighbor.index()] {
                        continue;
                    }
                    visited[adj.neighbor.index()] = true;
                    crossings.push(TreeCrossing {
                        from: t,
                        from_slot: adj.slot,
                        to: adj.neighbor,
                        to_slot: adj.neighbor_slot,
                    });
                    queue.push_back(adj.neighbor);
                }
            }
        }

        Self { crossings, components }
    }
}
